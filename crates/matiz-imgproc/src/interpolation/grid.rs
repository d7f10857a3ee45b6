/// Create a meshgrid of x and y coordinates from a mapping function.
///
/// The function is called for every (x, y) position of a grid with the given
/// number of columns and rows, and its result is stored in the returned maps.
///
/// # Arguments
///
/// * `cols` - The number of columns indicating the width of the grid.
/// * `rows` - The number of rows indicating the height of the grid.
/// * `f` - The mapping from grid position to (x, y) sample coordinates.
///
/// # Returns
///
/// A tuple of row-major buffers of length rows * cols containing the x and y
/// coordinates.
pub fn meshgrid_from_fn(
    cols: usize,
    rows: usize,
    f: impl Fn(usize, usize) -> (f32, f32),
) -> (Vec<f32>, Vec<f32>) {
    let mut map_x = Vec::with_capacity(rows * cols);
    let mut map_y = Vec::with_capacity(rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            let (x, y) = f(c, r);
            map_x.push(x);
            map_y.push(y);
        }
    }

    (map_x, map_y)
}

#[cfg(test)]
mod tests {
    #[test]
    fn meshgrid_identity() {
        let (map_x, map_y) = super::meshgrid_from_fn(2, 3, |x, y| (x as f32, y as f32));
        assert_eq!(map_x, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
        assert_eq!(map_y, vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0]);
    }
}
