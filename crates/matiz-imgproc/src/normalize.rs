use num_traits::Float;

use matiz_image::{Image, ImageError};

use crate::parallel;

/// Normalize an image so that its values span the given range.
///
/// Applies `(pixel - data_min) / (data_max - data_min) * (max - min) + min`
/// where `data_min` and `data_max` are the extrema of the input image.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output normalized image with shape (H, W, C).
/// * `min` - The minimum value of the output image.
/// * `max` - The maximum value of the output image.
///
/// # Example
///
/// ```
/// use matiz_image::{Image, ImageSize};
/// use matiz_imgproc::normalize::normalize_min_max;
///
/// let image = Image::<f32, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0.0, 2.0],
/// ).unwrap();
///
/// let mut normalized = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// normalize_min_max(&image, &mut normalized, 0.0, 255.0).unwrap();
///
/// assert_eq!(normalized.as_slice(), &[0.0, 255.0]);
/// ```
pub fn normalize_min_max<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    min: T,
    max: T,
) -> Result<(), ImageError>
where
    T: Send + Sync + Float,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let (data_min, data_max) = find_min_max(src)?;
    let range = data_max - data_min;

    // a constant image maps to the lower bound
    if range == T::zero() {
        dst.as_slice_mut().iter_mut().for_each(|x| *x = min);
        return Ok(());
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        src_pixel
            .iter()
            .zip(dst_pixel.iter_mut())
            .for_each(|(&s, d)| {
                *d = (s - data_min) / range * (max - min) + min;
            });
    });

    Ok(())
}

/// Find the minimum and maximum values in an image.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// A tuple with the minimum and maximum values of the image.
pub fn find_min_max<T, const C: usize>(src: &Image<T, C>) -> Result<(T, T), ImageError>
where
    T: PartialOrd + Copy,
{
    let mut iter = src.as_slice().iter();

    let first = *iter
        .next()
        .ok_or(ImageError::InvalidChannelShape(0, C))?;

    let (mut min, mut max) = (first, first);

    for &x in iter {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use matiz_image::{Image, ImageError, ImageSize};

    #[test]
    fn normalize_min_max() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1.0, 2.0, 3.0, 4.0],
        )?;

        let mut normalized = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::normalize_min_max(&image, &mut normalized, 0.0, 1.0)?;

        let expected = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];
        for (a, b) in normalized.as_slice().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-6);
        }

        Ok(())
    }

    #[test]
    fn find_min_max() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![4.0, 2.0, 3.0, 1.0],
        )?;

        let (min, max) = super::find_min_max(&image)?;
        assert_eq!(min, 1.0);
        assert_eq!(max, 4.0);

        Ok(())
    }

    #[test]
    fn normalize_constant_image() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 1,
            },
            7.0,
        )?;

        let mut normalized = Image::<f32, 1>::from_size_val(image.size(), -1.0)?;

        super::normalize_min_max(&image, &mut normalized, 0.0, 255.0)?;

        assert_eq!(normalized.as_slice(), &[0.0, 0.0]);

        Ok(())
    }
}
