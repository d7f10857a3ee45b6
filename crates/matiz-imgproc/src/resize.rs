use fast_image_resize as fr;
use matiz_image::{Image, ImageError};

use crate::interpolation::{grid::meshgrid_from_fn, interpolate_pixel, InterpolationMode};
use crate::parallel;

/// Resize an image to a new size.
///
/// The function resizes an image to a new size using the specified
/// interpolation mode. It supports any number of channels.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container with the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use matiz_image::{Image, ImageSize};
/// use matiz_imgproc::interpolation::InterpolationMode;
/// use matiz_imgproc::resize::resize_native;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0.0).unwrap();
///
/// resize_native(
///     &image,
///     &mut image_resized,
///     InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_native<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    // nothing to do
    if src.size() == dst.size() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let (dst_cols, dst_rows) = (dst.cols(), dst.rows());

    let step_x = if dst_cols > 1 {
        (src.cols() - 1) as f32 / (dst_cols - 1) as f32
    } else {
        0.0
    };
    let step_y = if dst_rows > 1 {
        (src.rows() - 1) as f32 / (dst_rows - 1) as f32
    } else {
        0.0
    };

    // create a grid of the source coordinates to sample from
    let (map_x, map_y) = meshgrid_from_fn(dst_cols, dst_rows, |x, y| {
        (x as f32 * step_x, y as f32 * step_y)
    });

    // iterate over the output image and interpolate the pixel values
    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |&x, &y, dst_pixel| {
        dst_pixel
            .iter_mut()
            .enumerate()
            .for_each(|(k, pixel)| *pixel = interpolate_pixel(src, x, y, k, interpolation));
    });

    Ok(())
}

/// Resize an RGB8 image using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// The function resizes an image to a new size using the specified
/// interpolation mode. It supports only 3-channel images with u8 data.
///
/// # Arguments
///
/// * `src` - The input image container with 3 channels.
/// * `dst` - The output image container with the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// The function returns an error if the image cannot be resized.
///
/// # Example
///
/// ```
/// use matiz_image::{Image, ImageSize};
/// use matiz_imgproc::interpolation::InterpolationMode;
/// use matiz_imgproc::resize::resize_fast;
///
/// let image = Image::<_, 3>::new(
///    ImageSize {
///       width: 4,
///       height: 5,
///    },
///    vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///   width: 2,
///   height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(
///   &image,
///   &mut image_resized,
///   InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_fast(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    let src_image = fr::images::Image::from_vec_u8(
        src.cols() as u32,
        src.rows() as u32,
        src.as_slice().to_vec(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let mut dst_image =
        fr::images::Image::new(dst.cols() as u32, dst.rows() as u32, fr::PixelType::U8x3);

    let options = fr::ResizeOptions::new().resize_alg(match interpolation {
        InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
    });

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    dst.as_slice_mut().copy_from_slice(dst_image.buffer());

    Ok(())
}
