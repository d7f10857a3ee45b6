use crate::parallel;
use matiz_image::{Image, ImageError};

/// Convert an RGB image to an HLS image.
///
/// HLS (hue, lightness, saturation) is the cylindrical model that the library
/// offers as an approximation of HSI; use [`crate::color::hsi_from_rgb`] for
/// the true HSI transform.
///
/// # Arguments
///
/// * `src` - The input RGB image assumed to have 3 channels.
/// * `dst` - The output HLS image.
///
/// # Returns
///
/// The HLS image with the following channels:
///
/// * H: The hue channel in the range [0, 255] (0-360 degrees).
/// * L: The lightness channel in the range [0, 255].
/// * S: The saturation channel in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
pub fn hls_from_rgb(src: &Image<f32, 3>, dst: &mut Image<f32, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0] / 255.;
        let g = src_pixel[1] / 255.;
        let b = src_pixel[2] / 255.;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        let h = if h < 0.0 { h + 360.0 } else { h };

        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        dst_pixel[0] = (h / 360.0) * 255.0;
        dst_pixel[1] = l * 255.0;
        dst_pixel[2] = s * 255.0;
    });

    Ok(())
}

/// Convert an HLS image back to an RGB image.
///
/// The inverse of [`hls_from_rgb`]: the hue channel is expected in the range
/// [0, 255] (scaled from 0-360 degrees), lightness and saturation in [0, 255].
///
/// # Arguments
///
/// * `src` - The input HLS image assumed to have 3 channels.
/// * `dst` - The output RGB image with channels in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_hls(src: &Image<f32, 3>, dst: &mut Image<f32, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let h = src_pixel[0] / 255.0 * 360.0;
        let l = src_pixel[1] / 255.0;
        let s = src_pixel[2] / 255.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

        let (r, g, b) = if hp < 1.0 {
            (c, x, 0.0)
        } else if hp < 2.0 {
            (x, c, 0.0)
        } else if hp < 3.0 {
            (0.0, c, x)
        } else if hp < 4.0 {
            (0.0, x, c)
        } else if hp < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let m = l - c / 2.0;

        dst_pixel[0] = (r + m) * 255.0;
        dst_pixel[1] = (g + m) * 255.0;
        dst_pixel[2] = (b + m) * 255.0;
    });

    Ok(())
}
