use crate::parallel;
use matiz_image::{Image, ImageError};

/// Convert an RGB image to an HSI image.
///
/// This is the true hue/saturation/intensity transform: intensity is the
/// channel mean, saturation measures how far the pixel is from the gray axis,
/// and hue is derived with the arccos form.
///
/// # Arguments
///
/// * `src` - The input RGB image assumed to have 3 channels.
/// * `dst` - The output HSI image.
///
/// # Returns
///
/// The HSI image with the following channels:
///
/// * H: The hue channel in the range [0, 255] (0-360 degrees).
/// * S: The saturation channel in the range [0, 255].
/// * I: The intensity channel in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use matiz_image::{Image, ImageSize};
/// use matiz_imgproc::color::hsi_from_rgb;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///        width: 4,
///        height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut hsi = Image::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
///
/// hsi_from_rgb(&image, &mut hsi).unwrap();
///
/// assert_eq!(hsi.num_channels(), 3);
/// ```
pub fn hsi_from_rgb(src: &Image<f32, 3>, dst: &mut Image<f32, 3>) -> Result<(), ImageError> {
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

        let i = (r + g + b) / 3.0;
        let min = r.min(g).min(b);

        let s = if i > 0.0 { 1.0 - min / i } else { 0.0 };

        let num = 0.5 * ((r - g) + (r - b));
        let den = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();

        let h = if den == 0.0 {
            // achromatic pixel, hue is undefined
            0.0
        } else {
            let theta = (num / den).clamp(-1.0, 1.0).acos().to_degrees();
            if b > g {
                360.0 - theta
            } else {
                theta
            }
        };

        dst_pixel[0] = (h / 360.0) * 255.0;
        dst_pixel[1] = s * 255.0;
        dst_pixel[2] = i * 255.0;
    });

    Ok(())
}

/// Convert an HSI image back to an RGB image.
///
/// The inverse of [`hsi_from_rgb`], using the three 120-degree sector
/// formulas. The hue channel is expected in the range [0, 255] (scaled from
/// 0-360 degrees), saturation and intensity in [0, 255].
///
/// # Arguments
///
/// * `src` - The input HSI image assumed to have 3 channels.
/// * `dst` - The output RGB image with channels in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_hsi(src: &Image<f32, 3>, dst: &mut Image<f32, 3>) -> Result<(), ImageError> {
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
        let s = src_pixel[1] / 255.0;
        let i = src_pixel[2] / 255.0;

        // sector helper: i * (1 + s * cos(h) / cos(60 - h)), with h relative
        // to the start of the sector
        let boosted = |h_deg: f32| {
            let h_rad = h_deg.to_radians();
            let den = (60.0f32.to_radians() - h_rad).cos();
            if den == 0.0 {
                i * (1.0 + s)
            } else {
                i * (1.0 + s * h_rad.cos() / den)
            }
        };

        let (r, g, b) = if h < 120.0 {
            let b = i * (1.0 - s);
            let r = boosted(h);
            let g = 3.0 * i - (r + b);
            (r, g, b)
        } else if h < 240.0 {
            let r = i * (1.0 - s);
            let g = boosted(h - 120.0);
            let b = 3.0 * i - (r + g);
            (r, g, b)
        } else {
            let g = i * (1.0 - s);
            let b = boosted(h - 240.0);
            let r = 3.0 * i - (g + b);
            (r, g, b)
        };

        dst_pixel[0] = (r * 255.0).clamp(0.0, 255.0);
        dst_pixel[1] = (g * 255.0).clamp(0.0, 255.0);
        dst_pixel[2] = (b * 255.0).clamp(0.0, 255.0);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use matiz_image::{Image, ImageError, ImageSize};

    #[test]
    fn hsi_from_rgb_red() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![255.0, 0.0, 0.0],
        )?;

        let mut hsi = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;
        super::hsi_from_rgb(&image, &mut hsi)?;

        // hue 0, full saturation, intensity one third
        let expected = [0.0, 255.0, 85.0];
        for (a, b) in hsi.as_slice().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-3, "got {} expected {}", a, b);
        }

        Ok(())
    }

    #[test]
    fn hsi_from_rgb_gray_is_achromatic() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![128.0, 128.0, 128.0],
        )?;

        let mut hsi = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;
        super::hsi_from_rgb(&image, &mut hsi)?;

        assert!((hsi.as_slice()[0]).abs() < 1e-6);
        assert!((hsi.as_slice()[1]).abs() < 1e-6);
        assert!((hsi.as_slice()[2] - 128.0).abs() < 1e-3);

        Ok(())
    }

    #[test]
    fn hsi_round_trip() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![
                255.0, 0.0, 0.0, 0.0, 255.0, 0.0, 0.0, 0.0, 255.0, 128.0, 128.0, 128.0, 200.0,
                100.0, 50.0, 30.0, 60.0, 200.0,
            ],
        )?;

        let mut hsi = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;
        super::hsi_from_rgb(&image, &mut hsi)?;

        let mut rgb = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;
        super::rgb_from_hsi(&hsi, &mut rgb)?;

        for (a, b) in rgb.as_slice().iter().zip(image.as_slice().iter()) {
            assert!((a - b).abs() < 1e-1, "got {} expected {}", a, b);
        }

        Ok(())
    }
}
