use std::str::FromStr;

use matiz_image::{Image, ImageError};

use super::{gray_from_rgb, hsi_from_rgb, hsv_from_rgb, rgb_from_hsi};

/// An error type for colour conversions.
#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    /// The requested conversion is not in the supported set.
    #[error("Conversion type {0} is not supported")]
    UnsupportedConversion(String),

    /// The underlying image operation failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// The supported colour-space conversions.
///
/// Parsed from the command-line strings `RGB2GREY`, `RGB2HSV`, `RGB2HSI` and
/// `HSI2RGB`; anything else is rejected with
/// [`ConversionError::UnsupportedConversion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// RGB to grayscale.
    Rgb2Grey,
    /// RGB to hue/saturation/value.
    Rgb2Hsv,
    /// RGB to hue/saturation/intensity.
    Rgb2Hsi,
    /// Hue/saturation/intensity back to RGB.
    Hsi2Rgb,
}

impl FromStr for ConversionMode {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RGB2GREY" => Ok(Self::Rgb2Grey),
            "RGB2HSV" => Ok(Self::Rgb2Hsv),
            "RGB2HSI" => Ok(Self::Rgb2Hsi),
            "HSI2RGB" => Ok(Self::Hsi2Rgb),
            _ => Err(ConversionError::UnsupportedConversion(s.to_string())),
        }
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Self::Rgb2Grey => "RGB2GREY",
            Self::Rgb2Hsv => "RGB2HSV",
            Self::Rgb2Hsi => "RGB2HSI",
            Self::Hsi2Rgb => "HSI2RGB",
        };
        write!(f, "{}", s)
    }
}

/// The result of a colour-space conversion.
///
/// The variant carries the channel semantics of the produced buffer, so the
/// caller has to match on what actually came out of the converter.
pub enum ConvertedImage {
    /// A single-channel luminance image.
    Grey(Image<f32, 1>),
    /// A three-channel hue/saturation/value image.
    Hsv(Image<f32, 3>),
    /// A three-channel hue/saturation/intensity image.
    Hsi(Image<f32, 3>),
    /// A three-channel RGB image.
    Rgb(Image<f32, 3>),
}

impl ConvertedImage {
    /// Get the number of channels of the converted image.
    pub fn num_channels(&self) -> usize {
        match self {
            Self::Grey(_) => 1,
            Self::Hsv(_) | Self::Hsi(_) | Self::Rgb(_) => 3,
        }
    }
}

/// Convert an image between colour spaces.
///
/// The input is interpreted according to the mode: RGB channel order in the
/// range [0, 255] for the `RGB2*` modes, and an HSI image as produced by
/// [`hsi_from_rgb`] for [`ConversionMode::Hsi2Rgb`].
///
/// # Arguments
///
/// * `src` - The input image with 3 channels.
/// * `mode` - The conversion to apply.
///
/// # Returns
///
/// The converted image, tagged with its colour space.
///
/// # Example
///
/// ```
/// use matiz_image::{Image, ImageSize};
/// use matiz_imgproc::color::{convert_image, ConversionMode};
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///        width: 2,
///        height: 2,
///     },
///     vec![255.0; 2 * 2 * 3],
/// )
/// .unwrap();
///
/// let converted = convert_image(&image, ConversionMode::Rgb2Grey).unwrap();
/// assert_eq!(converted.num_channels(), 1);
/// ```
pub fn convert_image(
    src: &Image<f32, 3>,
    mode: ConversionMode,
) -> Result<ConvertedImage, ConversionError> {
    match mode {
        ConversionMode::Rgb2Grey => {
            let mut dst = Image::from_size_val(src.size(), 0.0)?;
            gray_from_rgb(src, &mut dst)?;
            Ok(ConvertedImage::Grey(dst))
        }
        ConversionMode::Rgb2Hsv => {
            let mut dst = Image::from_size_val(src.size(), 0.0)?;
            hsv_from_rgb(src, &mut dst)?;
            Ok(ConvertedImage::Hsv(dst))
        }
        ConversionMode::Rgb2Hsi => {
            let mut dst = Image::from_size_val(src.size(), 0.0)?;
            hsi_from_rgb(src, &mut dst)?;
            Ok(ConvertedImage::Hsi(dst))
        }
        ConversionMode::Hsi2Rgb => {
            let mut dst = Image::from_size_val(src.size(), 0.0)?;
            rgb_from_hsi(src, &mut dst)?;
            Ok(ConvertedImage::Rgb(dst))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matiz_image::{Image, ImageSize};

    #[test]
    fn parse_modes() {
        assert_eq!(
            "RGB2GREY".parse::<ConversionMode>().unwrap(),
            ConversionMode::Rgb2Grey
        );
        assert_eq!(
            "RGB2HSV".parse::<ConversionMode>().unwrap(),
            ConversionMode::Rgb2Hsv
        );
        assert_eq!(
            "RGB2HSI".parse::<ConversionMode>().unwrap(),
            ConversionMode::Rgb2Hsi
        );
        assert_eq!(
            "HSI2RGB".parse::<ConversionMode>().unwrap(),
            ConversionMode::Hsi2Rgb
        );
    }

    #[test]
    fn parse_unsupported_mode() {
        let err = "FOO".parse::<ConversionMode>().unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedConversion(s) if s == "FOO"));
    }

    #[test]
    fn convert_channels() -> Result<(), ConversionError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![128.0; 2 * 2 * 3],
        )
        .map_err(ConversionError::Image)?;

        assert_eq!(
            convert_image(&image, ConversionMode::Rgb2Grey)?.num_channels(),
            1
        );
        assert_eq!(
            convert_image(&image, ConversionMode::Rgb2Hsv)?.num_channels(),
            3
        );
        assert_eq!(
            convert_image(&image, ConversionMode::Rgb2Hsi)?.num_channels(),
            3
        );
        assert_eq!(
            convert_image(&image, ConversionMode::Hsi2Rgb)?.num_channels(),
            3
        );

        Ok(())
    }

    #[test]
    fn convert_red_to_grey() -> Result<(), ConversionError> {
        // the worked example: a solid red image maps to a uniform luma of
        // roughly 76 under the BT.601 weights
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                255.0, 0.0, 0.0, 255.0, 0.0, 0.0, 255.0, 0.0, 0.0, 255.0, 0.0, 0.0,
            ],
        )
        .map_err(ConversionError::Image)?;

        match convert_image(&image, ConversionMode::Rgb2Grey)? {
            ConvertedImage::Grey(grey) => {
                for v in grey.as_slice() {
                    assert!((v - 76.245).abs() < 1e-2);
                }
            }
            _ => panic!("expected a grey image"),
        }

        Ok(())
    }
}
