mod convert;
mod gray;
mod hls;
mod hsi;
mod hsv;

pub use convert::{convert_image, ConversionError, ConversionMode, ConvertedImage};
pub use gray::{bgr_from_rgb, gray_from_rgb, gray_from_rgb_u8, rgb_from_gray};
pub use hls::{hls_from_rgb, rgb_from_hls};
pub use hsi::{hsi_from_rgb, rgb_from_hsi};
pub use hsv::{hsv_from_rgb, rgb_from_hsv};
