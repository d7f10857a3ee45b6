use std::path::Path;

use matiz_image::{Image, ImageSize};

use crate::error::IoError;
use crate::{jpeg, png};

/// Reads an image from the given file path and returns it as an RGB8 image.
///
/// The method tries to read from any image format supported by the image
/// crate, and converts the decoded image to RGB8 if needed.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data in RGB8 format.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let data = img.into_rgb8().to_vec();

    Ok(Image::new(size, data)?)
}

/// Writes an RGB8 image to the given file path.
///
/// The format is selected from the file extension; `.png`, `.jpg` and
/// `.jpeg` are supported.
///
/// # Arguments
///
/// * `file_path` - The path where to write the image.
/// * `image` - The RGB8 image to write.
pub fn write_image_rgb8(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    match extension_of(file_path)?.as_str() {
        "png" => png::write_image_png_rgb8(file_path, image),
        "jpg" | "jpeg" => jpeg::write_image_jpeg_rgb8(file_path, image, 100),
        _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }
}

/// Writes a grayscale 8-bit image to the given file path.
///
/// The format is selected from the file extension; `.png`, `.jpg` and
/// `.jpeg` are supported.
///
/// # Arguments
///
/// * `file_path` - The path where to write the image.
/// * `image` - The grayscale image to write.
pub fn write_image_gray8(file_path: impl AsRef<Path>, image: &Image<u8, 1>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    match extension_of(file_path)?.as_str() {
        "png" => png::write_image_png_gray8(file_path, image),
        "jpg" | "jpeg" => jpeg::write_image_jpeg_gray8(file_path, image, 100),
        _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }
}

fn extension_of(file_path: &Path) -> Result<String, IoError> {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use matiz_image::{Image, ImageSize};

    #[test]
    fn read_any_from_png() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.png");

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![255, 0, 0, 0, 0, 255],
        )?;
        crate::png::write_image_png_rgb8(&file_path, &image)?;

        let image_back = read_image_any_rgb8(&file_path)?;
        assert_eq!(image_back.size(), image.size());
        assert_eq!(image_back.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn read_any_missing_file() {
        let result = read_image_any_rgb8("missing.png");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn write_rgb8_by_extension() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![128u8; 2 * 2 * 3],
        )?;

        write_image_rgb8(tmp_dir.path().join("image.png"), &image)?;
        write_image_rgb8(tmp_dir.path().join("image.jpg"), &image)?;

        let result = write_image_rgb8(tmp_dir.path().join("image.bmp"), &image);
        assert!(matches!(result, Err(IoError::InvalidFileExtension(_))));

        Ok(())
    }
}
