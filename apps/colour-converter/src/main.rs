use argh::FromArgs;
use std::path::{Path, PathBuf};

use matiz_image::{Image, ImageDtype, ImageError, ImageSize};
use matiz_imgproc::color::{convert_image, ConversionMode, ConvertedImage};
use matiz_imgproc::interpolation::InterpolationMode;
use matiz_imgproc::normalize::normalize_min_max;
use matiz_imgproc::resize;
use matiz_io::functional as F;

/// Working size the input is brought to before converting.
const WORKING_SIZE: ImageSize = ImageSize {
    width: 640,
    height: 480,
};

#[derive(FromArgs)]
/// Convert an image between colour spaces and display or save the result
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input_image: PathBuf,

    /// conversion to apply: RGB2GREY, RGB2HSV, RGB2HSI or HSI2RGB
    #[argh(option, short = 'c')]
    conversion: ConversionMode,

    /// path where to write the converted image instead of displaying it
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image
    let image = F::read_image_any_rgb8(&args.input_image)?;
    log::info!(
        "Loaded {} with size {}",
        args.input_image.display(),
        image.size()
    );

    // bring the image to the working size as floating point
    let image_f32 = image.cast::<f32>()?;
    let mut image_resized = Image::<f32, 3>::from_size_val(WORKING_SIZE, 0.0)?;
    resize::resize_native(&image_f32, &mut image_resized, InterpolationMode::Bilinear)?;

    let converted = convert_image(&image_resized, args.conversion)?;
    log::info!("Applied the {} conversion", args.conversion);

    match &args.output {
        Some(path) => {
            save_converted(path, &converted)?;
            log::info!("Wrote the converted image to {}", path.display());
        }
        None => display(&image_resized, &converted)?,
    }

    Ok(())
}

/// Write the converted image to disk as 8-bit.
fn save_converted(
    path: &Path,
    converted: &ConvertedImage,
) -> Result<(), Box<dyn std::error::Error>> {
    match converted {
        ConvertedImage::Grey(img) => F::write_image_gray8(path, &to_u8(img)?)?,
        ConvertedImage::Hsv(img) | ConvertedImage::Hsi(img) | ConvertedImage::Rgb(img) => {
            F::write_image_rgb8(path, &to_u8(img)?)?
        }
    }

    Ok(())
}

/// Stream the input and converted images to a Rerun viewer.
///
/// The recording stream is scoped to this function, so the viewer connection
/// is released on every exit path.
fn display(
    input: &Image<f32, 3>,
    converted: &ConvertedImage,
) -> Result<(), Box<dyn std::error::Error>> {
    let rec = rerun::RecordingStreamBuilder::new("matiz colour converter").spawn()?;

    log_image(&rec, "input", input, rerun::ColorModel::RGB)?;

    match converted {
        ConvertedImage::Grey(img) => log_image(&rec, "converted", img, rerun::ColorModel::L)?,
        ConvertedImage::Hsv(img) | ConvertedImage::Hsi(img) | ConvertedImage::Rgb(img) => {
            log_image(&rec, "converted", img, rerun::ColorModel::RGB)?
        }
    }

    Ok(())
}

/// Normalize a float image to [0, 1] and log it to the viewer.
fn log_image<const C: usize>(
    rec: &rerun::RecordingStream,
    name: &str,
    img: &Image<f32, C>,
    color_model: rerun::ColorModel,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut normalized = Image::<f32, C>::from_size_val(img.size(), 0.0)?;
    normalize_min_max(img, &mut normalized, 0.0, 1.0)?;

    rec.log(
        name,
        &rerun::Image::from_elements(
            normalized.as_slice(),
            normalized.size().into(),
            color_model,
        ),
    )?;

    Ok(())
}

/// Clamp-cast a float image in the [0, 255] range to 8-bit.
fn to_u8<const C: usize>(img: &Image<f32, C>) -> Result<Image<u8, C>, ImageError> {
    let data = img.as_slice().iter().map(|&x| u8::from_f32(x)).collect();
    Image::new(img.size(), data)
}
