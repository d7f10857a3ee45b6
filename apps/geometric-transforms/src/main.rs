use argh::FromArgs;
use std::path::{Path, PathBuf};

use matiz_image::{Image, ImageDtype, ImageError};
use matiz_imgproc::flip::horizontal_flip;
use matiz_imgproc::interpolation::InterpolationMode;
use matiz_imgproc::warp::{get_rotation_matrix2d, get_translation_matrix2d, warp_affine};
use matiz_io::functional as F;

#[derive(FromArgs)]
/// Apply rotation, translation and reflection to an image and display or save the stages
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input_image: PathBuf,

    /// directory where to write the transformed images instead of displaying them
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,
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

    let image_f32 = image.cast::<f32>()?;

    // rotate 45 degrees around the center
    let center = (
        image.size().width as f32 / 2.0,
        image.size().height as f32 / 2.0,
    );
    let rotation_matrix = get_rotation_matrix2d(center, 45.0, 1.0);
    let mut rotated = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;
    warp_affine(
        &image_f32,
        &mut rotated,
        &rotation_matrix,
        InterpolationMode::Bilinear,
    )?;

    // shift 50 pixels to the right
    let translation_matrix = get_translation_matrix2d(50.0, 0.0);
    let mut translated = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;
    warp_affine(
        &image_f32,
        &mut translated,
        &translation_matrix,
        InterpolationMode::Nearest,
    )?;

    // reflect horizontally
    let reflected = horizontal_flip(&image_f32)?;

    match &args.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            save_stage(dir, "rotated.png", &rotated)?;
            save_stage(dir, "translated.png", &translated)?;
            save_stage(dir, "reflected.png", &reflected)?;
            log::info!("Wrote the transformed images to {}", dir.display());
        }
        None => {
            let rec = rerun::RecordingStreamBuilder::new("matiz geometric transforms").spawn()?;

            for (name, img) in [
                ("input", &image_f32),
                ("rotated", &rotated),
                ("translated", &translated),
                ("reflected", &reflected),
            ] {
                rec.log(
                    name,
                    &rerun::Image::from_elements(
                        img.as_slice(),
                        img.size().into(),
                        rerun::ColorModel::RGB,
                    ),
                )?;
            }
        }
    }

    Ok(())
}

fn save_stage(
    dir: &Path,
    name: &str,
    img: &Image<f32, 3>,
) -> Result<(), Box<dyn std::error::Error>> {
    F::write_image_rgb8(dir.join(name), &to_u8(img)?)?;
    Ok(())
}

/// Clamp-cast a float image in the [0, 255] range to 8-bit.
fn to_u8<const C: usize>(img: &Image<f32, C>) -> Result<Image<u8, C>, ImageError> {
    let data = img.as_slice().iter().map(|&x| u8::from_f32(x)).collect();
    Image::new(img.size(), data)
}
