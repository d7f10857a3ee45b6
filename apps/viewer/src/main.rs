use argh::FromArgs;
use std::path::PathBuf;

use matiz_image::{Image, ImageSize};
use matiz_imgproc::interpolation::InterpolationMode;
use matiz_imgproc::resize::resize_fast;
use matiz_io::functional as F;

#[derive(FromArgs)]
/// Read an image and display it in a Rerun viewer
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input_image: PathBuf,

    /// width to resize the image to before displaying it
    #[argh(option)]
    width: Option<usize>,
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

    // optionally bring the image to the requested display width
    let image = match args.width {
        Some(width) if width != image.size().width => {
            let height = width * image.size().height / image.size().width;
            let mut resized = Image::<u8, 3>::from_size_val(ImageSize { width, height }, 0)?;
            resize_fast(&image, &mut resized, InterpolationMode::Bilinear)?;
            resized
        }
        _ => image,
    };

    let rec = rerun::RecordingStreamBuilder::new("matiz viewer").spawn()?;

    rec.log(
        "image",
        &rerun::Image::from_elements(
            image.as_slice(),
            image.size().into(),
            rerun::ColorModel::RGB,
        ),
    )?;

    Ok(())
}
