use std::path::{Path, PathBuf};

use argh::FromArgs;
use facewarp::{
    face::{
        detector::StaticLandmarks, LandmarkSet, PresetKind, PresetPipeline, PresetRegistry,
    },
    image::{ImageSize, PixelBuffer, Point},
    imgproc::warp::{apply_warp, WarpMode},
};

/// Warps a face image with a preset or a single drag
#[derive(Debug, FromArgs)]
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output image
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// path to a JSON array with the 468 face landmarks, required by --preset
    #[argh(option, short = 'l')]
    landmarks_path: Option<PathBuf>,

    /// preset to apply: lower_jaw, middle_jaw, cheek, front_protusion or back_slit
    #[argh(option, short = 'p')]
    preset: Option<String>,

    /// path to a JSON file replacing the built-in presets
    #[argh(option)]
    presets_path: Option<PathBuf>,

    /// single warp mode: pull, push, expand or shrink
    #[argh(option, short = 'm')]
    mode: Option<String>,

    /// drag start x coordinate
    #[argh(option, default = "0.0")]
    start_x: f32,

    /// drag start y coordinate
    #[argh(option, default = "0.0")]
    start_y: f32,

    /// drag end x coordinate
    #[argh(option, default = "0.0")]
    end_x: f32,

    /// drag end y coordinate
    #[argh(option, default = "0.0")]
    end_y: f32,

    /// influence radius in pixels
    #[argh(option, short = 'r', default = "80.0")]
    radius: f32,

    /// warp strength
    #[argh(option, short = 's', default = "1.0")]
    strength: f32,
}

fn read_rgba(path: &Path) -> Result<PixelBuffer, Box<dyn std::error::Error>> {
    let rgba = image::open(path)?.to_rgba8();
    let size = ImageSize {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
    };
    Ok(PixelBuffer::new(size, rgba.into_raw())?)
}

fn write_rgba(path: &Path, buffer: PixelBuffer) -> Result<(), Box<dyn std::error::Error>> {
    let [width, height]: [u32; 2] = buffer.size().into();
    let rgba = image::RgbaImage::from_raw(width, height, buffer.into_vec())
        .ok_or("output buffer does not match its size")?;
    rgba.save(path)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let src = read_rgba(&args.image_path)?;
    log::info!("loaded {} from {:?}", src.size(), args.image_path);

    let output = match (&args.preset, &args.mode) {
        (Some(preset), None) => {
            let landmarks_path = args
                .landmarks_path
                .as_ref()
                .ok_or("--preset requires --landmarks-path")?;
            let landmarks = LandmarkSet::from_json(&std::fs::read_to_string(landmarks_path)?)?;
            let detector = StaticLandmarks::new(landmarks);

            let registry = match &args.presets_path {
                Some(path) => PresetRegistry::from_json(&std::fs::read_to_string(path)?)?,
                None => PresetRegistry::builtin()?,
            };

            let kind: PresetKind = preset.parse()?;
            PresetPipeline::new(registry).apply_detected(&src, &detector, kind)?
        }
        (None, Some(mode)) => {
            let mode: WarpMode = mode.parse()?;
            apply_warp(
                &src,
                Point::new(args.start_x, args.start_y),
                Point::new(args.end_x, args.end_y),
                args.radius,
                args.strength,
                mode,
            )?
        }
        _ => return Err("exactly one of --preset or --mode is required".into()),
    };

    write_rgba(&args.output_path, output)?;
    log::info!("saved {:?}", args.output_path);

    Ok(())
}
