use argh::FromArgs;
use std::path::{Path, PathBuf};

use chromalut::grid::Grid;
use chromalut::io::{cube, hald};
use chromalut::ops::{amplify::amplify, interpolation::InterpolationMode, resize, transform};

#[derive(FromArgs)]
/// Load a lookup table, compose, amplify or resize it, and save it as a cube file.
struct Args {
    /// path to the input cube file or hald image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output cube file
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// new size of the table
    #[argh(option)]
    size: Option<usize>,

    /// interpolation mode, linear or cubic
    #[argh(option, default = "InterpolationMode::Linear")]
    interpolation: InterpolationMode,

    /// strength of the table effect, 1.0 keeps it unchanged
    #[argh(option)]
    amplify: Option<f32>,

    /// path to a cube file or hald image applied after the input table
    #[argh(option)]
    compose: Option<PathBuf>,
}

fn load(path: &Path) -> Result<Grid, Box<dyn std::error::Error>> {
    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    let lut = if is_image {
        hald::load_hald_image(path)?
    } else {
        cube::load_cube_file(path)?
    };
    Ok(lut)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut lut = load(&args.input)?;
    println!(
        "Input table: {} with {} channels",
        lut.size(),
        lut.channels()
    );

    if let Some(path) = &args.compose {
        let other = load(path)?;
        lut = transform::transform(&lut, &other, None, args.interpolation)?;
        log::info!("composed with {}", path.display());
    }

    if let Some(scale) = args.amplify {
        lut = amplify(&lut, scale)?;
        log::info!("amplified by {}", scale);
    }

    if let Some(size) = args.size {
        lut = resize::resize(&lut, size, args.interpolation)?;
        log::info!("resized to {}", lut.size());
    }

    cube::write_cube_file(&lut, &args.output)?;
    println!("Output table: {} saved to {:?}", lut.size(), args.output);

    Ok(())
}
