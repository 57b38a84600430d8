// What you GET:
// • An 800x600 (or --width/--height) image at example.ppm (or --output).
// • Plain-text PPM, viewable with most image viewers or `display`.
// • RUST_LOG=debug shows each drawing step.

mod color;
mod draw;
mod error;
mod ppm;
mod scene;
mod types;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use types::FrameBuffer;

/// Rasterize the demo scene into a plain-text PPM image.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Canvas width in pixels
    #[arg(short, long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..=16384))]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..=16384))]
    height: u32,

    /// Where to write the image
    #[arg(short, long, default_value = "example.ppm")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("rendering {}x{} -> {}", args.width, args.height, args.output.display());

    let mut screen = FrameBuffer::new(args.width as usize, args.height as usize);
    scene::render_demo(&mut screen);

    ppm::write_ppm(&args.output, &screen).context("could not save the rendered image")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use test_log::test;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_classic_canvas() {
        let args = Args::try_parse_from(["ppm-canvas"]).unwrap();
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.output, PathBuf::from("example.ppm"));
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(Args::try_parse_from(["ppm-canvas", "--width", "0"]).is_err());
        assert!(Args::try_parse_from(["ppm-canvas", "--height", "0"]).is_err());
    }

    #[test]
    fn overrides_are_honoured() {
        let args = Args::try_parse_from(["ppm-canvas", "-w", "64", "--height", "32", "-o", "x.ppm"]).unwrap();
        assert_eq!((args.width, args.height), (64, 32));
        assert_eq!(args.output, PathBuf::from("x.ppm"));
    }
}
