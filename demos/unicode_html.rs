mod common;

use std::fs::read;

use a_sextant::SextantGrid;
use clap::Parser;
use image::imageops::FilterType;

#[derive(Debug, Parser)]
struct Args {
    /// The path to the image file to be loaded and converted
    #[clap(long, short)]
    image_path: String,

    /// Width in pixels, two per character.
    #[clap(long, short, default_value_t = 110)]
    width: u32,

    /// Print the bare rows instead of an HTML page.
    #[clap(long)]
    text: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let image = image::load_from_memory(&read(&args.image_path)?)?;

    // Unscii draws a 2x3 sextant in a square cell, so stretch by 1.5
    // vertically first.
    let stretched = (image.height() as f32 * 1.5).round() as u32;
    let image = image.resize_exact(image.width(), stretched.max(1), FilterType::Triangle);
    let height = (image.height() as u64 * args.width as u64 / image.width().max(1) as u64) as u32;
    let mut luma = image
        .resize_exact(args.width, height.max(1), FilterType::Lanczos3)
        .to_luma8();
    common::normalise(&mut luma);

    let grid = SextantGrid::from_luma(&luma)?;
    log::info!("{}x{} characters", grid.num_cols(), grid.num_rows());

    if args.text {
        println!("{grid}");
    } else {
        println!("{}", grid.html());
    }

    Ok(())
}
