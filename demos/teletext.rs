mod common;

use std::fs::read;

use a_sextant::{
    Attributes,
    Colour,
    SextantGrid,
};
use clap::Parser;
use image::imageops::FilterType;

#[derive(Debug, Parser)]
struct Args {
    /// The path to the image file to be loaded and converted
    #[clap(long, short)]
    image_path: String,

    /// Width in pixels. One column is taken by the colour attribute, so the
    /// default leaves 39 characters.
    #[clap(long, default_value_t = 39 * 2)]
    width: u32,

    /// Height in pixels. 25 rows of 3.
    #[clap(long, default_value_t = 75)]
    height: u32,

    /// The mosaic colour.
    #[clap(long, short, default_value_t = Colour::White)]
    foreground: Colour,

    /// The background colour. Black is the page default and is omitted.
    #[clap(long, short)]
    background: Option<Colour>,

    /// Skip squashing the image horizontally to suit 12x10 teletext cells.
    #[clap(long)]
    no_aspect: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let timer = std::time::Instant::now();

    let mut image = image::load_from_memory(&read(&args.image_path)?)?;
    if !args.no_aspect {
        let squashed = (image.width() as f32 * (8.0 / 9.0)).round() as u32;
        image = image.resize_exact(squashed.max(1), image.height(), FilterType::Triangle);
    }
    let mut luma = image
        .resize_to_fill(args.width, args.height, FilterType::Lanczos3)
        .to_luma8();
    common::normalise(&mut luma);

    let grid = SextantGrid::from_luma(&luma)?;
    let attributes = Attributes {
        foreground: Some(args.foreground),
        background: args.background,
    };
    let rows = grid.teletext_rows(&attributes);

    log::info!("Time taken: {}ms", timer.elapsed().as_millis());

    for row in rows {
        println!("{row:?}");
    }

    Ok(())
}
