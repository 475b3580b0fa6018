// Author: Dustin Pilgrim
// License: MIT

mod convert;
mod invert;
mod shade;

use std::path::Path;

use eventline::{debug, info};
use image::{Rgba, RgbaImage};

use paintkit_bitmap::PixelSource;

use crate::cli::{Args, Cmd};
use crate::config;
use crate::paths;

pub fn run(args: Args) -> Result<(), String> {
    info!("starting paintkit");
    debug!("parsed args: {:?}", args.cmd);

    let (config_path, required) = match args.config {
        Some(p) => (p, true),
        None => (paths::default_config_path(), false),
    };
    debug!("config: {} (required={})", config_path.display(), required);
    let cfg = config::load(&config_path, required)?;
    debug!("effective config: {:?}", cfg);

    match args.cmd {
        Cmd::Shade { colour, shade, percent } => {
            for line in shade::report(colour, shade, percent) {
                println!("{line}");
            }
        }

        Cmd::Convert {
            input,
            to,
            out,
            background,
            mask,
            mask_kind,
            mask_rule,
        } => {
            let req = convert::Request {
                to,
                background,
                mask: mask.as_deref(),
                mask_kind,
                mask_rule,
            };
            convert::run(&input, &out, &req, &cfg)?;
            println!("{}", out.display());
        }

        Cmd::Invert {
            input,
            background,
            out,
            if_needed,
        } => {
            invert::run(&input, &out, background, if_needed)?;
            println!("{}", out.display());
        }
    }

    info!("paintkit done");
    Ok(())
}

fn open_image(path: &Path) -> Result<image::DynamicImage, String> {
    debug!("loading {}", path.display());
    image::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))
}

/// Snapshot of any pixel source as straight RGBA.
fn to_rgba<S: PixelSource + ?Sized>(src: &S) -> RgbaImage {
    RgbaImage::from_fn(src.width(), src.height(), |x, y| {
        let c = src.pixel(x, y);
        Rgba([c.r, c.g, c.b, c.a])
    })
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<(), String> {
    paths::create_parent(path).map_err(|e| format!("create output dir: {e}"))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))
}
