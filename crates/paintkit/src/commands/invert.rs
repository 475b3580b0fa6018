// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use eventline::{debug, info};

use paintkit_bitmap::{
    PixelFormat, PixelSource, RasterImage, invert_fore_colour, invert_fore_colour_if_needed,
};
use paintkit_core::Colour;

use super::{open_image, save_png, to_rgba};

pub fn run(input: &Path, out: &Path, background: Colour, if_needed: bool) -> Result<(), String> {
    let img = open_image(input)?;
    debug!("invert against {} (if_needed={})", background, if_needed);

    let result = if if_needed {
        let mut raster = to_raster(&img)?;
        invert_fore_colour_if_needed(&mut raster, background);
        raster
    } else {
        invert_fore_colour(&img, background)
    };

    save_png(&to_rgba(&result), out)?;
    info!("wrote {}", out.display());
    Ok(())
}

fn to_raster<S: PixelSource>(src: &S) -> Result<RasterImage, String> {
    let (w, h) = (src.width(), src.height());
    let pixels = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .map(|(x, y)| src.pixel(x, y))
        .collect();
    let format = if src.format().has_alpha {
        PixelFormat::ARGB_32
    } else {
        PixelFormat::RGB_32
    };
    RasterImage::from_pixels(w, h, format, pixels).map_err(|e| e.to_string())
}
