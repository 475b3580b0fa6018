// recolour.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Foreground inversion for glyphs drawn on high-contrast backgrounds.

use paintkit_core::{Colour, Hls};

use crate::source::{PixelSource, RasterImage};

/// Pixels closer than this in HLS luminosity to the background are left alone.
const MAX_LUMINOSITY_DIFFERENCE: i32 = 20;

/// Copy of `image` with every non-background pixel inverted.
///
/// The comparison is exact, alpha included. Alpha is never changed.
pub fn invert_fore_colour<S>(image: &S, background: Colour) -> RasterImage
where
    S: PixelSource + ?Sized,
{
    let mut out = RasterImage::with_format(image.width(), image.height(), image.format());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let px = image.pixel(x, y);
            out.set_pixel(x, y, if px != background { px.invert() } else { px });
        }
    }
    out
}

/// Inverts, in place, the pixels whose luminosity differs from the
/// background's by more than 20.
pub fn invert_fore_colour_if_needed(image: &mut RasterImage, background: Colour) {
    let bg_lum = Hls::from_colour(background).luminosity;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let px = image.pixel(x, y);
            if px == background {
                continue;
            }
            let lum = Hls::from_colour(px).luminosity;
            if (lum - bg_lum).abs() > MAX_LUMINOSITY_DIFFERENCE {
                image.set_pixel(x, y, px.invert());
            }
        }
    }
}
