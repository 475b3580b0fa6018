// Author: Dustin Pilgrim
// License: MIT

pub mod construct;
pub mod error;
pub mod mask;
pub mod native;
mod pixels;
pub mod recolour;
pub mod source;

pub use construct::{
    ColourMaskOptions, colour_mask, colour_mask_with, composite_16bit, transparency_mask,
};
pub use error::{BitmapError, Result};
pub use mask::{LuminanceThreshold, MaskRule, MaskSample, RasterAndNot};
pub use native::{NativeBitmap, NativeFormat};
pub use recolour::{invert_fore_colour, invert_fore_colour_if_needed};
pub use source::{PixelFormat, PixelSource, RasterImage};
