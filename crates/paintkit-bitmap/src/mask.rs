// mask.rs
// Author: Dustin Pilgrim
// License: MIT
//
// How a caller-supplied mask bitmap modifies the colour mask.

use paintkit_core::Colour;

use crate::native::{NativeBitmap, NativeFormat};
use crate::pixels;
use crate::source::PixelSource;

/// One mask pixel as seen by a [`MaskRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSample {
    /// From a 1-bit mask; `true` is palette index 1.
    Bit(bool),
    /// From a 16/32-bit mask.
    Colour(Colour),
}

impl MaskSample {
    /// Samples outside the mask read as a clear bit.
    pub fn at(mask: &NativeBitmap, x: u32, y: u32) -> Self {
        if x >= mask.width() || y >= mask.height() {
            return MaskSample::Bit(false);
        }
        match mask.format() {
            NativeFormat::Indexed1 => MaskSample::Bit(mask.bit(x, y)),
            NativeFormat::Rgb555 | NativeFormat::Rgb32 => MaskSample::Colour(mask.pixel(x, y)),
        }
    }
}

pub trait MaskRule: Send + Sync {
    /// Combines an already-composited opaque pixel with its mask sample.
    fn apply(&self, colour: Colour, sample: MaskSample) -> Colour;
}

/// `colour & !mask`: set bits knock the pixel out to black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterAndNot;

impl MaskRule for RasterAndNot {
    fn apply(&self, colour: Colour, sample: MaskSample) -> Colour {
        match sample {
            MaskSample::Bit(true) => Colour::BLACK,
            MaskSample::Bit(false) => colour.opaque(),
            MaskSample::Colour(m) => Colour::rgb(colour.r & !m.r, colour.g & !m.g, colour.b & !m.b),
        }
    }
}

/// Reduces colour samples to one bit by brightness, then substitutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuminanceThreshold {
    pub threshold: u8,
    pub substitute: Colour,
}

impl Default for LuminanceThreshold {
    fn default() -> Self {
        Self {
            threshold: 127,
            substitute: Colour::BLACK,
        }
    }
}

impl MaskRule for LuminanceThreshold {
    fn apply(&self, colour: Colour, sample: MaskSample) -> Colour {
        let masked = match sample {
            MaskSample::Bit(bit) => bit,
            // bright mask pixels let the colour through
            MaskSample::Colour(m) => pixels::perceived_brightness(m) <= self.threshold,
        };
        if masked { self.substitute.opaque() } else { colour.opaque() }
    }
}
