// shade.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Luminance adjustment for 3-D chrome: the light/dark shade family.
//
// percent 0.0 is the "near" anchor (the base colour for `Lighter`, a one-third
// darker shadow for `Darker`), 1.0 is the far anchor (highlight / black).
// Values outside 0..=1 extrapolate and the result luminosity saturates at the
// ends of the HLS range.

#[cfg(feature = "clap")]
use clap::ValueEnum;

use crate::colour::Colour;
use crate::hls::{HLS_MAX, Hls};

/// Luminosity adjustment (per mille) for the shadow anchor.
const SHADOW_ADJ: i64 = -333;

/// Luminosity adjustment (per mille) for the highlight anchor.
const HILIGHT_ADJ: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Lighter,
    Darker,
}

/// The four canonical chrome shades.
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    LightLight,
    Dark,
    DarkDark,
}

impl Shade {
    pub const ALL: [Shade; 4] = [Shade::Light, Shade::LightLight, Shade::Dark, Shade::DarkDark];

    pub const fn direction(self) -> Direction {
        match self {
            Shade::Light | Shade::LightLight => Direction::Lighter,
            Shade::Dark | Shade::DarkDark => Direction::Darker,
        }
    }

    pub const fn percent(self) -> f32 {
        match self {
            Shade::Light | Shade::Dark => 0.5,
            Shade::LightLight | Shade::DarkDark => 1.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Shade::Light => "light",
            Shade::LightLight => "light-light",
            Shade::Dark => "dark",
            Shade::DarkDark => "dark-dark",
        }
    }
}

/// Shifts the luminosity of `colour` in `direction`. Uncached.
///
/// Hue and saturation are kept; alpha is ignored on input and the result is
/// always fully opaque.
pub fn adjust(colour: Colour, direction: Direction, percent: f32) -> Colour {
    let hls = Hls::from_colour(colour);
    let lum = hls.luminosity;

    let (zero, one) = match direction {
        Direction::Darker => (new_luma(lum, SHADOW_ADJ), 0),
        Direction::Lighter => (lum, new_luma(lum, HILIGHT_ADJ)),
    };

    // truncation toward zero; NaN collapses to 0
    let step = ((one - zero) as f32 * percent) as i32;
    let target = zero.saturating_add(step).clamp(0, HLS_MAX);

    Hls::new(hls.hue, target, hls.saturation).to_colour()
}

/// True when the luminosity of `colour` is below the middle of the HLS range.
pub fn is_dark(colour: Colour) -> bool {
    Hls::from_colour(colour).luminosity < HLS_MAX / 2
}

/// True when `a` has strictly lower luminosity than `b`.
pub fn is_darker(a: Colour, b: Colour) -> bool {
    Hls::from_colour(a).luminosity < Hls::from_colour(b).luminosity
}

/// Moves `lum` toward black (n < 0) or white (n > 0) by `n` per mille.
fn new_luma(lum: i32, n: i64) -> i32 {
    let lum = lum as i64;
    let out = if n > 0 {
        (lum * (1000 - n) + (HLS_MAX as i64 + 1) * n) / 1000
    } else {
        (lum * (n + 1000)) / 1000
    };
    out as i32
}
