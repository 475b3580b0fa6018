// hls.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Integer HLS model used for 3-D chrome shading.
//
// All three components live in 0..=HLS_MAX (240), not the 0.0..=1.0 float
// convention. Every step is integer arithmetic with explicit rounding so the
// light/dark shades come out bit-identical on every platform.

use crate::colour::Colour;

/// Upper bound of hue, luminosity and saturation.
pub const HLS_MAX: i32 = 240;

/// Upper bound of an RGB channel.
pub const RGB_MAX: i32 = 255;

/// Hue reported for achromatic colours (r == g == b).
pub const UNDEFINED_HUE: i32 = HLS_MAX * 2 / 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hls {
    pub hue: i32,
    pub luminosity: i32,
    pub saturation: i32,
}

impl Hls {
    pub const fn new(hue: i32, luminosity: i32, saturation: i32) -> Self {
        Self {
            hue,
            luminosity,
            saturation,
        }
    }

    /// Converts the RGB channels of `c`. Alpha is ignored.
    pub fn from_colour(c: Colour) -> Self {
        let r = c.r as i32;
        let g = c.g as i32;
        let b = c.b as i32;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let dif = max - min;

        let luminosity = (sum * HLS_MAX + RGB_MAX) / (2 * RGB_MAX);

        if dif == 0 {
            return Self::new(UNDEFINED_HUE, luminosity, 0);
        }

        let saturation = if luminosity <= HLS_MAX / 2 {
            (dif * HLS_MAX + sum / 2) / sum
        } else {
            let rest = 2 * RGB_MAX - sum;
            (dif * HLS_MAX + rest / 2) / rest
        };

        // share of the spread from max, per channel
        let delta = |v: i32| ((max - v) * (HLS_MAX / 6) + dif / 2) / dif;
        let (rd, gd, bd) = (delta(r), delta(g), delta(b));

        let mut hue = if r == max {
            bd - gd
        } else if g == max {
            HLS_MAX / 3 + rd - bd
        } else {
            (2 * HLS_MAX) / 3 + gd - rd
        };

        if hue < 0 {
            hue += HLS_MAX;
        }
        if hue > HLS_MAX {
            hue -= HLS_MAX;
        }

        Self::new(hue, luminosity, saturation)
    }

    /// Converts back to an opaque colour.
    ///
    /// Components are expected in 0..=HLS_MAX; callers that shift luminosity
    /// clamp it first.
    pub fn to_colour(self) -> Colour {
        let Hls {
            hue,
            luminosity: lum,
            saturation: sat,
        } = self;

        if sat == 0 {
            let v = channel(lum * RGB_MAX / HLS_MAX);
            return Colour::rgb(v, v, v);
        }

        let magic2 = if lum <= HLS_MAX / 2 {
            (lum * (HLS_MAX + sat) + HLS_MAX / 2) / HLS_MAX
        } else {
            lum + sat - (lum * sat + HLS_MAX / 2) / HLS_MAX
        };
        let magic1 = 2 * lum - magic2;

        let expand = |n: i32| channel((n * RGB_MAX + HLS_MAX / 2) / HLS_MAX);

        Colour::rgb(
            expand(hue_to_rgb(magic1, magic2, hue + HLS_MAX / 3)),
            expand(hue_to_rgb(magic1, magic2, hue)),
            expand(hue_to_rgb(magic1, magic2, hue - HLS_MAX / 3)),
        )
    }
}

impl From<Colour> for Hls {
    fn from(c: Colour) -> Self {
        Self::from_colour(c)
    }
}

impl From<Hls> for Colour {
    fn from(hls: Hls) -> Self {
        hls.to_colour()
    }
}

/// Evaluates one channel from the tridrant `hue` falls in.
fn hue_to_rgb(n1: i32, n2: i32, mut hue: i32) -> i32 {
    // callers add/subtract a third of the range
    if hue < 0 {
        hue += HLS_MAX;
    }
    if hue > HLS_MAX {
        hue -= HLS_MAX;
    }

    if hue < HLS_MAX / 6 {
        n1 + ((n2 - n1) * hue + HLS_MAX / 12) / (HLS_MAX / 6)
    } else if hue < HLS_MAX / 2 {
        n2
    } else if hue < (HLS_MAX * 2) / 3 {
        n1 + ((n2 - n1) * ((HLS_MAX * 2) / 3 - hue) + HLS_MAX / 12) / (HLS_MAX / 6)
    } else {
        n1
    }
}

#[inline]
fn channel(v: i32) -> u8 {
    v.clamp(0, RGB_MAX) as u8
}
