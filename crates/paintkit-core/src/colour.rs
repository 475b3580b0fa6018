// colour.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Straight (non-premultiplied) 8-bit ARGB colour value.
// Packed form: 0xAARRGGBB

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// An immutable colour. Equality is exact channel equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);
    pub const RED: Colour = Colour::rgb(255, 0, 0);
    pub const TRANSPARENT: Colour = Colour::argb(0, 0, 0, 0);

    /// Default chrome background that translucent pixels are flattened onto.
    pub const LIGHT_GRAY: Colour = Colour::rgb(211, 211, 211);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    #[inline]
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self {
            a: ((argb >> 24) & 0xFF) as u8,
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }

    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Keeps RGB, swaps alpha.
    #[must_use]
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[must_use]
    #[inline]
    pub const fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    /// Bitwise-inverts RGB. Alpha is kept.
    #[must_use]
    #[inline]
    pub const fn invert(self) -> Self {
        Self {
            a: self.a,
            r: !self.r,
            g: !self.g,
            b: !self.b,
        }
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u32> for Colour {
    fn from(argb: u32) -> Self {
        Self::from_argb_u32(argb)
    }
}

impl From<Colour> for u32 {
    fn from(c: Colour) -> Self {
        c.to_argb_u32()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

/// Accepts `#RRGGBB` (opaque) or `#AARRGGBB`.
impl FromStr for Colour {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || CoreError::InvalidColour(trimmed.to_string());

        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Colour::from_argb_u32(0xFF00_0000 | value)),
            8 => Ok(Colour::from_argb_u32(value)),
            _ => Err(invalid()),
        }
    }
}
