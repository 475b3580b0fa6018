// pixels.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Per-channel arithmetic shared by the bitmap constructors.
// All rounding is integer and round-half-up.

use paintkit_core::Colour;

/// `round(v / 255)` for non-negative `v`.
#[inline]
pub(crate) fn div255(v: u32) -> u32 {
    (v + 127) / 255
}

/// Composites a straight-alpha `src` over an opaque `bg`.
///
/// Source and background contributions are rounded separately
/// (`round(s * a / 255) + round(b * (255 - a) / 255)`), the same as blending a
/// premultiplied source onto the destination. The result is opaque.
#[inline]
pub(crate) fn blend_over(src: Colour, bg: Colour) -> Colour {
    match src.a {
        255 => src,
        0 => bg.opaque(),
        sa => {
            let sa = sa as u32;
            let inv = 255 - sa;
            let mix = |s: u8, d: u8| {
                (div255(s as u32 * sa) + div255(d as u32 * inv)).min(255) as u8
            };
            Colour::rgb(mix(src.r, bg.r), mix(src.g, bg.g), mix(src.b, bg.b))
        }
    }
}

/// A translucent background painted onto a zeroed (black) surface.
#[inline]
pub(crate) fn flatten_onto_black(c: Colour) -> Colour {
    blend_over(c, Colour::BLACK)
}

/// 8-bit channel to 5 bits: `round(c * 31 / 255)`.
#[inline]
pub(crate) fn quantise_5(c: u8) -> u16 {
    ((c as u32 * 31 + 127) / 255) as u16
}

/// 5-bit channel back to 8 bits: `round(q * 255 / 31)`.
#[inline]
pub(crate) fn expand_5(q: u16) -> u8 {
    (((q & 0x1F) as u32 * 255 + 15) / 31) as u8
}

/// `0RRRRRGGGGGBBBBB`
#[inline]
pub(crate) fn pack_rgb555(c: Colour) -> u16 {
    (quantise_5(c.r) << 10) | (quantise_5(c.g) << 5) | quantise_5(c.b)
}

#[inline]
pub(crate) fn unpack_rgb555(px: u16) -> Colour {
    Colour::rgb(expand_5(px >> 10), expand_5(px >> 5), expand_5(px))
}

/// Rec.601 weighted brightness in 0..=255.
#[inline]
pub(crate) fn perceived_brightness(c: Colour) -> u8 {
    ((299 * c.r as u32 + 587 * c.g as u32 + 114 * c.b as u32 + 500) / 1000) as u8
}
