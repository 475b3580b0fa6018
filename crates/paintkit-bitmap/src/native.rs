// native.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Device-layout bitmaps handed back to the caller.
//
// Rows are top-down. Multi-byte pixels are little-endian.
//   Rgb555   : u16 0RRRRRGGGGGBBBBB, rows padded to 4 bytes
//   Rgb32    : u32 0xFFRRGGBB, no padding
//   Indexed1 : MSB-first bits, rows padded to an even byte count

use paintkit_core::Colour;

use crate::error::{BitmapError, Result};
use crate::pixels;
use crate::source::{PixelFormat, PixelSource};

/// Palette of every 1-bit bitmap: index 0 black, index 1 white.
const MONO_PALETTE: [Colour; 2] = [Colour::BLACK, Colour::WHITE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeFormat {
    Rgb555,
    Rgb32,
    Indexed1,
}

impl NativeFormat {
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            NativeFormat::Rgb555 => 16,
            NativeFormat::Rgb32 => 32,
            NativeFormat::Indexed1 => 1,
        }
    }

    /// Bytes per row for `width` pixels, or `None` on overflow.
    pub fn stride(self, width: u32) -> Option<usize> {
        let width = width as usize;
        match self {
            NativeFormat::Rgb555 => width.checked_mul(2)?.checked_add(3).map(|n| n & !3),
            NativeFormat::Rgb32 => width.checked_mul(4),
            NativeFormat::Indexed1 => {
                let bytes = width.checked_add(7)? / 8;
                bytes.checked_add(1).map(|n| n & !1)
            }
        }
    }

    const fn pixel_format(self) -> PixelFormat {
        match self {
            NativeFormat::Rgb555 => PixelFormat::RGB_555,
            NativeFormat::Rgb32 => PixelFormat::RGB_32,
            NativeFormat::Indexed1 => PixelFormat::INDEXED_1BPP,
        }
    }
}

/// An owned, caller-released bitmap in one of the native layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeBitmap {
    width: u32,
    height: u32,
    format: NativeFormat,
    stride: usize,
    bits: Vec<u8>,
}

impl NativeBitmap {
    /// Zero-initialised: black for the colour formats, all-clear for 1-bit.
    pub(crate) fn new(width: u32, height: u32, format: NativeFormat) -> Result<Self> {
        let too_large = || BitmapError::TooLarge { width, height };

        let stride = format.stride(width).ok_or_else(too_large)?;
        let len = stride.checked_mul(height as usize).ok_or_else(too_large)?;

        Ok(Self {
            width,
            height,
            format,
            stride,
            bits: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> NativeFormat {
        self.format
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Empty for the direct-colour formats.
    pub fn palette(&self) -> &[Colour] {
        match self.format {
            NativeFormat::Indexed1 => &MONO_PALETTE,
            _ => &[],
        }
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    pub(crate) fn put_rgb555(&mut self, x: u32, y: u32, colour: Colour) {
        let off = self.offset(x, y);
        let packed = pixels::pack_rgb555(colour);
        self.bits[off..off + 2].copy_from_slice(&packed.to_le_bytes());
    }

    pub(crate) fn put_rgb32(&mut self, x: u32, y: u32, colour: Colour) {
        let off = self.offset(x, y);
        let packed = colour.opaque().to_argb_u32();
        self.bits[off..off + 4].copy_from_slice(&packed.to_le_bytes());
    }

    pub(crate) fn set_bit(&mut self, x: u32, y: u32, on: bool) {
        let (off, mask) = self.bit_position(x, y);
        if on {
            self.bits[off] |= mask;
        } else {
            self.bits[off] &= !mask;
        }
    }

    /// Whether the 1-bit pixel at `(x, y)` is set (palette index 1).
    pub fn bit(&self, x: u32, y: u32) -> bool {
        let (off, mask) = self.bit_position(x, y);
        self.bits[off] & mask != 0
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        let bpp = (self.format.bits_per_pixel() / 8) as usize;
        y as usize * self.stride + x as usize * bpp
    }

    fn bit_position(&self, x: u32, y: u32) -> (usize, u8) {
        let off = y as usize * self.stride + x as usize / 8;
        (off, 0x80 >> (x % 8))
    }
}

impl PixelSource for NativeBitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> PixelFormat {
        self.format.pixel_format()
    }

    fn pixel(&self, x: u32, y: u32) -> Colour {
        match self.format {
            NativeFormat::Rgb555 => {
                let off = self.offset(x, y);
                pixels::unpack_rgb555(u16::from_le_bytes([self.bits[off], self.bits[off + 1]]))
            }
            NativeFormat::Rgb32 => {
                let off = self.offset(x, y);
                let mut raw = [0u8; 4];
                raw.copy_from_slice(&self.bits[off..off + 4]);
                Colour::from_argb_u32(u32::from_le_bytes(raw)).opaque()
            }
            NativeFormat::Indexed1 => MONO_PALETTE[self.bit(x, y) as usize],
        }
    }
}
