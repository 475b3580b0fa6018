// source.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Caller-side images: anything that can hand out straight-alpha pixels.

use image::{DynamicImage, GenericImageView, RgbaImage};
use paintkit_core::Colour;

use crate::error::{BitmapError, Result};

/// How a source stores its pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    pub bits_per_pixel: u16,
    pub indexed: bool,
    pub has_alpha: bool,
}

impl PixelFormat {
    pub const INDEXED_1BPP: PixelFormat = PixelFormat::new(1, true, false);
    pub const RGB_555: PixelFormat = PixelFormat::new(16, false, false);
    pub const RGB_32: PixelFormat = PixelFormat::new(32, false, false);
    pub const ARGB_32: PixelFormat = PixelFormat::new(32, false, true);

    pub const fn new(bits_per_pixel: u16, indexed: bool, has_alpha: bool) -> Self {
        Self {
            bits_per_pixel,
            indexed,
            has_alpha,
        }
    }
}

/// Read access to a rectangular image.
///
/// `pixel` is only called with `x < width()` and `y < height()`.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn format(&self) -> PixelFormat;
    fn pixel(&self, x: u32, y: u32) -> Colour;

    /// The pixel as it should be composited: formats without an alpha
    /// channel are always opaque, whatever the stored alpha byte says.
    fn effective_pixel(&self, x: u32, y: u32) -> Colour {
        let px = self.pixel(x, y);
        if self.format().has_alpha { px } else { px.opaque() }
    }
}

/// An owned image, row-major, one `Colour` per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<Colour>,
}

impl RasterImage {
    /// A fully transparent ARGB image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, PixelFormat::ARGB_32, Colour::TRANSPARENT)
    }

    /// Zero-filled: transparent when the format carries alpha, black otherwise.
    pub fn with_format(width: u32, height: u32, format: PixelFormat) -> Self {
        let fill = if format.has_alpha {
            Colour::TRANSPARENT
        } else {
            Colour::BLACK
        };
        Self::filled(width, height, format, fill)
    }

    pub fn filled(width: u32, height: u32, format: PixelFormat, colour: Colour) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            format,
            pixels: vec![colour; len],
        }
    }

    pub fn from_pixels(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<Colour>,
    ) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BitmapError::TooLarge { width, height })?;

        if pixels.len() != expected {
            return Err(BitmapError::InvalidArgument {
                param: "pixels",
                reason: format!(
                    "expected {expected} pixels for {width}x{height}, got {}",
                    pixels.len()
                ),
            });
        }

        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// Panics when `(x, y)` is outside the image, like `image::ImageBuffer::put_pixel`.
    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        let idx = self.index(x, y);
        self.pixels[idx] = colour;
    }

    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

impl PixelSource for RasterImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn pixel(&self, x: u32, y: u32) -> Colour {
        self.pixels[self.index(x, y)]
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbaImage::height(self)
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::ARGB_32
    }

    fn pixel(&self, x: u32, y: u32) -> Colour {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        Colour::argb(a, r, g, b)
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn format(&self) -> PixelFormat {
        let colour = self.color();
        PixelFormat::new(colour.bits_per_pixel(), false, colour.has_alpha())
    }

    fn pixel(&self, x: u32, y: u32) -> Colour {
        let [r, g, b, a] = GenericImageView::get_pixel(self, x, y).0;
        Colour::argb(a, r, g, b)
    }
}
