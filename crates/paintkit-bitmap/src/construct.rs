// construct.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Builds native bitmaps from caller images: an opaque 16-bit composite,
// a 32-bit colour mask and a 1-bit transparency mask.
//
// None of these touch shared state; concurrent calls on distinct inputs
// need no coordination.

use paintkit_core::Colour;

use crate::error::{BitmapError, Result};
use crate::mask::{MaskRule, MaskSample, RasterAndNot};
use crate::native::{NativeBitmap, NativeFormat};
use crate::pixels;
use crate::source::PixelSource;

/// Knobs for [`colour_mask_with`].
pub struct ColourMaskOptions {
    /// What translucent pixels are flattened onto.
    pub background: Colour,
    pub rule: Box<dyn MaskRule>,
}

impl ColourMaskOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: impl MaskRule + 'static) -> Self {
        self.rule = Box::new(rule);
        self
    }
}

impl Default for ColourMaskOptions {
    fn default() -> Self {
        Self {
            background: Colour::LIGHT_GRAY,
            rule: Box::new(RasterAndNot),
        }
    }
}

/// Flattens `image` onto `background` into a 16-bit 5-5-5 bitmap.
///
/// A translucent `background` is first flattened onto black.
pub fn composite_16bit<S>(image: Option<&S>, background: Colour) -> Result<NativeBitmap>
where
    S: PixelSource + ?Sized,
{
    let image = image.ok_or(BitmapError::NullArgument("image"))?;
    let background = pixels::flatten_onto_black(background);

    let mut out = NativeBitmap::new(image.width(), image.height(), NativeFormat::Rgb555)?;
    for_each_pixel(image, |x, y| {
        let px = pixels::blend_over(image.effective_pixel(x, y), background);
        out.put_rgb555(x, y, px);
    });
    Ok(out)
}

/// 32-bit colour half of an icon pair, flattened onto light grey.
///
/// With a `mask`, set bits (or mask colours) knock pixels out per
/// [`RasterAndNot`].
pub fn colour_mask<S>(image: Option<&S>, mask: Option<&NativeBitmap>) -> Result<NativeBitmap>
where
    S: PixelSource + ?Sized,
{
    colour_mask_with(image, mask, &ColourMaskOptions::default())
}

pub fn colour_mask_with<S>(
    image: Option<&S>,
    mask: Option<&NativeBitmap>,
    options: &ColourMaskOptions,
) -> Result<NativeBitmap>
where
    S: PixelSource + ?Sized,
{
    let image = image.ok_or(BitmapError::NullArgument("image"))?;
    let background = pixels::flatten_onto_black(options.background);

    let mut out = NativeBitmap::new(image.width(), image.height(), NativeFormat::Rgb32)?;
    for_each_pixel(image, |x, y| {
        let mut px = pixels::blend_over(image.effective_pixel(x, y), background);
        if let Some(mask) = mask {
            px = options.rule.apply(px, MaskSample::at(mask, x, y));
        }
        out.put_rgb32(x, y, px);
    });
    Ok(out)
}

/// 1-bit AND mask: set (white) where the source is fully transparent.
pub fn transparency_mask<S>(image: Option<&S>) -> Result<NativeBitmap>
where
    S: PixelSource + ?Sized,
{
    let image = image.ok_or(BitmapError::NullArgument("image"))?;

    let mut out = NativeBitmap::new(image.width(), image.height(), NativeFormat::Indexed1)?;
    for_each_pixel(image, |x, y| {
        if image.effective_pixel(x, y).a == 0 {
            out.set_bit(x, y, true);
        }
    });
    Ok(out)
}

fn for_each_pixel<S, F>(image: &S, mut f: F)
where
    S: PixelSource + ?Sized,
    F: FnMut(u32, u32),
{
    for y in 0..image.height() {
        for x in 0..image.width() {
            f(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::mask::LuminanceThreshold;
    use crate::source::{PixelFormat, RasterImage};

    /// Opaque, nearly transparent and fully transparent versions of one colour.
    fn strip() -> RasterImage {
        RasterImage::from_pixels(
            3,
            1,
            PixelFormat::ARGB_32,
            vec![
                Colour::argb(255, 50, 100, 150),
                Colour::argb(1, 50, 100, 150),
                Colour::argb(0, 50, 100, 150),
            ],
        )
        .unwrap()
    }

    fn read_back(bmp: &NativeBitmap) -> Vec<Colour> {
        (0..bmp.height())
            .flat_map(|y| (0..bmp.width()).map(move |x| (x, y)))
            .map(|(x, y)| bmp.pixel(x, y))
            .collect()
    }

    #[test]
    fn null_image_is_rejected() {
        let none: Option<&RasterImage> = None;
        assert_eq!(
            composite_16bit(none, Colour::RED).unwrap_err(),
            BitmapError::NullArgument("image")
        );
        assert_eq!(
            colour_mask(none, None).unwrap_err(),
            BitmapError::NullArgument("image")
        );
        assert_eq!(
            transparency_mask(none).unwrap_err(),
            BitmapError::NullArgument("image")
        );
    }

    #[test]
    fn composite_over_red() {
        let bmp = composite_16bit(Some(&strip()), Colour::RED).unwrap();
        assert_eq!(bmp.format(), NativeFormat::Rgb555);
        assert!(bmp.palette().is_empty());
        assert_eq!(
            read_back(&bmp),
            vec![Colour::rgb(49, 99, 148), Colour::RED, Colour::RED]
        );
    }

    #[test]
    fn composite_solid_red_square() {
        let img = RasterImage::filled(10, 10, PixelFormat::ARGB_32, Colour::RED);
        let bmp = composite_16bit(Some(&img), Colour::BLACK).unwrap();

        assert_eq!((bmp.width(), bmp.height()), (10, 10));
        assert_eq!(bmp.stride(), 20);
        assert!(read_back(&bmp).iter().all(|&c| c == Colour::RED));
    }

    #[test]
    fn composite_ignores_alpha_of_opaque_formats() {
        let mut img = RasterImage::with_format(1, 1, PixelFormat::RGB_32);
        img.set_pixel(0, 0, Colour::argb(0, 0, 0, 255));
        let bmp = composite_16bit(Some(&img), Colour::RED).unwrap();
        assert_eq!(bmp.pixel(0, 0), Colour::rgb(0, 0, 255));
    }

    #[test]
    fn translucent_background_is_flattened_onto_black() {
        let img = RasterImage::new(1, 1);
        let bmp = composite_16bit(Some(&img), Colour::argb(0, 255, 255, 255)).unwrap();
        assert_eq!(bmp.pixel(0, 0), Colour::BLACK);
    }

    #[test]
    fn colour_mask_without_mask() {
        let bmp = colour_mask(Some(&strip()), None).unwrap();
        assert_eq!(bmp.format(), NativeFormat::Rgb32);
        assert_eq!(
            read_back(&bmp),
            vec![
                Colour::rgb(50, 100, 150),
                Colour::rgb(210, 210, 211),
                Colour::LIGHT_GRAY,
            ]
        );
    }

    #[test]
    fn colour_mask_with_colour_mask() {
        let mask_src = RasterImage::from_pixels(
            3,
            1,
            PixelFormat::ARGB_32,
            vec![
                Colour::RED,
                Colour::rgb(0, 255, 0),
                Colour::argb(0, 0, 0, 255),
            ],
        )
        .unwrap();
        let mask = colour_mask(Some(&mask_src), None).unwrap();
        assert_eq!(mask.pixel(2, 0), Colour::LIGHT_GRAY);

        let bmp = colour_mask(Some(&strip()), Some(&mask)).unwrap();
        assert_eq!(
            read_back(&bmp),
            vec![
                Colour::rgb(0, 100, 150),
                Colour::rgb(210, 0, 211),
                Colour::BLACK,
            ]
        );
    }

    #[test]
    fn transparency_mask_pairs_with_colour_mask() {
        let img = strip();
        let and_mask = transparency_mask(Some(&img)).unwrap();
        let xor = colour_mask(Some(&img), Some(&and_mask)).unwrap();

        assert_eq!(
            read_back(&xor),
            vec![
                Colour::rgb(50, 100, 150),
                Colour::rgb(210, 210, 211),
                Colour::BLACK,
            ]
        );
    }

    #[test]
    fn smaller_mask_leaves_the_rest_untouched() {
        let img = RasterImage::filled(4, 1, PixelFormat::ARGB_32, Colour::WHITE);
        let mut mask = NativeBitmap::new(2, 1, NativeFormat::Indexed1).unwrap();
        mask.set_bit(1, 0, true);

        let bmp = colour_mask(Some(&img), Some(&mask)).unwrap();
        assert_eq!(
            read_back(&bmp),
            vec![Colour::WHITE, Colour::BLACK, Colour::WHITE, Colour::WHITE]
        );
    }

    #[test]
    fn custom_rule_and_background() {
        let opts = ColourMaskOptions::new()
            .with_background(Colour::WHITE)
            .with_rule(LuminanceThreshold {
                threshold: 127,
                substitute: Colour::RED,
            });

        let mut mask = NativeBitmap::new(2, 1, NativeFormat::Rgb32).unwrap();
        mask.put_rgb32(0, 0, Colour::BLACK);
        mask.put_rgb32(1, 0, Colour::WHITE);

        let img = RasterImage::new(2, 1);
        let bmp = colour_mask_with(Some(&img), Some(&mask), &opts).unwrap();
        assert_eq!(read_back(&bmp), vec![Colour::RED, Colour::WHITE]);
    }

    #[test]
    fn transparency_mask_bits() {
        let bmp = transparency_mask(Some(&strip())).unwrap();
        assert_eq!(bmp.format(), NativeFormat::Indexed1);
        assert_eq!(bmp.palette(), &[Colour::BLACK, Colour::WHITE]);
        assert_eq!(bmp.stride(), 2);
        assert_eq!(bmp.bits(), &[0b0010_0000, 0]);
        assert_eq!(
            read_back(&bmp),
            vec![Colour::BLACK, Colour::BLACK, Colour::WHITE]
        );
    }

    #[test]
    fn opaque_format_has_empty_transparency_mask() {
        let img = RasterImage::with_format(5, 5, PixelFormat::RGB_32);
        let bmp = transparency_mask(Some(&img)).unwrap();
        assert!(bmp.bits().iter().all(|&b| b == 0));
    }

    #[test]
    fn sizes_are_preserved() {
        for (w, h) in [(10, 10), (11, 11), (16, 24), (0, 0), (0, 3)] {
            let img = RasterImage::new(w, h);

            let c16 = composite_16bit(Some(&img), Colour::BLACK).unwrap();
            let c32 = colour_mask(Some(&img), None).unwrap();
            let m1 = transparency_mask(Some(&img)).unwrap();

            for bmp in [&c16, &c32, &m1] {
                assert_eq!((bmp.width(), bmp.height()), (w, h));
                assert_eq!(bmp.bits().len(), bmp.stride() * h as usize);
            }
        }
    }

    #[test]
    fn works_with_image_crate_buffers() {
        let mut buf = RgbaImage::new(2, 1);
        buf.put_pixel(0, 0, Rgba([255, 0, 0, 255]));

        let bmp = transparency_mask(Some(&buf)).unwrap();
        assert_eq!(read_back(&bmp), vec![Colour::BLACK, Colour::WHITE]);

        let dynamic = image::DynamicImage::ImageRgba8(buf);
        let bmp = composite_16bit(Some(&dynamic), Colour::rgb(0, 0, 255)).unwrap();
        assert_eq!(read_back(&bmp), vec![Colour::RED, Colour::rgb(0, 0, 255)]);
    }

    #[test]
    fn accepts_trait_objects() {
        let img = strip();
        let dynamic: &dyn PixelSource = &img;
        let bmp = transparency_mask(Some(dynamic)).unwrap();
        assert_eq!(bmp.width(), 3);
    }
}
