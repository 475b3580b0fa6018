// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use eventline::{debug, info, warn};

use paintkit_bitmap::{
    NativeBitmap, colour_mask, colour_mask_with, composite_16bit, transparency_mask,
};
use paintkit_core::Colour;

use crate::cli::{MaskKind, MaskRuleKind, Target};
use crate::config::PaintkitConfig;

use super::{open_image, save_png, to_rgba};

pub struct Request<'a> {
    pub to: Target,
    pub background: Option<Colour>,
    pub mask: Option<&'a Path>,
    pub mask_kind: MaskKind,
    pub mask_rule: Option<MaskRuleKind>,
}

pub fn run(
    input: &Path,
    out: &Path,
    req: &Request<'_>,
    cfg: &PaintkitConfig,
) -> Result<(), String> {
    let img = open_image(input)?;

    let bmp = match req.to {
        Target::Composite16 => {
            if req.mask.is_some() {
                warn!("--mask only applies to colour-mask; ignoring");
            }
            let bg = req.background.unwrap_or(cfg.background);
            debug!("composite16 over {}", bg);
            composite_16bit(Some(&img), bg)
        }

        Target::ColourMask => {
            let mask = match req.mask {
                Some(path) => Some(load_mask(path, req.mask_kind)?),
                None => None,
            };
            let options = cfg.mask_options(req.background, req.mask_rule);
            debug!("colour-mask over {}", options.background);
            colour_mask_with(Some(&img), mask.as_ref(), &options)
        }

        Target::TransparencyMask => {
            if req.background.is_some() || req.mask.is_some() {
                warn!("transparency-mask takes no background or mask; ignoring");
            }
            transparency_mask(Some(&img))
        }
    }
    .map_err(|e| format!("conversion failed: {e}"))?;

    describe(&bmp);
    save_png(&to_rgba(&bmp), out)?;
    info!("wrote {}", out.display());
    Ok(())
}

fn load_mask(path: &Path, kind: MaskKind) -> Result<NativeBitmap, String> {
    let src = open_image(path)?;
    let mask = match kind {
        MaskKind::Alpha => transparency_mask(Some(&src)),
        MaskKind::Colour => colour_mask(Some(&src), None),
    };
    mask.map_err(|e| format!("mask {}: {e}", path.display()))
}

fn describe(bmp: &NativeBitmap) {
    info!(
        "native bitmap {}x{} {:?} stride={} bytes={}",
        bmp.width(),
        bmp.height(),
        bmp.format(),
        bmp.stride(),
        bmp.bits().len()
    );
    if !bmp.palette().is_empty() {
        let palette: Vec<String> = bmp.palette().iter().map(Colour::to_string).collect();
        debug!("palette: [{}]", palette.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    fn write_strip(path: &Path) {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([50, 100, 150, 255]));
        img.put_pixel(1, 0, Rgba([50, 100, 150, 1]));
        img.put_pixel(2, 0, Rgba([50, 100, 150, 0]));
        img.save(path).unwrap();
    }

    fn request<'a>(to: Target) -> Request<'a> {
        Request {
            to,
            background: None,
            mask: None,
            mask_kind: MaskKind::Alpha,
            mask_rule: None,
        }
    }

    fn read(path: &Path) -> Vec<[u8; 4]> {
        image::open(path)
            .unwrap()
            .to_rgba8()
            .pixels()
            .map(|p| p.0)
            .collect()
    }

    #[test]
    fn composite16_over_configured_background() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let out = dir.path().join("out.png");
        write_strip(&input);

        let cfg = PaintkitConfig {
            background: Colour::RED,
            ..PaintkitConfig::default()
        };
        run(&input, &out, &request(Target::Composite16), &cfg).unwrap();

        assert_eq!(
            read(&out),
            vec![[49, 99, 148, 255], [255, 0, 0, 255], [255, 0, 0, 255]]
        );
    }

    #[test]
    fn colour_mask_with_alpha_mask() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let out = dir.path().join("out.png");
        write_strip(&input);

        let req = Request {
            mask: Some(input.as_path()),
            ..request(Target::ColourMask)
        };
        run(&input, &out, &req, &PaintkitConfig::default()).unwrap();

        assert_eq!(
            read(&out),
            vec![[50, 100, 150, 255], [210, 210, 211, 255], [0, 0, 0, 255]]
        );
    }

    #[test]
    fn transparency_mask_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let out = dir.path().join("nested/out.png");
        write_strip(&input);

        run(&input, &out, &request(Target::TransparencyMask), &PaintkitConfig::default()).unwrap();

        assert_eq!(
            read(&out),
            vec![[0, 0, 0, 255], [0, 0, 0, 255], [255, 255, 255, 255]]
        );
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &dir.path().join("missing.png"),
            &dir.path().join("out.png"),
            &request(Target::Composite16),
            &PaintkitConfig::default(),
        )
        .unwrap_err();
        assert!(err.contains("failed to open"), "{err}");
    }
}
