// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use rune_cfg::RuneConfig;

use paintkit_bitmap::{ColourMaskOptions, LuminanceThreshold, RasterAndNot};
use paintkit_core::Colour;

use crate::cli::MaskRuleKind;

#[derive(Debug, Clone)]
pub struct PaintkitConfig {
    /// Background for `convert --to composite16`.
    pub background: Colour,
    /// Background for `convert --to colour-mask`.
    pub mask_background: Colour,
    pub mask_rule: MaskRuleKind,
    pub luminance_threshold: u8,
}

impl Default for PaintkitConfig {
    fn default() -> Self {
        Self {
            background: Colour::BLACK,
            mask_background: Colour::LIGHT_GRAY,
            mask_rule: MaskRuleKind::Raster,
            luminance_threshold: 127,
        }
    }
}

impl PaintkitConfig {
    /// Mask options with CLI overrides applied on top of the file.
    pub fn mask_options(
        &self,
        background: Option<Colour>,
        rule: Option<MaskRuleKind>,
    ) -> ColourMaskOptions {
        let background = background.unwrap_or(self.mask_background);
        let options = ColourMaskOptions::new().with_background(background);
        match rule.unwrap_or(self.mask_rule) {
            MaskRuleKind::Raster => options.with_rule(RasterAndNot),
            MaskRuleKind::Luminance => options.with_rule(LuminanceThreshold {
                threshold: self.luminance_threshold,
                substitute: Colour::BLACK,
            }),
        }
    }
}

/// Loads `path`; a missing file is only an error when `required`.
pub fn load(path: &Path, required: bool) -> Result<PaintkitConfig, String> {
    if !path.exists() {
        if required {
            return Err(format!("config file not found: {}", path.display()));
        }
        return Ok(PaintkitConfig::default());
    }

    let rc = RuneConfig::from_file(path).map_err(|e| format!("failed to read config: {e}"))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<PaintkitConfig, String> {
    let mut cfg = PaintkitConfig::default();

    if !rc.has("paintkit") {
        return Ok(cfg);
    }

    if let Some(s) = get_string(rc, "paintkit.background")? {
        cfg.background = parse_colour(&s).map_err(|e| at("paintkit.background", e))?;
    }

    if let Some(s) = get_string(rc, "paintkit.mask_background")? {
        cfg.mask_background = parse_colour(&s).map_err(|e| at("paintkit.mask_background", e))?;
    }

    if let Some(s) = get_string(rc, "paintkit.mask_rule")? {
        cfg.mask_rule = parse_mask_rule(&s).map_err(|e| at("paintkit.mask_rule", e))?;
    }

    if let Some(t) = get_threshold(rc, "paintkit.luminance_threshold")? {
        cfg.luminance_threshold = t;
    }

    Ok(cfg)
}

fn get_string(rc: &RuneConfig, key: &str) -> Result<Option<String>, String> {
    rc.get_optional::<String>(key).map_err(|e| at(key, e.to_string()))
}

/// Bare numbers first; `"200"` is still accepted.
fn get_threshold(rc: &RuneConfig, key: &str) -> Result<Option<u8>, String> {
    let parsed = match rc.get_optional::<f64>(key) {
        Ok(Some(n)) => threshold_from_number(n).map(Some),
        Ok(None) => return Ok(None),
        Err(_) => match get_string(rc, key)? {
            Some(s) => parse_threshold(&s).map(Some),
            None => Ok(None),
        },
    };
    parsed.map_err(|e| at(key, e))
}

fn at(key: &str, e: String) -> String {
    format!("config error at {key}: {e}")
}

fn parse_colour(s: &str) -> Result<Colour, String> {
    s.parse::<Colour>().map_err(|e| e.to_string())
}

fn parse_mask_rule(s: &str) -> Result<MaskRuleKind, String> {
    match s.trim().to_lowercase().as_str() {
        "raster" => Ok(MaskRuleKind::Raster),
        "luminance" => Ok(MaskRuleKind::Luminance),
        other => Err(format!("expected raster|luminance, got \"{other}\"")),
    }
}

fn threshold_from_number(n: f64) -> Result<u8, String> {
    if n.fract() == 0.0 && (0.0..=255.0).contains(&n) {
        Ok(n as u8)
    } else {
        Err(format!("expected 0..=255, got {n}"))
    }
}

fn parse_threshold(s: &str) -> Result<u8, String> {
    s.trim()
        .parse::<u8>()
        .map_err(|_| format!("expected 0..=255, got \"{}\"", s.trim()))
}
