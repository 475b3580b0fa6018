// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use paintkit_core::{Colour, Shade};

#[derive(Debug, Parser)]
#[command(name = "paintkit", version, about = "Chrome shading and icon bitmaps.")]
pub struct Args {
    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/paintkit/paintkit.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Override config path (default: $XDG_CONFIG_HOME/paintkit/paintkit.rune)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Print light/dark shades of a colour (#RRGGBB or #AARRGGBB)
    Shade {
        colour: Colour,
        /// Only this shade; all four plus is_dark otherwise
        #[arg(long, value_enum)]
        shade: Option<Shade>,
        /// Interpolation amount instead of the canonical one
        #[arg(long, allow_negative_numbers = true)]
        percent: Option<f32>,
    },

    /// Build a native bitmap from an image and write it back out as PNG
    Convert {
        input: PathBuf,
        #[arg(long, value_enum)]
        to: Target,
        #[arg(long, short = 'o')]
        out: PathBuf,
        /// Composite / mask background (defaults from config)
        #[arg(long)]
        background: Option<Colour>,
        /// Image the mask bitmap is built from (colour-mask only)
        #[arg(long)]
        mask: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = MaskKind::Alpha)]
        mask_kind: MaskKind,
        #[arg(long, value_enum)]
        mask_rule: Option<MaskRuleKind>,
    },

    /// Invert foreground pixels against a background colour
    Invert {
        input: PathBuf,
        #[arg(long)]
        background: Colour,
        #[arg(long, short = 'o')]
        out: PathBuf,
        /// Only pixels whose luminosity differs from the background's by more than 20
        #[arg(long)]
        if_needed: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Composite16,
    ColourMask,
    TransparencyMask,
}

/// How `--mask` is turned into a native bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaskKind {
    /// 1-bit, set where the mask image is transparent
    Alpha,
    /// 32-bit colour
    Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaskRuleKind {
    Raster,
    Luminance,
}
