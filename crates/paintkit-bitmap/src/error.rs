// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BitmapError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitmapError {
    #[error("argument `{0}` must not be null")]
    NullArgument(&'static str),

    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument { param: &'static str, reason: String },

    #[error("bitmap too large ({width}x{height})")]
    TooLarge { width: u32, height: u32 },
}
