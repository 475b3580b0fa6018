// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid colour \"{0}\": expected #RRGGBB or #AARRGGBB")]
    InvalidColour(String),
}
