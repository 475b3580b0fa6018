// Author: Dustin Pilgrim
// License: MIT

pub mod cache;
pub mod colour;
pub mod error;
pub mod hls;
pub mod shade;

pub use cache::{
    ShadeCache, dark, dark_by, dark_dark, is_dark, light, light_by, light_light,
};
pub use colour::Colour;
pub use error::CoreError;
pub use hls::{Hls, HLS_MAX, RGB_MAX, UNDEFINED_HUE};
pub use shade::{Direction, Shade, is_darker};
