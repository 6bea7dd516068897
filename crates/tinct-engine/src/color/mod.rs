//! Color math.
//!
//! Scope:
//! - `Rgb`, the 8-bit color every stop and pixel is stored in, and its hex form
//! - HSV / HLS conversions
//! - harmony families sampled from one base color
//!
//! Every float-to-channel conversion truncates; see [`Rgb::from_unit`].

mod hsv;
mod palette;
mod rgb;

pub use hsv::{hsv_to_hex, rgb_to_hsv, Hls, Hsv};
pub use palette::{base_palettes, BasePalettes};
pub use rgb::{hex_to_rgb, is_valid_hex, rgb_to_hex, Rgb};
