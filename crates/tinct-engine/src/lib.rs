//! Tinct engine crate.
//!
//! Owns the gradient model and everything that reads it: color math, the stop
//! list and its editing contract, random palette generation, rasterization and
//! export. Nothing here knows about windows or widgets; the editor in
//! `tinct-ui` drives it.

pub mod color;
pub mod error;
pub mod export;
pub mod generate;
pub mod gradient;
pub mod logging;
pub mod raster;
pub mod time;

pub use color::Rgb;
pub use error::{GradientError, Result};
pub use gradient::{GradientKind, GradientSpec, Stop};
