//! Random gradient generation.
//!
//! Harmony styles rotate one seed hue around the wheel; theme styles sample
//! a fixed palette. Jitter bounds live in [`GeneratorConfig`] rather than in
//! the algorithm, and the random source is injected so results can be pinned.

mod config;
mod generator;
mod style;

pub use config::{GeneratorConfig, JitterBounds};
pub use generator::Generator;
pub use style::Style;
