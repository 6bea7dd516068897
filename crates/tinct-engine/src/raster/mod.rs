//! Rasterization.
//!
//! Scope:
//! - full-fidelity per-pixel fields for export ([`render_field`])
//! - block-sampled fields for the interactive preview ([`render_preview`])
//! - the saturation/value square of the color picker ([`sv_square`])
//!
//! Every pixel color comes from [`GradientSpec::color_at`], so the preview and
//! the exported image never disagree about a fraction.
//!
//! [`GradientSpec::color_at`]: crate::gradient::GradientSpec::color_at

mod field;
mod picker;
mod preview;
mod projection;

pub use field::{render_field, Field};
pub use picker::{sv_pick, sv_square};
pub use preview::render_preview;
