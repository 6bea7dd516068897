//! Tinct UI: the interactive gradient editor, minus the window.
//!
//! A shell (any toolkit) forwards pointer gestures, text fields and selector
//! changes to a [`GradientEditor`] and draws what it hands back: a preview
//! [`Field`](tinct_engine::raster::Field), stop markers, hex labels and a
//! status line.
//!
//! ```rust,ignore
//! use tinct_ui::prelude::*;
//!
//! let mut editor = GradientEditor::new(EditorConfig::default(), SystemClipboard)?;
//! let response = editor.handle_pointer(PointerEvent::double_click(120.0, 40.0));
//! if response.redraw_preview {
//!     let field = editor.preview();
//!     // blit `field.to_rgb8()` and `editor.markers()`
//! }
//! ```

pub mod canvas;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod editor;
pub mod event;
pub mod status;

pub use editor::GradientEditor;

/// Everything a shell needs, in one import.
pub mod prelude {
    pub use crate::canvas::{CanvasBounds, CanvasGeometry, Marker};
    pub use crate::clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
    pub use crate::config::EditorConfig;
    pub use crate::controller::{Controller, DragState, Response};
    pub use crate::editor::GradientEditor;
    pub use crate::event::{Gesture, PointerEvent};
    pub use crate::status::{StatusLevel, StatusMessage};

    pub use tinct_engine::export::{ExportFormat, ExportSize};
    pub use tinct_engine::generate::Style;
    pub use tinct_engine::gradient::{GradientKind, GradientSpec};
    pub use tinct_engine::Rgb;
}
