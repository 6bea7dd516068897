use std::path::PathBuf;

/// Recoverable failures of gradient operations.
///
/// None of these are fatal. The editor turns each one into a status message
/// at the boundary of the action that triggered it and leaves the model as it
/// was before the call.
#[derive(Debug, thiserror::Error)]
pub enum GradientError {
    #[error("invalid color {0:?}: expected 6 hex digits")]
    MalformedColor(String),

    #[error("maximum {max} colors allowed")]
    MaxStopsReached { max: usize },

    #[error("cannot delete, minimum {min} colors required")]
    MinStopsRequired { min: usize },

    #[error("a color stop already sits near {fraction:.3}")]
    StopTooClose { fraction: f64 },

    #[error("no color stop at index {index} (have {len})")]
    StopIndexOutOfRange { index: usize, len: usize },

    #[error("gradients need between 1 and {max} colors, got {count}")]
    InvalidStopCount { count: usize, max: usize },

    #[error("fraction {0} is not a position on the gradient")]
    InvalidFraction(f64),

    #[error("stop positions must lie in [0, 1], ascending and at least {min_gap} apart")]
    StopsOutOfOrder { min_gap: f64 },

    #[error("unknown gradient type {0:?}")]
    UnknownGradientKind(String),

    #[error("unknown gradient style {0:?}")]
    UnknownStyle(String),

    #[error("unknown gradient preset {0:?}")]
    UnknownPreset(String),

    #[error("unknown export format {0:?}")]
    UnknownExportFormat(String),

    #[error("invalid export dimensions {width:?} x {height:?}, expected positive numbers")]
    InvalidExportDimensions { width: String, height: String },

    #[error("{feature} needs image support, which this build does not include")]
    MissingImageDependency { feature: &'static str },

    #[error("could not load font: {0}")]
    InvalidFont(String),

    #[error("failed to encode {format}: {message}")]
    EncodeFailure { format: &'static str, message: String },

    #[error("failed to export {}: {message}", path.display())]
    ExportWriteFailure { path: PathBuf, message: String },
}

pub type Result<T, E = GradientError> = std::result::Result<T, E>;
