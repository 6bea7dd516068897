use std::fmt;

use tinct_engine::GradientError;

/// How the shell should color a status line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StatusLevel {
    Success,
    Warning,
    Info,
}

/// One line for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Warning, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, text: text.into() }
    }

    /// Warning line for a failed operation.
    pub fn from_error(err: &GradientError) -> Self {
        let text = match err {
            GradientError::MaxStopsReached { max } => format!("Maximum {max} colors allowed!"),
            GradientError::MinStopsRequired { min } => {
                format!("Cannot delete - minimum {min} colors required!")
            }
            GradientError::InvalidExportDimensions { .. } => {
                "Invalid export dimensions! Please enter positive numbers.".to_string()
            }
            GradientError::MalformedColor(text) => format!("Invalid HEX code: {text:?}"),
            other => capitalize(&other.to_string()),
        };
        Self::warning(text)
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_errors_read_like_the_editor() {
        let max = StatusMessage::from_error(&GradientError::MaxStopsReached { max: 8 });
        assert_eq!(max.text, "Maximum 8 colors allowed!");
        assert_eq!(max.level, StatusLevel::Warning);

        let min = StatusMessage::from_error(&GradientError::MinStopsRequired { min: 2 });
        assert_eq!(min.text, "Cannot delete - minimum 2 colors required!");
    }

    #[test]
    fn other_errors_are_capitalized() {
        let msg = StatusMessage::from_error(&GradientError::UnknownPreset("Nope".into()));
        assert_eq!(msg.text, "Unknown gradient preset \"Nope\"");
    }
}
