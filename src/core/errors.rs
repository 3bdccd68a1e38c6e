//! Shared error types for the application

use super::Category;
use std::path::PathBuf;
use thiserror::Error;

/// A classified object is missing the field its category is measured or
/// grouped by, or carries a measure that cannot be summed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureExtractionError {
    #[error("{category} has no {field}")]
    MissingField {
        category: Category,
        field: &'static str,
    },

    #[error("{category} has invalid {field}: {value}")]
    InvalidMeasure {
        category: Category,
        field: &'static str,
        value: f64,
    },
}

impl MeasureExtractionError {
    pub fn category(&self) -> Category {
        match self {
            Self::MissingField { category, .. } | Self::InvalidMeasure { category, .. } => {
                *category
            }
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } | Self::InvalidMeasure { field, .. } => field,
        }
    }
}

/// Main error type for cadtally operations
#[derive(Debug, Error)]
pub enum Error {
    /// An object could not be measured; the whole pass is abandoned
    #[error("object #{index}{} rejected: {source}", handle_suffix(.handle))]
    MeasureExtraction {
        index: usize,
        handle: Option<String>,
        #[source]
        source: MeasureExtractionError,
    },

    /// The drawing has no layout with the requested model-space name
    #[error("layout '{layout}' not found (available: {})", .available.join(", "))]
    ModelSpaceNotFound {
        layout: String,
        available: Vec<String>,
    },

    /// Drawing file parsed but does not describe a drawing
    #[error("{location}: {message}")]
    InvalidDrawing { location: String, message: String },

    /// Drawing file could not be read or parsed
    #[error("Drawing source error in {}: {message}", .path.display())]
    Source { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

fn handle_suffix(handle: &Option<String>) -> String {
    handle
        .as_ref()
        .map(|h| format!(" (handle {h})"))
        .unwrap_or_default()
}

impl Error {
    pub fn measure_extraction(
        index: usize,
        handle: Option<String>,
        source: MeasureExtractionError,
    ) -> Self {
        Self::MeasureExtraction {
            index,
            handle,
            source,
        }
    }

    pub fn invalid_drawing(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDrawing {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn drawing_source(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Source {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_extraction_message_names_object() {
        let err = Error::measure_extraction(
            3,
            Some("2F1".to_string()),
            MeasureExtractionError::MissingField {
                category: Category::Polyline,
                field: "length",
            },
        );
        assert_eq!(
            err.to_string(),
            "object #3 (handle 2F1) rejected: polyline has no length"
        );
    }

    #[test]
    fn test_measure_extraction_without_handle() {
        let err = Error::measure_extraction(
            0,
            None,
            MeasureExtractionError::InvalidMeasure {
                category: Category::Hatch,
                field: "area",
                value: -1.0,
            },
        );
        assert_eq!(err.to_string(), "object #0 rejected: hatch has invalid area: -1");
    }

    #[test]
    fn test_model_space_not_found_lists_layouts() {
        let err = Error::ModelSpaceNotFound {
            layout: "Model".to_string(),
            available: vec!["Sheet1".to_string(), "Sheet2".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "layout 'Model' not found (available: Sheet1, Sheet2)"
        );
    }
}
