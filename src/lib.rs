//! Model-space metrics of a drawing: block counts by name, and polyline
//! length, single-line-text character count and hatch area by layer, each
//! rendered as a sorted two-column table with a caption.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod metrics;

// Re-export commonly used types
pub use crate::core::{
    AggregationStats, Category, ColumnHeaders, DrawingObject, Error, GroupKey,
    MeasureExtractionError, MetricsReport, ObjectKind, ResultRow, ResultSet, Total,
};

pub use crate::metrics::{aggregate, aggregate_with, classify, Labels, Locale};

pub use crate::io::{create_writer, DrawingSource, FileSource, OutputFormat, OutputWriter};
