use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Display configuration for rendered tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Decimal places for lengths and areas (default: shortest exact form)
    #[serde(default)]
    pub precision: Option<usize>,

    /// Leave out categories with no rows instead of printing header-only tables
    #[serde(default)]
    pub skip_empty: bool,

    /// Output format used when none is given on the command line
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
}

impl DisplayConfig {
    pub fn format_or_default(&self) -> OutputFormat {
        self.default_format.unwrap_or_default()
    }
}
