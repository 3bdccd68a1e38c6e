use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;
use super::report::ReportConfig;
use crate::metrics::Labels;

/// Root configuration structure, read from `.cadtally.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CadtallyConfig {
    /// Report content: locale and model-space layout
    #[serde(default)]
    pub report: Option<ReportConfig>,

    /// Table rendering options
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

impl CadtallyConfig {
    pub fn report(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    pub fn labels(&self) -> Labels {
        Labels::for_locale(self.report().locale)
    }
}
