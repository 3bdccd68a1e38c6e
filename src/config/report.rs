use crate::metrics::Locale;
use serde::{Deserialize, Serialize};

/// Report content configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Language of captions and column headers
    #[serde(default)]
    pub locale: Locale,

    /// Name of the layout whose objects are aggregated
    #[serde(default = "default_model_space")]
    pub model_space: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            model_space: default_model_space(),
        }
    }
}

pub fn default_model_space() -> String {
    "Model".to_string()
}
