//! Configuration loaded from `.cadtally.toml`.
//!
//! The file is looked up in the current directory and its ancestors unless a
//! path is given explicitly. Every section is optional:
//!
//! ```toml
//! [report]
//! locale = "en"          # en | ru
//! model_space = "Model"  # layout whose objects are aggregated
//!
//! [display]
//! precision = 2          # decimals for lengths and areas
//! skip_empty = false
//! default_format = "terminal"
//! ```

mod core;
mod display;
mod loader;
mod report;

pub use self::core::CadtallyConfig;
pub use display::DisplayConfig;
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use report::{default_model_space, ReportConfig};
