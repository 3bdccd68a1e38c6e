//! CLI command implementations.
//!
//! Available commands:
//! - **report**: Aggregate model-space metrics and render the four tables
//! - **init**: Initialize a new `.cadtally.toml` configuration file

pub mod init;
pub mod report;

pub use init::init_config;
pub use report::{handle_report, ReportOptions};
