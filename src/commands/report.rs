//! `cadtally report`: load configuration, read model space, aggregate, render.
//!
//! The shell here is thin; aggregation lives in [`crate::metrics`] and
//! rendering in [`crate::io::writers`].

use crate::config::{self, CadtallyConfig, DisplayConfig};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, DrawingSource, FileSource, OutputFormat};
use crate::metrics::{self, Labels, Locale};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub drawing: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub locale: Option<Locale>,
    pub layout: Option<String>,
    pub precision: Option<usize>,
    pub skip_empty: bool,
    pub formatting: FormattingConfig,
}

/// Command-line options merged over the configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub format: OutputFormat,
    pub locale: Locale,
    pub layout: String,
    pub display: DisplayConfig,
}

/// Main entry point (thin wrapper).
pub fn handle_report(options: ReportOptions) -> Result<()> {
    let config = load_configuration(options.config.as_deref())?;
    let settings = resolve_settings(&options, &config);

    let objects = FileSource::new(&options.drawing)
        .model_space(&settings.layout)
        .with_context(|| format!("Failed to read drawing {}", options.drawing.display()))?;

    let report = metrics::aggregate_with(&objects, &Labels::for_locale(settings.locale))
        .context("Aggregation aborted")?;

    let mut writer = create_writer(
        settings.format,
        options.output.as_deref(),
        &settings.display,
        options.formatting,
    )?;
    writer.write_report(&report)?;

    if let Some(path) = &options.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}

fn load_configuration(path: Option<&Path>) -> Result<CadtallyConfig> {
    match path {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

/// Pure function: flags win over the file, the file over built-in defaults.
pub fn resolve_settings(options: &ReportOptions, config: &CadtallyConfig) -> ResolvedSettings {
    let report = config.report();
    let mut display = config.display();

    if options.precision.is_some() {
        display.precision = options.precision;
    }
    display.skip_empty |= options.skip_empty;

    ResolvedSettings {
        format: options.format.unwrap_or_else(|| display.format_or_default()),
        locale: options.locale.unwrap_or(report.locale),
        layout: options.layout.clone().unwrap_or(report.model_space),
        display,
    }
}
