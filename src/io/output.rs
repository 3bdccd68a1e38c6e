use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::config::DisplayConfig;
use crate::core::{MetricsReport, ResultSet};
use crate::formatting::FormattingConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Renders a finished report. Implementations present result sets and their
/// rows in the order given and never regroup them.
pub trait OutputWriter {
    fn write_report(&mut self, report: &MetricsReport) -> anyhow::Result<()>;
}

/// Build a writer for `format`, writing to `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    display: &DisplayConfig,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let (destination, formatting): (Box<dyn Write>, FormattingConfig) = match output {
        Some(path) => (
            Box::new(BufWriter::new(File::create(path)?)),
            formatting.for_file(),
        ),
        None => (Box::new(std::io::stdout()), formatting),
    };

    let writer: Box<dyn OutputWriter> = match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination, display.clone())),
        OutputFormat::Terminal => {
            colored::control::set_override(formatting.use_color());
            Box::new(TerminalWriter::new(
                destination,
                display.clone(),
                formatting,
            ))
        }
    };
    Ok(writer)
}

/// Result sets that should be rendered under `display`.
pub(crate) fn visible_sets<'a>(
    report: &'a MetricsReport,
    display: &'a DisplayConfig,
) -> impl Iterator<Item = &'a ResultSet> {
    report
        .iter()
        .filter(move |set| !(display.skip_empty && set.is_empty()))
}
