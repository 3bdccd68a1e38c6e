use crate::config::DisplayConfig;
use crate::core::{MetricsReport, ResultSet};
use crate::formatting::FormattingConfig;
use crate::io::output::{visible_sets, OutputWriter};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{CellAlignment, Table};
use std::io::Write;

/// Caption line followed by a bordered two-column table per category.
pub struct TerminalWriter<W: Write> {
    writer: W,
    display: DisplayConfig,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, display: DisplayConfig, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            display,
            formatting,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_set(&mut self, set: &ResultSet) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatting.caption(&set.caption))?;
        writeln!(self.writer, "{}", build_table(set, &self.display, &self.formatting))?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &MetricsReport) -> anyhow::Result<()> {
        let display = self.display.clone();
        let mut sets = visible_sets(report, &display).peekable();
        while let Some(set) = sets.next() {
            self.write_set(set)?;
            if sets.peek().is_some() {
                writeln!(self.writer)?;
            }
        }

        if report.stats.skipped > 0 {
            let note = format!(
                "{} of {} objects had no metric and were skipped",
                report.stats.skipped, report.stats.scanned
            );
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", self.formatting.dim(&note))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn build_table(set: &ResultSet, display: &DisplayConfig, formatting: &FormattingConfig) -> Table {
    let mut table = Table::new();
    table.load_preset(if formatting.use_unicode() {
        UTF8_FULL
    } else {
        ASCII_FULL
    });
    table.set_header(vec![set.headers.key.clone(), set.headers.value.clone()]);
    for row in &set.rows {
        table.add_row(vec![row.key.clone(), row.total.format(display.precision)]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}
