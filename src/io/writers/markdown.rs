use crate::config::DisplayConfig;
use crate::core::{MetricsReport, ResultSet};
use crate::io::output::{visible_sets, OutputWriter};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    display: DisplayConfig,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, display: DisplayConfig) -> Self {
        Self { writer, display }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_set(&mut self, set: &ResultSet) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", set.caption)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| {} | {} |",
            escape_cell(&set.headers.key),
            escape_cell(&set.headers.value)
        )?;
        writeln!(self.writer, "|---|---:|")?;
        for row in &set.rows {
            writeln!(
                self.writer,
                "| {} | {} |",
                escape_cell(&row.key),
                row.total.format(self.display.precision)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &MetricsReport) -> anyhow::Result<()> {
        let display = self.display.clone();
        visible_sets(report, &display).try_for_each(|set| self.write_set(set))?;
        self.writer.flush()?;
        Ok(())
    }
}

// Layer and block names may contain pipes.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DrawingObject;
    use crate::metrics::aggregate;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn render(objects: &[DrawingObject], display: DisplayConfig) -> String {
        let report = aggregate(objects).unwrap();
        let mut writer = MarkdownWriter::new(Vec::new(), display);
        writer.write_report(&report).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_markdown_tables_in_report_order() {
        let objects = vec![
            DrawingObject::block_reference("Window"),
            DrawingObject::block_reference("Door"),
            DrawingObject::polyline("Walls", 1.75),
        ];
        let display = DisplayConfig {
            precision: Some(1),
            skip_empty: true,
            default_format: None,
        };

        assert_eq!(
            render(&objects, display),
            indoc! {"
                ## Count of occurrences of each block type

                | Block type | Count |
                |---|---:|
                | Door | 1 |
                | Window | 1 |

                ## Total length of all lines, sorted by layer

                | Layer | Length |
                |---|---:|
                | Walls | 1.8 |

            "}
        );
    }

    #[test]
    fn test_empty_sets_rendered_as_header_only_tables() {
        let text = render(&[], DisplayConfig::default());
        assert_eq!(text.matches("## ").count(), 4);
        assert!(text.contains("| Layer | Area |\n|---|---:|\n\n"));
    }

    #[test]
    fn test_pipes_in_names_are_escaped() {
        let text = render(
            &[DrawingObject::block_reference("A|B")],
            DisplayConfig::default(),
        );
        assert!(text.contains("| A\\|B | 1 |"));
    }
}
