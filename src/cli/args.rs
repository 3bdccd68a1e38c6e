use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use crate::metrics::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cadtally")]
#[command(about = "Block counts, line lengths, text and hatch totals of a drawing's model space", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate model-space metrics of a drawing and render them as tables
    Report {
        /// Drawing file (JSON or YAML)
        drawing: PathBuf,

        /// Output format (defaults to display.default_format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .cadtally.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Language of captions and column headers
        #[arg(long, value_enum, env = "CADTALLY_LOCALE")]
        locale: Option<Locale>,

        /// Name of the model-space layout to aggregate
        #[arg(long = "layout")]
        layout: Option<String>,

        /// Decimal places for lengths and areas
        #[arg(long)]
        precision: Option<usize>,

        /// Omit categories that have no rows
        #[arg(long = "skip-empty")]
        skip_empty: bool,

        /// Plain output: no colors, ASCII table borders
        #[arg(long)]
        plain: bool,

        /// When to color terminal output (overrides NO_COLOR and CLICOLOR)
        #[arg(long, value_enum, conflicts_with = "plain")]
        color: Option<ColorMode>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_flags() {
        let cli = Cli::parse_from([
            "cadtally", "report", "plan.json", "-f", "markdown", "--locale", "ru", "--layout",
            "Модель", "--precision", "2", "--skip-empty", "--color", "never", "-vv",
        ]);
        match cli.command {
            Commands::Report {
                drawing,
                format,
                locale,
                layout,
                precision,
                skip_empty,
                color,
                verbosity,
                ..
            } => {
                assert_eq!(drawing, PathBuf::from("plan.json"));
                assert_eq!(format, Some(OutputFormat::Markdown));
                assert_eq!(locale, Some(Locale::Ru));
                assert_eq!(layout.as_deref(), Some("Модель"));
                assert_eq!(precision, Some(2));
                assert!(skip_empty);
                assert_eq!(color, Some(ColorMode::Never));
                assert_eq!(verbosity, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_plain_conflicts_with_color() {
        let result = Cli::try_parse_from([
            "cadtally", "report", "plan.json", "--plain", "--color", "always",
        ]);
        assert!(result.is_err());
    }
}
