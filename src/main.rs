use anyhow::Result;
use cadtally::cli::{init_logging, Cli, Commands};
use cadtally::commands::ReportOptions;
use cadtally::formatting::{ColorMode, FormattingConfig};
use clap::Parser;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            drawing,
            format,
            output,
            config,
            locale,
            layout,
            precision,
            skip_empty,
            plain,
            color,
            verbosity,
        } => {
            init_logging(verbosity);
            let options = ReportOptions {
                drawing,
                format,
                output,
                config,
                locale,
                layout,
                precision,
                skip_empty,
                formatting: create_formatting_config(plain, color),
            };
            cadtally::commands::handle_report(options)
        }
        Commands::Init { force } => {
            init_logging(0);
            cadtally::commands::init_config(force)
        }
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool, color: Option<ColorMode>) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env().with_color(color)
    }
}
