//! Setup and initialization functions for CLI

use log::LevelFilter;

/// Map `-v` repetitions to a log level; warnings are always shown.
pub fn log_level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger. `RUST_LOG`, when set, takes precedence over
/// the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level_for(verbosity));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None).target(env_logger::Target::Stderr);

    if let Err(e) = builder.try_init() {
        // Already initialized - this is fine, just ignore
        eprintln!("Note: Logger already initialized: {}", e);
    }
}
