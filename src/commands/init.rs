use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# cadtally configuration

[report]
# Language of captions and column headers: "en" or "ru"
locale = "en"
# Layout whose objects are aggregated
model_space = "Model"

[display]
# Decimal places for lengths and areas; omit for the shortest exact form
# precision = 2
skip_empty = false
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = init_config_at(Path::new("."), force)?;
    println!("Created {} configuration file", config_path.display());
    Ok(())
}

/// Write the default configuration into `dir`, returning the file path.
pub fn init_config_at(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    log::debug!("Wrote default config to {}", config_path.display());
    Ok(config_path)
}
