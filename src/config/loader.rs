use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CadtallyConfig;
use crate::core::Error;

pub const CONFIG_FILE_NAME: &str = ".cadtally.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<CadtallyConfig, String> {
    let config = toml::from_str::<CadtallyConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(report) = &config.report {
        if report.model_space.trim().is_empty() {
            return Err("report.model_space must not be empty".to_string());
        }
    }
    if let Some(precision) = config.display.as_ref().and_then(|d| d.precision) {
        if precision > 12 {
            return Err(format!(
                "display.precision must be at most 12, got {}",
                precision
            ));
        }
    }

    Ok(config)
}

/// Load an explicitly requested config file. Unlike discovery, any failure
/// is fatal.
pub fn load_config_from(path: &Path) -> Result<CadtallyConfig, Error> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents).map_err(Error::Configuration)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a specific path, warning on anything but absence
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CadtallyConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: PathBuf) -> CadtallyConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CadtallyConfig::default()
        })
}

pub fn load_config() -> CadtallyConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CadtallyConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::OutputFormat;
    use crate::metrics::Locale;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(
            r#"
[report]
locale = "ru"
model_space = "Модель"

[display]
precision = 2
skip_empty = true
default_format = "markdown"
"#,
        )
        .unwrap();

        let report = config.report();
        assert_eq!(report.locale, Locale::Ru);
        assert_eq!(report.model_space, "Модель");
        let display = config.display();
        assert_eq!(display.precision, Some(2));
        assert!(display.skip_empty);
        assert_eq!(display.format_or_default(), OutputFormat::Markdown);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config.report().model_space, "Model");
        assert_eq!(config.report().locale, Locale::En);
        assert_eq!(config.display().precision, None);
        assert_eq!(config.display().format_or_default(), OutputFormat::Terminal);
    }

    #[test]
    fn test_rejects_blank_model_space() {
        let err = parse_and_validate_config("[report]\nmodel_space = \"  \"\n").unwrap_err();
        assert!(err.contains("model_space"));
    }

    #[test]
    fn test_rejects_unknown_locale() {
        assert!(parse_and_validate_config("[report]\nlocale = \"de\"\n").is_err());
    }

    #[test]
    fn test_directory_ancestors_bounded() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("drawings").join("2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[display]\nprecision = 3\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.display().precision, Some(3));
    }

    #[test]
    fn test_load_config_from_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
