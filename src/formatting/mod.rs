use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

/// Characters used to draw table borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Auto,    // Box drawing on a terminal, ASCII otherwise
    Unicode, // Always box drawing
    Ascii,   // Always `+-|`
}

impl Charset {
    pub fn should_use_unicode(&self) -> bool {
        match self {
            Self::Unicode => true,
            Self::Ascii => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub charset: Charset,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            charset: Charset::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (ASCII-only, no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            charset: Charset::Ascii,
        }
    }

    /// Formatting for output that does not go to a terminal. Files get box
    /// drawing unless ASCII was asked for, whatever stdout is attached to.
    pub fn for_file(self) -> Self {
        let charset = match self.charset {
            Charset::Auto => Charset::Unicode,
            fixed => fixed,
        };
        Self {
            color: ColorMode::Never,
            charset,
        }
    }

    /// Apply an explicit `--color` choice over the environment.
    pub fn with_color(self, color: Option<ColorMode>) -> Self {
        match color {
            Some(color) => Self { color, ..self },
            None => self,
        }
    }

    pub fn use_color(&self) -> bool {
        self.color.should_use_color()
    }

    pub fn use_unicode(&self) -> bool {
        self.charset.should_use_unicode()
    }

    /// Caption style for terminal tables.
    pub fn caption(&self, text: &str) -> String {
        if self.use_color() {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.use_color() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}
