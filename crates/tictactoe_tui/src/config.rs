//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Settings for the interactive front end.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Where tracing output goes while the terminal is in raw mode.
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Colours for marks and highlights.
    theme: Theme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            theme: Theme::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.theme.palette()?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] if it exists,
    /// otherwise defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Colour names as written in the config file.
///
/// Accepts anything [`ratatui::style::Color`] parses: names such as
/// `"lightblue"`, indexed colours such as `"42"`, or `"#rrggbb"`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Colour of X marks.
    x_color: String,
    /// Colour of O marks.
    o_color: String,
    /// Background of the winning line.
    highlight_color: String,
    /// Background of the board cursor.
    cursor_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            highlight_color: "yellow".to_string(),
            cursor_color: "white".to_string(),
        }
    }
}

impl Theme {
    /// Parses every colour.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            highlight: parse_color("highlight_color", &self.highlight_color)?,
            cursor: parse_color("cursor_color", &self.cursor_color)?,
        })
    }
}

/// Errors carry the location of the [`Theme::palette`] line naming the field.
#[track_caller]
fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    match Color::from_str(value) {
        Ok(color) => Ok(color),
        Err(_) => Err(ConfigError::new(format!(
            "Invalid colour {:?} for {}",
            value, field
        ))),
    }
}

/// Resolved theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Winning line background.
    pub highlight: Color,
    /// Cursor background.
    pub cursor: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            highlight: Color::Yellow,
            cursor: Color::White,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
