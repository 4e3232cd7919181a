//! Front-end settings loaded from TOML.
//!
//! - Defaults are embedded via `include_str!("default_settings.toml")`
//! - `Settings::load(None)` reads `<config_dir>/devanagari-pin/settings.toml` when present
//! - Every section and key is optional in a user file; missing keys keep their defaults
//!
//! The character code table is compiled in and never read from here.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(SettingsError::InvalidValue {
                field: "output.format".to_string(),
                reason: format!("expected \"text\" or \"json\", got {other:?}"),
            }),
        }
    }
}

/// Which PIN, if any, to place on the clipboard after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyTarget {
    None,
    Pin4,
    Pin6,
}

impl FromStr for CopyTarget {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(CopyTarget::None),
            "pin4" | "4" => Ok(CopyTarget::Pin4),
            "pin6" | "6" => Ok(CopyTarget::Pin6),
            other => Err(SettingsError::InvalidValue {
                field: "clipboard.copy".to_string(),
                reason: format!("expected \"none\", \"pin4\" or \"pin6\", got {other:?}"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub output: OutputSettings,
    pub logging: LoggingSettings,
    pub clipboard: ClipboardSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub breakdown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClipboardSettings {
    pub copy: CopyTarget,
}

/// User files may leave out anything; these mirror `Settings` with every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialSettings {
    #[serde(default)]
    output: PartialOutput,
    #[serde(default)]
    logging: PartialLogging,
    #[serde(default)]
    clipboard: PartialClipboard,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialOutput {
    format: Option<OutputFormat>,
    breakdown: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialLogging {
    filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialClipboard {
    copy: Option<CopyTarget>,
}

impl Default for Settings {
    fn default() -> Self {
        // The embedded file is covered by `test_embedded_defaults_parse`.
        toml::from_str(DEFAULT_SETTINGS_TOML).unwrap_or(Settings {
            output: OutputSettings {
                format: OutputFormat::Text,
                breakdown: true,
            },
            logging: LoggingSettings {
                filter: "warn".to_string(),
            },
            clipboard: ClipboardSettings {
                copy: CopyTarget::None,
            },
        })
    }
}

impl Settings {
    /// Loads settings from `path`, or from the per-user default location.
    /// A missing per-user file falls back to the embedded defaults; a missing
    /// explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Settings, SettingsError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_path().filter(|p| p.is_file()) {
                Some(p) => p,
                None => return Ok(Settings::default()),
            },
        };
        let content = fs::read_to_string(&path).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading settings");
        parse_settings_toml(&content)
    }
}

/// `<config_dir>/devanagari-pin/settings.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("devanagari-pin");
    path.push("settings.toml");
    Some(path)
}

/// Parses a (possibly partial) settings file layered over the defaults.
pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let partial: PartialSettings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    let mut s = Settings::default();
    if let Some(format) = partial.output.format {
        s.output.format = format;
    }
    if let Some(breakdown) = partial.output.breakdown {
        s.output.breakdown = breakdown;
    }
    if let Some(filter) = partial.logging.filter {
        s.logging.filter = filter;
    }
    if let Some(copy) = partial.clipboard.copy {
        s.clipboard.copy = copy;
    }
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.logging.filter.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "logging.filter".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
