use pokerchat_core::Layout;
use pokerchat_ui::IconStyle;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// Root CLI configuration loaded from YAML. Every block is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CliConfig {
    #[serde(default)]
    pub icons: IconsConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: CliConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.icons.validate()?;
        self.layout.validate()?;
        self.logging.normalize();
        self.logging.validate()?;
        Ok(())
    }
}

/// Where icons come from and how they are written.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct IconsConfig {
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    #[serde(default)]
    pub style: IconStyle,
}

impl IconsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(manifest) = &self.manifest {
            if manifest.as_os_str().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: "icons.manifest".to_string(),
                    message: "path must not be empty".to_string(),
                });
            }
        }

        if let IconStyle::Mention { name } = &self.style {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ValidationError::InvalidField {
                    field: "icons.style.name".to_string(),
                    message: format!(
                        "emoji name '{name}' may only contain alphanumeric characters or '_'"
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Default strip layout: a named preset, optionally adjusted.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub split: Option<usize>,
    #[serde(default)]
    pub min_slots: Option<usize>,
}

impl LayoutConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(preset) = &self.preset {
            if Layout::preset(preset).is_none() {
                return Err(ValidationError::InvalidField {
                    field: "layout.preset".to_string(),
                    message: format!(
                        "unknown preset '{preset}' (expected flat, hole, board or showdown)"
                    ),
                });
            }
        }
        Ok(())
    }

    /// The preset (flat when unset) with `split`/`min_slots` applied over it.
    pub fn resolve(&self) -> Layout {
        let mut layout = self
            .preset
            .as_deref()
            .and_then(Layout::preset)
            .unwrap_or(Layout::FLAT);
        if let Some(split) = self.split {
            layout = layout.with_split(split);
        }
        if let Some(min_slots) = self.min_slots {
            layout = layout.with_min_slots(min_slots);
        }
        layout
    }
}

/// Logging configuration defaults to plain-text `warn` output.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown level '{}'", self.tracing_level),
            });
        }
        Ok(())
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "warn".to_string()
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
