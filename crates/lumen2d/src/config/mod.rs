//! Configuration system
//!
//! File-backed startup configuration for the lighting pipeline. Formats
//! are picked by extension: `.toml` and `.ron` are supported, and the
//! extension is validated before any I/O happens.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::camera::Projections;
use crate::foundation::math::Mat4;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error in {path}: {reason}")]
    Parse {
        /// File the parse failed on
        path: String,
        /// Parser message
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {extension:?}")]
    UnsupportedFormat {
        /// Extension the path carried, if any
        extension: Option<String>,
    },
}

enum Format {
    Toml,
    Ron,
}

fn format_for(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("toml") => Ok(Format::Toml),
        Some("ron") => Ok(Format::Ron),
        other => Err(ConfigError::UnsupportedFormat {
            extension: other.map(String::from),
        }),
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedFormat`] for other extensions,
    /// [`ConfigError::Io`] when the file cannot be read, and
    /// [`ConfigError::Parse`] when its contents do not deserialize.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = format_for(path)?;
        let contents = std::fs::read_to_string(path)?;
        let parse_error = |reason: String| ConfigError::Parse {
            path: path.display().to_string(),
            reason,
        };

        match format {
            Format::Toml => toml::from_str(&contents).map_err(|e| parse_error(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedFormat`] for other extensions,
    /// [`ConfigError::Serialize`] when the value does not serialize, and
    /// [`ConfigError::Io`] when the file cannot be written.
    fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = match format_for(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Startup projection state for a camera provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Projection modes enabled at startup
    pub projections: Projections,

    /// Custom matrix applied while [`Projections::CUSTOM`] is enabled
    pub custom: Mat4,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            projections: Projections::default(),
            custom: Mat4::identity(),
        }
    }
}

impl Config for LightingConfig {}
