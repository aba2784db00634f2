//! Conversion options and TOML presets
//!
//! The binarization threshold is fixed at 127 by default for
//! compatibility with existing output, but it is exposed here so
//! embedders can tune it (or load a saved preset from a TOML file).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default luma threshold on the 0-255 scale. Values strictly above
/// this become foreground.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Errors that can occur when loading or parsing a config preset
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options for the conversion pipeline
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Luma threshold: pixels strictly above this are foreground.
    pub threshold: u8,

    /// Swap foreground and background after thresholding.
    pub invert: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            invert: false,
        }
    }
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the binarization threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable foreground/background inversion
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Load a preset from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a preset from a TOML string
    ///
    /// Missing keys fall back to their defaults, so a preset may set
    /// only the options it cares about:
    ///
    /// ```toml
    /// threshold = 160
    /// ```
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.threshold, 127);
        assert!(!config.invert);
    }

    #[test]
    fn test_builder_pattern() {
        let config = Config::new().with_threshold(200).with_invert(true);
        assert_eq!(config.threshold, 200);
        assert!(config.invert);
    }

    #[test]
    fn test_parse_full_preset() {
        let config = Config::from_str("threshold = 64\ninvert = true\n").expect("Should parse");
        assert_eq!(config.threshold, 64);
        assert!(config.invert);
    }

    #[test]
    fn test_parse_partial_preset_uses_defaults() {
        let config = Config::from_str("invert = true\n").expect("Should parse");
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert!(config.invert);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Config::from_str("threshold = {{{{");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
