//! Generator configuration.
//!
//! Handles loading and validating `config.toml`. All values have stock
//! defaults reproducing the original deployment, so a config file is only
//! needed to point the generator at a different image server or
//! institution.
//!
//! ## Configuration options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Image API service root. Must end with a slash; image identifiers are
//! # appended directly.
//! image_base_uri = "https://iiif.lib.umd.edu/image/iiif/2/"
//!
//! # Institutional logo referenced from every manifest.
//! logo_uri = "https://www.lib.umd.edu/images/wrapper/liblogo.png"
//!
//! # IIIF size parameter for the manifest thumbnail.
//! thumbnail_size = "80,100"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `config.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Image API service root, trailing-slash-terminated.
    pub image_base_uri: String,
    /// Institutional logo `@id` emitted in every manifest.
    pub logo_uri: String,
    /// IIIF `size` parameter for the manifest thumbnail.
    pub thumbnail_size: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            image_base_uri: "https://iiif.lib.umd.edu/image/iiif/2/".to_string(),
            logo_uri: "https://www.lib.umd.edu/images/wrapper/liblogo.png".to_string(),
            thumbnail_size: "80,100".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.image_base_uri.ends_with('/') {
            return Err(ConfigError::Validation(
                "image_base_uri must end with '/'".into(),
            ));
        }
        if self.logo_uri.is_empty() {
            return Err(ConfigError::Validation("logo_uri must not be empty".into()));
        }
        if self.thumbnail_size.is_empty() {
            return Err(ConfigError::Validation(
                "thumbnail_size must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    if !path.exists() {
        return Ok(GeneratorConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: GeneratorConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Render a documented stock `config.toml` for the `gen-config` subcommand.
pub fn stock_config_toml() -> String {
    let defaults = GeneratorConfig::default();
    format!(
        r#"# iiif-folio configuration
# All options are optional - defaults shown below.

# Image API service root. Must end with a slash; image identifiers are
# appended directly.
image_base_uri = "{}"

# Institutional logo referenced from every manifest.
logo_uri = "{}"

# IIIF size parameter for the manifest thumbnail (width,height).
thumbnail_size = "{}"
"#,
        defaults.image_base_uri, defaults.logo_uri, defaults.thumbnail_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config.thumbnail_size, "80,100");
        assert!(config.image_base_uri.ends_with('/'));
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "image_base_uri = \"https://img.example.org/\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.image_base_uri, "https://img.example.org/");
        assert_eq!(config.thumbnail_size, "80,100");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "image_base = \"typo\"\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn missing_trailing_slash_fails_validation() {
        let config = GeneratorConfig {
            image_base_uri: "https://img.example.org".into(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_parses_back_to_defaults() {
        let config: GeneratorConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(config.logo_uri, GeneratorConfig::default().logo_uri);
    }
}
