//! Codec configuration.
//!
//! [`CodecConfig`] holds the two knobs a caller can turn: how much of an
//! ambiguous disc reading to report, and how far to widen it. With the
//! `config` feature it can be read from a TOML file:
//!
//! ```toml
//! sensitivity = 2
//! disc-mode = "all-matches"
//! ```

pub mod feature;

pub use feature::ConfigurableFeature;

use crate::codec::DiscMatch;
use crate::error::Result;
use crate::sensitivity::SensitivityRadius;

/// Identifier of the sensitivity feature.
pub const SENSITIVITY_FEATURE: &str = "disc-sensitivity";
/// Identifier of the disc match mode feature.
pub const DISC_MODE_FEATURE: &str = "disc-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "config",
    serde(default, deny_unknown_fields, rename_all = "kebab-case")
)]
pub struct CodecConfig {
    pub sensitivity: SensitivityRadius,
    pub disc_mode: DiscMatch,
}

impl CodecConfig {
    /// The sensitivity as a named feature whose default is the built-in one.
    pub fn sensitivity_feature(&self) -> Result<ConfigurableFeature<SensitivityRadius>> {
        let mut feature =
            ConfigurableFeature::new(SENSITIVITY_FEATURE, SensitivityRadius::default())?;
        feature.set(self.sensitivity);
        Ok(feature)
    }

    /// The disc match mode as a named feature whose default is the built-in one.
    pub fn disc_mode_feature(&self) -> Result<ConfigurableFeature<DiscMatch>> {
        let mut feature = ConfigurableFeature::new(DISC_MODE_FEATURE, DiscMatch::default())?;
        feature.set(self.disc_mode);
        Ok(feature)
    }

    /// Rebuild a config from the current values of its features.
    pub fn from_features(
        sensitivity: &ConfigurableFeature<SensitivityRadius>,
        disc_mode: &ConfigurableFeature<DiscMatch>,
    ) -> Self {
        Self {
            sensitivity: *sensitivity.value(),
            disc_mode: *disc_mode.value(),
        }
    }
}

#[cfg(feature = "config")]
mod file {
    use super::CodecConfig;
    use crate::error::{HandctlError, Result};
    use std::path::{Path, PathBuf};

    const APP_DIR: &str = "handctl";
    const FILE_NAME: &str = "config.toml";

    impl CodecConfig {
        /// Parse a config from TOML text. Missing keys take their defaults.
        pub fn from_toml_str(text: &str) -> Result<Self> {
            toml::from_str(text).map_err(|e| HandctlError::config(e.to_string()))
        }

        pub fn to_toml_string(&self) -> Result<String> {
            toml::to_string(self).map_err(|e| HandctlError::config(e.to_string()))
        }

        /// Load a config file that must exist.
        pub fn load_from_path(path: &Path) -> Result<Self> {
            let text = std::fs::read_to_string(path).map_err(|e| {
                HandctlError::file_error(format!("Cannot read {}", path.display()), e)
            })?;
            log::debug!("loading config from {}", path.display());
            Self::from_toml_str(&text)
        }

        /// `<config dir>/handctl/config.toml`, when the platform has one.
        pub fn default_path() -> Option<PathBuf> {
            dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        }

        /// Load the default config file, falling back to defaults when it
        /// does not exist.
        pub fn load_default() -> Result<Self> {
            match Self::default_path() {
                Some(path) if path.is_file() => Self::load_from_path(&path),
                _ => {
                    log::debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}
