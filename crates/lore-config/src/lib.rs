//! # lore-config
//!
//! Layered configuration loading for lore using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LORE_*` prefix, `__` as separator)
//! 2. Project-level `.lore/config.toml`
//! 3. User-level `~/.config/lore/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LORE_YOUTUBE__API_KEY` -> `youtube.api_key`,
//! `LORE_COHERE__MODEL` -> `cohere.model`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lore_config::LoreConfig;
//!
//! let config = LoreConfig::load_with_dotenv().expect("config");
//!
//! if !config.youtube.is_configured() {
//!     println!("video search will fall back to its placeholder");
//! }
//! ```

mod cohere;
mod error;
mod general;
mod scholar;
mod wikipedia;
mod youtube;

pub use cohere::CohereConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use scholar::ScholarConfig;
pub use wikipedia::WikipediaConfig;
pub use youtube::YouTubeConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var prefix shared by every config key.
pub const ENV_PREFIX: &str = "LORE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoreConfig {
    #[serde(default)]
    pub wikipedia: WikipediaConfig,
    #[serde(default)]
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub scholar: ScholarConfig,
    #[serde(default)]
    pub cohere: CohereConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LoreConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`LoreConfig::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Load configuration with an explicit TOML file layered above the
    /// discovered files. Environment variables still win.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, a source fails to
    /// parse, or a value is invalid.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::InvalidValue {
                field: "--config".to_string(),
                reason: format!("{} is not a file", path.display()),
            });
        }

        let config: Self = Self::figment()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lore/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make every request fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout or zero sentence count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.wikipedia.sentences == 0 {
            return Err(ConfigError::InvalidValue {
                field: "wikipedia.sentences".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// A copy safe to print: API keys replaced by a mask.
    #[must_use]
    pub fn masked(&self) -> Self {
        let mut copy = self.clone();
        copy.youtube.api_key = mask(&copy.youtube.api_key);
        copy.scholar.api_key = mask(&copy.scholar.api_key);
        copy.cohere.api_key = mask(&copy.cohere.api_key);
        copy
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lore").join("config.toml"))
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        String::from("********")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LoreConfig::default();
        assert!(!config.youtube.is_configured());
        assert!(!config.cohere.is_configured());
        assert!(!config.scholar.has_api_key());
        assert_eq!(config.wikipedia.sentences, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: LoreConfig = LoreConfig::figment().extract()?;
            assert!(!config.youtube.is_configured());
            assert_eq!(config.general.timeout_secs, 15);
            Ok(())
        });
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let mut config = LoreConfig::default();
        config.general.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.timeout_secs"));
    }

    #[test]
    fn masked_hides_keys_only_when_set() {
        let mut config = LoreConfig::default();
        config.cohere.api_key = "co-secret".into();
        let masked = config.masked();
        assert_eq!(masked.cohere.api_key, "********");
        assert!(masked.youtube.api_key.is_empty());
        assert_eq!(config.cohere.api_key, "co-secret");
    }
}
