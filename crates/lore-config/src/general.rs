//! General application configuration.

use lore_core::DEFAULT_ATTRIBUTION;
use serde::{Deserialize, Serialize};

/// Default HTTP timeout in seconds.
const fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    format!("lore/{}", env!("CARGO_PKG_VERSION"))
}

fn default_output_dir() -> String {
    String::from(".")
}

fn default_attribution() -> String {
    String::from(DEFAULT_ATTRIBUTION)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Per-request timeout for every outbound HTTP call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent to content services.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory that saved reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Closing line of every report.
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            output_dir: default_output_dir(),
            attribution: default_attribution(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.timeout_secs, 15);
        assert!(config.user_agent.starts_with("lore/"));
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.attribution, DEFAULT_ATTRIBUTION);
    }
}
