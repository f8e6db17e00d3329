//! CLI configuration loaded from environment variables

use encore_shared_config::{parse_env, CommonConfig, ConfigResult};

/// Encore CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with the client crates
    pub common: CommonConfig,

    /// How many top artists to base the taste profile on
    pub top_artists_limit: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            common: CommonConfig::from_env()?,
            top_artists_limit: parse_env("TOP_ARTISTS_LIMIT", 20)?,
        })
    }
}
