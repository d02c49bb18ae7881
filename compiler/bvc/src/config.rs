//! Evaluation settings.
//!
//! Defaults are overridden by the environment, which is in turn overridden by
//! command-line flags.

use bv_eval::CacheMode;

use crate::{Error, Result};

/// Environment variable selecting the reduction cache: `on` or `off`.
pub const CACHE_ENV: &str = "BV_CACHE";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    pub cache: CacheMode,
}

impl EvalConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = EvalConfig::default();
        if let Some(value) = lookup(CACHE_ENV) {
            config.cache = parse_cache_mode(&value)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_cache(mut self, cache: CacheMode) -> Self {
        self.cache = cache;
        self
    }
}

/// Parse a cache setting. Matching is case-insensitive.
pub fn parse_cache_mode(value: &str) -> Result<CacheMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "1" | "true" | "enabled" => Ok(CacheMode::Enabled),
        "off" | "0" | "false" | "disabled" => Ok(CacheMode::Disabled),
        _ => Err(Error::Config {
            name: CACHE_ENV,
            value: value.to_string(),
            expected: "on, off",
        }),
    }
}
