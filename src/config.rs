//! API client configuration with environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_SUCCESS_TTL_SECS: u64 = 5;
pub const DEFAULT_REGISTER_REDIRECT_SECS: u64 = 4;

/// Configuration values that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base for auth, users, stock, entry and exit endpoints.
    pub base_url: String,
    /// Base for `/api/products`. Kept separate because deployments have
    /// served products from a different port.
    pub products_base_url: String,
    /// How long a success message stays visible.
    pub success_message_ttl: Duration,
    /// Delay between a successful registration and the return to login.
    pub register_redirect_delay: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            products_base_url: DEFAULT_BASE_URL.to_owned(),
            success_message_ttl: Duration::from_secs(DEFAULT_SUCCESS_TTL_SECS),
            register_redirect_delay: Duration::from_secs(DEFAULT_REGISTER_REDIRECT_SECS),
        }
    }
}

impl ApiConfig {
    /// Config for a single base URL serving every endpoint.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = normalize_base(base_url);
        Self { base_url: base.clone(), products_base_url: base, ..Self::default() }
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `STOCK_API_URL`: default `http://localhost:4000`
    /// - `STOCK_PRODUCTS_API_URL`: defaults to `STOCK_API_URL`
    /// - `STOCK_SUCCESS_TTL_SECS`: default 5
    /// - `STOCK_REGISTER_REDIRECT_SECS`: default 4
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a duration variable is set
    /// but is not a whole number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from compile-time environment, for the WASM build where
    /// there is no process environment.
    ///
    /// # Errors
    ///
    /// Same as [`ApiConfig::from_env`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "STOCK_API_URL" => option_env!("STOCK_API_URL"),
                "STOCK_PRODUCTS_API_URL" => option_env!("STOCK_PRODUCTS_API_URL"),
                "STOCK_SUCCESS_TTL_SECS" => option_env!("STOCK_SUCCESS_TTL_SECS"),
                "STOCK_REGISTER_REDIRECT_SECS" => option_env!("STOCK_REGISTER_REDIRECT_SECS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("STOCK_API_URL").map_or_else(|| DEFAULT_BASE_URL.to_owned(), |v| normalize_base(&v));
        let products_base_url = lookup("STOCK_PRODUCTS_API_URL").map_or_else(|| base_url.clone(), |v| normalize_base(&v));
        let success_secs = parse_secs(&lookup, "STOCK_SUCCESS_TTL_SECS", DEFAULT_SUCCESS_TTL_SECS)?;
        let redirect_secs = parse_secs(&lookup, "STOCK_REGISTER_REDIRECT_SECS", DEFAULT_REGISTER_REDIRECT_SECS)?;

        Ok(Self {
            base_url,
            products_base_url,
            success_message_ttl: Duration::from_secs(success_secs),
            register_redirect_delay: Duration::from_secs(redirect_secs),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn products_url(&self, path: &str) -> String {
        format!("{}{path}", self.products_base_url)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_secs<F>(lookup: &F, var: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}
