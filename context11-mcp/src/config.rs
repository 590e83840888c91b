//! Process configuration, read once from the environment at startup.

use crate::error::ConfigError;
use context11_client::{ApiContext, DEFAULT_API_URL};
use secrecy::{ExposeSecret, SecretString};
use std::net::SocketAddr;

pub const ENV_API_KEY: &str = "CONTEXT11_API_KEY";
pub const ENV_API_URL: &str = "CONTEXT11_URL";
pub const ENV_PORT: &str = "PORT";
pub const ENV_BIND: &str = "CONTEXT11_BIND";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Read a variable, treating an empty value as unset.
fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn validate_api_url(api_url: &str) -> Result<(), ConfigError> {
    if api_url.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: ENV_API_URL,
            reason: "must not be empty".to_string(),
        });
    }
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
        return Err(ConfigError::InvalidValue {
            field: ENV_API_URL,
            reason: format!("'{}' must start with http:// or https://", api_url),
        });
    }
    Ok(())
}

/// Configuration for the stdio binary: one credential for the whole process.
#[derive(Clone)]
pub struct StdioConfig {
    pub api_key: SecretString,
    pub api_url: String,
}

impl StdioConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env)
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = non_empty(&lookup, ENV_API_KEY)
            .ok_or(ConfigError::MissingRequired { field: ENV_API_KEY })?;
        let api_url =
            non_empty(&lookup, ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let config = Self {
            api_key: SecretString::new(api_key.into()),
            api_url,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::MissingRequired { field: ENV_API_KEY });
        }
        validate_api_url(&self.api_url)
    }

    pub fn api_context(&self) -> ApiContext {
        ApiContext::new(self.api_key.expose_secret(), self.api_url.clone())
    }
}

impl std::fmt::Debug for StdioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdioConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Configuration for the HTTP binary. Credentials arrive per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub api_url: String,
    pub bind: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match non_empty(&lookup, ENV_PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                field: ENV_PORT,
                reason: format!("'{}': {}", raw, e),
            })?,
            None => defaults.port,
        };

        let config = Self {
            api_url: non_empty(&lookup, ENV_API_URL).unwrap_or(defaults.api_url),
            bind: non_empty(&lookup, ENV_BIND).unwrap_or(defaults.bind),
            port,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_api_url(&self.api_url)?;
        self.bind_addr().map(|_| ())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                field: ENV_BIND,
                reason: format!("'{}': {}", self.bind, e),
            })
    }
}
