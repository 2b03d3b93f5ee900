//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PREDICT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_PREDICT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?} is not a valid {expected}")]
    Invalid { var: &'static str, value: String, expected: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the prediction backend, without a trailing `/`.
    /// `None` disables forwarding.
    pub upstream_url: Option<String>,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PREDICT_UPSTREAM_URL`: prediction backend base URL; unset or blank
    ///   leaves `/predict` answering 503
    /// - `PREDICT_REQUEST_TIMEOUT_SECS`: default 120
    /// - `PREDICT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT, "port number")?;
        let upstream_url = std::env::var("PREDICT_UPSTREAM_URL")
            .ok()
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty());
        let timeouts = UpstreamTimeouts {
            request_secs: env_parse(
                "PREDICT_REQUEST_TIMEOUT_SECS",
                DEFAULT_PREDICT_REQUEST_TIMEOUT_SECS,
                "number of seconds",
            )?,
            connect_secs: env_parse(
                "PREDICT_CONNECT_TIMEOUT_SECS",
                DEFAULT_PREDICT_CONNECT_TIMEOUT_SECS,
                "number of seconds",
            )?,
        };

        Ok(Self { port, upstream_url, timeouts })
    }
}

fn env_parse<T: FromStr>(var: &'static str, default: T, expected: &'static str) -> Result<T, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(default);
    };
    let parsed = raw.trim().parse::<T>();
    parsed.map_err(|_| ConfigError::Invalid { var, value: raw, expected })
}
