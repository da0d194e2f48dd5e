use std::fmt;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const PORT_ENV: &str = "PORT";
pub const HOST_ENV: &str = "AWR_HOST";
pub const API_KEY_ENV: &str = "AWR_API_KEY";

/// Header carrying the shared secret on authenticated routes.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone, Default)]
pub struct HostConfig {
    pub http: HttpServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
    #[error("invalid AWR_HOST '{value}': {source}")]
    InvalidHost {
        value: String,
        source: AddrParseError,
    },
}

impl HostConfig {
    /// Build from `PORT`, `AWR_HOST` and `AWR_API_KEY`. Unset or empty
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(value) = get(PORT_ENV) {
            let port = value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort {
                    value: value.clone(),
                    source,
                })?;
            config.http.bind.set_port(port);
        }
        if let Some(value) = get(HOST_ENV) {
            let host = value
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost {
                    value: value.clone(),
                    source,
                })?;
            config.http.bind.set_ip(host);
        }
        config.auth.api_key = get(API_KEY_ENV);
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub bind: SocketAddr,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
        }
    }
}

/// Shared-secret check for the action endpoint.
///
/// With no key configured any non-empty header value is accepted.
#[derive(Clone, Default)]
pub struct AuthConfig {
    pub api_key: Option<String>,
}

impl AuthConfig {
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    pub fn accepts(&self, presented: Option<&str>) -> bool {
        match (presented, self.api_key.as_deref()) {
            (None, _) | (Some(""), _) => false,
            (Some(presented), Some(expected)) => presented == expected,
            (Some(_), None) => true,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
