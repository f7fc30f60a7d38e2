//! Gateway configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EMPLOYEE_GATEWAY_*` environment variables, or
//! a configuration file. Unset values fall back to the defaults below.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8112/api/v1/employee";
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8111;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The upstream base address is not an absolute URL.
    #[error("invalid upstream url {value:?}: {source}")]
    InvalidUpstreamUrl {
        /// Configured text.
        value: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The request timeout was zero.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Configuration values for the employee gateway.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEE_GATEWAY")]
pub struct GatewaySettings {
    /// Base address of the upstream employee service.
    pub upstream_url: Option<String>,
    /// Interface the HTTP listener binds to.
    pub bind_host: Option<String>,
    /// Port the HTTP listener binds to.
    pub bind_port: Option<u16>,
    /// Per-request timeout for upstream calls, in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl GatewaySettings {
    /// Parse the configured upstream base address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUpstreamUrl`] when the value does not
    /// parse as an absolute URL.
    pub fn upstream_url(&self) -> Result<Url, SettingsError> {
        let raw = self.upstream_url.as_deref().unwrap_or(DEFAULT_UPSTREAM_URL);
        Url::parse(raw).map_err(|source| SettingsError::InvalidUpstreamUrl {
            value: raw.to_owned(),
            source,
        })
    }

    /// Return the listener host, falling back to the default.
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Return the listener port, falling back to the default.
    pub fn bind_port(&self) -> u16 {
        self.bind_port.unwrap_or(DEFAULT_BIND_PORT)
    }

    /// Return the upstream request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] when configured as zero.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
        {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
