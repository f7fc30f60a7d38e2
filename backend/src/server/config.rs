//! HTTP server configuration object and helpers.

use employee_gateway::inbound::http::state::HttpState;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_host: String,
    pub(crate) bind_port: u16,
    pub(crate) http_state: HttpState,
}

impl ServerConfig {
    /// Construct a server configuration from the listener address and the
    /// handler dependencies.
    #[must_use]
    pub fn new(bind_host: impl Into<String>, bind_port: u16, http_state: HttpState) -> Self {
        Self {
            bind_host: bind_host.into(),
            bind_port,
            http_state,
        }
    }
}
