//! Gateway entry-point: loads configuration, wires the upstream adapter into
//! the directory service, and serves the REST API.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_gateway::domain::EmployeeDirectoryService;
use employee_gateway::inbound::http::health::HealthState;
use employee_gateway::inbound::http::state::HttpState;
use employee_gateway::outbound::employee_api::EmployeeHttpUpstream;
use employee_gateway::settings::GatewaySettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = GatewaySettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let upstream_url = settings.upstream_url().map_err(startup_error)?;
    let timeout = settings.request_timeout().map_err(startup_error)?;
    let upstream = EmployeeHttpUpstream::new(upstream_url, timeout).map_err(startup_error)?;

    let service = Arc::new(EmployeeDirectoryService::new(Arc::new(upstream)));
    let http_state = HttpState::new(service.clone(), service);

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_host(), settings.bind_port(), http_state);
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}

fn startup_error(err: impl std::fmt::Display) -> std::io::Error {
    error!(error = %err, "gateway startup failed");
    std::io::Error::other(err.to_string())
}
