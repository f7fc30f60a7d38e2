//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeeDirectoryCommand, EmployeeDirectoryQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeDirectoryQuery>,
    pub employee_commands: Arc<dyn EmployeeDirectoryCommand>,
}

impl HttpState {
    /// Construct state from the directory ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use employee_gateway::domain::EmployeeDirectoryService;
    /// use employee_gateway::inbound::http::state::HttpState;
    /// use employee_gateway::outbound::employee_api::EmployeeHttpUpstream;
    /// use url::Url;
    ///
    /// let base = Url::parse("http://localhost:8112/api/v1/employee").expect("valid url");
    /// let upstream = EmployeeHttpUpstream::new(base, Duration::from_secs(10)).expect("client");
    /// let service = Arc::new(EmployeeDirectoryService::new(Arc::new(upstream)));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.employees.clone();
    /// ```
    pub fn new(
        employees: Arc<dyn EmployeeDirectoryQuery>,
        employee_commands: Arc<dyn EmployeeDirectoryCommand>,
    ) -> Self {
        Self {
            employees,
            employee_commands,
        }
    }
}
