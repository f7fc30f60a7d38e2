//! Employee directory domain service.
//!
//! Implements the directory driving ports on top of the upstream port. Every
//! operation issues fresh upstream calls; nothing is cached between requests
//! and upstream failures are never retried here.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    EmployeeDirectoryCommand, EmployeeDirectoryQuery, EmployeeUpstream, EmployeeUpstreamError,
};
use crate::domain::{
    Employee, EmployeeId, Error, NameQuery, NewEmployee, highest_salary, top_earning_names,
};

/// Directory service implementing the driving ports.
#[derive(Clone)]
pub struct EmployeeDirectoryService<U> {
    upstream: Arc<U>,
}

impl<U> EmployeeDirectoryService<U> {
    /// Create a service backed by the given upstream port.
    pub fn new(upstream: Arc<U>) -> Self {
        Self { upstream }
    }
}

impl<U> EmployeeDirectoryService<U>
where
    U: EmployeeUpstream,
{
    fn map_upstream_error(error: EmployeeUpstreamError) -> Error {
        match error {
            EmployeeUpstreamError::RateLimited => {
                Error::rate_limited("upstream employee service is rate limiting requests")
            }
            EmployeeUpstreamError::NotFound => Error::not_found("employee not found upstream"),
            EmployeeUpstreamError::Unknown { message } => {
                Error::upstream(format!("upstream employee service failed: {message}"))
            }
        }
    }

    fn not_found(id: &EmployeeId) -> Error {
        Error::not_found(format!("Employee with ID {id} not found."))
    }

    async fn fetch_all(&self) -> Result<Vec<Employee>, Error> {
        let envelope = self
            .upstream
            .list_employees()
            .await
            .map_err(Self::map_upstream_error)?;
        let Some(records) = envelope.data else {
            warn!(status = %envelope.status, "upstream list returned no data");
            return Ok(Vec::new());
        };
        Ok(records.into_iter().map(Employee::from).collect())
    }

    async fn resolve(&self, id: &EmployeeId) -> Result<Employee, Error> {
        let envelope = self
            .upstream
            .fetch_employee(id)
            .await
            .map_err(|err| match err {
                EmployeeUpstreamError::NotFound => Self::not_found(id),
                other => Self::map_upstream_error(other),
            })?;
        envelope
            .data
            .map(Employee::from)
            .ok_or_else(|| Self::not_found(id))
    }
}

#[async_trait]
impl<U> EmployeeDirectoryQuery for EmployeeDirectoryService<U>
where
    U: EmployeeUpstream,
{
    async fn list_all(&self) -> Result<Vec<Employee>, Error> {
        let employees = self.fetch_all().await?;
        debug!(count = employees.len(), "listed employees");
        Ok(employees)
    }

    async fn search_by_name(&self, query: &NameQuery) -> Result<Vec<Employee>, Error> {
        let matches: Vec<Employee> = self
            .fetch_all()
            .await?
            .into_iter()
            .filter(|employee| query.matches(&employee.name))
            .collect();
        debug!(query = query.as_str(), count = matches.len(), "searched employees");
        Ok(matches)
    }

    async fn get_by_id(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.resolve(id).await
    }

    async fn highest_salary(&self) -> Result<i64, Error> {
        let employees = self.fetch_all().await?;
        Ok(highest_salary(&employees))
    }

    async fn top_earning_names(&self) -> Result<Vec<String>, Error> {
        let employees = self.fetch_all().await?;
        Ok(top_earning_names(&employees))
    }
}

#[async_trait]
impl<U> EmployeeDirectoryCommand for EmployeeDirectoryService<U>
where
    U: EmployeeUpstream,
{
    async fn create(&self, employee: NewEmployee) -> Result<Employee, Error> {
        let envelope = self
            .upstream
            .create_employee(&employee)
            .await
            .map_err(Self::map_upstream_error)?;
        let Some(record) = envelope.data else {
            warn!(status = %envelope.status, name = employee.name(), "upstream create returned no data");
            return Err(Error::creation_failed("Failed to create employee"));
        };
        let created = Employee::from(record);
        info!(id = %created.id, "created employee");
        Ok(created)
    }

    async fn delete_by_id(&self, id: &EmployeeId) -> Result<String, Error> {
        let employee = self.resolve(id).await?;
        let envelope = self
            .upstream
            .delete_employee(&employee.name)
            .await
            .map_err(Self::map_upstream_error)?;
        if envelope.data == Some(true) {
            info!(%id, name = %employee.name, "deleted employee");
            Ok(employee.name)
        } else {
            warn!(%id, status = %envelope.status, "upstream reported unsuccessful delete");
            Ok(String::new())
        }
    }
}

#[cfg(test)]
#[path = "employee_directory_service_tests.rs"]
mod tests;
