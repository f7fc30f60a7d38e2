//! Driven port for the upstream employee directory service.
//!
//! The upstream wraps every payload in an envelope whose `data` may be absent
//! even on success. Adapters hand the envelope back untouched so the domain
//! decides what an empty payload means for each operation.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{EmployeeId, NewEmployee};

/// Response wrapper returned by every upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T> {
    /// Payload; `None` when the upstream answered without data.
    pub data: Option<T>,
    /// Free-form status text reported by the upstream.
    pub status: String,
}

impl<T> Envelope<T> {
    /// Envelope carrying `data`.
    pub fn with_data(data: T, status: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            status: status.into(),
        }
    }

    /// Envelope with no payload.
    pub fn empty(status: impl Into<String>) -> Self {
        Self {
            data: None,
            status: status.into(),
        }
    }
}

/// Employee as described by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// Upstream-assigned identifier.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Annual salary, when reported.
    pub salary: Option<i32>,
    /// Age in years, when reported.
    pub age: Option<i32>,
    /// Job title.
    pub title: String,
    /// Contact e-mail address.
    pub email: String,
}

define_port_error! {
    /// Failures reported by the upstream employee service.
    pub enum EmployeeUpstreamError {
        /// Upstream answered 429 Too Many Requests.
        RateLimited => "upstream employee service is rate limiting requests",
        /// Upstream answered 404 Not Found.
        NotFound => "employee not found upstream",
        /// Any other HTTP status, transport failure, or undecodable body.
        Unknown { message: String } => "upstream employee service failed: {message}",
    }
}

/// Port for the remote employee directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeUpstream: Send + Sync {
    /// Fetch every employee.
    async fn list_employees(&self) -> Result<Envelope<Vec<EmployeeRecord>>, EmployeeUpstreamError>;

    /// Fetch a single employee by identifier.
    async fn fetch_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Envelope<EmployeeRecord>, EmployeeUpstreamError>;

    /// Create an employee from a validated request.
    async fn create_employee(
        &self,
        employee: &NewEmployee,
    ) -> Result<Envelope<EmployeeRecord>, EmployeeUpstreamError>;

    /// Delete the employee with the given name.
    ///
    /// `data` reports whether the upstream considered the deletion successful.
    async fn delete_employee(&self, name: &str) -> Result<Envelope<bool>, EmployeeUpstreamError>;
}
