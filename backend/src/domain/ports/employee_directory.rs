//! Driving ports for employee directory use-cases.
//!
//! HTTP handlers depend on these traits rather than on the concrete service so
//! they can be exercised against mocks.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error, NameQuery, NewEmployee};

/// Read-side directory operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectoryQuery: Send + Sync {
    /// Every employee, in upstream order.
    async fn list_all(&self) -> Result<Vec<Employee>, Error>;

    /// Employees whose name contains `query`, ignoring case.
    async fn search_by_name(&self, query: &NameQuery) -> Result<Vec<Employee>, Error>;

    /// A single employee.
    async fn get_by_id(&self, id: &EmployeeId) -> Result<Employee, Error>;

    /// Highest salary in the directory, or `-1` when none is known.
    async fn highest_salary(&self) -> Result<i64, Error>;

    /// Names of the ten best-paid employees, highest first.
    async fn top_earning_names(&self) -> Result<Vec<String>, Error>;
}

/// Write-side directory operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectoryCommand: Send + Sync {
    /// Create an employee and return the stored projection.
    async fn create(&self, employee: NewEmployee) -> Result<Employee, Error>;

    /// Delete an employee by identifier.
    ///
    /// Returns the deleted employee's name, or an empty string when the
    /// upstream reported the deletion as unsuccessful.
    async fn delete_by_id(&self, id: &EmployeeId) -> Result<String, Error>;
}
