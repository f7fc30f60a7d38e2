//! Employee read model, creation request, and search query.
//!
//! [`Employee`] is the public projection returned to callers. It is built from
//! the upstream [`EmployeeRecord`] through one pure mapping so drift in the
//! upstream wire shape never leaks into the public contract.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ports::EmployeeRecord;

/// Validation errors raised by employee value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeValidationError {
    /// Identifier text was empty or whitespace only.
    #[error("employee id must not be empty")]
    EmptyId,
    /// Identifier text was not a UUID.
    #[error("employee id must be a valid UUID")]
    InvalidId,
    /// A required text field was blank.
    #[error("{field} must not be blank")]
    BlankField {
        /// Payload field name.
        field: &'static str,
    },
    /// A required field was missing.
    #[error("{field} is required")]
    MissingField {
        /// Payload field name.
        field: &'static str,
    },
    /// Salary was zero, negative, or out of range.
    #[error("salary must be greater than 0")]
    NonPositiveSalary,
    /// Age was negative or out of range.
    #[error("age must be a non-negative integer")]
    InvalidAge,
    /// Search text was blank.
    #[error("search string must not be blank")]
    BlankQuery,
}

/// Server-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Parse an identifier from path text.
    ///
    /// # Examples
    /// ```
    /// use employee_gateway::domain::EmployeeId;
    ///
    /// let id = EmployeeId::parse("4a3a170b-22cd-4ac2-aad1-9bb5b34a1507").expect("valid");
    /// assert_eq!(id.to_string(), "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507");
    /// assert!(EmployeeId::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, EmployeeValidationError> {
        if raw.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyId);
        }
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| EmployeeValidationError::InvalidId)
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public employee projection.
///
/// Serialised with the `employee_*` field names clients already consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Upstream-assigned identifier.
    pub id: EmployeeId,
    /// Full name.
    #[serde(rename = "employee_name")]
    pub name: String,
    /// Annual salary; absent when upstream does not report one.
    #[serde(rename = "employee_salary")]
    pub salary: Option<i32>,
    /// Age in years.
    #[serde(rename = "employee_age")]
    pub age: Option<i32>,
    /// Job title.
    #[serde(rename = "employee_title")]
    pub title: String,
    /// Contact e-mail address.
    #[serde(rename = "employee_email")]
    pub email: String,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        let EmployeeRecord {
            id,
            name,
            salary,
            age,
            title,
            email,
        } = record;
        Self {
            id,
            name,
            salary,
            age,
            title,
            email,
        }
    }
}

/// Validated employee creation request forwarded to the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    name: String,
    salary: u32,
    age: u32,
    title: String,
    email: String,
}

impl NewEmployee {
    /// Validate raw creation fields.
    ///
    /// Text fields must be non-blank, `salary` must be at least 1, and `age`
    /// must be present and non-negative.
    ///
    /// # Examples
    /// ```
    /// use employee_gateway::domain::{EmployeeValidationError, NewEmployee};
    ///
    /// let employee = NewEmployee::try_from_parts(
    ///     Some("Ada"), Some(90_000), Some(36), Some("Engineer"), Some("ada@example.com"),
    /// )
    /// .expect("valid request");
    /// assert_eq!(employee.salary(), 90_000);
    ///
    /// let err = NewEmployee::try_from_parts(
    ///     Some("Ada"), Some(0), Some(36), Some("Engineer"), Some("ada@example.com"),
    /// )
    /// .expect_err("zero salary");
    /// assert_eq!(err, EmployeeValidationError::NonPositiveSalary);
    /// ```
    pub fn try_from_parts(
        name: Option<&str>,
        salary: Option<i64>,
        age: Option<i64>,
        title: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, EmployeeValidationError> {
        let name = required_text("name", name)?;
        let salary = salary.ok_or(EmployeeValidationError::MissingField { field: "salary" })?;
        let salary = u32::try_from(salary)
            .ok()
            .filter(|value| *value >= 1)
            .ok_or(EmployeeValidationError::NonPositiveSalary)?;
        let age = age.ok_or(EmployeeValidationError::MissingField { field: "age" })?;
        let age = u32::try_from(age).map_err(|_| EmployeeValidationError::InvalidAge)?;
        let title = required_text("title", title)?;
        let email = required_text("email", email)?;
        Ok(Self {
            name,
            salary,
            age,
            title,
            email,
        })
    }

    /// Employee name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Annual salary, always at least 1.
    #[must_use]
    pub fn salary(&self) -> u32 {
        self.salary
    }

    /// Age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Job title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Contact e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

fn required_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<String, EmployeeValidationError> {
    match value {
        None => Err(EmployeeValidationError::MissingField { field }),
        Some(text) if text.trim().is_empty() => Err(EmployeeValidationError::BlankField { field }),
        Some(text) => Ok(text.to_owned()),
    }
}

/// Case-insensitive name fragment used by directory search.
///
/// A blank query cannot be constructed, so search never runs against an empty
/// needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    raw: String,
    needle: String,
}

impl NameQuery {
    /// Validate and construct a query.
    ///
    /// # Examples
    /// ```
    /// use employee_gateway::domain::NameQuery;
    ///
    /// let query = NameQuery::new("jo").expect("non-blank");
    /// assert!(query.matches("John Doe"));
    /// assert!(!query.matches("Ada Lovelace"));
    /// assert!(NameQuery::new("  ").is_err());
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self, EmployeeValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(EmployeeValidationError::BlankQuery);
        }
        let needle = raw.to_lowercase();
        Ok(Self { raw, needle })
    }

    /// Whether `name` contains this query, ignoring case.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(self.needle.as_str())
    }

    /// Query text as supplied by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }
}
