//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{EmployeeId, EmployeeValidationError, Error, NameQuery};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    BlankField,
    NonPositiveSalary,
    InvalidAge,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::BlankField => "blank_field",
            ErrorCode::NonPositiveSalary => "non_positive_salary",
            ErrorCode::InvalidAge => "invalid_age",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

/// Parse an employee identifier from a path segment.
pub(crate) fn parse_employee_id(value: &str, field: FieldName) -> Result<EmployeeId, Error> {
    EmployeeId::parse(value).map_err(|err| match err {
        EmployeeValidationError::EmptyId => missing_field_error(field),
        _ => invalid_uuid_error(field, value),
    })
}

/// Parse a name search fragment from a path segment.
pub(crate) fn parse_name_query(value: &str, field: FieldName) -> Result<NameQuery, Error> {
    NameQuery::new(value).map_err(|_| missing_field_error(field))
}

/// Translate a creation payload validation failure into an API error.
pub(crate) fn creation_error(err: EmployeeValidationError) -> Error {
    let message = err.to_string();
    match err {
        EmployeeValidationError::MissingField { field } => {
            ValidationError::new(field, message).with_code(ErrorCode::MissingField)
        }
        EmployeeValidationError::BlankField { field } => {
            ValidationError::new(field, message).with_code(ErrorCode::BlankField)
        }
        EmployeeValidationError::NonPositiveSalary => {
            ValidationError::new("salary", message).with_code(ErrorCode::NonPositiveSalary)
        }
        EmployeeValidationError::InvalidAge => {
            ValidationError::new("age", message).with_code(ErrorCode::InvalidAge)
        }
        other => Error::invalid_request(other.to_string()),
    }
}
