//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and live in the inbound adapter
//! layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested employee does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The upstream employee service is throttling requests.
    #[schema(rename = "rate_limited")]
    RateLimited,
    /// The upstream create call returned no employee.
    #[schema(rename = "creation_failed")]
    CreationFailed,
    /// The upstream employee service failed.
    #[schema(rename = "upstream_error")]
    UpstreamError,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Employee with ID 4a3a170b-22cd-4ac2-aad1-9bb5b34a1507 not found.")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Employee`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Employee)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeSchema {
    /// Upstream-assigned identifier.
    #[schema(value_type = String, format = Uuid, example = "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507")]
    id: String,
    /// Full name.
    #[schema(example = "Tiger Nixon")]
    employee_name: String,
    /// Annual salary; null when the upstream does not report one.
    #[schema(example = 320800)]
    employee_salary: Option<i32>,
    /// Age in years.
    #[schema(example = 61)]
    employee_age: Option<i32>,
    /// Job title.
    #[schema(example = "Vice Chair Executive Principal")]
    employee_title: String,
    /// Contact e-mail address.
    #[schema(example = "tnixon@company.com")]
    employee_email: String,
}
