//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the employee and health endpoints together with the
//! schema wrappers from the inbound layer. Swagger UI serves it in debug
//! builds.

use crate::inbound::http::employees::CreateEmployeeRequest;
use crate::inbound::http::schemas::{EmployeeSchema, ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee gateway API",
        description = "Read, search, rank, create, and delete employees held by the upstream directory service."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::search_employees,
        crate::inbound::http::employees::highest_salary,
        crate::inbound::http::employees::top_earning_names,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateEmployeeRequest
    )),
    tags(
        (name = "employees", description = "Employee directory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
