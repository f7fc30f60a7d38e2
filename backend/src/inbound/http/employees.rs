//! Employee directory API handlers.
//!
//! ```text
//! GET    /api/v1/employee
//! GET    /api/v1/employee/search/{searchString}
//! GET    /api/v1/employee/highestSalary
//! GET    /api/v1/employee/topTenHighestEarningEmployeeNames
//! GET    /api/v1/employee/{id}
//! POST   /api/v1/employee {"name":"Ada","salary":90000,"age":36,"title":"Engineer","email":"ada@example.com"}
//! DELETE /api/v1/employee/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Employee, Error, NewEmployee};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EmployeeSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, creation_error, parse_employee_id, parse_name_query,
};

const ID_FIELD: FieldName = FieldName::new("id");
const SEARCH_FIELD: FieldName = FieldName::new("searchString");

/// Creation request body for `POST /api/v1/employee`.
///
/// Every field is optional at the wire level so missing values surface as
/// field-level validation errors rather than opaque decode failures.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateEmployeeRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = 90000)]
    pub salary: Option<i64>,
    #[schema(example = 36)]
    pub age: Option<i64>,
    #[schema(example = "Engineer")]
    pub title: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl TryFrom<CreateEmployeeRequest> for NewEmployee {
    type Error = Error;

    fn try_from(value: CreateEmployeeRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.name.as_deref(),
            value.salary,
            value.age,
            value.title.as_deref(),
            value.email.as_deref(),
        )
        .map_err(creation_error)
    }
}

/// Register the employee routes.
///
/// Literal routes are registered before `/{id}` so they are never captured as
/// identifiers.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use employee_gateway::inbound::http::employees;
///
/// let app = App::new().service(web::scope("/api/v1").configure(employees::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employee")
            .app_data(json_config())
            .service(list_employees)
            .service(create_employee)
            .service(search_employees)
            .service(highest_salary)
            .service(top_earning_names)
            .service(get_employee)
            .service(delete_employee),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid request body: {err}")).into()
    })
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    responses(
        (status = 200, description = "Employees", body = [EmployeeSchema]),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees.list_all().await?;
    Ok(web::Json(employees))
}

/// Search employees by a case-insensitive name fragment.
#[utoipa::path(
    get,
    path = "/api/v1/employee/search/{searchString}",
    params(("searchString" = String, Path, description = "Name fragment to match")),
    responses(
        (status = 200, description = "Matching employees", body = [EmployeeSchema]),
        (status = 400, description = "Blank search string", body = ErrorSchema),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "searchEmployees"
)]
#[get("/search/{searchString}")]
pub async fn search_employees(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Employee>>> {
    let query = parse_name_query(&path.into_inner(), SEARCH_FIELD)?;
    let employees = state.employees.search_by_name(&query).await?;
    Ok(web::Json(employees))
}

/// Highest salary in the directory; `-1` when none is known.
#[utoipa::path(
    get,
    path = "/api/v1/employee/highestSalary",
    responses(
        (status = 200, description = "Highest salary", body = i64),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "highestSalary"
)]
#[get("/highestSalary")]
pub async fn highest_salary(state: web::Data<HttpState>) -> ApiResult<web::Json<i64>> {
    let salary = state.employees.highest_salary().await?;
    Ok(web::Json(salary))
}

/// Names of the ten best-paid employees, highest first.
#[utoipa::path(
    get,
    path = "/api/v1/employee/topTenHighestEarningEmployeeNames",
    responses(
        (status = 200, description = "Employee names", body = [String]),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "topTenHighestEarningEmployeeNames"
)]
#[get("/topTenHighestEarningEmployeeNames")]
pub async fn top_earning_names(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<String>>> {
    let names = state.employees.top_earning_names().await?;
    Ok(web::Json(names))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/v1/employee/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 200, description = "Employee", body = EmployeeSchema),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Employee>> {
    let id = parse_employee_id(&path.into_inner(), ID_FIELD)?;
    let employee = state.employees.get_by_id(&id).await?;
    Ok(web::Json(employee))
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 502, description = "Upstream returned no employee", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let employee = NewEmployee::try_from(payload.into_inner())?;
    let created = state.employee_commands.create(employee).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Delete an employee, returning its name or `""` when the upstream declined.
#[utoipa::path(
    delete,
    path = "/api/v1/employee/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 200, description = "Deleted employee name", body = String),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<String>> {
    let id = parse_employee_id(&path.into_inner(), ID_FIELD)?;
    let name = state.employee_commands.delete_by_id(&id).await?;
    Ok(web::Json(name))
}
