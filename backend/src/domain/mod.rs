//! Domain primitives, ports, and services.
//!
//! Purpose: define the employee directory model and the use-cases exposed to
//! inbound adapters. The domain knows nothing about HTTP; adapters translate
//! at the edges.
//!
//! Public surface:
//! - Employee, NewEmployee, EmployeeId, NameQuery: directory values.
//! - Error (alias to `error::Error`): API error payload.
//! - EmployeeDirectoryService: implementation of the directory ports.
//! - TraceId: request correlation identifier.

pub mod employee;
pub mod employee_directory_service;
pub mod error;
pub mod ports;
pub mod salary_ranking;
pub mod trace_id;

pub use self::employee::{Employee, EmployeeId, EmployeeValidationError, NameQuery, NewEmployee};
pub use self::employee_directory_service::EmployeeDirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::salary_ranking::{NO_SALARY, TOP_EARNERS_LIMIT, highest_salary, top_earning_names};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
