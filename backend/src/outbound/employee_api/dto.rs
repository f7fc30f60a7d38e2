//! DTOs for the upstream employee service wire format.
//!
//! Responses decode into these transport DTOs first, then map into domain
//! records in one pass.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::{EmployeeRecord, Envelope};
use crate::domain::{EmployeeId, NewEmployee};

#[derive(Debug, Deserialize)]
pub(super) struct EnvelopeDto<T> {
    pub(super) data: Option<T>,
    #[serde(default)]
    pub(super) status: Option<String>,
}

impl<T> EnvelopeDto<T> {
    pub(super) fn into_envelope<U>(self, map: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            data: self.data.map(map),
            status: self.status.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct EmployeeDto {
    pub(super) id: Uuid,
    pub(super) employee_name: String,
    #[serde(default)]
    pub(super) employee_salary: Option<i32>,
    #[serde(default)]
    pub(super) employee_age: Option<i32>,
    #[serde(default)]
    pub(super) employee_title: Option<String>,
    #[serde(default)]
    pub(super) employee_email: Option<String>,
}

impl From<EmployeeDto> for EmployeeRecord {
    fn from(dto: EmployeeDto) -> Self {
        Self {
            id: EmployeeId::from_uuid(dto.id),
            name: dto.employee_name,
            salary: dto.employee_salary,
            age: dto.employee_age,
            title: dto.employee_title.unwrap_or_default(),
            email: dto.employee_email.unwrap_or_default(),
        }
    }
}

pub(super) fn into_records(dtos: Vec<EmployeeDto>) -> Vec<EmployeeRecord> {
    dtos.into_iter().map(EmployeeRecord::from).collect()
}

#[derive(Debug, Serialize)]
pub(super) struct CreateEmployeeDto<'a> {
    pub(super) name: &'a str,
    pub(super) salary: u32,
    pub(super) age: u32,
    pub(super) title: &'a str,
    pub(super) email: &'a str,
}

impl<'a> From<&'a NewEmployee> for CreateEmployeeDto<'a> {
    fn from(employee: &'a NewEmployee) -> Self {
        Self {
            name: employee.name(),
            salary: employee.salary(),
            age: employee.age(),
            title: employee.title(),
            email: employee.email(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct DeleteEmployeeDto<'a> {
    pub(super) name: &'a str,
}
