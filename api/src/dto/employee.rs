//! Employee request/response shapes

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CompanyId, Employee, EmployeeId};

/// Request body for creating or updating an employee.
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub id: Option<i32>,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: f64,
    pub company_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Option<i32>,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: f64,
    pub company_id: Option<i32>,
}

impl From<EmployeeRequest> for Employee {
    fn from(request: EmployeeRequest) -> Self {
        Employee {
            id: request.id.map(EmployeeId),
            name: request.name,
            age: request.age,
            gender: request.gender,
            salary: request.salary,
            company_id: request.company_id.map(CompanyId),
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeResponse {
            id: employee.id.map(|id| id.0),
            name: employee.name,
            age: employee.age,
            gender: employee.gender,
            salary: employee.salary,
            company_id: employee.company_id.map(|id| id.0),
        }
    }
}
