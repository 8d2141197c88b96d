//! Company request/response shapes

use serde::{Deserialize, Serialize};

use super::employee::{EmployeeRequest, EmployeeResponse};
use crate::domain::entities::{Company, CompanyId, Employee};

/// Request body for creating or updating a company.
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyRequest {
    pub id: Option<i32>,
    pub company_name: String,
    pub employees_number: i32,
    pub employees: Vec<EmployeeRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: Option<i32>,
    pub company_name: String,
    pub employees_number: i32,
    pub employees: Vec<EmployeeResponse>,
}

impl From<CompanyRequest> for Company {
    fn from(request: CompanyRequest) -> Self {
        Company {
            id: request.id.map(CompanyId),
            company_name: request.company_name,
            employees_number: request.employees_number,
            employees: request.employees.into_iter().map(Employee::from).collect(),
        }
    }
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        CompanyResponse {
            id: company.id.map(|id| id.0),
            company_name: company.company_name,
            employees_number: company.employees_number,
            employees: company
                .employees
                .into_iter()
                .map(EmployeeResponse::from)
                .collect(),
        }
    }
}
