//! Company domain entity
//!
//! A company is the composition root for its employees: the employee list is
//! loaded and saved together with the company.

use serde::{Deserialize, Serialize};

use super::aggregate::Aggregate;
use super::employee::Employee;

/// Unique identifier for a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub i32);

impl From<i32> for CompanyId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: Option<CompanyId>,
    pub company_name: String,
    /// Declared head count. Informational only, never derived from `employees`.
    pub employees_number: i32,
    /// Employees in insertion order
    pub employees: Vec<Employee>,
}

impl Company {
    /// Point every embedded employee at this company.
    ///
    /// No-op for a company that has not been persisted yet.
    pub fn link_employees(&mut self) {
        if let Some(id) = self.id {
            for employee in &mut self.employees {
                employee.company_id = Some(id);
            }
        }
    }
}

impl Aggregate for Company {
    type Id = CompanyId;

    const KIND: &'static str = "Company";

    fn id(&self) -> Option<CompanyId> {
        self.id
    }

    fn apply_update(&mut self, incoming: Self) {
        self.company_name = incoming.company_name;
        self.employees = incoming.employees;
        self.employees_number = incoming.employees_number;
        self.link_employees();
    }
}
