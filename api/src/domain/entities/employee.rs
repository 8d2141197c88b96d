//! Employee domain entity

use serde::{Deserialize, Serialize};

use super::aggregate::Aggregate;
use super::company::CompanyId;

/// Unique identifier for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub i32);

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person employed by (at most) one company
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub age: i32,
    /// Free-form, matched exactly when filtering
    pub gender: String,
    pub salary: f64,
    /// Weak back-reference to the owning company
    pub company_id: Option<CompanyId>,
}

impl Aggregate for Employee {
    type Id = EmployeeId;

    const KIND: &'static str = "Employee";

    fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    /// The company link is deliberately left alone: moving an employee
    /// between companies goes through the company update.
    fn apply_update(&mut self, incoming: Self) {
        self.name = incoming.name;
        self.age = incoming.age;
        self.gender = incoming.gender;
        self.salary = incoming.salary;
    }
}
