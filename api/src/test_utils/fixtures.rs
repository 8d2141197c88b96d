//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{Company, CompanyId, Employee, EmployeeId};

/// Create a test employee of company 1
pub fn test_employee(id: i32) -> Employee {
    Employee {
        id: Some(EmployeeId(id)),
        name: "zach".to_string(),
        age: 21,
        gender: "male".to_string(),
        salary: 5000.0,
        company_id: Some(CompanyId(1)),
    }
}

/// Six employees of company 1, IDs 1 to 6, four of them male
pub fn test_employees() -> Vec<Employee> {
    [
        ("zach", 21, "male", 5000.0),
        ("york", 22, "female", 6000.0),
        ("alex", 23, "female", 7000.0),
        ("green", 24, "male", 8000.0),
        ("karen", 25, "male", 9000.0),
        ("chris", 26, "male", 9000.0),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, age, gender, salary), id)| Employee {
        id: Some(EmployeeId(id)),
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        salary,
        company_id: Some(CompanyId(1)),
    })
    .collect()
}

/// Create a test company without employees
pub fn test_company(id: i32, name: &str) -> Company {
    Company {
        id: Some(CompanyId(id)),
        company_name: name.to_string(),
        employees_number: 0,
        employees: vec![],
    }
}

/// Create a test company with a single employee named "zach"
pub fn test_company_with_staff(id: i32, name: &str) -> Company {
    Company {
        id: Some(CompanyId(id)),
        company_name: name.to_string(),
        employees_number: 1,
        employees: vec![Employee {
            id: Some(EmployeeId(id)),
            name: "zach".to_string(),
            age: 20,
            gender: "male".to_string(),
            salary: 5000.0,
            company_id: Some(CompanyId(id)),
        }],
    }
}
