//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod companies;
pub mod employees;

pub use companies::{
    create_company, delete_company, get_company, list_companies, list_company_employees,
    update_company,
};
pub use employees::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
};
