//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the wire shapes.

pub mod company_service;
pub mod employee_service;
pub mod lifecycle;

pub use company_service::CompanyService;
pub use employee_service::EmployeeService;
