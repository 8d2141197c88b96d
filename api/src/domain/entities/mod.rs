//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod aggregate;
pub mod company;
pub mod employee;

pub use aggregate::Aggregate;
pub use company::{Company, CompanyId};
pub use employee::{Employee, EmployeeId};
