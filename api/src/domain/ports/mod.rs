//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod pagination;
pub mod repositories;

pub use pagination::{Page, PageRequest};
pub use repositories::{CompanyRepository, EmployeeRepository, Repository};
