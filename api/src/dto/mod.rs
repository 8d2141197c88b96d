//! Wire shapes and mappers
//!
//! Request and response bodies exchanged over HTTP, plus the explicit
//! field-by-field conversions between them and the domain entities.

pub mod company;
pub mod employee;
pub mod page;

pub use company::{CompanyRequest, CompanyResponse};
pub use employee::{EmployeeRequest, EmployeeResponse};
pub use page::PageResponse;
