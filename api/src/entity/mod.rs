//! `SeaORM` entities for the `companies` and `employees` tables

pub mod companies;
pub mod employees;
