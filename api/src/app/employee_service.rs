//! Employee service
//!
//! Lists, filters, reads, creates, updates and deletes employees.

use std::sync::Arc;

use super::lifecycle::{delete_existing, find_existing, update_existing};
use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::ports::{EmployeeRepository, PageRequest};
use crate::dto::{EmployeeResponse, PageResponse};
use crate::error::AppError;

/// Service for managing employees
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    employees: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(employees: Arc<ER>) -> Self {
        Self { employees }
    }

    pub async fn list(&self) -> Result<Vec<EmployeeResponse>, AppError> {
        let employees = self.employees.find_all().await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    /// One page of employees. `page` is 1-based.
    pub async fn list_paged(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<PageResponse<EmployeeResponse>, AppError> {
        let request = PageRequest::one_based(page, page_size)?;
        let page = self.employees.find_page(request).await?;
        Ok(PageResponse::from_page(page))
    }

    /// Employees whose gender matches exactly
    pub async fn list_by_gender(&self, gender: &str) -> Result<Vec<EmployeeResponse>, AppError> {
        let employees = self.employees.find_by_gender(gender).await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: EmployeeId) -> Result<EmployeeResponse, AppError> {
        let employee = find_existing(self.employees.as_ref(), id).await?;
        Ok(employee.into())
    }

    pub async fn add(&self, employee: Employee) -> Result<EmployeeResponse, AppError> {
        let saved = self.employees.save(&employee).await?;
        tracing::info!(employee_id = ?saved.id, "Employee created");
        Ok(saved.into())
    }

    /// Replace name, age, gender and salary of an existing employee
    pub async fn update(
        &self,
        id: EmployeeId,
        employee: Employee,
    ) -> Result<EmployeeResponse, AppError> {
        let saved = update_existing(self.employees.as_ref(), id, employee)
            .await
            .inspect_err(|e| {
                tracing::warn!(employee_id = %id, error = %e, "Employee update rejected")
            })?;
        Ok(saved.into())
    }

    /// Delete an employee, returning its state before deletion
    pub async fn delete_by_id(&self, id: EmployeeId) -> Result<EmployeeResponse, AppError> {
        let snapshot = delete_existing(self.employees.as_ref(), id)
            .await
            .inspect_err(|e| {
                tracing::warn!(employee_id = %id, error = %e, "Employee delete rejected")
            })?;
        Ok(snapshot.into())
    }
}
