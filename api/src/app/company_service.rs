//! Company service
//!
//! Lists, reads, creates, updates and deletes companies together with their
//! embedded employees.

use std::sync::Arc;

use super::lifecycle::{delete_existing, find_existing, update_existing};
use crate::domain::entities::{Company, CompanyId};
use crate::domain::ports::{CompanyRepository, PageRequest};
use crate::dto::{CompanyResponse, EmployeeResponse, PageResponse};
use crate::error::AppError;

/// Service for managing companies
pub struct CompanyService<CR>
where
    CR: CompanyRepository,
{
    companies: Arc<CR>,
}

impl<CR> CompanyService<CR>
where
    CR: CompanyRepository,
{
    pub fn new(companies: Arc<CR>) -> Self {
        Self { companies }
    }

    /// All companies, ordered by ID
    pub async fn list(&self) -> Result<Vec<CompanyResponse>, AppError> {
        let companies = self.companies.find_all().await?;
        Ok(companies.into_iter().map(CompanyResponse::from).collect())
    }

    /// One page of companies. `page` is 1-based.
    pub async fn list_paged(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<PageResponse<CompanyResponse>, AppError> {
        let request = PageRequest::one_based(page, page_size)?;
        let page = self.companies.find_page(request).await?;
        Ok(PageResponse::from_page(page))
    }

    /// Get a company by ID
    pub async fn get_by_id(&self, id: CompanyId) -> Result<CompanyResponse, AppError> {
        let company = find_existing(self.companies.as_ref(), id).await?;
        Ok(company.into())
    }

    /// Employees of a company; empty when the company does not exist
    pub async fn list_employees_of(
        &self,
        id: CompanyId,
    ) -> Result<Vec<EmployeeResponse>, AppError> {
        let employees = match self.companies.find_by_id(id).await? {
            Some(company) => company.employees,
            None => {
                tracing::debug!(company_id = %id, "Company not found, no employees to list");
                Vec::new()
            }
        };
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    /// Persist a new company as given
    pub async fn add(&self, company: Company) -> Result<CompanyResponse, AppError> {
        let saved = self.companies.save(&company).await?;
        tracing::info!(company_id = ?saved.id, "Company created");
        Ok(saved.into())
    }

    /// Replace name, employee list and employee count of an existing company
    pub async fn update(
        &self,
        id: CompanyId,
        company: Company,
    ) -> Result<CompanyResponse, AppError> {
        let saved = update_existing(self.companies.as_ref(), id, company)
            .await
            .inspect_err(|e| {
                tracing::warn!(company_id = %id, error = %e, "Company update rejected")
            })?;
        Ok(saved.into())
    }

    /// Delete a company, returning its state before deletion
    pub async fn delete_by_id(&self, id: CompanyId) -> Result<CompanyResponse, AppError> {
        let snapshot = delete_existing(self.companies.as_ref(), id)
            .await
            .inspect_err(|e| {
                tracing::warn!(company_id = %id, error = %e, "Company delete rejected")
            })?;
        Ok(snapshot.into())
    }
}
