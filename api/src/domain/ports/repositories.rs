//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Aggregate, Company, Employee};
use crate::domain::ports::{Page, PageRequest};
use crate::error::DomainError;

/// Generic store for one collection of aggregates
#[async_trait]
pub trait Repository<T: Aggregate>: Send + Sync {
    /// Find an aggregate by ID
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, DomainError>;

    /// All aggregates, ordered by ID
    async fn find_all(&self) -> Result<Vec<T>, DomainError>;

    /// One page of aggregates, ordered by ID
    async fn find_page(&self, request: PageRequest) -> Result<Page<T>, DomainError>;

    /// Insert or update.
    ///
    /// Updates when `entity` carries the ID of a stored aggregate, otherwise
    /// inserts and assigns a fresh ID. Returns the stored state.
    async fn save(&self, entity: &T) -> Result<T, DomainError>;

    /// Delete by ID. Deleting an unknown ID is not an error.
    async fn delete(&self, id: T::Id) -> Result<(), DomainError>;

    /// Delete every aggregate in the collection
    async fn delete_all(&self) -> Result<(), DomainError>;
}

/// Repository for Company aggregates (employees are loaded and saved with them)
pub trait CompanyRepository: Repository<Company> {}

impl<R: Repository<Company> + ?Sized> CompanyRepository for R {}

/// Repository for Employee aggregates
#[async_trait]
pub trait EmployeeRepository: Repository<Employee> {
    /// Employees whose gender matches exactly (case-sensitive)
    async fn find_by_gender(&self, gender: &str) -> Result<Vec<Employee>, DomainError>;
}
