//! PostgreSQL adapter for CompanyRepository
//!
//! A company row is stored together with the employee rows pointing at it.
//! Saving a company rewrites those links inside one transaction.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    LoaderTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::employee_repo::upsert;
use crate::domain::entities::{Company, CompanyId, Employee};
use crate::domain::ports::{Page, PageRequest, Repository};
use crate::entity::{companies, employees};
use crate::error::DomainError;

/// PostgreSQL implementation of CompanyRepository
pub struct PostgresCompanyRepository {
    db: DatabaseConnection,
}

impl PostgresCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the employees of every company with one extra query
    async fn with_employees(
        &self,
        models: Vec<companies::Model>,
    ) -> Result<Vec<Company>, DomainError> {
        let staff = models
            .load_many(
                employees::Entity::find().order_by_asc(employees::Column::Id),
                &self.db,
            )
            .await?;

        Ok(models
            .into_iter()
            .zip(staff)
            .map(|(company, employees)| to_company(company, employees))
            .collect())
    }
}

#[async_trait]
impl Repository<Company> for PostgresCompanyRepository {
    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, DomainError> {
        let Some(model) = companies::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let staff = model
            .find_related(employees::Entity)
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Some(to_company(model, staff)))
    }

    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        let results = companies::Entity::find()
            .order_by_asc(companies::Column::Id)
            .all(&self.db)
            .await?;

        self.with_employees(results).await
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Company>, DomainError> {
        let paginator = companies::Entity::find()
            .order_by_asc(companies::Column::Id)
            .paginate(&self.db, request.size());

        let totals = paginator.num_items_and_pages().await?;
        let results = paginator.fetch_page(request.page()).await?;
        let content = self.with_employees(results).await?;

        Ok(Page::new(content, request, totals.number_of_items))
    }

    async fn save(&self, company: &Company) -> Result<Company, DomainError> {
        let txn = self.db.begin().await?;

        let stored_id = match company.id {
            Some(id) => companies::Entity::find_by_id(id.0)
                .one(&txn)
                .await?
                .map(|m| m.id),
            None => None,
        };

        let mut model = companies::ActiveModel {
            id: NotSet,
            company_name: Set(company.company_name.clone()),
            employees_number: Set(company.employees_number),
        };
        let saved = match stored_id {
            Some(id) => {
                model.id = Set(id);
                model.update(&txn).await?
            }
            None => model.insert(&txn).await?,
        };

        let mut staff = Vec::with_capacity(company.employees.len());
        for employee in &company.employees {
            let linked = Employee {
                company_id: Some(CompanyId(saved.id)),
                ..employee.clone()
            };
            staff.push(upsert(&txn, &linked).await?);
        }

        // Rows that used to belong to this company but are no longer listed
        let kept: Vec<i32> = staff.iter().map(|m| m.id).collect();
        employees::Entity::update_many()
            .col_expr(employees::Column::CompanyId, Expr::value(Option::<i32>::None))
            .filter(employees::Column::CompanyId.eq(saved.id))
            .filter(employees::Column::Id.is_not_in(kept))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(to_company(saved, staff))
    }

    /// Employee rows are detached by the foreign key, not deleted
    async fn delete(&self, id: CompanyId) -> Result<(), DomainError> {
        companies::Entity::delete_by_id(id.0).exec(&self.db).await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        companies::Entity::delete_many().exec(&self.db).await?;

        Ok(())
    }
}

/// Convert SeaORM models to the domain aggregate
fn to_company(model: companies::Model, staff: Vec<employees::Model>) -> Company {
    Company {
        id: Some(CompanyId(model.id)),
        company_name: model.company_name,
        employees_number: model.employees_number,
        employees: staff.into_iter().map(Employee::from).collect(),
    }
}
