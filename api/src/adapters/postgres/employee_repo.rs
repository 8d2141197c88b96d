//! PostgreSQL adapter for EmployeeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{CompanyId, Employee, EmployeeId};
use crate::domain::ports::{EmployeeRepository, Page, PageRequest, Repository};
use crate::entity::employees;
use crate::error::DomainError;

/// PostgreSQL implementation of EmployeeRepository
pub struct PostgresEmployeeRepository {
    db: DatabaseConnection,
}

impl PostgresEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Update the row when the employee's ID is stored, otherwise insert a new row
/// and let the database assign the ID.
pub(super) async fn upsert<C>(conn: &C, employee: &Employee) -> Result<employees::Model, DbErr>
where
    C: ConnectionTrait,
{
    let stored_id = match employee.id {
        Some(id) => employees::Entity::find_by_id(id.0)
            .one(conn)
            .await?
            .map(|m| m.id),
        None => None,
    };

    let mut model = employees::ActiveModel {
        id: NotSet,
        name: Set(employee.name.clone()),
        age: Set(employee.age),
        gender: Set(employee.gender.clone()),
        salary: Set(employee.salary),
        company_id: Set(employee.company_id.map(|id| id.0)),
    };

    match stored_id {
        Some(id) => {
            model.id = Set(id);
            model.update(conn).await
        }
        None => model.insert(conn).await,
    }
}

#[async_trait]
impl Repository<Employee> for PostgresEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let results = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Employee>, DomainError> {
        let paginator = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .paginate(&self.db, request.size());

        let totals = paginator.num_items_and_pages().await?;
        let results = paginator.fetch_page(request.page()).await?;

        Ok(Page::new(
            results.into_iter().map(|m| m.into()).collect(),
            request,
            totals.number_of_items,
        ))
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let result = upsert(&self.db, employee).await?;

        Ok(result.into())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), DomainError> {
        employees::Entity::delete_by_id(id.0).exec(&self.db).await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        employees::Entity::delete_many().exec(&self.db).await?;

        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_by_gender(&self, gender: &str) -> Result<Vec<Employee>, DomainError> {
        let results = employees::Entity::find()
            .filter(employees::Column::Gender.eq(gender))
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Employee {
            id: Some(EmployeeId(model.id)),
            name: model.name,
            age: model.age,
            gender: model.gender,
            salary: model.salary,
            company_id: model.company_id.map(CompanyId),
        }
    }
}
