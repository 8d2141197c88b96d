//! Schema bootstrap
//!
//! Creates the `companies` and `employees` tables from the SeaORM entity
//! definitions when they do not exist yet.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityName, EntityTrait, Schema};

use crate::entity::{companies, employees};

/// Create missing tables. Safe to run on every start.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    // `employees` references `companies`, so order matters
    create_table_if_missing(db, companies::Entity).await?;
    create_table_if_missing(db, employees::Entity).await?;
    Ok(())
}

async fn create_table_if_missing<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::debug!(table = entity.table_name(), "Ensured table exists");
    Ok(())
}
