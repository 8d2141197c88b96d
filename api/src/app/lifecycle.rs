//! Load, patch, persist
//!
//! The existence and identity checks shared by every aggregate live here so
//! that companies and employees follow exactly the same update and delete
//! rules.

use crate::domain::entities::Aggregate;
use crate::domain::ports::Repository;
use crate::error::DomainError;

/// Load an aggregate or fail with `NoSuchData`
pub async fn find_existing<T, R>(repo: &R, id: T::Id) -> Result<T, DomainError>
where
    T: Aggregate,
    R: Repository<T> + ?Sized,
{
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NoSuchData(format!("{} {} not found", T::KIND, id)))
}

/// Reject a body whose ID disagrees with the path ID
pub fn ensure_same_id<T: Aggregate>(path_id: T::Id, incoming: &T) -> Result<(), DomainError> {
    match incoming.id() {
        Some(body_id) if body_id == path_id => Ok(()),
        Some(body_id) => Err(DomainError::IllegalOperation(format!(
            "{} path id {} does not match body id {}",
            T::KIND,
            path_id,
            body_id
        ))),
        None => Err(DomainError::IllegalOperation(format!(
            "{} path id {} does not match missing body id",
            T::KIND,
            path_id
        ))),
    }
}

/// Apply `incoming` onto the stored aggregate and persist the result.
///
/// The ID check runs before any repository call.
pub async fn update_existing<T, R>(repo: &R, id: T::Id, incoming: T) -> Result<T, DomainError>
where
    T: Aggregate,
    R: Repository<T> + ?Sized,
{
    ensure_same_id(id, &incoming)?;

    let mut existing = find_existing(repo, id).await?;
    existing.apply_update(incoming);

    let saved = repo.save(&existing).await?;
    tracing::info!(kind = T::KIND, id = %id, "Updated");
    Ok(saved)
}

/// Delete an aggregate and return its last stored state
pub async fn delete_existing<T, R>(repo: &R, id: T::Id) -> Result<T, DomainError>
where
    T: Aggregate,
    R: Repository<T> + ?Sized,
{
    let snapshot = find_existing(repo, id).await?;
    repo.delete(id).await?;
    tracing::info!(kind = T::KIND, id = %id, "Deleted");
    Ok(snapshot)
}
