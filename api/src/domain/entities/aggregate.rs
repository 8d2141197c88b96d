//! Shared behaviour of persisted aggregates
//!
//! Company and Employee are both updated through the same load, patch, persist
//! routine. This trait is the seam that routine is written against.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A persisted domain object with a store-assigned identity
pub trait Aggregate: Clone + Send + Sync + 'static {
    /// Identifier type, copied freely between path, body and store
    type Id: Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static;

    /// Human readable kind, used in error messages and logs
    const KIND: &'static str;

    /// Identity, absent until the entity has been persisted
    fn id(&self) -> Option<Self::Id>;

    /// Replace every mutable field with the one carried by `incoming`.
    ///
    /// Identity is never touched.
    fn apply_update(&mut self, incoming: Self);
}
