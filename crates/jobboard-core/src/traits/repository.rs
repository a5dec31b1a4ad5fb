//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Read/insert repository over one entity table.
///
/// Each call acquires its own database session and releases it before
/// returning, so implementations hold no per-request state.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: ?Sized + Sync,
{
    /// Return every stored entity in insertion order.
    async fn list_all(&self) -> AppResult<Vec<Entity>>;

    /// Point lookup by primary key. `Ok(None)` when no row matches.
    async fn get_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Persist a new entity and return it as stored.
    ///
    /// Fails with a `Conflict` error when the primary key already exists.
    async fn insert(&self, entity: &Entity) -> AppResult<Entity>;

    /// Persist several entities atomically: either all are stored or none.
    async fn insert_many(&self, entities: &[Entity]) -> AppResult<u64>;

    /// Count stored entities.
    async fn count(&self) -> AppResult<u64>;
}
