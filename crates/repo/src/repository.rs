//! Repository contracts.

use async_trait::async_trait;
use groundwork_core::{DomainResult, Entity};
use groundwork_spec::{Predicate, Specification};

/// Read-only queries over an entity set.
///
/// Cancellation follows the usual async contract: dropping the returned
/// future abandons the operation. Implementations translate predicates and
/// specifications into their own query language; the domain never sees how.
#[async_trait]
pub trait ReadRepository<T>: Send + Sync
where
    T: Entity + Send + Sync + 'static,
    T::Id: Send + Sync,
{
    /// The entity with the given identifier, if present.
    async fn get_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// Every entity in the set.
    async fn get_all(&self) -> DomainResult<Vec<T>>;

    /// Entities matching a bare predicate.
    async fn find(&self, predicate: &Predicate) -> DomainResult<Vec<T>>;

    /// Entities satisfying a full specification (criteria, ordering, paging).
    async fn find_by_spec(&self, specification: &Specification<T>) -> DomainResult<Vec<T>>;

    /// First match, if any.
    async fn first(&self, predicate: &Predicate) -> DomainResult<Option<T>>;

    /// Whether any entity matches.
    async fn any(&self, predicate: &Predicate) -> DomainResult<bool>;

    /// Number of matching entities.
    async fn count(&self, predicate: &Predicate) -> DomainResult<u64>;
}

/// Full read/write repository.
///
/// Mutations record no domain events — the aggregate itself does, and the
/// orchestrator dispatches them after the unit of work commits.
#[async_trait]
pub trait Repository<T>: ReadRepository<T>
where
    T: Entity + Send + Sync + 'static,
    T::Id: Send + Sync,
{
    async fn add(&self, entity: T) -> DomainResult<()>;

    async fn add_all(&self, entities: Vec<T>) -> DomainResult<()>;

    async fn update(&self, entity: T) -> DomainResult<()>;

    async fn remove(&self, entity: T) -> DomainResult<()>;

    /// Remove by identifier; `Ok(false)` when nothing matched.
    async fn remove_by_id(&self, id: &T::Id) -> DomainResult<bool>;
}
