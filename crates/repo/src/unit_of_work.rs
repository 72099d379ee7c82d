//! Unit-of-work contract.

use async_trait::async_trait;
use groundwork_core::DomainResult;

/// Coordinates the work of multiple repositories into atomic commits.
///
/// The domain core never calls this itself; surrounding orchestration does,
/// typically: begin, mutate through repositories, save, commit (or roll
/// back), then dispatch the aggregates' recorded events.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Flush pending changes to the underlying store; returns the number of
    /// state entries written.
    async fn save_changes(&self) -> DomainResult<u64>;

    async fn begin_transaction(&self) -> DomainResult<()>;

    async fn commit_transaction(&self) -> DomainResult<()>;

    async fn rollback_transaction(&self) -> DomainResult<()>;
}
