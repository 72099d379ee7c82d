//! Domain-event dispatch contracts.

use async_trait::async_trait;
use groundwork_core::{DomainEvent, DomainResult};
use tracing::debug;

/// Handles one event type.
#[async_trait]
pub trait EventHandler<E>: Send + Sync
where
    E: DomainEvent + Send + Sync,
{
    async fn handle(&self, event: &E) -> DomainResult<()>;
}

/// Dispatches events drained from an aggregate's log.
///
/// The orchestrator clears the aggregate and hands the events over in
/// recorded order; the aggregate never dispatches its own events.
#[async_trait]
pub trait EventDispatcher<E>: Send + Sync
where
    E: DomainEvent + Send + Sync,
{
    async fn dispatch(&self, event: &E) -> DomainResult<()>;

    /// Dispatch a batch in order, stopping at the first failure.
    async fn dispatch_all(&self, events: &[E]) -> DomainResult<()> {
        for event in events {
            debug!(event_type = event.event_type(), "dispatching domain event");
            self.dispatch(event).await?;
        }
        Ok(())
    }
}
