//! `groundwork-repo` — persistence and dispatch contracts.
//!
//! The traits here are the seams between the domain core and its external
//! collaborators: a storage engine implements [`Repository`], an orchestrator
//! drives [`UnitOfWork`], and a messaging layer implements
//! [`EventDispatcher`]. This workspace ships no implementations beyond test
//! doubles — persistence and transport belong to the host application.

pub mod dispatch;
pub mod repository;
pub mod unit_of_work;

pub use dispatch::{EventDispatcher, EventHandler};
pub use repository::{ReadRepository, Repository};
pub use unit_of_work::UnitOfWork;
