//! Transactional state container and durable event log for the Muster
//! campaign planner.
//!
//! This crate is the access-coordination layer beneath the API surface:
//! one shared in-memory [`Model`](muster_model::Model) guarded by a
//! single-writer/multi-reader gateway, with every committed write recorded
//! as exactly one event for replay.
//!
//! # Architecture
//!
//! ```text
//! API resolvers (external collaborator)
//!     |
//!     +-- Store::read(|model| ...)   shared lock, parallel readers
//!     |
//!     +-- Store::write(|model| ...)  exclusive lock
//!         |-- mutator validates and returns (value, event)
//!         |-- EventLog::append       (durability point, inside the lock)
//!         +-- Model::apply           (installed only after the append)
//! ```
//!
//! The ordered log is the definition of model history: replaying it from
//! the empty model reproduces the live state exactly, which is how
//! [`Store::open`] restores state at process start.
//!
//! # Modules
//!
//! - [`store`] -- The [`Store`] gateway (locking, commit sequence, replay)
//! - [`log`] -- [`EventLog`] trait, [`FileLog`], [`MemoryLog`]
//! - [`config`] -- [`StoreConfig`] YAML loading
//! - [`error`] -- [`StoreError`] and [`LogError`]

pub mod config;
pub mod error;
pub mod log;
pub mod store;

// Re-export primary types for convenience.
pub use config::{ConfigError, StoreConfig};
pub use error::{LogError, StoreError};
pub use log::{EventLog, FileLog, LogRecord, MemoryLog};
pub use store::Store;
