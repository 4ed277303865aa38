//! Error types for the state container and the event log.
//!
//! [`LogError`] covers the durability layer (I/O and encoding);
//! [`StoreError`] is what `Store` accessors return to callers. A
//! [`StoreError::Rejected`] write is an ordinary per-call failure; a
//! [`StoreError::Durability`] failure means the event could not be
//! recorded — the write is aborted with no visible state change, and the
//! condition is logged at error level because repeated occurrences mean
//! the process can no longer make its history durable.

use muster_model::ModelError;

/// Errors from the durable event log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Reading or writing the underlying storage failed.
    #[error("event log I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding an event record failed.
    #[error("event record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors returned by the `Store` accessors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The mutator (or event application) rejected the write; the model is
    /// unchanged.
    #[error("write rejected: {0}")]
    Rejected(#[from] ModelError),

    /// The event could not be durably recorded; the write was aborted and
    /// the model is unchanged.
    #[error("event not recorded: {0}")]
    Durability(#[from] LogError),

    /// A recorded event failed to apply during replay. Indicates a corrupt
    /// or truncated log.
    #[error("replay failed at record {seq}: {source}")]
    Replay {
        /// Zero-based index of the offending record in the log.
        seq: u64,
        /// The application failure.
        #[source]
        source: ModelError,
    },
}
