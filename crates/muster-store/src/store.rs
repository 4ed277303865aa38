//! The transactional state container guarding the shared domain model.
//!
//! One [`Store`] instance serves every concurrent caller for the lifetime
//! of the process. It owns the only [`Model`] and never leaks a reference
//! to it: callers pass closures into [`Store::read`] and [`Store::write`]
//! and get results back *by value*. Returning results through the closure's
//! return value (rather than assignment to a captured outer variable) is
//! what makes "no model reference outlives its accessor call" a structural
//! guarantee instead of a convention.
//!
//! # Locking discipline
//!
//! Reads share a read lock and run in parallel; writes take the write lock
//! and are serialized with each other and with all reads. The durable
//! append happens *inside* the write critical section, so "event recorded"
//! and "state mutated" are one atomic step from every other accessor's
//! point of view: no reader can observe uncommitted state, and no event is
//! recorded for a state that was not actually installed.
//!
//! # Commit sequence
//!
//! ```text
//! write lock
//!   mutator(&model)    -> (value, Some(event))   validation, no mutation
//!   scratch = model.clone(); scratch.apply(event) validation of the event
//!   log.append(record)                            durability point
//!   model = scratch                               installation
//! unlock
//! ```
//!
//! Either failure aborts before installation, so a failed write leaves
//! both the model and the log exactly as they were.

use std::sync::{PoisonError, RwLock};

use muster_model::{Model, ModelError};
use muster_types::ModelEvent;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::log::{EventLog, FileLog, LogRecord};

/// The state guarded by the container's lock: the live model and the log
/// it must stay in lockstep with.
#[derive(Debug)]
struct Inner<L> {
    model: Model,
    log: L,
}

/// Transactional read/write gateway over the shared domain model.
#[derive(Debug)]
pub struct Store<L: EventLog> {
    inner: RwLock<Inner<L>>,
}

impl<L: EventLog> Store<L> {
    /// Create a store over an empty model and the given (empty) log.
    pub const fn new(log: L) -> Self {
        Self {
            inner: RwLock::new(Inner {
                model: Model::new(),
                log,
            }),
        }
    }

    /// Create a store by replaying previously recorded events from the
    /// empty initial model. `log` must be positioned at the end of those
    /// records, ready for appends.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Replay`] if a record fails to apply — a
    /// corrupt or out-of-order log.
    pub fn replay(log: L, records: &[LogRecord]) -> Result<Self, StoreError> {
        let mut model = Model::new();
        for (seq, record) in records.iter().enumerate() {
            model
                .apply(&record.event)
                .map_err(|source| StoreError::Replay {
                    seq: u64::try_from(seq).unwrap_or(u64::MAX),
                    source,
                })?;
        }
        tracing::debug!(records = records.len(), "model restored from event log");
        Ok(Self {
            inner: RwLock::new(Inner { model, log }),
        })
    }

    /// Observe the model under the shared lock.
    ///
    /// The observer sees one consistent point-in-time state — never a
    /// half-applied write — and its return value is passed through to the
    /// caller. Concurrent `read` calls proceed in parallel.
    pub fn read<R>(&self, observer: impl FnOnce(&Model) -> R) -> R {
        // Lock poisoning is survivable here: the committed model is only
        // ever replaced wholesale after a successful append, so a panicked
        // accessor cannot have left it half-applied.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        observer(&guard.model)
    }

    /// Run one write transaction under the exclusive lock.
    ///
    /// The mutator inspects the current model and returns a caller value
    /// plus at most one event describing the transition it wants
    /// committed; `None` means no-op and nothing is recorded. On success
    /// the event has been durably appended and applied, and a subsequent
    /// [`Store::read`] observes the post-mutation state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] if the mutator or event
    /// application fails, or [`StoreError::Durability`] if the append
    /// fails. In every error case the model and the log are unchanged.
    pub fn write<R>(
        &self,
        mutator: impl FnOnce(&Model) -> Result<(R, Option<ModelEvent>), ModelError>,
    ) -> Result<R, StoreError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let (value, event) = match mutator(&guard.model) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "write rejected");
                return Err(StoreError::Rejected(err));
            }
        };
        let Some(event) = event else {
            return Ok(value);
        };

        let mut scratch = guard.model.clone();
        scratch.apply(&event).map_err(StoreError::Rejected)?;

        let record = LogRecord::new(event);
        if let Err(err) = guard.log.append(&record) {
            tracing::error!(
                error = %err,
                kind = record.event.kind(),
                "event append failed; write aborted with state unchanged"
            );
            return Err(StoreError::Durability(err));
        }

        tracing::debug!(kind = record.event.kind(), "event committed");
        guard.model = scratch;
        Ok(value)
    }

    /// Clone the current committed model.
    pub fn snapshot(&self) -> Model {
        self.read(Clone::clone)
    }

    /// Consume the store and hand back its event log.
    pub fn into_log(self) -> L {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .log
    }
}

impl Store<FileLog> {
    /// Open a file-backed store: read the log at the configured path,
    /// replay it, and position the log for appends.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Durability`] if the log cannot be read and
    /// [`StoreError::Replay`] if a record fails to apply.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let (log, records) = FileLog::open(&config.path, config.fsync)?;
        Self::replay(log, &records)
    }
}

#[cfg(test)]
mod tests {
    use muster_types::CampaignId;

    use crate::error::LogError;
    use crate::log::MemoryLog;

    use super::*;

    /// A log that rejects every append, for durability-failure tests.
    struct FailingLog;

    impl EventLog for FailingLog {
        fn append(&mut self, _record: &LogRecord) -> Result<(), LogError> {
            Err(LogError::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn noop_write_records_nothing() {
        let store = Store::new(MemoryLog::new());
        let result = store.write(|_| Ok(("nothing to do", None)));
        assert!(matches!(result, Ok("nothing to do")));
        assert!(store.into_log().records().is_empty());
    }

    #[test]
    fn rejected_write_surfaces_the_model_error() {
        let store = Store::new(MemoryLog::new());
        let result = store.write(|model| {
            model
                .retitle_campaign(CampaignId(1), "x".to_owned())
                .map(|event| ((), Some(event)))
        });
        assert!(matches!(
            result,
            Err(StoreError::Rejected(ModelError::CampaignNotFound(_)))
        ));
        assert!(store.into_log().records().is_empty());
    }

    #[test]
    fn durability_failure_leaves_the_model_unchanged() {
        let store = Store::new(FailingLog);
        let before = store.snapshot();

        let result = store.write(|model| {
            let (id, event) = model.create_campaign("Trip".to_owned(), Vec::new());
            Ok((id, Some(event)))
        });

        assert!(matches!(result, Err(StoreError::Durability(_))));
        assert_eq!(store.snapshot(), before);
        // The would-be campaign is not observable.
        assert!(store.read(|model| model.campaign(CampaignId(1)).is_err()));
    }

    #[test]
    fn committed_write_is_visible_to_the_next_read() {
        let store = Store::new(MemoryLog::new());
        let id = store.write(|model| {
            let (id, event) = model.create_campaign("Trip".to_owned(), vec!["Mon".to_owned()]);
            Ok((id, Some(event)))
        });
        assert!(id.is_ok());
        let id = id.unwrap_or(CampaignId(0));

        let title = store.read(|model| model.campaign(id).map(|c| c.title.clone()));
        assert!(matches!(title.as_deref(), Ok("Trip")));
    }
}
