//! Durable event log: append-only record storage for committed events.
//!
//! The log is the only persisted artifact the core produces. Each record is
//! one committed state transition with the wall-clock time it was recorded;
//! the ordered sequence is sufficient to reconstruct the model from the
//! empty initial state by sequential replay.
//!
//! [`FileLog`] encodes one JSON object per line and flushes after every
//! append, so a record is handed to the operating system before the write
//! that produced it is considered committed. `fsync` additionally forces
//! the data to disk per append, trading write latency for durability
//! across power loss.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use muster_types::ModelEvent;
use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// One persisted log record: a committed event plus its recording time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Wall-clock time the record was appended.
    pub recorded_at: DateTime<Utc>,
    /// The committed state transition.
    #[serde(flatten)]
    pub event: ModelEvent,
}

impl LogRecord {
    /// Wrap an event in a record stamped with the current time.
    pub fn new(event: ModelEvent) -> Self {
        Self {
            recorded_at: Utc::now(),
            event,
        }
    }
}

/// Append-only sink for committed event records.
///
/// `append` must be atomic from the caller's point of view: either the
/// record is durably accepted and `Ok` is returned, or the sink is
/// unchanged and an error is returned. The state container relies on this
/// to keep the model and the log in lockstep.
pub trait EventLog {
    /// Append one record to the end of the log.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] if the record could not be encoded or stored.
    fn append(&mut self, record: &LogRecord) -> Result<(), LogError>;
}

/// In-memory event log, for tests and ephemeral stores.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Vec<LogRecord>,
}

impl MemoryLog {
    /// Create an empty in-memory log.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// The records appended so far, in append order.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }
}

impl EventLog for MemoryLog {
    fn append(&mut self, record: &LogRecord) -> Result<(), LogError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// File-backed event log: one JSON object per line, append-only.
#[derive(Debug)]
pub struct FileLog {
    writer: BufWriter<File>,
    fsync: bool,
}

impl FileLog {
    /// Open (or create) the log file at `path` and read back every record
    /// already in it, in order, for replay.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] if the file cannot be read or created, or if an
    /// existing line is not a valid record.
    pub fn open(path: &Path, fsync: bool) -> Result<(Self, Vec<LogRecord>), LogError> {
        let mut records = Vec::new();
        match File::open(path) {
            Ok(file) => {
                for line in BufReader::new(file).lines() {
                    let line = line?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    records.push(serde_json::from_str(&line)?);
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(LogError::Io(err)),
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok((
            Self {
                writer: BufWriter::new(file),
                fsync,
            },
            records,
        ))
    }
}

impl EventLog for FileLog {
    fn append(&mut self, record: &LogRecord) -> Result<(), LogError> {
        // Encode to a buffer first so a serialization failure leaves the
        // file without a partial line.
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        self.writer.write_all(&line)?;
        self.writer.flush()?;
        if self.fsync {
            self.writer.get_ref().sync_data()?;
        }
        Ok(())
    }
}
