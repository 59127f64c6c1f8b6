//! Canonical expense ledger and its persistence scheduling.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use spendly_domain::{Category, ExpenseRecord};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::storage::ExpenseStorage;

/// Owns the authoritative ordered sequence of expenses and keeps it
/// synchronized with durable storage.
///
/// Mutations apply to the in-memory ledger synchronously; each one then
/// hands a full snapshot to a background writer thread, fire-and-forget.
/// Writes are issued in mutation order and never batched, but their
/// completion is not awaited, so a crash between a mutation and its write
/// can lose that mutation on restart. The in-memory ledger stays
/// authoritative for the process lifetime regardless of write outcome.
pub struct LedgerStore {
    records: Vec<ExpenseRecord>,
    writer: SnapshotWriter,
}

impl LedgerStore {
    /// Restores the ledger from the storage slot. A slot that was never
    /// written starts the ledger empty; so does an unreadable payload,
    /// with a warning. Startup never fails on bad data.
    pub fn restore<S: ExpenseStorage>(storage: S) -> Self {
        let records = match storage.load() {
            Ok(Some(records)) => records,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("stored expense snapshot unreadable, starting empty: {err}");
                Vec::new()
            }
        };
        Self {
            records,
            writer: SnapshotWriter::spawn(storage),
        }
    }

    /// Appends a new expense. `raw_amount` must parse to a non-negative
    /// finite number; anything else (empty, non-numeric, NaN, negative) is
    /// a silent no-op returning `None` rather than an error. Returns the
    /// id of the appended record.
    pub fn add(&mut self, raw_amount: &str, note: &str, category: Option<Category>) -> Option<Uuid> {
        let amount = parse_amount(raw_amount)?;
        let record = ExpenseRecord::new(amount, note, category);
        let id = record.id;
        self.records.push(record);
        self.schedule_write();
        Some(id)
    }

    /// Removes the record with the matching id; absent ids are a no-op,
    /// not an error. A write is scheduled either way, mirroring the
    /// save-on-every-mutation contract.
    pub fn delete(&mut self, id: Uuid) {
        self.records.retain(|record| record.id != id);
        self.schedule_write();
    }

    /// Empties the ledger unconditionally.
    pub fn clear(&mut self) {
        self.records.clear();
        self.schedule_write();
    }

    /// Read access to the current sequence. Callers must not rely on the
    /// slice surviving the next mutation.
    pub fn snapshot(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Blocks until every write scheduled so far has been attempted.
    pub fn flush(&self) {
        self.writer.flush();
    }

    fn schedule_write(&self) {
        self.writer.schedule(self.records.clone());
    }
}

enum WriteRequest {
    Persist(Vec<ExpenseRecord>),
    Flush(Sender<()>),
}

/// Background thread draining snapshot writes in order. Failures are
/// logged, never retried and never surfaced to the ledger.
struct SnapshotWriter {
    tx: Option<Sender<WriteRequest>>,
    handle: Option<JoinHandle<()>>,
}

impl SnapshotWriter {
    fn spawn<S: ExpenseStorage>(storage: S) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            for request in rx {
                match request {
                    WriteRequest::Persist(snapshot) => {
                        if let Err(err) = storage.save(&snapshot) {
                            warn!("expense snapshot write failed: {err}");
                        } else {
                            debug!(records = snapshot.len(), "expense snapshot written");
                        }
                    }
                    WriteRequest::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });
        Self {
            tx: Some(tx),
            handle: Some(handle),
        }
    }

    fn schedule(&self, snapshot: Vec<ExpenseRecord>) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(WriteRequest::Persist(snapshot));
        }
    }

    fn flush(&self) {
        if let Some(tx) = &self.tx {
            let (ack_tx, ack_rx) = mpsc::channel();
            if tx.send(WriteRequest::Flush(ack_tx)).is_ok() {
                let _ = ack_rx.recv();
            }
        }
    }
}

impl Drop for SnapshotWriter {
    fn drop(&mut self) {
        // Disconnecting the channel lets the thread finish its queue.
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Soft validation of raw amount input.
fn parse_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().parse().ok()?;
    (amount.is_finite() && amount >= 0.0).then_some(amount)
}
