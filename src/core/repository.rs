//! Record repository seam.
//!
//! Views read and write records only through [`RecordRepository`], so the
//! backing store can change without touching them.

use crate::core::editor::apply_edit;
use crate::errors::AppResult;
use crate::models::record::Record;

pub trait RecordRepository<R: Record> {
    fn get(&self, id: &str) -> AppResult<Option<R>>;

    /// All records in insertion order.
    fn list(&self) -> AppResult<Vec<R>>;

    /// Replace the record with the same id, or append it.
    fn upsert(&mut self, record: R) -> AppResult<()>;
}

/// Plain in-memory set.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository<R> {
    records: Vec<R>,
}

impl<R: Record> MemoryRepository<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }
}

impl<R: Record> RecordRepository<R> for MemoryRepository<R> {
    fn get(&self, id: &str) -> AppResult<Option<R>> {
        Ok(self.records.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self) -> AppResult<Vec<R>> {
        Ok(self.records.clone())
    }

    fn upsert(&mut self, record: R) -> AppResult<()> {
        if self.records.iter().any(|r| r.id() == record.id()) {
            self.records = apply_edit(&self.records, record);
        } else {
            self.records.push(record);
        }
        Ok(())
    }
}

/// Next free numeric id: one past the highest numeric id in use.
/// Records are never deleted, so ids handed out here are never reused.
pub fn next_id<R: Record>(records: &[R]) -> String {
    let max = records
        .iter()
        .filter_map(|r| r.id().parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}
