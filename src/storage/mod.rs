//! Local key-value storage capability.
//!
//! Every persisted session value (role, username, branch, in-progress shift)
//! goes through [`KeyValueStore`]. The SQLite-backed implementation lives in
//! `db::kv`; [`MemoryStore`] keeps everything in process.

use crate::errors::AppResult;
use std::collections::BTreeMap;

pub const KEY_ROLE: &str = "userRole";
pub const KEY_USERNAME: &str = "username";
pub const KEY_BRANCH: &str = "branchName";
pub const KEY_BRANCH_LEGACY: &str = "userBranch";
pub const KEY_EMPLOYEE: &str = "employeeName";
pub const KEY_SHIFT_IMAGE: &str = "tankerImage";
pub const KEY_START_TIME: &str = "startTime";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
    fn clear(&mut self) -> AppResult<()>;

    /// Write every entry or none of them. On failure the previous values of
    /// the keys already written are put back.
    fn set_all(&mut self, entries: &[(&str, &str)]) -> AppResult<()> {
        let mut previous: Vec<(&str, Option<String>)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let before = self.get(key)?;
            if let Err(e) = self.set(key, value) {
                for (done, old) in previous.into_iter().rev() {
                    // best effort, the original error is the one reported
                    let _ = match old {
                        Some(v) => self.set(done, &v),
                        None => self.remove(done),
                    };
                }
                return Err(e);
            }
            previous.push((*key, before));
        }
        Ok(())
    }

    fn remove_all(&mut self, keys: &[&str]) -> AppResult<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set`/`remove`/`clear` calls served so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.writes += 1;
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.writes += 1;
        self.entries.clear();
        Ok(())
    }
}
