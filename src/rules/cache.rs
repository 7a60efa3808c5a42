//! Process-wide cache of parsed rule tables.
//!
//! Rule documents are read once per canonical path and shared afterwards.
//! Entries are never invalidated; a changed file is picked up only by a new
//! process.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::error::Result;

use super::table::{load_rows, RuleRow};

type RowMap = HashMap<PathBuf, Arc<Vec<RuleRow>>>;

static RULE_ROWS: Lazy<Mutex<RowMap>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Handle to the shared rule table cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleCache;

impl RuleCache {
    /// Load the credit table rows of `path`, parsing the file on first use.
    ///
    /// Two callers racing on a cold entry may both parse the file; the first
    /// insert wins and both get the same rows.
    pub fn credit_rows(path: &Path) -> Result<Arc<Vec<RuleRow>>> {
        let key = fs::canonicalize(path)?;
        if let Some(rows) = Self::lock().get(&key) {
            return Ok(Arc::clone(rows));
        }

        let text = fs::read_to_string(&key)?;
        let rows = Arc::new(load_rows(&text));
        log::debug!("Loaded {} rule rows from {}", rows.len(), key.display());

        let mut cache = Self::lock();
        Ok(Arc::clone(cache.entry(key).or_insert(rows)))
    }

    fn lock() -> MutexGuard<'static, RowMap> {
        RULE_ROWS.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
