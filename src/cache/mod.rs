//! In-memory cache of resolved sections.
//! Lives for the whole process; cleared in full when the data-source mode
//! flips, never evicted entry by entry.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};


/// Cloneable handle to the shared cache.
///
/// Writes are idempotent last-write-wins, so concurrent misses on the same
/// key may each rescan the store and race the insert without corruption.
#[derive(Clone, Default)]
pub struct SectionCache {
    inner: Arc<Mutex<HashMap<String, Value>>>,
}

impl SectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-string lookup of the originally requested key.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.lock().unwrap().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: Value) {
        self.inner.lock().unwrap().insert(key.to_string(), value);
    }

    /// Full clear, e.g. on a live/local mode toggle.
    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
