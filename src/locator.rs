//! Section locator: cache → snapshot scan → synthetic fallback.

use crate::cache::SectionCache;
use crate::key::GameKey;
use crate::snapshot::{self, SnapshotError, SnapshotStore};
use crate::synth;
use serde_json::Value;
use tracing::{debug, info, warn};

pub struct Locator {
    store: SnapshotStore,
    cache: SectionCache,
}

impl Locator {
    pub fn new(store: SnapshotStore, cache: SectionCache) -> Self {
        Self { store, cache }
    }

    /// Resolve a section key to a JSON value. Total: any failure along the
    /// way ends in the synthesizer rather than an error.
    ///
    /// Snapshot hits are cached under the originally requested key, even
    /// when a relaxed match served a record captured under a different one.
    /// Synthesized values are not cached here.
    pub fn locate(&self, key: &str) -> Value {
        if let Some(hit) = self.cache.get(key) {
            debug!("cache hit for {key}");
            return hit;
        }

        match self.lookup(key) {
            Ok(value) => {
                self.cache.insert(key, value.clone());
                value
            }
            Err(err) => {
                warn!("no usable section for {key} ({err}); synthesizing fallback");
                synth::synthesize(key, self)
            }
        }
    }

    /// One full pass over the store: exact delimiter first, then the relaxed
    /// game-key search. Fails closed when the store cannot be read.
    fn lookup(&self, key: &str) -> Result<Value, SnapshotError> {
        let content = self.store.load()?;

        let section = snapshot::find_section(&content, key).or_else(|| {
            let game_key = GameKey::parse(key)?;
            let section = snapshot::find_relaxed(&content, &game_key)?;
            info!("using alternative section {} for {key}", section.marker);
            Some(section)
        });

        let section = section.ok_or_else(|| SnapshotError::NotFound(key.to_string()))?;
        Ok(serde_json::from_str(section.body)?)
    }
}
