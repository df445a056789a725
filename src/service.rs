//! The facade collaborators consume: one function from section key to JSON
//! value, plus the data-source mode flag and its cache-clear trigger.

use crate::cache::SectionCache;
use crate::config::Config;
use crate::live::LiveSource;
use crate::locator::Locator;
use crate::model::TeamList;
use crate::snapshot::SnapshotStore;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

pub struct DataService {
    cache: SectionCache,
    locator: Locator,
    live: LiveSource,
    live_mode: AtomicBool,
}

impl DataService {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let cache = SectionCache::new();
        let locator = Locator::new(
            SnapshotStore::new(&config.snapshot_path),
            cache.clone(),
        );
        let live = LiveSource::new(&config.api_base, config.http_timeout)?;
        Ok(Self {
            cache,
            locator,
            live,
            live_mode: AtomicBool::new(config.live),
        })
    }

    /// Resolve a section key to a JSON value. In live mode the remote API is
    /// tried first and a success is cached under the requested key; any
    /// failure degrades to the local path. Total: never errors outward.
    pub fn get(&self, key: &str) -> Value {
        if self.live_mode() {
            match self.live.fetch(key) {
                Ok(value) => {
                    self.cache.insert(key, value.clone());
                    return value;
                }
                Err(err) => {
                    warn!("live fetch for {key} failed ({err}); falling back to local data");
                }
            }
        }
        self.locator.locate(key)
    }

    pub fn live_mode(&self) -> bool {
        self.live_mode.load(Ordering::SeqCst)
    }

    /// Switch data source. Flipping the flag clears the whole cache so stale
    /// entries from the other source cannot leak across.
    pub fn set_live_mode(&self, live: bool) {
        let was = self.live_mode.swap(live, Ordering::SeqCst);
        if was != live {
            self.cache.clear();
            info!(
                "data source switched to {}",
                if live { "live API" } else { "local snapshot" }
            );
        }
    }

    pub fn toggle_live_mode(&self) -> bool {
        let live = !self.live_mode();
        self.set_live_mode(live);
        live
    }

    /// Schedule key for the current mode: the local snapshot stores one
    /// undated schedule; the live API wants a sport id and a date.
    pub fn schedule_key(&self, date: Option<&str>) -> String {
        if self.live_mode() {
            let date = date
                .map(str::to_string)
                .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            format!("/api/v1/schedule?sportId=1&date={date}")
        } else {
            "/api/v1/schedule".to_string()
        }
    }

    /// One team out of the teams list, by id.
    pub fn team(&self, team_id: i64) -> Option<Value> {
        TeamList::from_value(self.get("/api/v1/teams"))
            .find(team_id)
            .cloned()
    }

    pub fn cache(&self) -> &SectionCache {
        &self.cache
    }
}
