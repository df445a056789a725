//! Fallback synthesizer: fabricates a structurally plausible document when
//! no real data is resolvable for a key.
//!
//! Classification is by substring, checked in priority order: boxscore →
//! play-by-play → live feed → unknown. Total: internal errors collapse into
//! a minimal diagnostic document instead of propagating.

pub mod boxscore;
pub mod feed;
pub mod plays;

#[cfg(test)]
mod tests;

use crate::locator::Locator;
use serde_json::{json, Value};
use tracing::warn;

pub(crate) const COPYRIGHT: &str = "Copyright 2025 MLB Advanced Media, L.P.";

/// Produce a substitute document for `key`. The locator is handed through so
/// shape generators can borrow real team identities from a captured
/// schedule when one exists.
pub fn synthesize(key: &str, locator: &Locator) -> Value {
    let result = if key.contains("/boxscore") {
        boxscore::synthesize(key, locator)
    } else if key.contains("/playByPlay") {
        Ok(plays::synthesize())
    } else if key.contains("/feed/live") {
        feed::synthesize(key, locator)
    } else {
        Ok(json!({
            "message": "Simulated data for endpoint not found",
            "endpoint": key,
        }))
    };

    match result {
        Ok(value) => value,
        Err(err) => {
            warn!("fallback generation for {key} failed: {err}");
            json!({
                "message": "Error generating fallback data",
                "endpoint": key,
                "error": err.to_string(),
            })
        }
    }
}
