//! Section-key decomposition.
//!
//! Keys are URL-path-shaped strings, some of which embed a game identifier:
//! `<prefix>/game/<id><suffix>` (e.g. `/api/v1/game/776570/boxscore`). The
//! decomposition grammar: `prefix` is everything before the first `/game/`
//! fragment, `id` is the segment up to the next `/`, and `suffix` is the
//! remainder including its leading slash (empty when nothing follows).

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder game identifier used when a key carries none.
pub const DEFAULT_GAME_PK: u64 = 776570;

static GAME_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)/game/([^/]*)(/.*)?$").expect("valid pattern"));

/// A key decomposed around its embedded game identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameKey {
    pub prefix: String,
    /// Raw id segment; not guaranteed numeric.
    pub game_pk: String,
    pub suffix: String,
}

impl GameKey {
    /// Decompose a key, or `None` when it has no `/game/` fragment.
    pub fn parse(key: &str) -> Option<Self> {
        let caps = GAME_KEY.captures(key)?;
        Some(Self {
            prefix: caps[1].to_string(),
            game_pk: caps[2].to_string(),
            suffix: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
        })
    }

    /// The embedded id as a number, when it parses as one.
    pub fn game_pk_num(&self) -> Option<u64> {
        self.game_pk.parse().ok()
    }

    /// Delimiter prefix for the relaxed store search: matches any record for
    /// the same endpoint family regardless of id and suffix.
    pub fn pattern_marker(&self) -> String {
        format!("--- {}/game/", self.prefix)
    }
}

/// Embedded numeric game id of `key`, or the fixed placeholder when the key
/// has none or it does not parse.
pub fn game_pk_or_default(key: &str) -> u64 {
    GameKey::parse(key)
        .and_then(|k| k.game_pk_num())
        .unwrap_or(DEFAULT_GAME_PK)
}
