//! Runtime configuration. One explicit object, passed into the service at
//! construction; no process-global flags.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Everything the data layer needs to know at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Flat text file holding captured sections (`--- <key> ---` + JSON body).
    pub snapshot_path: PathBuf,
    /// Base URL of the remote stats API.
    pub api_base: String,
    /// Fixed timeout for live fetches.
    pub http_timeout: Duration,
    /// Start in live mode instead of local mode.
    pub live: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("mlb_snapshot.txt"),
            api_base: "https://statsapi.mlb.com".to_string(),
            http_timeout: Duration::from_secs(10),
            live: false,
        }
    }
}

impl Config {
    /// Build a config from the environment (a `.env` file is honored).
    /// Unset variables keep their defaults.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        let mut cfg = Self::default();
        if let Ok(path) = env::var("BACKSTOP_SNAPSHOT") {
            cfg.snapshot_path = PathBuf::from(path);
        }
        if let Ok(base) = env::var("BACKSTOP_API_BASE") {
            cfg.api_base = base;
        }
        if let Ok(live) = env::var("BACKSTOP_LIVE") {
            cfg.live = matches!(live.as_str(), "1" | "true" | "yes");
        }
        if let Ok(secs) = env::var("BACKSTOP_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                cfg.http_timeout = Duration::from_secs(secs);
            }
        }
        cfg
    }
}
