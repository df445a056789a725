//! Probe the live stats API and append each response to a snapshot file.
//!
//! This is the producer of the store the data layer falls back on: one
//! `--- <key> ---` delimiter line per endpoint, followed by the JSON body.
//! Unreachable endpoints are skipped, not fatal.

use backstop::live::LiveSource;
use backstop::snapshot::SnapshotStore;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "capture",
    about = "Capture live MLB stats API responses into a snapshot file."
)]
struct Args {
    /// Snapshot file to append to.
    #[arg(long, default_value = "mlb_snapshot.txt")]
    out: PathBuf,

    /// Schedule date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Game ids to capture boxscore, play-by-play and live feed for.
    #[arg(long = "game-pk")]
    game_pks: Vec<u64>,

    #[arg(long, default_value = "https://statsapi.mlb.com")]
    api_base: String,

    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let live = LiveSource::new(&args.api_base, Duration::from_secs(args.timeout_secs))?;
    let store = SnapshotStore::new(&args.out);

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    // (fetch path, section key): the schedule is fetched dated but recorded
    // under the undated key local mode looks up.
    let mut endpoints = vec![
        (
            format!("/api/v1/schedule?sportId=1&date={date}"),
            "/api/v1/schedule".to_string(),
        ),
        ("/api/v1/teams".to_string(), "/api/v1/teams".to_string()),
    ];
    for pk in &args.game_pks {
        for path in [
            format!("/api/v1/game/{pk}/boxscore"),
            format!("/api/v1/game/{pk}/playByPlay"),
            format!("/api/v1.1/game/{pk}/feed/live"),
        ] {
            endpoints.push((path.clone(), path));
        }
    }

    let mut captured = 0usize;
    for (path, key) in endpoints {
        match live.fetch(&path) {
            Ok(body) => {
                store.append(&key, &body)?;
                captured += 1;
                info!("captured {key}");
            }
            Err(err) => warn!("skipping {path}: {err}"),
        }
    }

    info!("wrote {captured} sections to {}", store.path().display());
    Ok(())
}
