//! Unit tests for the fallback synthesizer.

use super::synthesize;
use crate::cache::SectionCache;
use crate::locator::Locator;
use crate::snapshot::SnapshotStore;
use serde_json::{json, Value};
use tempfile::TempDir;

fn empty_locator() -> Locator {
    Locator::new(
        SnapshotStore::new("/nonexistent/backstop-snap.txt"),
        SectionCache::new(),
    )
}

fn locator_with_schedule(schedule: Value) -> (TempDir, Locator) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snap.txt");
    SnapshotStore::new(&path).append("/api/v1/schedule", &schedule).unwrap();
    (dir, Locator::new(SnapshotStore::new(path), SectionCache::new()))
}

fn sample_schedule() -> Value {
    json!({
        "dates": [{
            "games": [{
                "gamePk": 555,
                "gameType": "R",
                "season": "2025",
                "gameDate": "2025-06-01T17:05:00Z",
                "status": {"abstractGameState": "Final"},
                "teams": {
                    "away": {
                        "score": 5,
                        "team": {"id": 111, "name": "Boston Red Sox"},
                    },
                    "home": {
                        "score": 7,
                        "team": {"id": 112, "name": "Chicago Cubs"},
                    },
                },
                "venue": {"id": 17, "name": "Wrigley Field"},
            }],
        }],
    })
}

fn inning_sum(value: &Value, side: &str) -> u64 {
    value["linescore"]["innings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|inning| inning[side]["runs"].as_u64().unwrap())
        .sum()
}

#[test]
fn boxscore_has_the_expected_blocks() {
    let value = synthesize("/api/v1/game/42/boxscore", &empty_locator());
    for side in ["away", "home"] {
        let team = &value["teams"][side];
        assert!(team["team"].is_object());
        assert!(team["teamStats"]["batting"].is_object());
        assert_eq!(team["players"].as_object().unwrap().len(), 9);
        assert_eq!(team["battingOrder"].as_array().unwrap().len(), 9);
    }
    assert_eq!(value["teams"]["away"]["battingOrder"][0], 10_000);
    assert_eq!(value["teams"]["home"]["battingOrder"][0], 20_000);
}

#[test]
fn boxscore_innings_sum_to_the_final_score() {
    let value = synthesize("/api/v1/game/42/boxscore", &empty_locator());
    assert_eq!(
        inning_sum(&value, "away"),
        value["teams"]["away"]["teamStats"]["batting"]["runs"].as_u64().unwrap()
    );
    assert_eq!(
        inning_sum(&value, "home"),
        value["teams"]["home"]["teamStats"]["batting"]["runs"].as_u64().unwrap()
    );
}

#[test]
fn boxscore_is_deterministic_per_game_id() {
    let locator = empty_locator();
    let first = synthesize("/api/v1/game/776570/boxscore", &locator);
    let second = synthesize("/api/v1/game/776570/boxscore", &locator);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn boxscore_defaults_without_a_schedule() {
    let value = synthesize("/api/v1/game/999999/boxscore", &empty_locator());
    assert_eq!(value["teams"]["away"]["team"]["id"], 120);
    assert_eq!(value["teams"]["away"]["team"]["abbreviation"], "WSH");
    assert_eq!(value["teams"]["home"]["team"]["id"], 147);
    assert_eq!(value["teams"]["away"]["teamStats"]["batting"]["runs"], 2);
    assert_eq!(value["teams"]["home"]["teamStats"]["batting"]["runs"], 11);
}

#[test]
fn boxscore_borrows_identity_from_the_schedule() {
    let (_dir, locator) = locator_with_schedule(sample_schedule());
    let value = synthesize("/api/v1/game/555/boxscore", &locator);

    let away = &value["teams"]["away"];
    assert_eq!(away["team"]["id"], 111);
    assert_eq!(away["team"]["name"], "Boston Red Sox");
    assert_eq!(away["team"]["abbreviation"], "BRS");
    assert_eq!(away["teamStats"]["batting"]["runs"], 5);
    assert_eq!(inning_sum(&value, "away"), 5);

    let home = &value["teams"]["home"];
    assert_eq!(home["team"]["name"], "Chicago Cubs");
    assert_eq!(home["teamStats"]["batting"]["runs"], 7);
    assert_eq!(inning_sum(&value, "home"), 7);
}

#[test]
fn boxscore_keeps_defaults_for_a_half_described_game() {
    // Home side lacks a score: identity borrowing is all-or-nothing.
    let (_dir, locator) = locator_with_schedule(json!({
        "dates": [{"games": [{
            "gamePk": 555,
            "teams": {
                "away": {"score": 5, "team": {"id": 111, "name": "Boston Red Sox"}},
                "home": {"team": {"id": 112, "name": "Chicago Cubs"}},
            },
        }]}],
    }));
    let value = synthesize("/api/v1/game/555/boxscore", &locator);
    assert_eq!(value["teams"]["away"]["team"]["id"], 120);
    assert_eq!(value["teams"]["home"]["team"]["id"], 147);
}

#[test]
fn play_by_play_is_a_fixed_three_event_sequence() {
    let value = synthesize("/api/v1/game/42/playByPlay", &empty_locator());
    let plays = value["allPlays"].as_array().unwrap();
    assert_eq!(plays.len(), 3);
    assert_eq!(plays[0]["result"]["eventType"], "single");
    assert_eq!(plays[2]["result"]["eventType"], "home_run");
    assert_eq!(plays[2]["about"]["halfInning"], "bottom");
}

#[test]
fn feed_without_a_schedule_uses_the_literal_example_game() {
    let value = synthesize("/api/v1.1/game/999999/feed/live", &empty_locator());
    assert_eq!(value["gameData"]["game"]["pk"], 999999);
    assert_eq!(value["gameData"]["teams"]["away"]["name"], "Washington Nationals");
    assert_eq!(value["gameData"]["teams"]["home"]["name"], "New York Yankees");
    assert_eq!(value["liveData"]["linescore"]["teams"]["away"]["runs"], 2);
    assert_eq!(value["liveData"]["linescore"]["teams"]["home"]["runs"], 11);
    assert_eq!(value["gameData"]["venue"]["name"], "Yankee Stadium");
}

#[test]
fn feed_prefers_the_matching_schedule_game() {
    let (_dir, locator) = locator_with_schedule(sample_schedule());
    let value = synthesize("/api/v1.1/game/555/feed/live", &locator);
    assert_eq!(value["gameData"]["game"]["pk"], 555);
    assert_eq!(value["gameData"]["teams"]["away"]["name"], "Boston Red Sox");
    assert_eq!(value["gameData"]["status"]["abstractGameState"], "Final");
    assert_eq!(value["gameData"]["venue"]["name"], "Wrigley Field");
    assert_eq!(value["liveData"]["boxscore"]["teams"]["home"]["team"]["id"], 112);
}

#[test]
fn feed_falls_back_to_the_first_scheduled_game() {
    let (_dir, locator) = locator_with_schedule(sample_schedule());
    let value = synthesize("/api/v1.1/game/424242/feed/live", &locator);
    // Unknown id, but the schedule has games: serve the first one.
    assert_eq!(value["gameData"]["game"]["pk"], 555);
}

#[test]
fn feed_always_carries_canned_plays() {
    let value = synthesize("/api/v1.1/game/1/feed/live", &empty_locator());
    assert_eq!(value["liveData"]["plays"]["allPlays"].as_array().unwrap().len(), 2);
    assert_eq!(value["liveData"]["plays"]["currentPlay"]["count"]["balls"], 1);
}

#[test]
fn unknown_keys_get_the_generic_document() {
    let value = synthesize("/api/v1/venues/3313", &empty_locator());
    assert_eq!(value["message"], "Simulated data for endpoint not found");
    assert_eq!(value["endpoint"], "/api/v1/venues/3313");
}

#[test]
fn boxscore_takes_priority_over_other_shape_markers() {
    let value = synthesize("/api/v1/game/1/boxscore/playByPlay", &empty_locator());
    assert!(value.get("teams").is_some());
    assert!(value.get("allPlays").is_none());
}
