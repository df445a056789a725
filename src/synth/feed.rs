//! Synthetic live-feed document: real game identity where a schedule
//! provides it, canned play/linescore/boxscore stubs everywhere else.

use super::COPYRIGHT;
use crate::key;
use crate::locator::Locator;
use crate::model::{Schedule, ScheduleGame, TeamRef, TeamSide};
use anyhow::Result;
use serde_json::{json, Value};

pub fn synthesize(key: &str, locator: &Locator) -> Result<Value> {
    let game_pk = key::game_pk_or_default(key);
    let game = resolve_game(game_pk, locator);

    let teams = game.teams.clone().unwrap_or_default();
    let away = teams.away.unwrap_or_default();
    let home = teams.home.unwrap_or_default();

    Ok(json!({
        "copyright": COPYRIGHT,
        "gameData": {
            "game": {
                "pk": game.game_pk,
                "type": game.game_type,
                "season": game.season,
                "datetime": {"dateTime": game.game_date},
            },
            "status": or_empty(&game.status),
            "teams": {
                "away": id_name(&away),
                "home": id_name(&home),
            },
            "venue": or_empty(&game.venue),
        },
        "liveData": {
            "plays": {
                "allPlays": [
                    pitch_play("Ball", "ball", 0.5, 3.0, 1),
                    pitch_play("Strike", "strike", 0.1, 2.0, 2),
                ],
                "currentPlay": current_play(),
            },
            "linescore": {
                "innings": [
                    {"num": 1, "away": {"runs": 0}, "home": {"runs": 2}},
                    {"num": 2, "away": {"runs": 0}, "home": {"runs": 3}},
                ],
                "teams": {
                    "away": {"runs": away.score.unwrap_or(0)},
                    "home": {"runs": home.score.unwrap_or(0)},
                },
            },
            "boxscore": {
                "teams": {
                    "away": {
                        "team": team_object(&away)?,
                        "players": {
                            "ID12345": {
                                "person": {"id": 12345, "fullName": "John Batter"},
                                "seasonStats": {
                                    "batting": {"avg": ".275", "homeRuns": 15, "rbi": 45},
                                },
                            },
                        },
                    },
                    "home": {
                        "team": team_object(&home)?,
                        "players": {
                            "ID54321": {
                                "person": {"id": 54321, "fullName": "Mike Pitcher"},
                                "seasonStats": {
                                    "pitching": {
                                        "era": "3.45",
                                        "wins": 8,
                                        "losses": 5,
                                        "strikeOuts": 110,
                                    },
                                },
                            },
                        },
                    },
                },
            },
        },
    }))
}

/// Game identity, in falling order of preference: the schedule entry with a
/// matching id, the first game of the first date bucket, the fixed literal
/// example game.
fn resolve_game(game_pk: u64, locator: &Locator) -> ScheduleGame {
    let schedule = Schedule::from_value(locator.locate("/api/v1/schedule"));
    if let Some(game) = schedule.find_game(game_pk) {
        return game.clone();
    }
    if let Some(game) = schedule.first_game() {
        return game.clone();
    }
    ScheduleGame::fallback(game_pk)
}

fn or_empty(value: &Value) -> Value {
    if value.is_null() {
        json!({})
    } else {
        value.clone()
    }
}

fn id_name(side: &TeamSide) -> Value {
    let team = side.team.as_ref();
    json!({
        "id": team.and_then(|t| t.id),
        "name": team.and_then(|t| t.name.clone()),
    })
}

fn team_object(side: &TeamSide) -> Result<Value> {
    Ok(serde_json::to_value(
        side.team.clone().unwrap_or_else(TeamRef::default),
    )?)
}

fn pitch_play(description: &str, event_type: &str, x: f64, y: f64, number: u64) -> Value {
    json!({
        "result": {"description": description, "eventType": event_type},
        "playEvents": [{
            "isPitch": true,
            "details": {"description": description},
            "pitchData": {"coordinates": {"x": x, "y": y}},
            "pitchNumber": number,
        }],
    })
}

fn current_play() -> Value {
    json!({
        "count": {"balls": 1, "strikes": 1, "outs": 1},
        "matchup": {
            "batter": {"id": 12345, "fullName": "John Batter"},
            "pitcher": {"id": 54321, "fullName": "Mike Pitcher"},
            "batSide": {"description": "Right"},
            "pitchHand": {"description": "Right"},
        },
        "playEvents": [
            {
                "isPitch": true,
                "details": {"description": "Ball"},
                "pitchData": {"coordinates": {"x": 0.5, "y": 3.0}},
                "pitchNumber": 1,
            },
            {
                "isPitch": true,
                "details": {"description": "Strike"},
                "pitchData": {"coordinates": {"x": 0.1, "y": 2.0}},
                "pitchNumber": 2,
            },
        ],
        "runners": [{"movement": {"start": "1B", "end": null}}],
        "about": {"halfInning": "top", "inning": 3},
    })
}
