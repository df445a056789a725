//! Canned play-by-play sequence: a single, a ground-out, and a 2-run home
//! run. Not parameterized by key; callers patch names in if they care.

use super::COPYRIGHT;
use serde_json::{json, Value};

pub fn synthesize() -> Value {
    json!({
        "copyright": COPYRIGHT,
        "allPlays": [
            {
                "result": {
                    "description": "Player 1 singles to center field.",
                    "eventType": "single",
                },
                "about": {"inning": 1, "halfInning": "top"},
                "matchup": {
                    "batter": {"fullName": "Player 1"},
                    "pitcher": {"fullName": "Pitcher 2"},
                },
            },
            {
                "result": {
                    "description": "Player 2 grounds out to shortstop.",
                    "eventType": "field_out",
                },
                "about": {"inning": 1, "halfInning": "top"},
                "matchup": {
                    "batter": {"fullName": "Player 2"},
                    "pitcher": {"fullName": "Pitcher 2"},
                },
            },
            {
                "result": {
                    "description": "Player 3 hits a 2-run home run to right field.",
                    "eventType": "home_run",
                },
                "about": {"inning": 1, "halfInning": "bottom"},
                "matchup": {
                    "batter": {"fullName": "Player 3"},
                    "pitcher": {"fullName": "Pitcher 1"},
                },
            },
        ],
    })
}
