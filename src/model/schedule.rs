//! Schedule document shape, plus the fixed example game used when no
//! schedule is usable at all.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleDate {
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleGame {
    pub game_pk: Option<i64>,
    pub game_type: Option<String>,
    pub season: Option<String>,
    pub game_date: Option<String>,
    /// Passed through verbatim into synthesized feeds.
    pub status: Value,
    pub teams: Option<GameTeams>,
    pub venue: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameTeams {
    pub away: Option<TeamSide>,
    pub home: Option<TeamSide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamSide {
    pub league_record: Value,
    pub score: Option<i64>,
    pub team: Option<TeamRef>,
    pub is_winner: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Schedule {
    /// Decode a schedule document leniently; anything non-conforming comes
    /// back empty and reads as "unusable".
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.iter().all(|d| d.games.is_empty())
    }

    /// Scan date buckets in order for a game with the given identifier.
    pub fn find_game(&self, game_pk: u64) -> Option<&ScheduleGame> {
        self.dates
            .iter()
            .flat_map(|d| d.games.iter())
            .find(|g| g.game_pk == Some(game_pk as i64))
    }

    /// First game of the first date bucket, if any.
    pub fn first_game(&self) -> Option<&ScheduleGame> {
        self.dates.first()?.games.first()
    }
}

impl ScheduleGame {
    /// The literal example game: a Final between a visiting team with a
    /// losing record and a home team with a winning one. Used when the
    /// schedule itself cannot be read.
    pub fn fallback(game_pk: u64) -> Self {
        Self {
            game_pk: Some(game_pk as i64),
            game_type: Some("R".to_string()),
            season: Some("2025".to_string()),
            game_date: Some("2025-08-27T17:05:00Z".to_string()),
            status: json!({
                "abstractGameState": "Final",
                "codedGameState": "F",
                "detailedState": "Final",
                "statusCode": "F"
            }),
            teams: Some(GameTeams {
                away: Some(TeamSide {
                    league_record: json!({"wins": 53, "losses": 80, "pct": ".398"}),
                    score: Some(2),
                    team: Some(TeamRef {
                        id: Some(120),
                        name: Some("Washington Nationals".to_string()),
                    }),
                    is_winner: Some(false),
                }),
                home: Some(TeamSide {
                    league_record: json!({"wins": 73, "losses": 60, "pct": ".549"}),
                    score: Some(11),
                    team: Some(TeamRef {
                        id: Some(147),
                        name: Some("New York Yankees".to_string()),
                    }),
                    is_winner: Some(true),
                }),
            }),
            venue: json!({"id": 3313, "name": "Yankee Stadium"}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        Schedule::from_value(json!({
            "dates": [
                {"games": [
                    {"gamePk": 111, "teams": {"away": {"score": 3}}},
                    {"gamePk": 222}
                ]},
                {"games": [{"gamePk": 333}]}
            ]
        }))
    }

    #[test]
    fn finds_games_across_date_buckets() {
        let schedule = sample();
        assert!(schedule.find_game(333).is_some());
        assert!(schedule.find_game(999).is_none());
        assert_eq!(schedule.first_game().unwrap().game_pk, Some(111));
    }

    #[test]
    fn non_schedule_documents_decode_as_empty() {
        let schedule = Schedule::from_value(json!({"message": "nope", "endpoint": "/x"}));
        assert!(schedule.is_empty());
        assert!(schedule.first_game().is_none());
    }

    #[test]
    fn default_team_ref_serializes_to_an_empty_object() {
        let value = serde_json::to_value(TeamRef::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
