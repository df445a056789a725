//! Teams-list document shape (`/api/v1/teams`).

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamList {
    /// Team entries stay raw; callers only filter by id and hand the rest
    /// through untouched.
    pub teams: Vec<Value>,
}

impl TeamList {
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn find(&self, team_id: i64) -> Option<&Value> {
        self.teams
            .iter()
            .find(|t| t.get("id").and_then(Value::as_i64) == Some(team_id))
    }
}
