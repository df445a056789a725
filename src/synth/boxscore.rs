//! Synthetic boxscore generation.
//!
//! Seeded from the embedded game id, so repeated requests for the same key
//! produce the same body. Team identity and final scores come from a
//! captured schedule when one resolves; otherwise fixed defaults.

use super::COPYRIGHT;
use crate::key;
use crate::locator::Locator;
use crate::model::Schedule;
use anyhow::Result;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

const POSITIONS: [&str; 9] = ["C", "1B", "2B", "3B", "SS", "LF", "CF", "RF", "DH"];

const INNING_RUNS: [u64; 5] = [0, 1, 2, 3, 4];
const INNING_WEIGHTS: [f64; 5] = [0.6, 0.2, 0.1, 0.07, 0.03];

struct TeamLine {
    id: i64,
    name: String,
    abbreviation: String,
    score: u64,
}

impl TeamLine {
    fn default_away() -> Self {
        Self {
            id: 120,
            name: "Washington Nationals".to_string(),
            abbreviation: "WSH".to_string(),
            score: 2,
        }
    }

    fn default_home() -> Self {
        Self {
            id: 147,
            name: "New York Yankees".to_string(),
            abbreviation: "NYY".to_string(),
            score: 11,
        }
    }
}

pub fn synthesize(key: &str, locator: &Locator) -> Result<Value> {
    let game_pk = key::game_pk_or_default(key);
    let (away, home) = team_lines(game_pk, locator);

    let mut rng = StdRng::seed_from_u64(game_pk);

    let mut away_runs = [0u64; 9];
    let mut home_runs = [0u64; 9];
    for i in 0..9 {
        away_runs[i] = pick(&mut rng, &INNING_RUNS, &INNING_WEIGHTS)?;
        home_runs[i] = pick(&mut rng, &INNING_RUNS, &INNING_WEIGHTS)?;
    }
    reconcile(&mut rng, &mut away_runs, away.score);
    reconcile(&mut rng, &mut home_runs, home.score);

    let innings: Vec<Value> = (0..9)
        .map(|i| {
            json!({
                "num": i + 1,
                "away": {"runs": away_runs[i]},
                "home": {"runs": home_runs[i]},
            })
        })
        .collect();

    let away_block = team_block(&mut rng, &away, 10_000)?;
    let home_block = team_block(&mut rng, &home, 20_000)?;

    Ok(json!({
        "copyright": COPYRIGHT,
        "teams": {
            "away": away_block,
            "home": home_block,
        },
        "linescore": {
            "innings": innings,
        },
    }))
}

/// Borrow team identity and scores from the schedule when the game is in it;
/// keep the defaults otherwise. Applied atomically so a half-described game
/// cannot mix real and default identity.
fn team_lines(game_pk: u64, locator: &Locator) -> (TeamLine, TeamLine) {
    let defaults = (TeamLine::default_away(), TeamLine::default_home());

    let schedule = Schedule::from_value(locator.locate("/api/v1/schedule"));
    let Some(game) = schedule.find_game(game_pk) else {
        return defaults;
    };
    let Some(teams) = &game.teams else {
        return defaults;
    };

    match (team_line(teams.away.as_ref()), team_line(teams.home.as_ref())) {
        (Some(away), Some(home)) => (away, home),
        _ => defaults,
    }
}

fn team_line(side: Option<&crate::model::TeamSide>) -> Option<TeamLine> {
    let side = side?;
    let team = side.team.as_ref()?;
    let name = team.name.clone()?;
    Some(TeamLine {
        id: team.id?,
        abbreviation: abbreviate(&name),
        score: u64::try_from(side.score?).ok()?,
        name,
    })
}

/// 3-letter abbreviation from the team name's word initials.
fn abbreviate(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(3)
        .collect()
}

/// Nudge the drawn per-inning runs until they sum to the final score:
/// shortfall adds a run to a random inning, excess removes one from a random
/// non-empty inning, one run at a time.
fn reconcile(rng: &mut StdRng, innings: &mut [u64; 9], target: u64) {
    let mut total: u64 = innings.iter().sum();
    while total < target {
        innings[rng.gen_range(0..9)] += 1;
        total += 1;
    }
    while total > target {
        let i = rng.gen_range(0..9);
        if innings[i] > 0 {
            innings[i] -= 1;
            total -= 1;
        }
    }
}

fn team_block(rng: &mut StdRng, team: &TeamLine, base_id: u64) -> Result<Value> {
    let batting = json!({
        "runs": team.score,
        "hits": team.score + rng.gen_range(3u64..=7),
        "rbi": team.score.saturating_sub(rng.gen_range(0u64..=1)),
        "baseOnBalls": rng.gen_range(2u64..=5),
        "strikeOuts": rng.gen_range(5u64..=12),
        "leftOnBase": rng.gen_range(5u64..=10),
    });
    let fielding = json!({
        "errors": pick(rng, &[0, 1, 2], &[0.7, 0.25, 0.05])?,
    });

    let mut players = Map::new();
    for (i, position) in POSITIONS.iter().enumerate() {
        let id = base_id + i as u64;
        players.insert(
            format!("ID{id}"),
            json!({
                "person": {"id": id, "fullName": format!("{} {position}", team.name)},
                "position": {"abbreviation": position},
                "stats": {
                    "batting": {
                        "atBats": rng.gen_range(3u64..=5),
                        "runs": pick(rng, &[0, 1, 2], &[0.5, 0.4, 0.1])?,
                        "hits": pick(rng, &[0, 1, 2, 3], &[0.4, 0.4, 0.15, 0.05])?,
                        "rbi": pick(rng, &[0, 1, 2], &[0.6, 0.3, 0.1])?,
                        "avg": format!(".{}", rng.gen_range(220..330)),
                    },
                },
            }),
        );
    }
    let batting_order: Vec<u64> = (0..9).map(|i| base_id + i).collect();

    Ok(json!({
        "team": {
            "id": team.id,
            "name": team.name,
            "abbreviation": team.abbreviation,
        },
        "teamStats": {
            "batting": batting,
            "fielding": fielding,
        },
        "players": Value::Object(players),
        "battingOrder": batting_order,
    }))
}

fn pick(rng: &mut StdRng, values: &[u64], weights: &[f64]) -> Result<u64> {
    let dist = WeightedIndex::new(weights)?;
    Ok(values[dist.sample(rng)])
}
