//! Typed views of the documents we actually traverse.
//!
//! Shapes are decoded once at the boundary with every field optional, so a
//! sparse or partly broken capture degrades to `None`s instead of panics.
//! Documents we only pass through stay as raw `serde_json::Value`s.

pub mod schedule;
pub mod team;

pub use schedule::{GameTeams, Schedule, ScheduleDate, ScheduleGame, TeamRef, TeamSide};
pub use team::TeamList;
