use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::team::Team;

/// One row of the league table. Derived on every read, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Standing {
    pub rank: i32,
    pub team: Team,
    pub played: i32,
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<Standing>,
    pub computed_at: DateTime<Utc>,
}
