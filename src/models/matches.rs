use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::team::Team;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Played,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Played => "played",
        }
    }
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "played" => MatchStatus::Played,
            _ => MatchStatus::Upcoming,
        }
    }
}

/// A match as the storage backend holds it: team references only.
///
/// Invariant: both scores are `None` iff the status is `Upcoming`,
/// both `Some` (non-negative) iff the status is `Played`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StoredMatch {
    pub id: Uuid,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub score1: Option<i32>,
    pub score2: Option<i32>,
    pub scheduled_time: DateTime<Utc>,
    pub status: MatchStatus,
}

impl StoredMatch {
    /// A fresh, unscored pairing.
    pub fn upcoming(team1_id: Uuid, team2_id: Uuid, scheduled_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            team1_id,
            team2_id,
            score1: None,
            score2: None,
            scheduled_time,
            status: MatchStatus::Upcoming,
        }
    }

    pub fn with_result(mut self, score1: i32, score2: i32) -> Self {
        self.score1 = Some(score1);
        self.score2 = Some(score2);
        self.status = MatchStatus::Played;
        self
    }
}

/// A match with its team references resolved, as handed to callers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub team1: Team,
    pub team2: Team,
    pub score1: Option<i32>,
    pub score2: Option<i32>,
    pub scheduled_time: DateTime<Utc>,
    pub status: MatchStatus,
}

impl Match {
    /// Resolve a stored match against the current roster. Returns `None`
    /// when either team is gone, so stale matches drop out instead of
    /// breaking reads.
    pub fn resolve(stored: StoredMatch, team1: Option<&Team>, team2: Option<&Team>) -> Option<Self> {
        Some(Self {
            id: stored.id,
            team1: team1?.clone(),
            team2: team2?.clone(),
            score1: stored.score1,
            score2: stored.score2,
            scheduled_time: stored.scheduled_time,
            status: stored.status,
        })
    }

    pub fn to_stored(&self) -> StoredMatch {
        StoredMatch {
            id: self.id,
            team1_id: self.team1.id,
            team2_id: self.team2.id,
            score1: self.score1,
            score2: self.score2,
            scheduled_time: self.scheduled_time,
            status: self.status,
        }
    }
}

/// Pairing format for match generation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MatchFormat {
    /// One random pairwise round; an odd trailing team sits out.
    Bracket,
    /// Every team against every other team exactly once.
    RoundRobin,
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateMatchesRequest {
    pub format: MatchFormat,
    /// Subset of the roster to pair up; omitted or empty means everyone.
    #[serde(default)]
    pub team_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchResultRequest {
    pub score1: i32,
    pub score2: i32,
}

#[derive(Debug, Deserialize)]
pub struct MatchListQuery {
    pub status: Option<MatchStatus>,
}
