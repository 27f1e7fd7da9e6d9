pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::matches::{Match, StoredMatch};
use crate::models::team::Team;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no match found with id {0}")]
    MatchNotFound(Uuid),
    #[error("storage backend error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Storage boundary for the league. Teams and matches live behind this
/// trait; implementations are selected by the caller, never probed at
/// runtime by the core logic. Last write wins; there is no retry and no
/// cross-call transaction.
#[async_trait]
pub trait LeagueStore: Send + Sync {
    /// Current roster, in import order.
    async fn load_teams(&self) -> Result<Vec<Team>, StoreError>;

    /// Replace the whole roster. Importing always discards the previous
    /// one.
    async fn replace_all_teams(&self, teams: Vec<Team>) -> Result<(), StoreError>;

    /// All matches with team references resolved. Matches whose teams
    /// have left the roster are silently dropped from the result.
    async fn load_matches(&self) -> Result<Vec<Match>, StoreError>;

    /// Update a single match by id.
    async fn save_match(&self, updated: StoredMatch) -> Result<(), StoreError>;

    /// Delete every upcoming match and insert the given list. Played
    /// matches are untouched.
    async fn replace_upcoming(&self, matches: Vec<StoredMatch>) -> Result<(), StoreError>;

    /// Delete every match.
    async fn clear_matches(&self) -> Result<(), StoreError>;
}
