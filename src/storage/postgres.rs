use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::matches::{Match, MatchStatus, StoredMatch};
use crate::models::team::Team;
use crate::storage::{LeagueStore, StoreError};

/// The single league this deployment manages. Multi-league isolation is
/// out of scope; every row is scoped by this identifier.
pub const LEAGUE_ID: &str = "liga-default";

#[derive(Debug, FromRow)]
struct MatchRow {
    id: Uuid,
    team1_id: Uuid,
    team2_id: Uuid,
    score1: Option<i32>,
    score2: Option<i32>,
    scheduled_time: DateTime<Utc>,
    status: String,
}

impl From<MatchRow> for StoredMatch {
    fn from(row: MatchRow) -> Self {
        StoredMatch {
            id: row.id,
            team1_id: row.team1_id,
            team2_id: row.team2_id,
            score1: row.score1,
            score2: row.score2,
            scheduled_time: row.scheduled_time,
            status: MatchStatus::from(row.status),
        }
    }
}

/// Postgres-backed store. Thin queries only; no locking, no conflict
/// resolution beyond last write wins.
#[derive(Debug, Clone)]
pub struct PgLeagueStore {
    pool: PgPool,
}

impl PgLeagueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeagueStore for PgLeagueStore {
    async fn load_teams(&self) -> Result<Vec<Team>, StoreError> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, logo_url, tag
            FROM participants
            WHERE league_id = $1
            ORDER BY position
            "#,
        )
        .bind(LEAGUE_ID)
        .fetch_all(&self.pool)
        .await?;
        Ok(teams)
    }

    async fn replace_all_teams(&self, teams: Vec<Team>) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM participants WHERE league_id = $1")
            .bind(LEAGUE_ID)
            .execute(&mut *tx)
            .await?;

        for (position, team) in teams.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO participants (id, league_id, name, logo_url, tag, position)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(team.id)
            .bind(LEAGUE_ID)
            .bind(&team.name)
            .bind(&team.logo_url)
            .bind(&team.tag)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::info!("Replaced roster with {} teams", teams.len());
        Ok(())
    }

    async fn load_matches(&self) -> Result<Vec<Match>, StoreError> {
        let teams = self.load_teams().await?;
        let by_id: HashMap<Uuid, Team> = teams.into_iter().map(|t| (t.id, t)).collect();

        let rows = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT id, team1_id, team2_id, score1, score2, scheduled_time, status
            FROM matches
            WHERE league_id = $1
            ORDER BY position
            "#,
        )
        .bind(LEAGUE_ID)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(StoredMatch::from)
            .filter_map(|stored| {
                Match::resolve(
                    stored.clone(),
                    by_id.get(&stored.team1_id),
                    by_id.get(&stored.team2_id),
                )
            })
            .collect())
    }

    async fn save_match(&self, updated: StoredMatch) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE matches
            SET score1 = $1, score2 = $2, status = $3, scheduled_time = $4
            WHERE id = $5 AND league_id = $6
            "#,
        )
        .bind(updated.score1)
        .bind(updated.score2)
        .bind(updated.status.as_str())
        .bind(updated.scheduled_time)
        .bind(updated.id)
        .bind(LEAGUE_ID)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::MatchNotFound(updated.id));
        }
        Ok(())
    }

    async fn replace_upcoming(&self, matches: Vec<StoredMatch>) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM matches WHERE league_id = $1 AND status = $2")
            .bind(LEAGUE_ID)
            .bind(MatchStatus::Upcoming.as_str())
            .execute(&mut *tx)
            .await?;

        for (position, m) in matches.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO matches (
                    id, league_id, team1_id, team2_id,
                    score1, score2, scheduled_time, status, position
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(m.id)
            .bind(LEAGUE_ID)
            .bind(m.team1_id)
            .bind(m.team2_id)
            .bind(m.score1)
            .bind(m.score2)
            .bind(m.scheduled_time)
            .bind(m.status.as_str())
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::info!("Replaced upcoming matches with {} new pairings", matches.len());
        Ok(())
    }

    async fn clear_matches(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM matches WHERE league_id = $1")
            .bind(LEAGUE_ID)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
