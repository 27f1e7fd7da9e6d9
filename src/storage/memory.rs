use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::matches::{Match, MatchStatus, StoredMatch};
use crate::models::team::Team;
use crate::storage::{LeagueStore, StoreError};

#[derive(Debug, Default)]
struct State {
    teams: Vec<Team>,
    matches: Vec<StoredMatch>,
}

/// In-memory store: the test double, also handy for demos. Same
/// semantics as the persistent backend, no durability.
#[derive(Debug, Default)]
pub struct InMemoryLeagueStore {
    state: RwLock<State>,
}

impl InMemoryLeagueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeagueStore for InMemoryLeagueStore {
    async fn load_teams(&self) -> Result<Vec<Team>, StoreError> {
        Ok(self.state.read().await.teams.clone())
    }

    async fn replace_all_teams(&self, teams: Vec<Team>) -> Result<(), StoreError> {
        self.state.write().await.teams = teams;
        Ok(())
    }

    async fn load_matches(&self) -> Result<Vec<Match>, StoreError> {
        let state = self.state.read().await;
        let by_id: HashMap<Uuid, &Team> = state.teams.iter().map(|t| (t.id, t)).collect();
        Ok(state
            .matches
            .iter()
            .filter_map(|stored| {
                Match::resolve(
                    stored.clone(),
                    by_id.get(&stored.team1_id).copied(),
                    by_id.get(&stored.team2_id).copied(),
                )
            })
            .collect())
    }

    async fn save_match(&self, updated: StoredMatch) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        match state.matches.iter_mut().find(|m| m.id == updated.id) {
            Some(existing) => {
                *existing = updated;
                Ok(())
            }
            None => Err(StoreError::MatchNotFound(updated.id)),
        }
    }

    async fn replace_upcoming(&self, matches: Vec<StoredMatch>) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.matches.retain(|m| m.status == MatchStatus::Played);
        state.matches.extend(matches);
        Ok(())
    }

    async fn clear_matches(&self) -> Result<(), StoreError> {
        self.state.write().await.matches.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn seed_teams() -> Vec<Team> {
        vec![Team::new("Alpha"), Team::new("Beta"), Team::new("Gamma")]
    }

    #[tokio::test]
    async fn replace_all_teams_discards_previous_roster() {
        let store = InMemoryLeagueStore::new();
        store.replace_all_teams(seed_teams()).await.unwrap();
        store.replace_all_teams(vec![Team::new("Solo")]).await.unwrap();

        let teams = store.load_teams().await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Solo");
    }

    #[tokio::test]
    async fn replace_upcoming_preserves_played_matches() {
        let store = InMemoryLeagueStore::new();
        let teams = seed_teams();
        store.replace_all_teams(teams.clone()).await.unwrap();

        let played =
            StoredMatch::upcoming(teams[0].id, teams[1].id, Utc::now()).with_result(2, 1);
        let upcoming = StoredMatch::upcoming(teams[1].id, teams[2].id, Utc::now());
        store
            .replace_upcoming(vec![played.clone(), upcoming])
            .await
            .unwrap();

        let fresh = StoredMatch::upcoming(teams[0].id, teams[2].id, Utc::now());
        store.replace_upcoming(vec![fresh.clone()]).await.unwrap();

        let matches = store.load_matches().await.unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().any(|m| m.id == played.id));
        assert!(matches.iter().any(|m| m.id == fresh.id));
    }

    #[tokio::test]
    async fn stale_matches_are_dropped_on_load() {
        let store = InMemoryLeagueStore::new();
        let teams = seed_teams();
        store.replace_all_teams(teams.clone()).await.unwrap();
        store
            .replace_upcoming(vec![StoredMatch::upcoming(
                teams[0].id,
                Uuid::new_v4(),
                Utc::now(),
            )])
            .await
            .unwrap();

        assert!(store.load_matches().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn saving_an_unknown_match_is_not_found() {
        let store = InMemoryLeagueStore::new();
        let orphan = StoredMatch::upcoming(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        assert!(matches!(
            store.save_match(orphan).await,
            Err(StoreError::MatchNotFound(_))
        ));
    }
}
