use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::models::matches::{MatchFormat, StoredMatch};
use crate::models::team::Team;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("at least 2 teams are required to generate matches, got {0}")]
    InsufficientTeams(usize),
}

/// Generate a fresh set of unscored, upcoming matches for the selected
/// teams. The caller decides what happens to previously upcoming matches
/// (the storage layer replaces them).
pub fn generate_matches(
    teams: &[Team],
    format: MatchFormat,
    scheduled_time: DateTime<Utc>,
) -> Result<Vec<StoredMatch>, GenerationError> {
    if teams.len() < 2 {
        return Err(GenerationError::InsufficientTeams(teams.len()));
    }

    let matches = match format {
        MatchFormat::Bracket => bracket_matches(teams, scheduled_time),
        MatchFormat::RoundRobin => round_robin_matches(teams, scheduled_time),
    };

    tracing::info!(
        "Generated {} {:?} matches for {} teams",
        matches.len(),
        format,
        teams.len()
    );

    Ok(matches)
}

/// Shuffle uniformly, then pair consecutive teams. An odd trailing team
/// sits this round out.
fn bracket_matches(teams: &[Team], scheduled_time: DateTime<Utc>) -> Vec<StoredMatch> {
    let mut shuffled = teams.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());

    if shuffled.len() % 2 != 0 {
        // chunks_exact drops the remainder; surface who it was
        if let Some(benched) = shuffled.last() {
            tracing::warn!("Odd team count: {} has no opponent this round", benched.name);
        }
    }

    shuffled
        .chunks_exact(2)
        .map(|pair| StoredMatch::upcoming(pair[0].id, pair[1].id, scheduled_time))
        .collect()
}

/// Every unordered pair {i, j} with i < j, in the given team order.
fn round_robin_matches(teams: &[Team], scheduled_time: DateTime<Utc>) -> Vec<StoredMatch> {
    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);
    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            matches.push(StoredMatch::upcoming(
                teams[i].id,
                teams[j].id,
                scheduled_time,
            ));
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use uuid::Uuid;

    use super::*;
    use crate::models::matches::MatchStatus;

    fn roster(count: usize) -> Vec<Team> {
        (0..count).map(|i| Team::new(format!("Team {}", i))).collect()
    }

    #[test]
    fn round_robin_produces_every_pair_once() {
        let teams = roster(5);
        let matches = generate_matches(&teams, MatchFormat::RoundRobin, Utc::now()).unwrap();
        assert_eq!(matches.len(), 5 * 4 / 2);

        let mut pairs = HashSet::new();
        for m in &matches {
            assert_ne!(m.team1_id, m.team2_id);
            let pair = if m.team1_id < m.team2_id {
                (m.team1_id, m.team2_id)
            } else {
                (m.team2_id, m.team1_id)
            };
            assert!(pairs.insert(pair), "duplicate pairing {:?}", pair);
        }
    }

    #[test]
    fn bracket_pairs_floor_half_with_no_repeats() {
        for count in [2usize, 4, 5, 7, 8] {
            let teams = roster(count);
            let matches = generate_matches(&teams, MatchFormat::Bracket, Utc::now()).unwrap();
            assert_eq!(matches.len(), count / 2);

            let mut seen: HashSet<Uuid> = HashSet::new();
            for m in &matches {
                assert!(seen.insert(m.team1_id), "team appears twice");
                assert!(seen.insert(m.team2_id), "team appears twice");
            }
        }
    }

    #[test]
    fn generated_matches_are_unscored_and_upcoming() {
        let teams = roster(4);
        let now = Utc::now();
        let matches = generate_matches(&teams, MatchFormat::RoundRobin, now).unwrap();
        for m in matches {
            assert_eq!(m.status, MatchStatus::Upcoming);
            assert_eq!(m.score1, None);
            assert_eq!(m.score2, None);
            assert_eq!(m.scheduled_time, now);
        }
    }

    #[test]
    fn fewer_than_two_teams_is_refused() {
        assert_eq!(
            generate_matches(&[], MatchFormat::Bracket, Utc::now()),
            Err(GenerationError::InsufficientTeams(0))
        );
        assert_eq!(
            generate_matches(&roster(1), MatchFormat::RoundRobin, Utc::now()),
            Err(GenerationError::InsufficientTeams(1))
        );
    }

    #[test]
    fn round_robin_keeps_given_team_order() {
        let teams = roster(3);
        let matches = generate_matches(&teams, MatchFormat::RoundRobin, Utc::now()).unwrap();
        assert_eq!(matches[0].team1_id, teams[0].id);
        assert_eq!(matches[0].team2_id, teams[1].id);
        assert_eq!(matches[1].team1_id, teams[0].id);
        assert_eq!(matches[1].team2_id, teams[2].id);
        assert_eq!(matches[2].team1_id, teams[1].id);
        assert_eq!(matches[2].team2_id, teams[2].id);
    }
}
