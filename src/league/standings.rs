use std::collections::HashMap;

use uuid::Uuid;

use crate::models::matches::{Match, MatchStatus};
use crate::models::standing::Standing;
use crate::models::team::Team;

/// Points awarded for a win. Draws award [`DRAW_POINTS`] to both sides,
/// losses nothing.
pub const WIN_POINTS: i32 = 3;
pub const DRAW_POINTS: i32 = 1;

#[derive(Debug, Default, Clone)]
struct StatLine {
    played: i32,
    win: i32,
    draw: i32,
    loss: i32,
    goals_for: i32,
    goals_against: i32,
    points: i32,
}

/// Compute the league table for a roster and its matches.
///
/// Only matches with status `Played` and both scores present count.
/// Matches referencing a team not in `teams` are skipped. Rows are
/// ordered by points, then goal difference, then goals for (all
/// descending); the sort is stable, so teams equal on all three keys
/// keep their roster order. Ranks are 1-based positions in that order.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<Standing> {
    let mut stats: HashMap<Uuid, StatLine> = teams
        .iter()
        .map(|team| (team.id, StatLine::default()))
        .collect();

    for m in matches {
        if m.status != MatchStatus::Played {
            continue;
        }
        let (Some(score1), Some(score2)) = (m.score1, m.score2) else {
            continue;
        };
        // Stale reference: one of the teams left the roster.
        if !stats.contains_key(&m.team1.id) || !stats.contains_key(&m.team2.id) {
            continue;
        }

        let (points1, points2) = if score1 > score2 {
            (WIN_POINTS, 0)
        } else if score2 > score1 {
            (0, WIN_POINTS)
        } else {
            (DRAW_POINTS, DRAW_POINTS)
        };

        if let Some(line) = stats.get_mut(&m.team1.id) {
            apply_result(line, score1, score2, points1);
        }
        if let Some(line) = stats.get_mut(&m.team2.id) {
            apply_result(line, score2, score1, points2);
        }
    }

    let mut standings: Vec<Standing> = teams
        .iter()
        .map(|team| {
            let line = &stats[&team.id];
            Standing {
                rank: 0,
                team: team.clone(),
                played: line.played,
                win: line.win,
                draw: line.draw,
                loss: line.loss,
                goals_for: line.goals_for,
                goals_against: line.goals_against,
                goal_difference: line.goals_for - line.goals_against,
                points: line.points,
            }
        })
        .collect();

    // sort_by is stable, which the tie-break contract relies on
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = (index + 1) as i32;
    }

    standings
}

fn apply_result(line: &mut StatLine, scored: i32, conceded: i32, points: i32) {
    line.played += 1;
    line.goals_for += scored;
    line.goals_against += conceded;
    line.points += points;
    if scored > conceded {
        line.win += 1;
    } else if scored < conceded {
        line.loss += 1;
    } else {
        line.draw += 1;
    }
}
