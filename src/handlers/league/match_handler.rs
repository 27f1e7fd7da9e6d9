use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::league::schedule::{generate_matches, GenerationError};
use crate::league::validation::LeagueValidator;
use crate::models::common::ApiResponse;
use crate::models::matches::{
    GenerateMatchesRequest, Match, MatchListQuery, MatchResultRequest,
};
use crate::storage::{LeagueStore, StoreError};

/// Get matches, optionally filtered by status
#[tracing::instrument(name = "List matches", skip(query, store), fields(status = ?query.status))]
pub async fn get_league_matches(
    query: web::Query<MatchListQuery>,
    store: web::Data<dyn LeagueStore>,
) -> Result<HttpResponse> {
    match store.load_matches().await {
        Ok(matches) => {
            let matches: Vec<Match> = match query.status {
                Some(status) => matches.into_iter().filter(|m| m.status == status).collect(),
                None => matches,
            };
            let total_count = matches.len();
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": matches,
                "total_count": total_count
            })))
        }
        Err(e) => {
            tracing::error!("Failed to load matches: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<Vec<Match>>::error("Failed to retrieve matches")))
        }
    }
}

/// Generate a new set of upcoming matches, replacing the previous ones
#[tracing::instrument(
    name = "Generate matches",
    skip(request, store),
    fields(format = ?request.format)
)]
pub async fn generate_league_matches(
    request: web::Json<GenerateMatchesRequest>,
    store: web::Data<dyn LeagueStore>,
) -> Result<HttpResponse> {
    let roster = match store.load_teams().await {
        Ok(teams) => teams,
        Err(e) => {
            tracing::error!("Failed to load teams for generation: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve teams")));
        }
    };

    // Restrict to the selected subset, keeping roster order; unknown ids
    // are ignored the same way stale match references are.
    let selected = match &request.team_ids {
        Some(ids) if !ids.is_empty() => roster
            .into_iter()
            .filter(|team| ids.contains(&team.id))
            .collect(),
        _ => roster,
    };

    let matches = match generate_matches(&selected, request.format, Utc::now()) {
        Ok(matches) => matches,
        Err(e @ GenerationError::InsufficientTeams(_)) => {
            tracing::warn!("Match generation refused: {}", e);
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
        }
    };

    let count = matches.len();
    match store.replace_upcoming(matches).await {
        Ok(()) => {
            tracing::info!("Stored {} generated matches", count);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                format!("A new schedule has been created with {} matches", count),
                json!({ "generated": count }),
            )))
        }
        Err(e) => {
            tracing::error!("Failed to store generated matches: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to save generated matches")))
        }
    }
}

/// Record the result of a match
#[tracing::instrument(
    name = "Record match result",
    skip(result_request, store),
    fields(match_id = %match_id)
)]
pub async fn update_match_result(
    match_id: Uuid,
    result_request: web::Json<MatchResultRequest>,
    store: web::Data<dyn LeagueStore>,
) -> Result<HttpResponse> {
    let validator = LeagueValidator::new();
    if let Err(e) = validator.validate_match_result(result_request.score1, result_request.score2) {
        tracing::warn!("Rejected score entry for match {}: {}", match_id, e);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
    }

    let matches = match store.load_matches().await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Failed to load matches: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve matches")));
        }
    };

    let Some(existing) = matches.into_iter().find(|m| m.id == match_id) else {
        return Ok(HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("No match found with id {}", match_id))));
    };

    let updated = existing
        .to_stored()
        .with_result(result_request.score1, result_request.score2);

    match store.save_match(updated).await {
        Ok(()) => {
            tracing::info!(
                "Recorded result {} - {} for match {}",
                result_request.score1,
                result_request.score2,
                match_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Score recorded")))
        }
        Err(StoreError::MatchNotFound(id)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("No match found with id {}", id)))),
        Err(e) => {
            tracing::error!("Failed to save match {} result: {}", match_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to save match result")))
        }
    }
}

/// Delete every match
#[tracing::instrument(name = "Clear matches", skip(store))]
pub async fn clear_league_matches(store: web::Data<dyn LeagueStore>) -> Result<HttpResponse> {
    match store.clear_matches().await {
        Ok(()) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_message("All matches cleared"))),
        Err(e) => {
            tracing::error!("Failed to clear matches: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to clear matches")))
        }
    }
}
