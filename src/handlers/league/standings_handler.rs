use actix_web::{web, HttpResponse, Result};
use chrono::Utc;

use crate::league::standings::compute_standings;
use crate::models::common::ApiResponse;
use crate::models::standing::StandingsResponse;
use crate::storage::LeagueStore;

/// Get the league table, recomputed from the current teams and matches
#[tracing::instrument(name = "Get standings", skip(store))]
pub async fn get_league_standings(store: web::Data<dyn LeagueStore>) -> Result<HttpResponse> {
    let teams = match store.load_teams().await {
        Ok(teams) => teams,
        Err(e) => {
            tracing::error!("Failed to load teams for standings: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve standings")));
        }
    };

    let matches = match store.load_matches().await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Failed to load matches for standings: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve standings")));
        }
    };

    let standings = compute_standings(&teams, &matches);
    tracing::info!("Computed standings for {} teams", standings.len());

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Standings computed",
        StandingsResponse {
            standings,
            computed_at: Utc::now(),
        },
    )))
}
