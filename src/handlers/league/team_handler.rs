use actix_web::{web, HttpResponse, Result};

use crate::models::common::ApiResponse;
use crate::models::team::Team;
use crate::storage::LeagueStore;

/// Get the current roster
#[tracing::instrument(name = "List teams", skip(store))]
pub async fn get_all_teams(store: web::Data<dyn LeagueStore>) -> Result<HttpResponse> {
    match store.load_teams().await {
        Ok(teams) => {
            tracing::info!("Loaded {} teams", teams.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success("Teams retrieved", teams)))
        }
        Err(e) => {
            tracing::error!("Failed to load teams: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<Vec<Team>>::error("Failed to retrieve teams")))
        }
    }
}
