use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::league::{
    import_handler, match_handler, standings_handler, team_handler,
};
use crate::handlers::league::import_handler::RosterUploadForm;
use crate::models::matches::{GenerateMatchesRequest, MatchListQuery, MatchResultRequest};
use crate::storage::LeagueStore;

/// Get the current roster
#[get("/teams")]
async fn get_teams(store: web::Data<dyn LeagueStore>) -> Result<HttpResponse> {
    team_handler::get_all_teams(store).await
}

/// Bulk-import a roster file, replacing all previous data
#[post("/import")]
async fn import_roster(
    form: MultipartForm<RosterUploadForm>,
    store: web::Data<dyn LeagueStore>,
) -> HttpResponse {
    import_handler::import_roster(form, store).await
}

/// Get matches (optionally ?status=upcoming|played)
#[get("/matches")]
async fn get_matches(
    query: web::Query<MatchListQuery>,
    store: web::Data<dyn LeagueStore>,
) -> Result<HttpResponse> {
    match_handler::get_league_matches(query, store).await
}

/// Generate new upcoming matches, replacing the existing ones
#[post("/matches/generate")]
async fn generate_matches(
    request: web::Json<GenerateMatchesRequest>,
    store: web::Data<dyn LeagueStore>,
) -> Result<HttpResponse> {
    match_handler::generate_league_matches(request, store).await
}

/// Record a match result
#[put("/matches/{match_id}/result")]
async fn update_match_result(
    path: web::Path<Uuid>,
    result_request: web::Json<MatchResultRequest>,
    store: web::Data<dyn LeagueStore>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::update_match_result(match_id, result_request, store).await
}

/// Delete every match
#[delete("/matches")]
async fn clear_matches(store: web::Data<dyn LeagueStore>) -> Result<HttpResponse> {
    match_handler::clear_league_matches(store).await
}

/// Get the league table
#[get("/standings")]
async fn get_standings(store: web::Data<dyn LeagueStore>) -> Result<HttpResponse> {
    standings_handler::get_league_standings(store).await
}
