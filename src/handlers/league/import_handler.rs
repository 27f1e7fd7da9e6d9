use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use std::fs;

use crate::league::import::{parse_roster, teams_from_names};
use crate::models::common::ApiResponse;
use crate::storage::LeagueStore;

#[derive(Debug, MultipartForm)]
pub struct RosterUploadForm {
    #[multipart(limit = "5MB")]
    pub file: TempFile,
}

/// Bulk-import the roster from an uploaded delimited-text file.
///
/// All-or-nothing: a format error leaves teams and matches untouched.
/// On success the previous roster is replaced and every match is
/// cleared.
#[tracing::instrument(
    name = "Import roster",
    skip(form, store),
    fields(file_name = %form.file.file_name.as_deref().unwrap_or("unknown"))
)]
pub async fn import_roster(
    MultipartForm(form): MultipartForm<RosterUploadForm>,
    store: web::Data<dyn LeagueStore>,
) -> HttpResponse {
    let file_name = form.file.file_name.as_deref().unwrap_or_default();
    if !file_name.to_lowercase().ends_with(".csv") {
        tracing::warn!("Rejected roster upload with unsupported file type: {}", file_name);
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Unsupported file type. Please upload a CSV file.",
        ));
    }

    let content = match fs::read_to_string(form.file.file.path()) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to read uploaded file: {}", e);
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Failed to read file."));
        }
    };

    let names = match parse_roster(&content) {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!("Roster import rejected: {}", e);
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string()));
        }
    };

    let teams = teams_from_names(&names);
    let count = teams.len();

    if let Err(e) = store.replace_all_teams(teams).await {
        tracing::error!("Failed to store imported roster: {}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("An error occurred while saving the data."));
    }
    // Import invalidates every pairing, played ones included
    if let Err(e) = store.clear_matches().await {
        tracing::error!("Failed to clear matches after import: {}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("An error occurred while saving the data."));
    }

    tracing::info!("Imported {} players, previous data replaced", count);
    HttpResponse::Ok().json(ApiResponse::<()>::success_message(format!(
        "{} players imported, replacing all previous data. Existing games have been cleared.",
        count
    )))
}
