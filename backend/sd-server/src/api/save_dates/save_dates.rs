//! Save-date REST API handlers
//!
//! List and create share `/save-date/`; a single record is read by id.

use crate::{
    ApiError, ApiResult, AppState, CreateSaveDateRequest, JsonBody, SaveDateCreatedResponse,
    SaveDateDto,
};

use sd_db::SaveDateRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use log::{info, warn};

// =============================================================================
// Handlers
// =============================================================================

/// GET /save-date/
///
/// List every save-date, oldest first
pub async fn list_save_dates(State(state): State<AppState>) -> ApiResult<Json<Vec<SaveDateDto>>> {
    let repo = SaveDateRepository::with_limits(state.pool.clone(), state.text_limits);
    let save_dates = repo.find_all().await?;

    Ok(Json(save_dates.into_iter().map(SaveDateDto::from).collect()))
}

/// POST /save-date/
///
/// Validate and store a new save-date
pub async fn create_save_date(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateSaveDateRequest>,
) -> ApiResult<(StatusCode, Json<SaveDateCreatedResponse>)> {
    let new_save_date = match request.into_new_save_date(&state.text_limits) {
        Ok(new_save_date) => new_save_date,
        Err(errors) => {
            warn!("Rejected save-date: {}", errors);
            return Err(ApiError::validation(errors));
        }
    };

    let repo = SaveDateRepository::with_limits(state.pool.clone(), state.text_limits);
    let save_date = repo.create(new_save_date).await?;

    info!("Created save-date {} ({})", save_date.id, save_date.title);

    Ok((
        StatusCode::CREATED,
        Json(SaveDateCreatedResponse::success(save_date.into())),
    ))
}

/// GET /save-date/{id}
///
/// Get a single save-date by id
pub async fn get_save_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SaveDateDto>> {
    let save_date_id: i64 = id
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid save-date id: {}", id)))?;

    let repo = SaveDateRepository::with_limits(state.pool.clone(), state.text_limits);
    let save_date = repo
        .find_by_id(save_date_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Save-date {} not found", save_date_id)))?;

    Ok(Json(save_date.into()))
}
