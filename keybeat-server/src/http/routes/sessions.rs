//! Session endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{paginate, NewSession, Paginated, Pagination, PaginationParams, SessionRecord};

/// POST /session - record a finished typing session
async fn create_session(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewSession>,
) -> Result<Json<SessionRecord>, ApiError> {
    let record = state.store().create(input).await?;
    tracing::debug!(id = record.id, wpm = record.wpm, "Session recorded");

    Ok(Json(record))
}

/// GET /sessions - newest-first session history, one page at a time
async fn list_sessions(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Paginated<SessionRecord>>, ApiError> {
    let pagination = Pagination::from(params);
    let all = state.store().list_all().await?;
    let page = paginate(all, pagination);

    tracing::debug!(
        page = page.page,
        page_size = page.page_size,
        total = page.total,
        "Listed sessions"
    );

    Ok(Json(page))
}

/// Session routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(create_session))
        .route("/sessions", get(list_sessions))
}
