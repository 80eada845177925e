use crate::{AppState, auth::current_session, errors::ApiError, extract::ApiPath};
use axum::{Json, extract::State, http::HeaderMap};
use serde_json::{Value, json};
use uuid::Uuid;

/// GET /analytics/overview
/// Headers: Authorization: Bearer <token> (creator)
pub async fn my_overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    session.require_creator()?;

    Ok(Json(json!({
        "success": true,
        "analytics": state.db.analytics().get_overview(session.user.id)
    })))
}

/// GET /analytics/overview/{id}
pub async fn user_overview(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    state
        .db
        .users()
        .find_by_id(user_id)
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(json!({
        "success": true,
        "analytics": state.db.analytics().get_overview(user_id)
    })))
}
