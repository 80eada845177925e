use crate::{
    AppState, auth::current_session, errors::ApiError, extract::ApiPath, models::NewFollow,
};
use axum::{Json, extract::State, http::HeaderMap};
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

/// POST /users/{id}/follow
/// Headers: Authorization: Bearer <token>
pub async fn follow_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    if session.user.id == id {
        return Err(ApiError::ValidationError("Cannot follow yourself".into()));
    }
    state
        .db
        .users()
        .find_by_id(id)
        .ok_or_else(|| ApiError::not_found("User"))?;

    let follow = state.db.follows().create(NewFollow {
        follower_id: session.user.id,
        following_id: id,
    });

    info!("User {} followed {}", session.user.id, id);

    Ok(Json(json!({
        "success": true,
        "follow": follow,
        "message": "Successfully followed user"
    })))
}

/// DELETE /users/{id}/follow
/// Headers: Authorization: Bearer <token>
pub async fn unfollow_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;

    if !state.db.follows().delete(session.user.id, id) {
        return Err(ApiError::NotFound("Follow relationship not found".into()));
    }

    info!("User {} unfollowed {}", session.user.id, id);

    Ok(Json(json!({
        "success": true,
        "message": "Successfully unfollowed user"
    })))
}

/// GET /users/{id}/follow
/// Headers: Authorization: Bearer <token>
pub async fn follow_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;

    Ok(Json(json!({
        "success": true,
        "isFollowing": state.db.follows().is_following(session.user.id, id)
    })))
}
