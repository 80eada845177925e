use crate::{AppState, auth::current_session, errors::ApiError, extract::ApiPath, models::NewLike};
use axum::{Json, extract::State, http::HeaderMap};
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

/// POST /posts/{id}/like
/// Headers: Authorization: Bearer <token>
pub async fn like_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(post_id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    state
        .db
        .posts()
        .find_by_id(post_id)
        .ok_or_else(|| ApiError::not_found("Post"))?;

    let like = state.db.likes().create(NewLike {
        post_id,
        user_id: session.user.id,
    });

    info!("Post {} liked by {}", post_id, session.user.id);

    Ok(Json(json!({
        "success": true,
        "like": like,
        "message": "Post liked successfully"
    })))
}

/// DELETE /posts/{id}/like
/// Headers: Authorization: Bearer <token>
pub async fn unlike_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(post_id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;

    if !state.db.likes().delete(post_id, session.user.id) {
        return Err(ApiError::not_found("Like"));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Post unliked successfully"
    })))
}

/// GET /posts/{id}/like
/// Headers: Authorization: Bearer <token>
pub async fn like_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(post_id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    let like = state
        .db
        .likes()
        .find_by_user_and_post(session.user.id, post_id);

    Ok(Json(json!({
        "success": true,
        "isLiked": like.is_some(),
        "like": like
    })))
}
