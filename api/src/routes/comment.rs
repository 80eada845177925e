use crate::{
    AppState,
    auth::current_session,
    dto::CreateCommentRequest,
    errors::ApiError,
    extract::{ApiJson, ApiPath},
    models::NewComment,
};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// GET /posts/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    state
        .db
        .posts()
        .find_by_id(post_id)
        .ok_or_else(|| ApiError::not_found("Post"))?;

    Ok(Json(json!({
        "success": true,
        "comments": state.db.comments().find_by_post_id(post_id)
    })))
}

/// POST /posts/{id}/comments
/// Headers: Authorization: Bearer <token>
/// Body: { "text": "..." }
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(post_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let session = current_session(&state, &headers)?;
    payload.validate()?;
    state
        .db
        .posts()
        .find_by_id(post_id)
        .ok_or_else(|| ApiError::not_found("Post"))?;

    let comment = state.db.comments().create(NewComment {
        post_id,
        user_id: session.user.id,
        text: payload.text.trim().to_string(),
    });

    info!("Comment {} added to post {}", comment.id, post_id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "comment": comment,
            "message": "Comment added successfully"
        })),
    ))
}

/// DELETE /comments/{id}
/// Headers: Authorization: Bearer <token> (author)
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    let comments = state.db.comments();

    comments
        .find_by_id(id)
        .filter(|comment| comment.user_id == session.user.id)
        .ok_or_else(|| ApiError::NotFound("Comment not found or unauthorized".into()))?;

    if !comments.delete(id) {
        return Err(ApiError::not_found("Comment"));
    }

    info!("Comment deleted: {} by user {}", id, session.user.id);

    Ok(Json(json!({
        "success": true,
        "message": "Comment deleted successfully"
    })))
}
