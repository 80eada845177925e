use crate::{
    AppState,
    auth::current_session,
    dto::UpdateProfileRequest,
    errors::ApiError,
    extract::{ApiJson, ApiPath},
    models::UserUpdate,
};
use axum::{Json, extract::State, http::HeaderMap};
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "success": true, "users": state.db.users().get_all() }))
}

/// GET /users/creators
pub async fn list_creators(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "success": true, "creators": state.db.users().get_creators() }))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let user = state
        .db
        .users()
        .find_by_id(id)
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(json!({ "success": true, "user": user })))
}

/// GET /users/by-username/{username}
pub async fn get_user_by_username(
    State(state): State<AppState>,
    ApiPath(username): ApiPath<String>,
) -> Result<Json<Value>, ApiError> {
    let user = state
        .db
        .users()
        .find_by_username(&username)
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(json!({ "success": true, "user": user })))
}

/// PUT /users/me
/// Headers: Authorization: Bearer <token>
/// Body: any of { "name", "username", "avatar", "bio", "socials" }
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    payload.validate()?;
    let users = state.db.users();

    let username = payload.username.map(|name| name.trim().to_string());
    if let Some(username) = &username {
        let taken = users
            .find_by_username(username)
            .is_some_and(|other| other.id != session.user.id);
        if taken {
            return Err(ApiError::ValidationError("Username is already taken".into()));
        }
    }

    let user = users
        .update(
            session.user.id,
            UserUpdate {
                name: payload.name.map(|name| name.trim().to_string()),
                username,
                avatar: payload.avatar,
                bio: payload.bio.map(|bio| bio.trim().to_string()),
                socials: payload.socials,
                is_verified: None,
            },
        )
        .ok_or_else(|| ApiError::not_found("User"))?;

    info!("Profile updated: {}", user.id);

    Ok(Json(json!({
        "success": true,
        "user": user,
        "message": "User updated successfully"
    })))
}

/// GET /users/{id}/followers
pub async fn get_followers(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    state
        .db
        .users()
        .find_by_id(id)
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(json!({
        "success": true,
        "followers": state.db.follows().get_followers(id)
    })))
}

/// GET /users/{id}/following
pub async fn get_following(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    state
        .db
        .users()
        .find_by_id(id)
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(json!({
        "success": true,
        "following": state.db.follows().get_following(id)
    })))
}
