use crate::{
    AppState,
    auth::{create_token, current_session},
    dto::{AuthResponse, LoginRequest, SignupRequest},
    errors::ApiError,
    extract::ApiJson,
    models::NewUser,
};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::info;
use validator::Validate;

/// POST /auth/signup
/// Body: { "email": "...", "name": "...", "username": "...", "role": "creator" | "supporter" }
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    payload.validate()?;

    let users = state.db.users();
    let email = payload.email.trim().to_lowercase();
    if users.find_by_email(&email).is_some() {
        return Err(ApiError::UserAlreadyExists);
    }
    let username = payload.username.trim().to_string();
    if users.find_by_username(&username).is_some() {
        return Err(ApiError::ValidationError("Username is already taken".into()));
    }

    let user = users.create(NewUser {
        email,
        name: payload.name.trim().to_string(),
        username,
        avatar: payload.avatar,
        bio: payload.bio.map(|bio| bio.trim().to_string()),
        role: payload.role,
        socials: payload.socials,
        is_verified: false,
        joined_at: Utc::now().date_naive(),
    });

    let token = create_token(&user.id, &user.email, state.jwt_secret())?;

    info!("New user registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(token, user, "Account created successfully")),
    ))
}

/// POST /auth/login
/// Body: { "email": "...", "password": "..." }
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.validate()?;

    let user = state
        .db
        .users()
        .find_by_email(&payload.email.trim().to_lowercase())
        .ok_or(ApiError::InvalidCredentials)?;

    let token = create_token(&user.id, &user.email, state.jwt_secret())?;

    info!("User logged in: {}", user.email);

    Ok(Json(AuthResponse::new(token, user, "Login successful")))
}

/// POST /auth/logout
/// Headers: Authorization: Bearer <token>
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    state.revoked.revoke(&session.claims);

    info!("User logged out: {}", session.user.email);

    Ok(Json(json!({
        "success": true,
        "message": "Logged out successfully"
    })))
}

/// GET /auth/me
/// Headers: Authorization: Bearer <token>
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;

    Ok(Json(json!({ "success": true, "user": session.user })))
}
