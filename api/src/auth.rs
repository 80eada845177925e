//! Bearer-token sessions.
//!
//! Login never checks a password; it only proves the caller named an
//! existing email. The token then carries that identity on every request,
//! and logout revokes it by id.

use crate::{AppState, errors::ApiError, models::User};
use axum::http::{HeaderMap, header};
use chrono::{Duration, Utc};
use dashmap::DashMap;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub email: String,
    pub jti: String,
    pub exp: usize,
}

/// Token ids revoked by logout, with their expiry so stale entries can be
/// dropped.
#[derive(Clone, Default)]
pub struct RevokedTokens(Arc<DashMap<String, usize>>);

impl RevokedTokens {
    pub fn revoke(&self, claims: &Claims) {
        let now = Utc::now().timestamp() as usize;
        self.0.retain(|_, exp| *exp > now);
        self.0.insert(claims.jti.clone(), claims.exp);
    }

    pub fn is_revoked(&self, jti: &str) -> bool {
        self.0.contains_key(jti)
    }
}

/// The authenticated caller of a request.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub claims: Claims,
}

impl Session {
    pub fn require_creator(&self) -> Result<(), ApiError> {
        if !self.user.is_creator() {
            return Err(ApiError::Unauthorized(
                "Unauthorized - Creator access required".into(),
            ));
        }
        Ok(())
    }
}

pub fn create_token(user_id: &Uuid, email: &str, secret: &str) -> Result<String, ApiError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| ApiError::InternalError("Failed to calculate expiration".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        jti: Uuid::new_v4().to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::InternalError(format!("Token Creation failed: {}", e)))
}

pub fn validate_token(headers: &HeaderMap, secret: &str) -> Result<Claims, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(ApiError::unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(ApiError::unauthorized)?;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::unauthorized())
}

/// Resolves the bearer token to a live session.
pub fn current_session(state: &AppState, headers: &HeaderMap) -> Result<Session, ApiError> {
    let claims = validate_token(headers, state.jwt_secret())?;
    if state.revoked.is_revoked(&claims.jti) {
        return Err(ApiError::unauthorized());
    }

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::unauthorized())?;
    let user = state
        .db
        .users()
        .find_by_id(user_id)
        .ok_or_else(ApiError::unauthorized)?;

    Ok(Session { user, claims })
}

/// Like [`current_session`], but a request without an Authorization header
/// is anonymous rather than rejected.
pub fn optional_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<Session>, ApiError> {
    if !headers.contains_key(header::AUTHORIZATION) {
        return Ok(None);
    }
    current_session(state, headers).map(Some)
}
