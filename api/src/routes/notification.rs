use crate::{AppState, auth::current_session, errors::ApiError, models::Notification};
use axum::{Json, extract::State, http::HeaderMap};
use chrono::Utc;
use serde_json::{Value, json};

/// GET /notifications
/// Headers: Authorization: Bearer <token>
pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    let notifications = Notification::samples_for(session.user.id, Utc::now());
    let unread = notifications.iter().filter(|n| !n.read).count();

    Ok(Json(json!({
        "success": true,
        "notifications": notifications,
        "unreadCount": unread
    })))
}
