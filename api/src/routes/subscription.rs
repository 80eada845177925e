use crate::{
    AppState,
    auth::current_session,
    dto::SubscribeRequest,
    errors::ApiError,
    extract::{ApiJson, ApiPath},
    models::{NewSubscription, SubscriptionStatus},
};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

/// POST /subscriptions
/// Headers: Authorization: Bearer <token>
/// Body: { "creatorId": "...", "tier": "basic" | "premium" }
pub async fn subscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<SubscribeRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let session = current_session(&state, &headers)?;

    if payload.creator_id == session.user.id {
        return Err(ApiError::ValidationError(
            "Cannot subscribe to yourself".into(),
        ));
    }

    state
        .db
        .users()
        .find_by_id(payload.creator_id)
        .filter(|user| user.is_creator())
        .ok_or_else(|| ApiError::not_found("Creator"))?;

    let subscription = state.db.subscriptions().create(NewSubscription {
        supporter_id: session.user.id,
        creator_id: payload.creator_id,
        status: SubscriptionStatus::Active,
        tier: payload.tier,
        mock_price: payload.tier.price(),
        expires_at: None,
    });

    info!(
        "User {} subscribed to creator {} ({:?})",
        session.user.id, payload.creator_id, payload.tier
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "subscription": subscription,
            "message": "Subscribed successfully"
        })),
    ))
}

/// GET /subscriptions
/// Headers: Authorization: Bearer <token>
pub async fn my_subscriptions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;

    Ok(Json(json!({
        "success": true,
        "subscriptions": state.db.subscriptions().find_by_supporter(session.user.id)
    })))
}

/// GET /subscriptions/creator/{id}
pub async fn creator_subscriptions(
    State(state): State<AppState>,
    ApiPath(creator_id): ApiPath<Uuid>,
) -> Json<Value> {
    Json(json!({
        "success": true,
        "subscriptions": state.db.subscriptions().find_by_creator(creator_id)
    }))
}

/// GET /subscriptions/check/{creatorId}
/// Headers: Authorization: Bearer <token>
pub async fn subscription_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(creator_id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;

    Ok(Json(json!({
        "success": true,
        "isSubscribed": state.db.subscriptions().is_subscribed(session.user.id, creator_id)
    })))
}
