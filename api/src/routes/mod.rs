mod ai;
mod analytics;
mod auth;
mod comment;
mod follow;
mod health;
mod like;
mod notification;
mod post;
mod search;
mod subscription;
mod user;

use crate::{AppState, errors::ApiError};
use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    routing::{delete, get, post, put},
};
use tower::{ServiceBuilder, timeout::error::Elapsed};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the full application router with its middleware stack.
pub fn router(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout;
    let max_concurrent = state.config.max_concurrent_requests;

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Public routes (no auth required)
        .route("/health", get(health::health_check))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        // Users and the social graph
        .route("/users", get(user::list_users))
        .route("/users/creators", get(user::list_creators))
        .route("/users/me", put(user::update_profile))
        .route("/users/by-username/{username}", get(user::get_user_by_username))
        .route("/users/{id}", get(user::get_user))
        .route("/users/{id}/followers", get(user::get_followers))
        .route("/users/{id}/following", get(user::get_following))
        .route(
            "/users/{id}/follow",
            get(follow::follow_status)
                .post(follow::follow_user)
                .delete(follow::unfollow_user),
        )
        // Content
        .route("/posts", get(post::get_posts).post(post::create_post))
        .route("/posts/feed", get(post::get_feed))
        .route("/posts/trending", get(post::get_trending))
        .route(
            "/posts/{id}",
            get(post::get_post)
                .put(post::update_post)
                .delete(post::delete_post),
        )
        // Interactions
        .route(
            "/posts/{id}/comments",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route("/comments/{id}", delete(comment::delete_comment))
        .route(
            "/posts/{id}/like",
            get(like::like_status)
                .post(like::like_post)
                .delete(like::unlike_post),
        )
        // Subscriptions
        .route(
            "/subscriptions",
            get(subscription::my_subscriptions).post(subscription::subscribe),
        )
        .route(
            "/subscriptions/creator/{id}",
            get(subscription::creator_subscriptions),
        )
        .route(
            "/subscriptions/check/{id}",
            get(subscription::subscription_status),
        )
        // Insights
        .route("/analytics/overview", get(analytics::my_overview))
        .route("/analytics/overview/{id}", get(analytics::user_overview))
        .route("/search", get(search::search))
        .route("/notifications", get(notification::list_notifications))
        .route("/ai/suggestions", post(ai::suggestions))
        .fallback(route_not_found)
        // Add state and middleware
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout)
                .concurrency_limit(max_concurrent),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route")
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::InternalError(err.to_string())
    }
}
