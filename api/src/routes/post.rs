use crate::{
    AppState,
    auth::{Session, current_session, optional_session},
    dto::{CreatePostRequest, PostsQuery, UpdatePostRequest, normalize_tags},
    errors::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    models::{NewPost, Post, PostUpdate, excerpt_of},
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

/// GET /posts?creatorId=...
pub async fn get_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PostsQuery>,
) -> Json<Value> {
    let posts = match query.creator_id {
        Some(creator_id) => state.db.posts().find_by_creator_id(creator_id),
        None => state.db.posts().get_all(),
    };

    Json(json!({ "success": true, "posts": posts }))
}

/// GET /posts/feed
/// Headers: Authorization: Bearer <token> (optional)
pub async fn get_feed(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let viewer = optional_session(&state, &headers)?.map(|session| session.user.id);

    Ok(Json(json!({
        "success": true,
        "posts": state.db.posts().get_feed(viewer)
    })))
}

/// GET /posts/trending
pub async fn get_trending(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "success": true, "posts": state.db.posts().get_trending() }))
}

/// GET /posts/{id}
/// Every read counts as a view.
pub async fn get_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let posts = state.db.posts();
    posts.find_by_id(id).ok_or_else(|| ApiError::not_found("Post"))?;
    posts.increment_views(id);

    let post = posts.find_by_id(id).ok_or_else(|| ApiError::not_found("Post"))?;

    Ok(Json(json!({ "success": true, "post": post })))
}

/// POST /posts
/// Headers: Authorization: Bearer <token> (creator)
/// Body: { "title": "...", "content": "...", "type": "free" | "premium", "tags": [...] }
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let session = current_session(&state, &headers)?;
    session.require_creator()?;
    payload.validate()?;

    let content = payload.content.trim().to_string();
    // Scheduled posts start as drafts; nothing publishes them later.
    let published = payload
        .published
        .unwrap_or(payload.scheduled_for.is_none());

    let post = state.db.posts().create(NewPost {
        creator_id: session.user.id,
        title: payload.title.trim().to_string(),
        excerpt: Some(payload.excerpt.unwrap_or_else(|| excerpt_of(&content))),
        content,
        kind: payload.kind,
        media: payload.media,
        tags: normalize_tags(payload.tags),
        scheduled_for: payload.scheduled_for,
        published,
        featured: payload.featured,
    });

    info!("Post created: {} by user {}", post.id, session.user.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "post": post,
            "message": "Post created successfully"
        })),
    ))
}

/// PUT /posts/{id}
/// Headers: Authorization: Bearer <token> (creator, owner)
pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdatePostRequest>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    session.require_creator()?;
    payload.validate()?;
    owned_post(&state, &session, id)?;

    let post = state
        .db
        .posts()
        .update(
            id,
            PostUpdate {
                title: payload.title.map(|title| title.trim().to_string()),
                content: payload.content.map(|content| content.trim().to_string()),
                excerpt: payload.excerpt,
                kind: payload.kind,
                media: payload.media,
                tags: payload.tags.map(normalize_tags),
                scheduled_for: payload.scheduled_for,
                published: payload.published,
                featured: payload.featured,
            },
        )
        .ok_or_else(|| ApiError::not_found("Post"))?;

    info!("Post updated: {} by user {}", id, session.user.id);

    Ok(Json(json!({
        "success": true,
        "post": post,
        "message": "Post updated successfully"
    })))
}

/// DELETE /posts/{id}
/// Headers: Authorization: Bearer <token> (creator, owner)
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = current_session(&state, &headers)?;
    session.require_creator()?;
    owned_post(&state, &session, id)?;

    let deleted = state.db.posts().delete(id);

    info!("Post deleted: {} by user {}", id, session.user.id);

    Ok(Json(json!({
        "success": deleted,
        "message": if deleted { "Post deleted successfully" } else { "Failed to delete post" }
    })))
}

// Someone else's post is reported exactly like a missing one.
fn owned_post(state: &AppState, session: &Session, id: Uuid) -> Result<Post, ApiError> {
    state
        .db
        .posts()
        .find_by_id(id)
        .filter(|post| post.creator_id == session.user.id)
        .ok_or_else(|| ApiError::NotFound("Post not found or unauthorized".into()))
}
