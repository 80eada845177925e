use crate::{AppState, dto::SearchQuery, extract::ApiQuery};
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// GET /search?q=...
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Json<Value> {
    let results = state.db.search().search(&query.q);

    Json(json!({
        "success": true,
        "query": query.q.trim(),
        "users": results.users,
        "posts": results.posts,
        "tags": results.tags
    }))
}
