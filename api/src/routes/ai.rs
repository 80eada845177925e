use crate::{
    AppState,
    ai::{engagement_prediction, hashtags},
    dto::{SuggestionRequest, SuggestionResponse},
    errors::ApiError,
    extract::ApiJson,
};
use axum::{Json, extract::State};

/// POST /ai/suggestions
/// Body: { "title": "...", "content": "...", "type": "..." }
pub async fn suggestions(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, ApiError> {
    let title = payload.title.unwrap_or_default();
    let content = payload.content.unwrap_or_default();
    let kind = payload.kind.unwrap_or_default();

    if title.trim().is_empty() && content.trim().is_empty() {
        return Err(ApiError::ValidationError(
            "Content or title required".into(),
        ));
    }

    let suggestions = state.suggestions.suggest(&title, &content, &kind).await;

    Ok(Json(SuggestionResponse {
        success: true,
        suggestions,
        hashtags: hashtags(&title, &content),
        engagement_prediction: engagement_prediction(),
        optimized_content: (!content.trim().is_empty()).then_some(content),
    }))
}
