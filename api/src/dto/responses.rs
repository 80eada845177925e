use crate::models::User;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: User,
    pub message: &'static str,
}

impl AuthResponse {
    pub fn new(token: String, user: User, message: &'static str) -> Self {
        Self {
            success: true,
            token,
            user,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub success: bool,
    pub suggestions: Vec<String>,
    pub hashtags: Vec<String>,
    #[serde(rename = "engagement_prediction")]
    pub engagement_prediction: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_content: Option<String>,
}
