use serde::Serialize;
use uuid::Uuid;

use super::Post;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub user_id: Uuid,
    pub period: &'static str,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub followers: u64,
    pub earnings: f64,
    pub top_posts: Vec<Post>,
}
