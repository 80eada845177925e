use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const EXCERPT_CHARS: usize = 150;

/// Preview text shown in post cards: the first 150 characters plus "...".
pub fn excerpt_of(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Free,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub media: Option<Media>,
    pub tags: Vec<String>,
    pub likes: u64,
    pub comments: u64,
    pub views: u64,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub published: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Engagement score used to rank trending posts.
    pub fn engagement(&self) -> u64 {
        self.likes + self.comments + self.views
    }

    pub fn is_public(&self) -> bool {
        self.published && self.kind == PostKind::Free
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub creator_id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub kind: PostKind,
    pub media: Option<Media>,
    pub tags: Vec<String>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub published: bool,
    pub featured: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub kind: Option<PostKind>,
    pub media: Option<Media>,
    pub tags: Option<Vec<String>>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}
