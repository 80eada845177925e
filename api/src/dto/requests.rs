use crate::models::{Media, PostKind, Role, Socials, SubscriptionTier};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const TITLE_MAX: u64 = 120;
pub const CONTENT_MAX: u64 = 5000;
pub const BIO_MAX: u64 = 160;
pub const TAGS_MAX: u64 = 10;

// Usernames are stored trimmed, so the bounds apply to the trimmed value.
fn valid_username(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if !(3..=20).contains(&len) {
        return Err(ValidationError::new("username")
            .with_message("Username must be 3-20 characters".into()));
    }
    Ok(())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be empty".into()));
    }
    Ok(())
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "not_blank"), length(max = 80))]
    pub name: String,
    #[validate(custom(function = "valid_username"))]
    pub username: String,
    pub role: Role,
    #[validate(length(max = BIO_MAX, message = "Bio must be at most 160 characters"))]
    pub bio: Option<String>,
    pub avatar: Option<String>,
    #[serde(default)]
    pub socials: Socials,
}

/// The password is accepted for form compatibility and never checked.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(custom(function = "not_blank"), length(max = 80))]
    pub name: Option<String>,
    #[validate(custom(function = "valid_username"))]
    pub username: Option<String>,
    pub avatar: Option<String>,
    #[validate(length(max = BIO_MAX, message = "Bio must be at most 160 characters"))]
    pub bio: Option<String>,
    pub socials: Option<Socials>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(custom(function = "not_blank"), length(max = TITLE_MAX))]
    pub title: String,
    #[validate(custom(function = "not_blank"), length(max = CONTENT_MAX))]
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub media: Option<Media>,
    #[serde(default)]
    #[validate(length(max = TAGS_MAX, message = "At most 10 tags"))]
    pub tags: Vec<String>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub published: Option<bool>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Default, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(custom(function = "not_blank"), length(max = TITLE_MAX))]
    pub title: Option<String>,
    #[validate(custom(function = "not_blank"), length(max = CONTENT_MAX))]
    pub content: Option<String>,
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<PostKind>,
    pub media: Option<Media>,
    #[validate(length(max = TAGS_MAX, message = "At most 10 tags"))]
    pub tags: Option<Vec<String>>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct CreateCommentRequest {
    #[validate(custom(function = "not_blank", message = "Comment text cannot be empty"))]
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub creator_id: Uuid,
    #[serde(default = "default_tier")]
    pub tier: SubscriptionTier,
}

fn default_tier() -> SubscriptionTier {
    SubscriptionTier::Basic
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsQuery {
    pub creator_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Lower-cases, trims and de-duplicates tags, keeping first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().trim_start_matches('#').to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}
