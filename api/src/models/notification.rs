use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Subscription,
    Post,
    Mention,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub action_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Sample feed shown to every signed-in user, newest first. Nothing here
    /// is derived from real activity.
    pub fn samples_for(user_id: Uuid, now: DateTime<Utc>) -> Vec<Notification> {
        let samples = [
            (NotificationKind::Like, "New Like", "liked your post", false, Some("/feed"), 5),
            (NotificationKind::Comment, "New Comment", "commented on your post", false, Some("/feed"), 60),
            (NotificationKind::Follow, "New Follower", "started following you", false, None, 180),
            (NotificationKind::Subscription, "New Subscription", "subscribed to your content", true, Some("/dashboard"), 60 * 24),
            (NotificationKind::Post, "Creator Update", "a creator you follow published a new post", true, Some("/feed"), 60 * 48),
            (NotificationKind::Mention, "Mentioned", "mentioned you in a post", true, Some("/feed"), 60 * 72),
        ];

        samples
            .into_iter()
            .enumerate()
            .map(|(index, (kind, title, message, read, action_url, minutes_ago))| Notification {
                id: Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("{user_id}:{index}").as_bytes()),
                user_id,
                kind,
                title: title.to_string(),
                message: message.to_string(),
                read,
                action_url: action_url.map(str::to_string),
                created_at: now - Duration::minutes(minutes_ago),
            })
            .collect()
    }
}
