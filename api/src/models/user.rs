use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Creator,
    Supporter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub username: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub role: Role,
    pub socials: Socials,
    /// Cached count of follow edges pointing at this user.
    pub follower_count: u64,
    /// Cached count of follow edges starting from this user.
    pub following_count: u64,
    pub is_verified: bool,
    pub joined_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_creator(&self) -> bool {
        self.role == Role::Creator
    }
}

/// Everything a caller supplies when creating a user. Counters, id and
/// creation time are filled in by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub username: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub role: Role,
    pub socials: Socials,
    pub is_verified: bool,
    pub joined_at: NaiveDate,
}

/// Profile fields that can be changed after signup.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub socials: Option<Socials>,
    pub is_verified: Option<bool>,
}
