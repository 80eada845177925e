//! In-memory data layer.
//!
//! Every collection lives in a shared `DashMap`. A `Database` is cheap to
//! clone and each clone sees the same rows, so it is created once at startup
//! and handed to the router through [`crate::AppState`]. Tests build their
//! own instance and stay isolated from each other.

mod analytics;
mod comments;
mod follows;
mod likes;
mod posts;
mod search;
mod subscriptions;
mod users;

pub use analytics::AnalyticsStore;
pub use comments::CommentStore;
pub use follows::FollowStore;
pub use likes::LikeStore;
pub use posts::PostStore;
pub use search::{SearchResults, SearchStore};
pub use subscriptions::SubscriptionStore;
pub use users::UserStore;

use crate::models::{Comment, Follow, Like, Post, Subscription, User};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct Database {
    users: Arc<DashMap<Uuid, User>>,
    posts: Arc<DashMap<Uuid, Post>>,
    comments: Arc<DashMap<Uuid, Comment>>,
    // Keyed by (post_id, user_id): one like per pair.
    likes: Arc<DashMap<(Uuid, Uuid), Like>>,
    // Keyed by (follower_id, following_id): one edge per ordered pair.
    follows: Arc<DashMap<(Uuid, Uuid), Follow>>,
    subscriptions: Arc<DashMap<Uuid, Subscription>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> UserStore<'_> {
        UserStore::new(self)
    }

    pub fn posts(&self) -> PostStore<'_> {
        PostStore::new(self)
    }

    pub fn comments(&self) -> CommentStore<'_> {
        CommentStore::new(self)
    }

    pub fn likes(&self) -> LikeStore<'_> {
        LikeStore::new(self)
    }

    pub fn follows(&self) -> FollowStore<'_> {
        FollowStore::new(self)
    }

    pub fn subscriptions(&self) -> SubscriptionStore<'_> {
        SubscriptionStore::new(self)
    }

    pub fn analytics(&self) -> AnalyticsStore<'_> {
        AnalyticsStore::new(self)
    }

    pub fn search(&self) -> SearchStore<'_> {
        SearchStore::new(self)
    }
}

/// Ids are UUIDv7, so sorting by id yields insertion order.
fn rows_where<K, T>(map: &DashMap<K, T>, keep: impl Fn(&T) -> bool) -> Vec<T>
where
    K: Eq + std::hash::Hash,
    T: Clone + HasId,
{
    let mut rows: Vec<T> = map
        .iter()
        .filter(|entry| keep(entry.value()))
        .map(|entry| entry.value().clone())
        .collect();
    rows.sort_by_key(|row| row.id());
    rows
}

/// Applies a signed delta to a denormalized counter, never going below zero.
fn adjust(count: &mut u64, delta: i64) {
    *count = count.saturating_add_signed(delta);
}

trait HasId {
    fn id(&self) -> Uuid;
}

macro_rules! impl_has_id {
    ($($ty:ty),*) => {
        $(impl HasId for $ty {
            fn id(&self) -> Uuid {
                self.id
            }
        })*
    };
}

impl_has_id!(User, Post, Comment, Like, Follow, Subscription);

#[cfg(test)]
pub(crate) mod fixtures;
