use super::Database;
use crate::models::{Post, User};
use serde::Serialize;

const MAX_USERS: usize = 20;
const MAX_POSTS: usize = 50;
const MAX_TAGS: usize = 10;

#[derive(Debug, Default, Serialize)]
pub struct SearchResults {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub tags: Vec<String>,
}

pub struct SearchStore<'a> {
    db: &'a Database,
}

impl<'a> SearchStore<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Case-insensitive substring search over users, published posts and tags.
    pub fn search(&self, query: &str) -> SearchResults {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }
        let matches = |text: &str| text.to_lowercase().contains(&needle);

        let users = self
            .db
            .users()
            .get_all()
            .into_iter()
            .filter(|user| {
                matches(user.name.as_str())
                    || matches(user.username.as_str())
                    || user.bio.as_deref().is_some_and(matches)
            })
            .take(MAX_USERS)
            .collect();

        let all_posts = self.db.posts().get_all();

        let mut tags: Vec<String> = Vec::new();
        for tag in all_posts.iter().flat_map(|post| &post.tags) {
            if tags.len() == MAX_TAGS {
                break;
            }
            if matches(tag.as_str()) && !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }

        let posts = all_posts
            .into_iter()
            .filter(|post| {
                post.published
                    && (matches(post.title.as_str())
                        || matches(post.content.as_str())
                        || post.tags.iter().any(|tag| matches(tag.as_str())))
            })
            .take(MAX_POSTS)
            .collect();

        SearchResults { users, posts, tags }
    }
}
