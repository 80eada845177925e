use super::{Database, adjust, rows_where};
use crate::models::{NewPost, Post, PostKind, PostUpdate};
use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

const TRENDING_LIMIT: usize = 10;

pub struct PostStore<'a> {
    db: &'a Database,
}

impl<'a> PostStore<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn create(&self, new: NewPost) -> Post {
        let now = Utc::now();
        let post = Post {
            id: Uuid::now_v7(),
            creator_id: new.creator_id,
            title: new.title,
            content: new.content,
            excerpt: new.excerpt,
            kind: new.kind,
            media: new.media,
            tags: new.tags,
            likes: 0,
            comments: 0,
            views: 0,
            scheduled_for: new.scheduled_for,
            published: new.published,
            featured: new.featured,
            created_at: now,
            updated_at: now,
        };

        self.db.posts.insert(post.id, post.clone());
        post
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Post> {
        self.db.posts.get(&id).map(|post| post.clone())
    }

    /// A creator's posts in the order they were written.
    pub fn find_by_creator_id(&self, creator_id: Uuid) -> Vec<Post> {
        rows_where(&self.db.posts, |post| post.creator_id == creator_id)
    }

    /// Every post, newest first.
    pub fn get_all(&self) -> Vec<Post> {
        let mut posts = rows_where(&self.db.posts, |_| true);
        newest_first(&mut posts);
        posts
    }

    /// Published posts visible to `viewer`, newest first.
    ///
    /// Anonymous viewers only see free posts. A signed-in viewer additionally
    /// sees every post (premium included) from creators they follow and from
    /// themselves.
    pub fn get_feed(&self, viewer: Option<Uuid>) -> Vec<Post> {
        let mut posts = match viewer {
            Some(viewer) => {
                let followed: HashSet<Uuid> = self
                    .db
                    .follows
                    .iter()
                    .filter(|edge| edge.follower_id == viewer)
                    .map(|edge| edge.following_id)
                    .collect();

                rows_where(&self.db.posts, |post| {
                    post.published
                        && (post.kind == PostKind::Free
                            || post.creator_id == viewer
                            || followed.contains(&post.creator_id))
                })
            }
            None => rows_where(&self.db.posts, Post::is_public),
        };

        newest_first(&mut posts);
        posts
    }

    /// Top published free posts by likes + comments + views. Premium posts
    /// never trend.
    pub fn get_trending(&self) -> Vec<Post> {
        let mut posts = rows_where(&self.db.posts, Post::is_public);
        posts.sort_by(|a, b| b.engagement().cmp(&a.engagement()));
        posts.truncate(TRENDING_LIMIT);
        posts
    }

    pub fn update(&self, id: Uuid, changes: PostUpdate) -> Option<Post> {
        let mut post = self.db.posts.get_mut(&id)?;

        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(content) = changes.content {
            post.content = content;
        }
        if let Some(excerpt) = changes.excerpt {
            post.excerpt = Some(excerpt);
        }
        if let Some(kind) = changes.kind {
            post.kind = kind;
        }
        if let Some(media) = changes.media {
            post.media = Some(media);
        }
        if let Some(tags) = changes.tags {
            post.tags = tags;
        }
        if let Some(scheduled_for) = changes.scheduled_for {
            post.scheduled_for = Some(scheduled_for);
        }
        if let Some(published) = changes.published {
            post.published = published;
        }
        if let Some(featured) = changes.featured {
            post.featured = featured;
        }
        post.updated_at = Utc::now();

        Some(post.clone())
    }

    /// Removes the post together with its comments and likes.
    pub fn delete(&self, id: Uuid) -> bool {
        if self.db.posts.remove(&id).is_none() {
            return false;
        }

        self.db.comments.retain(|_, comment| comment.post_id != id);
        self.db.likes.retain(|(post_id, _), _| *post_id != id);
        true
    }

    pub fn increment_views(&self, id: Uuid) {
        if let Some(mut post) = self.db.posts.get_mut(&id) {
            post.views += 1;
        }
    }

    pub(super) fn adjust_likes(&self, id: Uuid, delta: i64) {
        if let Some(mut post) = self.db.posts.get_mut(&id) {
            adjust(&mut post.likes, delta);
        }
    }

    pub(super) fn adjust_comments(&self, id: Uuid, delta: i64) {
        if let Some(mut post) = self.db.posts.get_mut(&id) {
            adjust(&mut post.comments, delta);
        }
    }
}

fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
