use super::{Database, rows_where};
use crate::models::{Comment, CommentWithUser, NewComment};
use chrono::Utc;
use uuid::Uuid;

pub struct CommentStore<'a> {
    db: &'a Database,
}

impl<'a> CommentStore<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Appends a comment and bumps the post's comment counter.
    ///
    /// Text is stored as given; rejecting blank comments is up to the caller.
    pub fn create(&self, new: NewComment) -> Comment {
        let comment = Comment {
            id: Uuid::now_v7(),
            post_id: new.post_id,
            user_id: new.user_id,
            text: new.text,
            likes: 0,
            replies: Vec::new(),
            created_at: Utc::now(),
        };

        self.db.comments.insert(comment.id, comment.clone());
        self.db.posts().adjust_comments(comment.post_id, 1);
        comment
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Comment> {
        self.db.comments.get(&id).map(|comment| comment.clone())
    }

    pub fn find_by_post_id(&self, post_id: Uuid) -> Vec<CommentWithUser> {
        rows_where(&self.db.comments, |comment| comment.post_id == post_id)
            .into_iter()
            .map(|comment| CommentWithUser {
                user: self.db.users().find_by_id(comment.user_id),
                comment,
            })
            .collect()
    }

    pub fn delete(&self, id: Uuid) -> bool {
        match self.db.comments.remove(&id) {
            Some((_, comment)) => {
                self.db.posts().adjust_comments(comment.post_id, -1);
                true
            }
            None => false,
        }
    }
}
