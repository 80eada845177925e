use super::Database;
use crate::models::{Like, NewLike};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

pub struct LikeStore<'a> {
    db: &'a Database,
}

impl<'a> LikeStore<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Likes a post. Liking twice returns the existing row and leaves the
    /// counter alone.
    pub fn create(&self, new: NewLike) -> Like {
        let like = match self.db.likes.entry((new.post_id, new.user_id)) {
            Entry::Occupied(existing) => return existing.get().clone(),
            Entry::Vacant(slot) => {
                let like = Like {
                    id: Uuid::now_v7(),
                    post_id: new.post_id,
                    user_id: new.user_id,
                    created_at: Utc::now(),
                };
                slot.insert(like.clone());
                like
            }
        };

        self.db.posts().adjust_likes(like.post_id, 1);
        like
    }

    pub fn delete(&self, post_id: Uuid, user_id: Uuid) -> bool {
        if self.db.likes.remove(&(post_id, user_id)).is_none() {
            return false;
        }

        self.db.posts().adjust_likes(post_id, -1);
        true
    }

    pub fn find_by_user_and_post(&self, user_id: Uuid, post_id: Uuid) -> Option<Like> {
        self.db
            .likes
            .get(&(post_id, user_id))
            .map(|like| like.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::{creator, post, supporter};
    use crate::models::PostKind;

    #[test]
    fn liking_twice_counts_once() {
        let db = Database::new();
        let sarah = creator(&db, "sarah");
        let jenny = supporter(&db, "jenny");
        let p = post(&db, &sarah, PostKind::Free, true);
        let like = NewLike {
            post_id: p.id,
            user_id: jenny.id,
        };

        let first = db.likes().create(like);
        let second = db.likes().create(like);

        assert_eq!(first.id, second.id);
        assert_eq!(db.posts().find_by_id(p.id).unwrap().likes, 1);
    }

    #[test]
    fn unlike_restores_counter() {
        let db = Database::new();
        let sarah = creator(&db, "sarah");
        let jenny = supporter(&db, "jenny");
        let p = post(&db, &sarah, PostKind::Free, true);

        db.likes().create(NewLike {
            post_id: p.id,
            user_id: jenny.id,
        });
        assert!(db.likes().find_by_user_and_post(jenny.id, p.id).is_some());

        assert!(db.likes().delete(p.id, jenny.id));
        assert!(!db.likes().delete(p.id, jenny.id));
        assert!(db.likes().find_by_user_and_post(jenny.id, p.id).is_none());
        assert_eq!(db.posts().find_by_id(p.id).unwrap().likes, 0);
    }
}
