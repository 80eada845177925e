use super::{Database, rows_where};
use crate::models::{Follow, NewFollow, User};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use std::collections::HashSet;
use uuid::Uuid;

pub struct FollowStore<'a> {
    db: &'a Database,
}

impl<'a> FollowStore<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Creates the edge and bumps both users' counts. An existing edge is
    /// returned unchanged.
    pub fn create(&self, new: NewFollow) -> Follow {
        let follow = match self.db.follows.entry((new.follower_id, new.following_id)) {
            Entry::Occupied(existing) => return existing.get().clone(),
            Entry::Vacant(slot) => {
                let follow = Follow {
                    id: Uuid::now_v7(),
                    follower_id: new.follower_id,
                    following_id: new.following_id,
                    created_at: Utc::now(),
                };
                slot.insert(follow.clone());
                follow
            }
        };

        let users = self.db.users();
        users.update_follower_count(follow.following_id, 1);
        users.update_following_count(follow.follower_id, 1);
        follow
    }

    pub fn delete(&self, follower_id: Uuid, following_id: Uuid) -> bool {
        if self.db.follows.remove(&(follower_id, following_id)).is_none() {
            return false;
        }

        let users = self.db.users();
        users.update_follower_count(following_id, -1);
        users.update_following_count(follower_id, -1);
        true
    }

    pub fn is_following(&self, follower_id: Uuid, following_id: Uuid) -> bool {
        self.db.follows.contains_key(&(follower_id, following_id))
    }

    /// Users following `user_id`, in signup order.
    pub fn get_followers(&self, user_id: Uuid) -> Vec<User> {
        let ids: HashSet<Uuid> = self
            .db
            .follows
            .iter()
            .filter(|edge| edge.following_id == user_id)
            .map(|edge| edge.follower_id)
            .collect();

        rows_where(&self.db.users, |user| ids.contains(&user.id))
    }

    /// Users that `user_id` follows, in signup order.
    pub fn get_following(&self, user_id: Uuid) -> Vec<User> {
        let ids: HashSet<Uuid> = self
            .db
            .follows
            .iter()
            .filter(|edge| edge.follower_id == user_id)
            .map(|edge| edge.following_id)
            .collect();

        rows_where(&self.db.users, |user| ids.contains(&user.id))
    }
}
