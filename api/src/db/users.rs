use super::{Database, adjust, rows_where};
use crate::models::{NewUser, User, UserUpdate};
use chrono::Utc;
use uuid::Uuid;

pub struct UserStore<'a> {
    db: &'a Database,
}

impl<'a> UserStore<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn create(&self, new: NewUser) -> User {
        let user = User {
            id: Uuid::now_v7(),
            email: new.email,
            name: new.name,
            username: new.username,
            avatar: new.avatar,
            bio: new.bio,
            role: new.role,
            socials: new.socials,
            follower_count: 0,
            following_count: 0,
            is_verified: new.is_verified,
            joined_at: new.joined_at,
            created_at: Utc::now(),
        };

        self.db.users.insert(user.id, user.clone());
        user
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.db.users.get(&id).map(|user| user.clone())
    }

    /// First user (in signup order) with this email.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        rows_where(&self.db.users, |user| user.email == email)
            .into_iter()
            .next()
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        rows_where(&self.db.users, |user| user.username == username)
            .into_iter()
            .next()
    }

    pub fn update(&self, id: Uuid, changes: UserUpdate) -> Option<User> {
        let mut user = self.db.users.get_mut(&id)?;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(avatar) = changes.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(bio) = changes.bio {
            user.bio = Some(bio);
        }
        if let Some(socials) = changes.socials {
            user.socials = socials;
        }
        if let Some(is_verified) = changes.is_verified {
            user.is_verified = is_verified;
        }

        Some(user.clone())
    }

    pub fn get_all(&self) -> Vec<User> {
        rows_where(&self.db.users, |_| true)
    }

    pub fn get_creators(&self) -> Vec<User> {
        rows_where(&self.db.users, User::is_creator)
    }

    pub fn update_follower_count(&self, id: Uuid, delta: i64) {
        if let Some(mut user) = self.db.users.get_mut(&id) {
            adjust(&mut user.follower_count, delta);
        }
    }

    pub fn update_following_count(&self, id: Uuid, delta: i64) {
        if let Some(mut user) = self.db.users.get_mut(&id) {
            adjust(&mut user.following_count, delta);
        }
    }
}
