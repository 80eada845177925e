use super::Database;
use crate::models::{NewPost, NewUser, Post, PostKind, Role, Socials, User};
use chrono::NaiveDate;

pub fn new_user(username: &str, role: Role) -> NewUser {
    NewUser {
        email: format!("{username}@example.com"),
        name: username.to_string(),
        username: username.to_string(),
        avatar: None,
        bio: None,
        role,
        socials: Socials::default(),
        is_verified: false,
        joined_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

pub fn creator(db: &Database, username: &str) -> User {
    db.users().create(new_user(username, Role::Creator))
}

pub fn supporter(db: &Database, username: &str) -> User {
    db.users().create(new_user(username, Role::Supporter))
}

pub fn new_post(creator: &User, kind: PostKind, published: bool) -> NewPost {
    NewPost {
        creator_id: creator.id,
        title: format!("{} post", creator.username),
        content: "Some content".to_string(),
        excerpt: None,
        kind,
        media: None,
        tags: vec!["general".to_string()],
        scheduled_for: None,
        published,
        featured: false,
    }
}

pub fn post(db: &Database, creator: &User, kind: PostKind, published: bool) -> Post {
    db.posts().create(new_post(creator, kind, published))
}
