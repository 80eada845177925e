use super::Database;
use crate::models::AnalyticsOverview;
use uuid::Uuid;

const TOP_POSTS: usize = 5;

pub struct AnalyticsStore<'a> {
    db: &'a Database,
}

impl<'a> AnalyticsStore<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Recomputes a creator's totals from the current rows.
    pub fn get_overview(&self, user_id: Uuid) -> AnalyticsOverview {
        let mut posts = self.db.posts().find_by_creator_id(user_id);
        let subscriptions = self.db.subscriptions().find_by_creator(user_id);

        let views = posts.iter().map(|post| post.views).sum();
        let likes = posts.iter().map(|post| post.likes).sum();
        let comments = posts.iter().map(|post| post.comments).sum();
        let earnings = subscriptions.iter().map(|sub| sub.mock_earnings).sum();
        let followers = self
            .db
            .users()
            .find_by_id(user_id)
            .map_or(0, |user| user.follower_count);

        posts.sort_by(|a, b| b.views.cmp(&a.views));
        posts.truncate(TOP_POSTS);

        AnalyticsOverview {
            user_id,
            period: "month",
            views,
            likes,
            comments,
            followers,
            earnings,
            top_posts: posts,
        }
    }
}
