use super::{Database, rows_where};
use crate::models::{CREATOR_PAYOUT_RATE, NewSubscription, Subscription, SubscriptionStatus};
use chrono::Utc;
use uuid::Uuid;

pub struct SubscriptionStore<'a> {
    db: &'a Database,
}

impl<'a> SubscriptionStore<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn create(&self, new: NewSubscription) -> Subscription {
        let subscription = Subscription {
            id: Uuid::now_v7(),
            supporter_id: new.supporter_id,
            creator_id: new.creator_id,
            status: new.status,
            tier: new.tier,
            mock_price: new.mock_price,
            mock_earnings: new.mock_price * CREATOR_PAYOUT_RATE,
            created_at: Utc::now(),
            expires_at: new.expires_at,
        };

        self.db
            .subscriptions
            .insert(subscription.id, subscription.clone());
        subscription
    }

    pub fn find_by_supporter(&self, supporter_id: Uuid) -> Vec<Subscription> {
        rows_where(&self.db.subscriptions, |sub| sub.supporter_id == supporter_id)
    }

    pub fn find_by_creator(&self, creator_id: Uuid) -> Vec<Subscription> {
        rows_where(&self.db.subscriptions, |sub| sub.creator_id == creator_id)
    }

    pub fn is_subscribed(&self, supporter_id: Uuid, creator_id: Uuid) -> bool {
        self.db.subscriptions.iter().any(|sub| {
            sub.supporter_id == supporter_id
                && sub.creator_id == creator_id
                && sub.status == SubscriptionStatus::Active
        })
    }
}
