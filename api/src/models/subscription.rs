use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Share of the subscription price credited to the creator.
pub const CREATOR_PAYOUT_RATE: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Basic,
    Premium,
}

impl SubscriptionTier {
    pub fn price(self) -> f64 {
        match self {
            SubscriptionTier::Basic => 5.0,
            SubscriptionTier::Premium => 15.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Uuid,
    pub supporter_id: Uuid,
    pub creator_id: Uuid,
    pub status: SubscriptionStatus,
    pub tier: SubscriptionTier,
    pub mock_price: f64,
    pub mock_earnings: f64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub struct NewSubscription {
    pub supporter_id: Uuid,
    pub creator_id: Uuid,
    pub status: SubscriptionStatus,
    pub tier: SubscriptionTier,
    pub mock_price: f64,
    pub expires_at: Option<DateTime<Utc>>,
}
