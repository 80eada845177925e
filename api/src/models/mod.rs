mod analytics;
mod comment;
mod follow;
mod like;
mod notification;
mod post;
mod subscription;
mod user;

pub use analytics::AnalyticsOverview;
pub use comment::{Comment, CommentWithUser, NewComment};
pub use follow::{Follow, NewFollow};
pub use like::{Like, NewLike};
pub use notification::{Notification, NotificationKind};
pub use post::{Media, MediaKind, NewPost, Post, PostKind, PostUpdate, excerpt_of};
pub use subscription::{
    CREATOR_PAYOUT_RATE, NewSubscription, Subscription, SubscriptionStatus, SubscriptionTier,
};
pub use user::{NewUser, Role, Socials, User, UserUpdate};
