//! Sample dataset for local development.
//!
//! Everything goes through the store operations, so follower counts and
//! post counters agree with the follow, like and comment rows. Engagement is
//! deterministic rather than random so a fresh server always looks the same.

use crate::db::Database;
use crate::models::{
    Media, MediaKind, NewComment, NewFollow, NewLike, NewPost, NewSubscription, NewUser, PostKind,
    Role, Socials, SubscriptionStatus, SubscriptionTier, User, excerpt_of,
};
use chrono::NaiveDate;
use tracing::info;

struct SampleUser {
    name: &'static str,
    username: &'static str,
    bio: &'static str,
    twitter: Option<&'static str>,
    instagram: Option<&'static str>,
    website: Option<&'static str>,
    role: Role,
    verified: bool,
    joined: (i32, u32, u32),
}

struct SamplePost {
    creator: &'static str,
    title: &'static str,
    content: &'static str,
    kind: PostKind,
    tags: &'static [&'static str],
    media: Option<(MediaKind, &'static str)>,
    featured: bool,
    views: u64,
}

const USERS: &[SampleUser] = &[
    SampleUser {
        name: "Sarah Chen",
        username: "sarahcreates",
        bio: "Digital artist & UI/UX designer sharing creative processes and design tips",
        twitter: Some("@sarahcreates"),
        instagram: Some("@sarahcreates"),
        website: Some("sarahcreates.com"),
        role: Role::Creator,
        verified: true,
        joined: (2023, 1, 15),
    },
    SampleUser {
        name: "Marcus Rodriguez",
        username: "fitnessmarcus",
        bio: "Certified personal trainer helping you build strength and confidence",
        twitter: None,
        instagram: Some("@fitnessmarcus"),
        website: Some("marcusfitness.com"),
        role: Role::Creator,
        verified: true,
        joined: (2023, 2, 20),
    },
    SampleUser {
        name: "Emma Thompson",
        username: "emmawrites",
        bio: "Fantasy author & storytelling coach. Writing tips & inspiration",
        twitter: Some("@emmawrites"),
        instagram: None,
        website: Some("emmathompsonwrites.com"),
        role: Role::Creator,
        verified: false,
        joined: (2023, 3, 10),
    },
    SampleUser {
        name: "David Kim",
        username: "techwithdavid",
        bio: "Full-stack developer sharing coding tutorials and tech insights",
        twitter: Some("@techwithdavid"),
        instagram: None,
        website: Some("davidkim.dev"),
        role: Role::Creator,
        verified: true,
        joined: (2023, 1, 5),
    },
    SampleUser {
        name: "Luna Martinez",
        username: "lunacooks",
        bio: "Plant-based chef & recipe developer. Healthy cooking made delicious",
        twitter: None,
        instagram: Some("@lunacooks"),
        website: Some("lunacooks.com"),
        role: Role::Creator,
        verified: true,
        joined: (2023, 2, 14),
    },
    SampleUser {
        name: "Alex Johnson",
        username: "alexmusic",
        bio: "Indie musician & producer sharing my musical journey and tutorials",
        twitter: None,
        instagram: Some("@alexmusic"),
        website: Some("alexjohnsonmusic.com"),
        role: Role::Creator,
        verified: false,
        joined: (2023, 4, 1),
    },
    SampleUser {
        name: "Jennifer Wilson",
        username: "jennw",
        bio: "Supporting amazing creators and discovering new content",
        twitter: None,
        instagram: None,
        website: None,
        role: Role::Supporter,
        verified: false,
        joined: (2023, 5, 12),
    },
    SampleUser {
        name: "Michael Brown",
        username: "mikeb",
        bio: "Tech enthusiast and fitness lover. Always learning!",
        twitter: None,
        instagram: None,
        website: None,
        role: Role::Supporter,
        verified: false,
        joined: (2023, 6, 8),
    },
];

const POSTS: &[SamplePost] = &[
    SamplePost {
        creator: "sarahcreates",
        title: "5 Essential UI Design Principles Every Designer Should Know",
        content: "Today I want to share the fundamental principles that transformed my design work. \
Visual hierarchy, consistency, white space, contrast and alignment are practical guidelines I use in \
every project. What design principle do you struggle with most? Drop a comment below!",
        kind: PostKind::Free,
        tags: &["design", "ui", "principles", "tutorial"],
        media: Some((MediaKind::Image, "https://images.example.com/ui-principles.png")),
        featured: true,
        views: 1840,
    },
    SamplePost {
        creator: "sarahcreates",
        title: "Advanced Color Theory for Digital Designers (Premium)",
        content: "Ready to take your color game to the next level? In this premium post I share the \
psychology behind color combinations, how to build palettes that convert, and case studies from my \
client work.",
        kind: PostKind::Premium,
        tags: &["design", "color", "premium", "advanced"],
        media: Some((MediaKind::Image, "https://images.example.com/color-theory.png")),
        featured: false,
        views: 920,
    },
    SamplePost {
        creator: "fitnessmarcus",
        title: "The Perfect Morning Workout Routine (20 Minutes)",
        content: "No time for the gym? This 20-minute morning routine will energize your day: a five \
minute warm-up, three rounds of push-ups, squats, planks and burpees, then a short cool-down stretch.",
        kind: PostKind::Free,
        tags: &["fitness", "workout", "morning", "routine"],
        media: Some((MediaKind::Video, "https://videos.example.com/morning-workout.mp4")),
        featured: true,
        views: 1530,
    },
    SamplePost {
        creator: "emmawrites",
        title: "Character Development: Making Readers Fall in Love",
        content: "The secret to unforgettable characters isn't perfection, it's authenticity. Think of \
your protagonist and write one sentence each for their surface, mask, core and shadow.",
        kind: PostKind::Free,
        tags: &["writing", "characters", "storytelling", "craft"],
        media: None,
        featured: false,
        views: 640,
    },
    SamplePost {
        creator: "techwithdavid",
        title: "Building Your First React Component: Step-by-Step Guide",
        content: "New to React? Today we build a reusable Button component from scratch, covering props \
and destructuring, conditional styling, event handling and component composition.",
        kind: PostKind::Free,
        tags: &["react", "javascript", "tutorial", "beginners"],
        media: Some((MediaKind::Image, "https://images.example.com/react-button.png")),
        featured: true,
        views: 1210,
    },
    SamplePost {
        creator: "lunacooks",
        title: "Creamy Cashew Alfredo (Dairy-Free)",
        content: "This plant-based alfredo sauce is so creamy you won't believe it's dairy-free. Soak \
the cashews, blend with almond milk, garlic, nutritional yeast and lemon, then toss with pasta.",
        kind: PostKind::Free,
        tags: &["recipe", "vegan", "pasta", "dairy-free"],
        media: Some((MediaKind::Image, "https://images.example.com/cashew-alfredo.png")),
        featured: false,
        views: 780,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub creators: usize,
    pub supporters: usize,
    pub posts: usize,
}

/// Loads the sample dataset. Does nothing if users already exist.
pub fn seed(db: &Database) -> SeedSummary {
    if !db.users().get_all().is_empty() {
        return SeedSummary {
            creators: 0,
            supporters: 0,
            posts: 0,
        };
    }

    let users: Vec<User> = USERS
        .iter()
        .map(|sample| {
            let (year, month, day) = sample.joined;
            db.users().create(NewUser {
                email: format!("{}@example.com", sample.username),
                name: sample.name.to_string(),
                username: sample.username.to_string(),
                avatar: None,
                bio: Some(sample.bio.to_string()),
                role: sample.role,
                socials: Socials {
                    twitter: sample.twitter.map(str::to_string),
                    instagram: sample.instagram.map(str::to_string),
                    website: sample.website.map(str::to_string),
                },
                is_verified: sample.verified,
                joined_at: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
            })
        })
        .collect();

    let (creators, supporters): (Vec<&User>, Vec<&User>) =
        users.iter().partition(|user| user.is_creator());

    let mut posts = Vec::new();
    for sample in POSTS {
        let Some(creator) = creators.iter().find(|c| c.username == sample.creator) else {
            continue;
        };

        let post = db.posts().create(NewPost {
            creator_id: creator.id,
            title: sample.title.to_string(),
            content: sample.content.to_string(),
            excerpt: Some(excerpt_of(sample.content)),
            kind: sample.kind,
            media: sample.media.map(|(kind, url)| Media {
                kind,
                url: url.to_string(),
                thumbnail: None,
            }),
            tags: sample.tags.iter().map(|t| t.to_string()).collect(),
            scheduled_for: None,
            published: true,
            featured: sample.featured,
        });
        for _ in 0..sample.views {
            db.posts().increment_views(post.id);
        }
        posts.push(post);
    }

    // Supporters follow every creator; each creator follows the next one.
    for supporter in &supporters {
        for creator in &creators {
            db.follows().create(NewFollow {
                follower_id: supporter.id,
                following_id: creator.id,
            });
        }
    }
    for (i, creator) in creators.iter().enumerate() {
        let next = creators[(i + 1) % creators.len()];
        db.follows().create(NewFollow {
            follower_id: creator.id,
            following_id: next.id,
        });
    }

    for (i, post) in posts.iter().enumerate() {
        for (j, supporter) in supporters.iter().enumerate() {
            if (i + j) % 2 == 0 {
                db.likes().create(NewLike {
                    post_id: post.id,
                    user_id: supporter.id,
                });
            }
        }
        if let Some(fan) = supporters.get(i % supporters.len().max(1)) {
            db.comments().create(NewComment {
                post_id: post.id,
                user_id: fan.id,
                text: "This is exactly what I needed today, thank you!".to_string(),
            });
        }
    }

    for (i, creator) in creators.iter().enumerate() {
        let Some(supporter) = supporters.get(i % supporters.len().max(1)) else {
            continue;
        };
        let tier = if i % 3 == 0 {
            SubscriptionTier::Premium
        } else {
            SubscriptionTier::Basic
        };
        db.subscriptions().create(NewSubscription {
            supporter_id: supporter.id,
            creator_id: creator.id,
            status: SubscriptionStatus::Active,
            tier,
            mock_price: tier.price(),
            expires_at: None,
        });
    }

    let summary = SeedSummary {
        creators: creators.len(),
        supporters: supporters.len(),
        posts: posts.len(),
    };
    info!(
        "Seeded {} creators, {} supporters and {} posts",
        summary.creators, summary.supporters, summary.posts
    );
    summary
}
