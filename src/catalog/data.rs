//! Built-in sample data
//!
//! The fixed glimmer catalog, the signed-in user, a handful of sample
//! profiles and the completed challenges that populate the feed.

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

use crate::model::{Category, CompletedChallenge, Difficulty, Glimmer, MediaType, User};

/// Id of the signed-in user
pub const CURRENT_USER_ID: &str = "u1";

pub fn glimmers() -> Vec<Glimmer> {
    use Category::*;
    use Difficulty::*;

    vec![
        Glimmer::new(
            "s1",
            "Talk to a stranger",
            "Approach someone you don't know and start a conversation. Share what you learned!",
            Social,
        )
        .difficulty(Hard),
        Glimmer::new(
            "s2",
            "Voice note to a friend",
            "Send a sincere voice note to a friend expressing why you appreciate them.",
            Social,
        )
        .difficulty(Easy),
        Glimmer::new(
            "s3",
            "Deep question",
            "Ask someone a profound question and share their answer (with their permission).",
            Social,
        )
        .difficulty(Medium),
        Glimmer::new(
            "l1",
            "15-second teacher",
            "Watch an educational video and explain what you learned in 15 seconds.",
            Learning,
        )
        .difficulty(Medium),
        Glimmer::new(
            "l2",
            "Science fact",
            "Research and share a weird scientific fact that most people don't know.",
            Learning,
        )
        .difficulty(Easy),
        Glimmer::new(
            "l3",
            "Language explorer",
            "Learn to say 'hello' in 5 different languages and demonstrate them.",
            Learning,
        )
        .difficulty(Medium),
        Glimmer::new(
            "b1",
            "Unusual squats",
            "Do 10 squats in an unusual location. The more unexpected, the better!",
            Body,
        )
        .difficulty(Easy),
        Glimmer::new(
            "b2",
            "Morning stretch",
            "Film your morning stretch routine in front of a mirror.",
            Body,
        )
        .difficulty(Easy),
        Glimmer::new(
            "b3",
            "Animal mimicry",
            "Imitate today's animal (choose your favorite) for 10 seconds.",
            Body,
        )
        .difficulty(Medium),
        Glimmer::new(
            "se1",
            "Life achievements",
            "List 3 accomplishments from your life that you're proud of.",
            SelfGrowth,
        )
        .difficulty(Medium),
        Glimmer::new(
            "se2",
            "Self-love letter",
            "Write and read aloud one thing you love about yourself.",
            SelfGrowth,
        )
        .difficulty(Medium),
        Glimmer::new(
            "se3",
            "Favorite space",
            "Show your favorite corner of your home and explain why it matters to you.",
            SelfGrowth,
        )
        .difficulty(Easy),
        Glimmer::new(
            "w1",
            "Pineapple dance",
            "Create and perform the 'pineapple dance' - be as creative as possible!",
            Wild,
        )
        .difficulty(Hard),
        Glimmer::new(
            "w2",
            "Object faces",
            "Transform everyday objects into a face - the funnier, the better!",
            Wild,
        )
        .difficulty(Easy),
        Glimmer::new(
            "w3",
            "Motivational shout",
            "Shout (gracefully) a motivational mantra from a balcony or open space.",
            Wild,
        )
        .difficulty(Hard),
    ]
}

pub fn current_user() -> User {
    User {
        id: CURRENT_USER_ID.to_string(),
        username: "glimmerUser".to_string(),
        avatar: "https://i.pravatar.cc/150?img=32".to_string(),
        bio: Some("Living life one Glimmer at a time ✨".to_string()),
        followers: 142,
        following: 87,
        total_likes: 1254,
        completed_glimmers: 42,
        selected_categories: Vec::new(),
    }
}

fn sample_user(
    id: &str,
    username: &str,
    img: u32,
    stats: [u32; 4],
    categories: &[Category],
) -> User {
    let [followers, following, total_likes, completed_glimmers] = stats;
    User {
        id: id.to_string(),
        username: username.to_string(),
        avatar: format!("https://i.pravatar.cc/150?img={}", img),
        bio: None,
        followers,
        following,
        total_likes,
        completed_glimmers,
        selected_categories: categories.to_vec(),
    }
}

pub fn sample_users() -> BTreeMap<String, User> {
    use Category::*;

    [
        sample_user("u2", "dancingQueen", 28, [354, 127, 3254, 78], &[Wild, Body, Social]),
        sample_user("u3", "bookworm", 25, [142, 90, 1587, 65], &[Social, Learning, SelfGrowth]),
        sample_user("u4", "yogamaster", 23, [726, 103, 8543, 182], &[Body, SelfGrowth]),
        sample_user("u5", "scienceGeek", 5, [289, 76, 4271, 96], &[Learning, Social]),
        sample_user("u6", "bookNookLover", 9, [183, 201, 2756, 72], &[SelfGrowth, Learning]),
    ]
    .into_iter()
    .map(|user| (user.id.clone(), user))
    .collect()
}

struct FeedSeed {
    id: &'static str,
    user_id: &'static str,
    glimmer_id: &'static str,
    img: u32,
    description: &'static str,
    category: Category,
    hours_ago: i64,
    likes: u32,
    comments: u32,
}

/// Completed challenges, timestamped relative to `now`
pub fn completed_challenges(now: DateTime<Utc>) -> Vec<CompletedChallenge> {
    use Category::*;

    let seeds = [
        FeedSeed {
            id: "cc1",
            user_id: "u2",
            glimmer_id: "w1",
            img: 28,
            description: "I never thought I'd be dancing like a pineapple in public! 🍍",
            category: Wild,
            hours_ago: 2,
            likes: 73,
            comments: 12,
        },
        FeedSeed {
            id: "cc2",
            user_id: "u3",
            glimmer_id: "s1",
            img: 25,
            description: "Met someone new today. We talked about our favorite books!",
            category: Social,
            hours_ago: 5,
            likes: 42,
            comments: 7,
        },
        FeedSeed {
            id: "cc3",
            user_id: "u4",
            glimmer_id: "b2",
            img: 23,
            description: "Morning stretches really help me start the day right!",
            category: Body,
            hours_ago: 7,
            likes: 31,
            comments: 4,
        },
        FeedSeed {
            id: "cc4",
            user_id: "u5",
            glimmer_id: "l2",
            img: 5,
            description: "Did you know octopuses have 3 hearts?! Marine biology is wild!",
            category: Learning,
            hours_ago: 10,
            likes: 89,
            comments: 15,
        },
        FeedSeed {
            id: "cc5",
            user_id: "u6",
            glimmer_id: "se3",
            img: 9,
            description: "My reading nook - where I escape from the world every night.",
            category: SelfGrowth,
            hours_ago: 14,
            likes: 56,
            comments: 9,
        },
    ];

    seeds
        .into_iter()
        .map(|seed| CompletedChallenge {
            id: seed.id.to_string(),
            user_id: seed.user_id.to_string(),
            glimmer_id: seed.glimmer_id.to_string(),
            media_type: MediaType::Video,
            media_url: format!("https://i.pravatar.cc/300?img={}", seed.img),
            description: Some(seed.description.to_string()),
            category: seed.category,
            is_public: true,
            timestamp: now - Duration::hours(seed.hours_ago),
            likes: seed.likes,
            comments: seed.comments,
        })
        .collect()
}
