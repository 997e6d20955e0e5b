//! Core data types for Glimmerly
//!
//! This module defines the fundamental types shared by every screen:
//! - `Glimmer`: A daily challenge prompt from the catalog
//! - `User`: A profile with aggregate stats
//! - `CompletedChallenge`: A published completion shown in the feed
//! - `Category`, `Difficulty`, `MediaType` and `AppView`: Classification enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed challenge themes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Connect with other people
    Social,
    /// Learn something new
    Learning,
    /// Move the body
    Body,
    /// Self-awareness and personal growth
    #[serde(rename = "Self")]
    SelfGrowth,
    /// Creative and bold
    Wild,
}

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

impl Category {
    /// All categories in catalog order
    pub fn all() -> &'static [Category] {
        &[
            Category::Social,
            Category::Learning,
            Category::Body,
            Category::SelfGrowth,
            Category::Wild,
        ]
    }

    /// Canonical name, as persisted and displayed
    pub fn name(&self) -> &'static str {
        match self {
            Category::Social => "Social",
            Category::Learning => "Learning",
            Category::Body => "Body",
            Category::SelfGrowth => "Self",
            Category::Wild => "Wild",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        match self {
            Category::Social => CategoryInfo {
                title: "Social Glimmers",
                description: "Connect with others and build meaningful relationships",
                emoji: "👥",
            },
            Category::Learning => CategoryInfo {
                title: "Learning Glimmers",
                description: "Expand your knowledge and learn something new",
                emoji: "🧠",
            },
            Category::Body => CategoryInfo {
                title: "Body Glimmers",
                description: "Move your body and improve physical wellbeing",
                emoji: "💪",
            },
            Category::SelfGrowth => CategoryInfo {
                title: "Self Glimmers",
                description: "Foster self-awareness and personal growth",
                emoji: "🌱",
            },
            Category::Wild => CategoryInfo {
                title: "Wild Glimmers",
                description: "Get creative, be bold, and have fun",
                emoji: "🎭",
            },
        }
    }

    pub fn emoji(&self) -> &'static str {
        self.info().emoji
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Challenge difficulty, rendered as one to three stars
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    /// Highest possible level (number of stars in a rating)
    pub const MAX: u8 = 3;

    pub fn level(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(format!("difficulty must be between 1 and 3, got {}", other)),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.level()
    }
}

/// A daily challenge prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Glimmer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default, rename = "difficultyLevel", skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Glimmer {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            difficulty: None,
        }
    }

    /// Builder method: set difficulty
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Difficulty level used for the star rating (unrated counts as 1)
    pub fn difficulty_level(&self) -> u8 {
        self.difficulty.map(|d| d.level()).unwrap_or(1)
    }
}

/// A user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub total_likes: u32,
    pub completed_glimmers: u32,
    #[serde(default)]
    pub selected_categories: Vec<Category>,
}

/// Kind of media attached to a completed challenge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Video,
    Photo,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Video => write!(f, "video"),
            MediaType::Photo => write!(f, "photo"),
        }
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(MediaType::Video),
            "photo" => Ok(MediaType::Photo),
            other => Err(format!("Unknown media type: {}", other)),
        }
    }
}

/// A published completion of a Glimmer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedChallenge {
    pub id: String,
    pub user_id: String,
    pub glimmer_id: String,
    pub media_type: MediaType,
    pub media_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    pub is_public: bool,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub comments: u32,
}

/// Top-level screens
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
    Onboarding,
    Daily,
    Challenge,
    Feed,
    Profile,
}

impl fmt::Display for AppView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppView::Onboarding => write!(f, "onboarding"),
            AppView::Daily => write!(f, "daily"),
            AppView::Challenge => write!(f, "challenge"),
            AppView::Feed => write!(f, "feed"),
            AppView::Profile => write!(f, "profile"),
        }
    }
}

impl FromStr for AppView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "onboarding" => Ok(AppView::Onboarding),
            "daily" => Ok(AppView::Daily),
            "challenge" => Ok(AppView::Challenge),
            "feed" | "home" => Ok(AppView::Feed),
            "profile" => Ok(AppView::Profile),
            other => Err(format!("Unknown view: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization_uses_display_names() {
        let json = serde_json::to_string(&vec![Category::Body, Category::SelfGrowth]).unwrap();
        assert_eq!(json, r#"["Body","Self"]"#);

        let restored: Vec<Category> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, vec![Category::Body, Category::SelfGrowth]);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("wild".parse::<Category>().unwrap(), Category::Wild);
        assert_eq!(" Self ".parse::<Category>().unwrap(), Category::SelfGrowth);
        assert!("Cooking".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_info() {
        assert_eq!(Category::all().len(), 5);
        assert_eq!(Category::Body.info().title, "Body Glimmers");
        assert_eq!(Category::Wild.emoji(), "🎭");
    }

    #[test]
    fn test_difficulty_bounds() {
        assert_eq!(Difficulty::try_from(2).unwrap(), Difficulty::Medium);
        assert!(Difficulty::try_from(0).is_err());
        assert!(Difficulty::try_from(4).is_err());

        let parsed: Result<Glimmer, _> = serde_json::from_str(
            r#"{"id":"x","title":"t","description":"d","category":"Wild","difficultyLevel":7}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_glimmer_default_difficulty_level() {
        let glimmer = Glimmer::new("x", "Title", "Desc", Category::Social);
        assert_eq!(glimmer.difficulty_level(), 1);

        let hard = glimmer.difficulty(Difficulty::Hard);
        assert_eq!(hard.difficulty_level(), 3);
    }

    #[test]
    fn test_app_view_parse() {
        assert_eq!("home".parse::<AppView>().unwrap(), AppView::Feed);
        assert_eq!("Profile".parse::<AppView>().unwrap(), AppView::Profile);
        assert!("friends".parse::<AppView>().is_err());
    }
}
