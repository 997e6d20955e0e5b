//! Sample Data Store
//!
//! The only data layer: the glimmer catalog, user profiles and the
//! completed challenges shown in the feed, plus the random daily draw.
//!
//! # Example
//!
//! ```rust
//! use glimmerly::catalog::Catalog;
//! use glimmerly::model::Category;
//! use rand::SeedableRng;
//!
//! let catalog = Catalog::sample();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let glimmer = catalog.random_glimmer(&[Category::Body], &mut rng);
//! assert_eq!(glimmer.category, Category::Body);
//! ```

pub mod data;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

use crate::error::{AppError, AppResult};
use crate::model::{Category, CompletedChallenge, Glimmer, MediaType, User};

pub use data::CURRENT_USER_ID;

/// Immutable in-memory dataset
#[derive(Debug, Clone)]
pub struct Catalog {
    glimmers: Vec<Glimmer>,
    current_user: User,
    users: BTreeMap<String, User>,
    completed: Vec<CompletedChallenge>,
}

impl Catalog {
    /// Build a catalog from explicit collections
    ///
    /// Fails if `glimmers` is empty, since every draw must produce a glimmer.
    pub fn new(
        glimmers: Vec<Glimmer>,
        current_user: User,
        users: BTreeMap<String, User>,
        completed: Vec<CompletedChallenge>,
    ) -> AppResult<Self> {
        if glimmers.is_empty() {
            return Err(AppError::EmptyCatalog);
        }

        Ok(Self {
            glimmers,
            current_user,
            users,
            completed,
        })
    }

    /// The built-in sample dataset, timestamped relative to now
    pub fn sample() -> Self {
        Self::sample_at(Utc::now())
    }

    /// The built-in sample dataset with feed timestamps relative to `now`
    pub fn sample_at(now: DateTime<Utc>) -> Self {
        Self {
            glimmers: data::glimmers(),
            current_user: data::current_user(),
            users: data::sample_users(),
            completed: data::completed_challenges(now),
        }
    }

    pub fn glimmers(&self) -> &[Glimmer] {
        &self.glimmers
    }

    pub fn glimmer(&self, id: &str) -> Option<&Glimmer> {
        self.glimmers.iter().find(|g| g.id == id)
    }

    /// Glimmers belonging to any of `categories` (all of them if empty)
    pub fn glimmers_in<'a, 'b>(
        &'a self,
        categories: &'b [Category],
    ) -> impl Iterator<Item = &'a Glimmer> + 'b
    where
        'a: 'b,
    {
        self.glimmers
            .iter()
            .filter(move |g| categories.is_empty() || categories.contains(&g.category))
    }

    /// Draw a random glimmer restricted to `categories`
    ///
    /// An empty slice draws uniformly from the whole catalog. If no glimmer
    /// matches the requested categories the first catalog entry is returned.
    pub fn random_glimmer<R: Rng + ?Sized>(&self, categories: &[Category], rng: &mut R) -> &Glimmer {
        let fallback = &self.glimmers[0];

        if categories.is_empty() {
            return self.glimmers.choose(rng).unwrap_or(fallback);
        }

        let candidates: Vec<&Glimmer> = self
            .glimmers
            .iter()
            .filter(|g| categories.contains(&g.category))
            .collect();
        let drawn = candidates.choose(rng).copied().unwrap_or(fallback);

        tracing::debug!(
            glimmer = %drawn.id,
            candidates = candidates.len(),
            "Drew daily glimmer"
        );
        drawn
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn is_current_user(&self, user_id: &str) -> bool {
        self.current_user.id == user_id
    }

    /// Resolve a user id, checking the signed-in user first
    pub fn user(&self, user_id: &str) -> Option<&User> {
        if self.is_current_user(user_id) {
            Some(&self.current_user)
        } else {
            self.users.get(user_id)
        }
    }

    pub fn sample_users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Every completed challenge in feed order
    pub fn feed(&self) -> &[CompletedChallenge] {
        &self.completed
    }

    /// Completed challenges matching `category` (all if `None`), in feed order
    pub fn feed_in(&self, category: Option<Category>) -> Vec<&CompletedChallenge> {
        self.completed
            .iter()
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .collect()
    }

    /// Completed challenges published by `user_id`, optionally of one media type
    pub fn challenges_by(&self, user_id: &str, media: Option<MediaType>) -> Vec<&CompletedChallenge> {
        self.completed
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter(|c| media.map_or(true, |m| c.media_type == m))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = Catalog::sample();

        assert_eq!(catalog.glimmers().len(), 15);
        assert_eq!(catalog.sample_users().count(), 5);
        assert_eq!(catalog.feed().len(), 5);
        for category in Category::all() {
            assert_eq!(catalog.glimmers_in(&[*category]).count(), 3);
        }
    }

    #[test]
    fn test_feed_categories_match_source_glimmers() {
        let catalog = Catalog::sample();

        for item in catalog.feed() {
            let glimmer = catalog.glimmer(&item.glimmer_id).unwrap();
            assert_eq!(item.category, glimmer.category, "{}", item.id);
        }
    }

    #[test]
    fn test_random_glimmer_respects_every_subset() {
        let catalog = Catalog::sample();
        let mut rng = rng();
        let all = Category::all();

        // Every non-empty subset of the five categories
        for mask in 1u32..(1 << all.len()) {
            let subset: Vec<Category> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect();

            for _ in 0..20 {
                let glimmer = catalog.random_glimmer(&subset, &mut rng);
                assert!(subset.contains(&glimmer.category));
            }
        }
    }

    #[test]
    fn test_drawn_glimmer_outlives_category_list() {
        let catalog = Catalog::sample();
        let mut rng = rng();

        let drawn = {
            let categories = vec![Category::Body];
            catalog.random_glimmer(&categories, &mut rng)
        };
        assert_eq!(drawn.category, Category::Body);

        let listed: Vec<&Glimmer> = {
            let categories = vec![Category::Learning];
            catalog.glimmers_in(&categories).collect()
        };
        assert_eq!(listed.len(), 3);
    }

    #[test]
    fn test_random_glimmer_empty_draws_from_full_catalog() {
        let catalog = Catalog::sample();
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            let glimmer = catalog.random_glimmer(&[], &mut rng);
            assert!(catalog.glimmer(&glimmer.id).is_some());
            seen.insert(glimmer.category);
        }

        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_random_glimmer_falls_back_to_first_entry() {
        let only_social = vec![Glimmer::new("x1", "Wave", "Wave at a neighbour", Category::Social)];
        let catalog = Catalog::new(
            only_social,
            data::current_user(),
            BTreeMap::new(),
            Vec::new(),
        )
        .unwrap();

        let glimmer = catalog.random_glimmer(&[Category::Wild], &mut rng());
        assert_eq!(glimmer.id, "x1");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::new(Vec::new(), data::current_user(), BTreeMap::new(), Vec::new());
        assert!(matches!(result, Err(AppError::EmptyCatalog)));
    }

    #[test]
    fn test_user_lookup() {
        let catalog = Catalog::sample();

        assert_eq!(catalog.user("u1").unwrap().username, "glimmerUser");
        assert_eq!(catalog.user("u2").unwrap().username, "dancingQueen");
        assert!(catalog.user("u99").is_none());
    }

    #[test]
    fn test_feed_filter() {
        let catalog = Catalog::sample();

        let learning: Vec<&str> = catalog
            .feed_in(Some(Category::Learning))
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(learning, vec!["cc4"]);
        assert_eq!(catalog.feed_in(None).len(), 5);
    }

    #[test]
    fn test_challenges_by_user() {
        let catalog = Catalog::sample();

        assert_eq!(catalog.challenges_by("u2", Some(MediaType::Video)).len(), 1);
        assert!(catalog.challenges_by("u2", Some(MediaType::Photo)).is_empty());
        assert!(catalog.challenges_by("u1", None).is_empty());
    }
}
