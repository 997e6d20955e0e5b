//! Daily Glimmer screen
//!
//! The glimmer starts hidden behind a "reveal" prompt. Revealing is one-way
//! and only resets when a glimmer with a different id is mounted.

use crate::model::{Difficulty, Glimmer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyGlimmerView {
    glimmer_id: String,
    revealed: bool,
}

/// Star rating derived from a glimmer's difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub filled: u8,
    pub empty: u8,
}

impl StarRating {
    pub fn for_glimmer(glimmer: &Glimmer) -> Self {
        let filled = glimmer.difficulty_level().min(Difficulty::MAX);
        Self {
            filled,
            empty: Difficulty::MAX - filled,
        }
    }

    /// Render as `★★☆`
    pub fn render(&self) -> String {
        "★".repeat(self.filled as usize) + &"☆".repeat(self.empty as usize)
    }
}

impl DailyGlimmerView {
    pub fn new(glimmer: &Glimmer) -> Self {
        Self {
            glimmer_id: glimmer.id.clone(),
            revealed: false,
        }
    }

    pub fn glimmer_id(&self) -> &str {
        &self.glimmer_id
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Follow the controller's current glimmer; returns true if the view was reset
    pub fn sync(&mut self, glimmer: &Glimmer) -> bool {
        if self.glimmer_id == glimmer.id {
            return false;
        }
        *self = Self::new(glimmer);
        true
    }

    pub fn can_skip(remaining_skips: u32) -> bool {
        remaining_skips > 0
    }

    pub fn skip_label(remaining_skips: u32) -> String {
        match remaining_skips {
            0 => "No skips available".to_string(),
            1 => "Skip (1 skip left)".to_string(),
            n => format!("Skip ({} skips left)", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn glimmer(id: &str) -> Glimmer {
        Glimmer::new(id, "Title", "Description", Category::Wild)
    }

    #[test]
    fn test_reveal_is_one_way() {
        let g = glimmer("w1");
        let mut view = DailyGlimmerView::new(&g);
        assert!(!view.is_revealed());

        view.reveal();
        view.reveal();
        assert!(view.is_revealed());

        // Same id keeps the reveal
        assert!(!view.sync(&g));
        assert!(view.is_revealed());
    }

    #[test]
    fn test_new_glimmer_resets() {
        let mut view = DailyGlimmerView::new(&glimmer("w1"));
        view.reveal();

        assert!(view.sync(&glimmer("w2")));
        assert!(!view.is_revealed());
        assert_eq!(view.glimmer_id(), "w2");
    }

    #[test]
    fn test_star_rating() {
        let unrated = glimmer("w1");
        assert_eq!(StarRating::for_glimmer(&unrated), StarRating { filled: 1, empty: 2 });

        let hard = glimmer("w1").difficulty(Difficulty::Hard);
        let rating = StarRating::for_glimmer(&hard);
        assert_eq!(rating, StarRating { filled: 3, empty: 0 });
        assert_eq!(rating.render(), "★★★");

        let medium = glimmer("w1").difficulty(Difficulty::Medium);
        assert_eq!(StarRating::for_glimmer(&medium).render(), "★★☆");
    }

    #[test]
    fn test_skip_labels() {
        assert!(!DailyGlimmerView::can_skip(0));
        assert!(DailyGlimmerView::can_skip(1));
        assert_eq!(DailyGlimmerView::skip_label(0), "No skips available");
        assert_eq!(DailyGlimmerView::skip_label(1), "Skip (1 skip left)");
        assert_eq!(DailyGlimmerView::skip_label(3), "Skip (3 skips left)");
    }
}
