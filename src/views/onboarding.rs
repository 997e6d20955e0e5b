//! Onboarding screen
//!
//! Category picker shown until the user completes onboarding.

use crate::error::{AppError, AppResult};
use crate::model::Category;

/// Local selection state of the onboarding screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingView {
    /// Selected categories in the order they were picked
    selected: Vec<Category>,
}

impl OnboardingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories on offer, in catalog order
    pub fn options(&self) -> &'static [Category] {
        Category::all()
    }

    pub fn selected(&self) -> &[Category] {
        &self.selected
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    /// Add or remove a category; returns whether it is now selected
    pub fn toggle(&mut self, category: Category) -> bool {
        if let Some(pos) = self.selected.iter().position(|c| *c == category) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(category);
            true
        }
    }

    pub fn can_continue(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn continue_label(&self) -> String {
        match self.selected.len() {
            0 => "Select at least one category".to_string(),
            1 => "Continue with 1 category".to_string(),
            n => format!("Continue with {} categories", n),
        }
    }

    /// Confirm the selection
    pub fn confirm(&self) -> AppResult<Vec<Category>> {
        if self.selected.is_empty() {
            return Err(AppError::EmptySelection);
        }
        Ok(self.selected.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_keeps_pick_order() {
        let mut view = OnboardingView::new();

        assert!(view.toggle(Category::Wild));
        assert!(view.toggle(Category::Body));
        assert!(view.toggle(Category::Social));
        assert!(!view.toggle(Category::Body));

        assert_eq!(view.selected(), &[Category::Wild, Category::Social]);
        assert!(view.is_selected(Category::Wild));
        assert!(!view.is_selected(Category::Body));
    }

    #[test]
    fn test_cannot_continue_empty() {
        let mut view = OnboardingView::new();

        assert!(!view.can_continue());
        assert!(matches!(view.confirm(), Err(AppError::EmptySelection)));
        assert_eq!(view.continue_label(), "Select at least one category");

        view.toggle(Category::Learning);
        assert!(view.can_continue());
        assert_eq!(view.confirm().unwrap(), vec![Category::Learning]);
        assert_eq!(view.continue_label(), "Continue with 1 category");

        view.toggle(Category::Learning);
        assert!(view.confirm().is_err());
    }

    #[test]
    fn test_label_pluralises() {
        let mut view = OnboardingView::new();
        view.toggle(Category::Learning);
        view.toggle(Category::SelfGrowth);

        assert_eq!(view.continue_label(), "Continue with 2 categories");
    }
}
