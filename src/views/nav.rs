//! Bottom navigation bar

use crate::model::AppView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: AppView,
}

static ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Home",
        icon: "⌂",
        target: AppView::Feed,
    },
    NavItem {
        label: "Create",
        icon: "+",
        target: AppView::Daily,
    },
    NavItem {
        label: "Profile",
        icon: "☺",
        target: AppView::Profile,
    },
];

pub struct NavBar;

impl NavBar {
    pub fn items() -> &'static [NavItem] {
        &ITEMS
    }

    /// Each entry paired with whether it is the active view
    pub fn entries(active: AppView) -> impl Iterator<Item = (NavItem, bool)> {
        ITEMS.iter().map(move |item| (*item, item.target == active))
    }

    /// Whether `target` is a nav bar destination
    pub fn is_destination(target: AppView) -> bool {
        ITEMS.iter().any(|item| item.target == target)
    }

    /// The bar shows once onboarding is done, except on the challenge screen
    pub fn is_visible(has_completed_onboarding: bool, active: AppView) -> bool {
        has_completed_onboarding && active != AppView::Challenge
    }
}
