//! Feed screen
//!
//! Vertical short-video feed over the completed challenges. Holds the
//! active tab, category filter, position, like set and a paused flag.
//! Likes are session-local and never written back to the items.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::model::{Category, CompletedChallenge};

/// Vertical displacement a swipe must exceed to change item
pub const SWIPE_THRESHOLD: f64 = 50.0;

pub const EMPTY_FEED_MESSAGE: &str = "No videos available for this category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedTab {
    #[default]
    ForYou,
    Friends,
    Popular,
}

impl FeedTab {
    pub fn all() -> &'static [FeedTab] {
        &[FeedTab::ForYou, FeedTab::Friends, FeedTab::Popular]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedTab::ForYou => "For You",
            FeedTab::Friends => "Friends",
            FeedTab::Popular => "Popular",
        }
    }
}

impl FromStr for FeedTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "for-you" | "foryou" => Ok(FeedTab::ForYou),
            "friends" => Ok(FeedTab::Friends),
            "popular" => Ok(FeedTab::Popular),
            other => Err(format!("Unknown feed tab: {}", other)),
        }
    }
}

/// Category filter: everything, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn as_category(&self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => Some(*c),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        self.as_category().map_or(true, |c| c == category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|e| e.to_string())
    }
}

/// Direction a swipe moved the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Previous,
    Next,
    None,
}

#[derive(Debug, Clone)]
pub struct FeedView {
    items: Vec<CompletedChallenge>,
    /// Indices into `items` passing the current filter
    visible: Vec<usize>,
    tab: FeedTab,
    filter: CategoryFilter,
    index: usize,
    liked: HashSet<String>,
    paused: bool,
}

impl FeedView {
    pub fn new(items: Vec<CompletedChallenge>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            visible,
            tab: FeedTab::default(),
            filter: CategoryFilter::default(),
            index: 0,
            liked: HashSet::new(),
            paused: false,
        }
    }

    pub fn tab(&self) -> FeedTab {
        self.tab
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Items passing the current filter, in feed order
    pub fn visible(&self) -> impl Iterator<Item = &CompletedChallenge> + '_ {
        self.visible.iter().map(move |&i| &self.items[i])
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// The item on screen, or `None` for the empty state
    pub fn current(&self) -> Option<&CompletedChallenge> {
        self.visible.get(self.index).map(|&i| &self.items[i])
    }

    /// Position dots, true at the current index
    pub fn indicator(&self) -> Vec<bool> {
        (0..self.visible.len()).map(|i| i == self.index).collect()
    }

    pub fn set_tab(&mut self, tab: FeedTab) {
        self.tab = tab;
        self.index = 0;
    }

    /// Change the category filter; always rewinds to the first item
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item.category))
            .map(|(i, _)| i)
            .collect();
        self.index = 0;

        tracing::debug!(filter = %filter, visible = self.visible.len(), "Feed filter changed");
    }

    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.visible.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Handle a vertical swipe of `delta_y` (end minus start)
    ///
    /// Dragging down past the threshold goes back, dragging up advances.
    pub fn swipe(&mut self, delta_y: f64) -> Swipe {
        if delta_y > SWIPE_THRESHOLD {
            if self.previous() {
                return Swipe::Previous;
            }
        } else if delta_y < -SWIPE_THRESHOLD && self.next() {
            return Swipe::Next;
        }
        Swipe::None
    }

    /// Tap toggles the play/pause indicator
    pub fn tap(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    /// Toggle like on an item; returns whether it is now liked
    pub fn toggle_like(&mut self, id: &str) -> bool {
        if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.to_string());
            true
        }
    }

    /// Toggle like on the item on screen
    pub fn toggle_like_current(&mut self) -> Option<bool> {
        let id = self.current()?.id.clone();
        Some(self.toggle_like(&id))
    }

    /// Like count shown for `item`: stored count plus this session's like
    pub fn displayed_likes(&self, item: &CompletedChallenge) -> u32 {
        item.likes + u32::from(self.is_liked(&item.id))
    }
}
