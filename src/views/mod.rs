//! Screen state machines
//!
//! Each view holds only its own, screen-scoped state and reports intents
//! back to the controller. Views are remounted (state discarded) whenever
//! the controller navigates to their screen.

pub mod challenge;
pub mod daily;
pub mod feed;
pub mod nav;
pub mod onboarding;
pub mod profile;

pub use challenge::{CaptureState, CaptureTicket, ChallengeCard, ChallengePayload, Resolution};
pub use daily::{DailyGlimmerView, StarRating};
pub use feed::{CategoryFilter, FeedTab, FeedView, Swipe, EMPTY_FEED_MESSAGE, SWIPE_THRESHOLD};
pub use nav::{NavBar, NavItem};
pub use onboarding::OnboardingView;
pub use profile::{ProfileStats, ProfileTab, ProfileView};
