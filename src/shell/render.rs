//! Plain-text rendering of each screen

use crate::app::{Glimmerly, Screen};
use crate::catalog::Catalog;
use crate::model::{AppView, CompletedChallenge, Glimmer};
use crate::views::{
    CaptureState, ChallengeCard, DailyGlimmerView, FeedTab, FeedView, NavBar, OnboardingView,
    ProfileTab, ProfileView, StarRating, EMPTY_FEED_MESSAGE,
};

/// Render the mounted screen plus the nav bar when it is visible
pub fn render(app: &Glimmerly) -> String {
    let mut lines = match app.screen() {
        Screen::Onboarding(view) => onboarding(view),
        Screen::Daily(view) => daily(app, view),
        Screen::Challenge(card) => challenge(card),
        Screen::Feed(view) => feed(app.catalog(), view),
        Screen::Profile(view) => profile(view),
    };

    let state = app.state();
    if NavBar::is_visible(state.has_completed_onboarding, state.view) {
        lines.push(String::new());
        lines.push(nav_bar(state.view));
    }
    lines.join("\n")
}

fn onboarding(view: &OnboardingView) -> Vec<String> {
    let mut lines = vec![
        "Welcome to Glimmerly".to_string(),
        "Pick the kinds of challenges you want to see:".to_string(),
        String::new(),
    ];
    for category in view.options() {
        let info = category.info();
        let mark = if view.is_selected(*category) { "x" } else { " " };
        lines.push(format!(
            "  [{}] {} {:<8} {}",
            mark, info.emoji, info.title, info.description
        ));
    }
    lines.push(String::new());
    lines.push(format!("> {}", view.continue_label()));
    lines
}

fn daily(app: &Glimmerly, view: &DailyGlimmerView) -> Vec<String> {
    let state = app.state();
    let mut lines = vec![
        "Today's Glimmer".to_string(),
        format!("New glimmer in {}", app.time_remaining()),
        String::new(),
    ];

    if view.is_revealed() {
        lines.extend(glimmer_card(&state.daily_glimmer));
        lines.push(String::new());
        lines.push("> accept".to_string());
    } else {
        lines.push("  ✨ A new glimmer is waiting. Type `reveal` to see it.".to_string());
    }
    lines.push(format!(
        "> {}",
        DailyGlimmerView::skip_label(state.remaining_skips)
    ));
    lines
}

fn glimmer_card(glimmer: &Glimmer) -> Vec<String> {
    vec![
        format!(
            "  {} {}   {}",
            glimmer.category.emoji(),
            glimmer.category,
            StarRating::for_glimmer(glimmer).render()
        ),
        format!("  {}", glimmer.title),
        format!("  {}", glimmer.description),
    ]
}

fn challenge(card: &ChallengeCard) -> Vec<String> {
    let mut lines = vec![format!("Challenge: {}", card.glimmer().title), String::new()];

    match card.state() {
        CaptureState::Idle => {
            lines.push(format!("  Mode: {}", card.media_type()));
            lines.push(format!("> {}", card.capture_label()));
        }
        CaptureState::Capturing { .. } => {
            lines.push(format!("  ● {}", card.capture_label()));
        }
        CaptureState::Captured { media } => {
            lines.push(format!("  Captured {}: {}", media.media_type, media.url));
            let description = if card.description().is_empty() {
                "(no description)"
            } else {
                card.description()
            };
            lines.push(format!("  Description: {}", description));
            lines.push(format!(
                "  Category: {} {}",
                card.category().emoji(),
                card.category()
            ));
            lines.push(format!(
                "  Visibility: {}",
                if card.is_public() { "public" } else { "private" }
            ));
            lines.push(String::new());
            lines.push("> submit | retry".to_string());
        }
    }
    lines
}

fn feed(catalog: &Catalog, view: &FeedView) -> Vec<String> {
    let tabs: Vec<String> = FeedTab::all()
        .iter()
        .map(|tab| {
            if *tab == view.tab() {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect();

    let mut lines = vec![tabs.join("  "), format!("Category: {}", view.filter())];
    lines.push(String::new());

    let item = match view.current() {
        Some(item) => item,
        None => {
            lines.push(format!("  {}", EMPTY_FEED_MESSAGE));
            return lines;
        }
    };

    let author = catalog
        .user(&item.user_id)
        .map(|u| u.username.as_str())
        .unwrap_or("unknown");
    let heart = if view.is_liked(&item.id) { "♥" } else { "♡" };

    lines.push(format!(
        "  {} {} @{}{}",
        item.category.emoji(),
        item.media_type,
        author,
        if view.is_paused() { "  (paused)" } else { "" }
    ));
    if let Some(description) = &item.description {
        lines.push(format!("  {}", description));
    }
    lines.push(format!(
        "  {} {}   💬 {}",
        heart,
        view.displayed_likes(item),
        item.comments
    ));

    let dots: String = view
        .indicator()
        .iter()
        .map(|active| if *active { '●' } else { '○' })
        .collect();
    lines.push(format!("  {}", dots));
    lines
}

fn profile(view: &ProfileView) -> Vec<String> {
    let user = view.user();
    let stats = view.stats();
    let mut lines = vec![format!("@{}", user.username)];
    if let Some(bio) = &user.bio {
        lines.push(bio.clone());
    }
    lines.push(format!(
        "{} followers  {} following  {} likes  {} glimmers",
        stats.followers, stats.following, stats.total_likes, stats.completed_glimmers
    ));
    if !view.is_current_user() {
        lines.push(format!("> {}", view.follow_label()));
    }
    lines.push(String::new());

    let tabs: Vec<String> = ProfileTab::all()
        .iter()
        .map(|tab| {
            if *tab == view.tab() {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect();
    lines.push(tabs.join("  "));

    let challenges = view.challenges();
    if challenges.is_empty() {
        lines.push(format!("  {}", view.tab().empty_message()));
    }
    for item in challenges {
        lines.push(challenge_row(item));
    }
    lines
}

fn challenge_row(item: &CompletedChallenge) -> String {
    format!(
        "  {} {:<6} {:<8} ♥ {:<5} {}",
        item.category.emoji(),
        item.media_type.to_string(),
        item.category.name(),
        item.likes,
        item.description.as_deref().unwrap_or("")
    )
}

pub fn nav_bar(active: AppView) -> String {
    NavBar::entries(active)
        .map(|(item, is_active)| {
            if is_active {
                format!("[{} {}]", item.icon, item.label)
            } else {
                format!(" {} {} ", item.icon, item.label)
            }
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// Table of catalog glimmers for the `catalog` command
pub fn glimmer_table(glimmers: &[&Glimmer]) -> String {
    let mut lines = vec![
        format!("{:<5} {:<10} {:<6} {}", "ID", "Category", "Stars", "Title"),
        "-".repeat(60),
    ];
    for glimmer in glimmers {
        lines.push(format!(
            "{:<5} {:<10} {:<6} {}",
            glimmer.id,
            glimmer.category.name(),
            StarRating::for_glimmer(glimmer).render(),
            glimmer.title
        ));
    }
    lines.join("\n")
}

/// Table of completed challenges for the `feed` command
pub fn feed_table(catalog: &Catalog, items: &[&CompletedChallenge]) -> String {
    if items.is_empty() {
        return EMPTY_FEED_MESSAGE.to_string();
    }

    let mut lines = vec![
        format!(
            "{:<5} {:<16} {:<10} {:<6} {:>6}",
            "ID", "Author", "Category", "Media", "Likes"
        ),
        "-".repeat(48),
    ];
    for item in items {
        let author = catalog
            .user(&item.user_id)
            .map(|u| u.username.as_str())
            .unwrap_or("-");
        lines.push(format!(
            "{:<5} {:<16} {:<10} {:<6} {:>6}",
            item.id,
            author,
            item.category.name(),
            item.media_type.to_string(),
            item.likes
        ));
    }
    lines.join("\n")
}

/// Header plus challenge list for the `profile` command
pub fn profile_summary(view: &ProfileView) -> String {
    profile(view).join("\n")
}
