//! Profile screen

use std::str::FromStr;

use crate::model::{CompletedChallenge, MediaType, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    All,
    Videos,
    Photos,
}

impl ProfileTab {
    pub fn all() -> &'static [ProfileTab] {
        &[ProfileTab::All, ProfileTab::Videos, ProfileTab::Photos]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::All => "All",
            ProfileTab::Videos => "Videos",
            ProfileTab::Photos => "Photos",
        }
    }

    pub fn media_type(&self) -> Option<MediaType> {
        match self {
            ProfileTab::All => None,
            ProfileTab::Videos => Some(MediaType::Video),
            ProfileTab::Photos => Some(MediaType::Photo),
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ProfileTab::All => "No content available",
            ProfileTab::Videos => "No videos available",
            ProfileTab::Photos => "No photos available",
        }
    }
}

impl FromStr for ProfileTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ProfileTab::All),
            "videos" | "video" => Ok(ProfileTab::Videos),
            "photos" | "photo" => Ok(ProfileTab::Photos),
            other => Err(format!("Unknown profile tab: {}", other)),
        }
    }
}

/// Read-only profile numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub followers: u32,
    pub following: u32,
    pub total_likes: u32,
    pub completed_glimmers: u32,
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    user: User,
    is_current_user: bool,
    challenges: Vec<CompletedChallenge>,
    tab: ProfileTab,
    following: bool,
}

impl ProfileView {
    /// `challenges` are the completed challenges published by `user`
    pub fn new(user: User, is_current_user: bool, challenges: Vec<CompletedChallenge>) -> Self {
        Self {
            user,
            is_current_user,
            challenges,
            tab: ProfileTab::default(),
            following: false,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_current_user(&self) -> bool {
        self.is_current_user
    }

    pub fn stats(&self) -> ProfileStats {
        ProfileStats {
            followers: self.user.followers,
            following: self.user.following,
            total_likes: self.user.total_likes,
            completed_glimmers: self.user.completed_glimmers,
        }
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    /// The user's challenges passing the active tab
    pub fn challenges(&self) -> Vec<&CompletedChallenge> {
        let media = self.tab.media_type();
        self.challenges
            .iter()
            .filter(|c| media.map_or(true, |m| c.media_type == m))
            .collect()
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    /// Toggle the follow button; no-op on one's own profile
    ///
    /// Follower counts are not affected.
    pub fn toggle_follow(&mut self) -> bool {
        if !self.is_current_user {
            self.following = !self.following;
        }
        self.following
    }

    pub fn follow_label(&self) -> &'static str {
        if self.following {
            "Following"
        } else {
            "Follow"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn profile(user_id: &str) -> ProfileView {
        let catalog = Catalog::sample();
        let user = catalog.user(user_id).unwrap().clone();
        let challenges = catalog.challenges_by(user_id, None).into_iter().cloned().collect();
        ProfileView::new(user, catalog.is_current_user(user_id), challenges)
    }

    #[test]
    fn test_dancing_queen_videos() {
        let mut view = profile("u2");
        assert_eq!(view.user().username, "dancingQueen");

        view.set_tab(ProfileTab::Videos);
        let ids: Vec<&str> = view.challenges().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["cc1"]);

        view.set_tab(ProfileTab::Photos);
        assert!(view.challenges().is_empty());
        assert_eq!(view.tab().empty_message(), "No photos available");
    }

    #[test]
    fn test_follow_is_local() {
        let mut view = profile("u3");
        let before = view.stats();

        assert!(view.toggle_follow());
        assert_eq!(view.follow_label(), "Following");
        assert_eq!(view.stats(), before);

        assert!(!view.toggle_follow());
    }

    #[test]
    fn test_cannot_follow_self() {
        let mut view = profile("u1");
        assert!(view.is_current_user());
        assert!(!view.toggle_follow());
        assert!(view.challenges().is_empty());
    }

    #[test]
    fn test_stats() {
        let view = profile("u4");
        assert_eq!(
            view.stats(),
            ProfileStats {
                followers: 726,
                following: 103,
                total_likes: 8543,
                completed_glimmers: 182,
            }
        );
    }
}
