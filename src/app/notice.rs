//! Toast-style notices queued for the front end

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Welcome,
    ChallengeSkipped,
    ChallengePublished,
    CaptureFailed(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::CaptureFailed(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Welcome => write!(f, "Welcome to Glimmerly!"),
            Notice::ChallengeSkipped => write!(f, "You skipped this challenge"),
            Notice::ChallengePublished => write!(f, "Challenge completed successfully!"),
            Notice::CaptureFailed(reason) => write!(f, "Capture failed: {}", reason),
        }
    }
}
