//! Challenge card
//!
//! Capture flow for the active glimmer:
//!
//! ```text
//! Idle ──begin_capture──▶ Capturing ──resolve(Captured)──▶ Captured ──publish──▶ payload
//!  ▲                          │                               │
//!  └──── resolve(Failed | Cancelled) ◀────┘          retry ───┘
//! ```
//!
//! Every capture attempt is identified by a `CaptureTicket`. Resolutions
//! carrying any other ticket are stale and ignored.

use serde::{Deserialize, Serialize};

use crate::capture::{CaptureOutcome, MediaHandle};
use crate::error::{AppError, AppResult};
use crate::model::{AppView, Category, Glimmer, MediaType};

/// Identifies one capture attempt on one mounted card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureTicket {
    pub generation: u64,
    pub attempt: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Capturing { ticket: CaptureTicket },
    Captured { media: MediaHandle },
}

/// What `ChallengeCard::resolve` did with a capture outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Media is now attached to the card
    Captured,
    /// The attempt failed or was cancelled; the card is idle again
    Reset,
    /// The outcome belonged to an older attempt and was dropped
    Stale,
}

/// Data handed to the controller on publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePayload {
    pub media_type: MediaType,
    pub description: String,
    pub category: Category,
    pub is_public: bool,
}

#[derive(Debug, Clone)]
pub struct ChallengeCard {
    glimmer: Glimmer,
    generation: u64,
    attempt: u32,
    state: CaptureState,
    media_type: MediaType,
    description: String,
    category: Category,
    is_public: bool,
}

impl ChallengeCard {
    /// Mount a card for `glimmer`; `generation` must differ between mounts
    pub fn new(glimmer: Glimmer, generation: u64) -> Self {
        let category = glimmer.category;
        Self {
            glimmer,
            generation,
            attempt: 0,
            state: CaptureState::Idle,
            media_type: MediaType::default(),
            description: String::new(),
            category,
            is_public: true,
        }
    }

    pub fn glimmer(&self) -> &Glimmer {
        &self.glimmer
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing { .. })
    }

    pub fn media(&self) -> Option<&MediaHandle> {
        match &self.state {
            CaptureState::Captured { media } => Some(media),
            _ => None,
        }
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn capture_label(&self) -> &'static str {
        match (&self.state, self.media_type) {
            (CaptureState::Capturing { .. }, _) => "Recording...",
            (_, MediaType::Video) => "Record Video",
            (_, MediaType::Photo) => "Take Photo",
        }
    }

    /// Choose video or photo; only possible while idle
    pub fn select_media_type(&mut self, media_type: MediaType) -> AppResult<()> {
        match self.state {
            CaptureState::Idle => {
                self.media_type = media_type;
                Ok(())
            }
            CaptureState::Capturing { .. } => Err(AppError::CaptureInProgress),
            CaptureState::Captured { .. } => Err(AppError::InvalidTransition {
                view: AppView::Challenge,
                action: "change media type after capturing",
            }),
        }
    }

    /// Enter the capturing state and hand out the ticket for this attempt
    pub fn begin_capture(&mut self) -> AppResult<CaptureTicket> {
        match self.state {
            CaptureState::Idle => {
                self.attempt += 1;
                let ticket = CaptureTicket {
                    generation: self.generation,
                    attempt: self.attempt,
                };
                self.state = CaptureState::Capturing { ticket };
                Ok(ticket)
            }
            CaptureState::Capturing { .. } => Err(AppError::CaptureInProgress),
            CaptureState::Captured { .. } => Err(AppError::InvalidTransition {
                view: AppView::Challenge,
                action: "capture again without retrying",
            }),
        }
    }

    /// Apply a capture outcome if it belongs to the current attempt
    pub fn resolve(&mut self, ticket: CaptureTicket, outcome: CaptureOutcome) -> Resolution {
        match self.state {
            CaptureState::Capturing { ticket: current } if current == ticket => {}
            _ => return Resolution::Stale,
        }

        match outcome {
            CaptureOutcome::Captured(media) => {
                self.state = CaptureState::Captured { media };
                Resolution::Captured
            }
            CaptureOutcome::Failed(_) | CaptureOutcome::Cancelled => {
                self.state = CaptureState::Idle;
                Resolution::Reset
            }
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> AppResult<()> {
        self.require_media()?;
        self.description = description.into();
        Ok(())
    }

    pub fn set_category(&mut self, category: Category) -> AppResult<()> {
        self.require_media()?;
        self.category = category;
        Ok(())
    }

    pub fn set_public(&mut self, is_public: bool) -> AppResult<()> {
        self.require_media()?;
        self.is_public = is_public;
        Ok(())
    }

    /// Discard media and edits and go back to idle
    ///
    /// Any in-flight attempt becomes stale.
    pub fn retry(&mut self) {
        if self.is_capturing() {
            self.attempt += 1;
        }
        self.state = CaptureState::Idle;
        self.description.clear();
        self.category = self.glimmer.category;
        self.is_public = true;
    }

    pub fn publish(&self) -> AppResult<ChallengePayload> {
        self.require_media()?;
        Ok(ChallengePayload {
            media_type: self.media_type,
            description: self.description.clone(),
            category: self.category,
            is_public: self.is_public,
        })
    }

    fn require_media(&self) -> AppResult<&MediaHandle> {
        self.media().ok_or(AppError::NothingCaptured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureError;

    fn card() -> ChallengeCard {
        ChallengeCard::new(
            Glimmer::new("b1", "Unusual squats", "Do 10 squats", Category::Body),
            1,
        )
    }

    fn media() -> MediaHandle {
        MediaHandle {
            media_type: MediaType::Video,
            url: "https://example.com/clip".to_string(),
        }
    }

    #[test]
    fn test_capture_then_publish() {
        let mut card = card();
        assert_eq!(card.capture_label(), "Record Video");

        let ticket = card.begin_capture().unwrap();
        assert!(card.is_capturing());
        assert_eq!(card.capture_label(), "Recording...");

        assert_eq!(card.resolve(ticket, CaptureOutcome::Captured(media())), Resolution::Captured);
        assert_eq!(card.media().unwrap().url, "https://example.com/clip");

        card.set_description("Squats in the library").unwrap();
        card.set_category(Category::Wild).unwrap();
        card.set_public(false).unwrap();

        let payload = card.publish().unwrap();
        assert_eq!(
            payload,
            ChallengePayload {
                media_type: MediaType::Video,
                description: "Squats in the library".to_string(),
                category: Category::Wild,
                is_public: false,
            }
        );
    }

    #[test]
    fn test_edits_require_media() {
        let mut card = card();

        assert!(matches!(card.set_description("x"), Err(AppError::NothingCaptured)));
        assert!(matches!(card.publish(), Err(AppError::NothingCaptured)));
    }

    #[test]
    fn test_retry_discards_everything() {
        let mut card = card();
        let ticket = card.begin_capture().unwrap();
        card.resolve(ticket, CaptureOutcome::Captured(media()));
        card.set_description("first take").unwrap();
        card.set_category(Category::Social).unwrap();
        card.set_public(false).unwrap();

        card.retry();

        assert_eq!(card.state(), &CaptureState::Idle);
        assert_eq!(card.description(), "");
        assert_eq!(card.category(), Category::Body);
        assert!(card.is_public());
    }

    #[test]
    fn test_stale_resolution_is_ignored() {
        let mut card = card();
        let first = card.begin_capture().unwrap();

        // Retrying mid-capture invalidates the first attempt
        card.retry();
        assert_eq!(card.resolve(first, CaptureOutcome::Captured(media())), Resolution::Stale);
        assert_eq!(card.state(), &CaptureState::Idle);

        let second = card.begin_capture().unwrap();
        assert_ne!(first, second);

        let other_card = CaptureTicket { generation: 99, attempt: second.attempt };
        assert_eq!(card.resolve(other_card, CaptureOutcome::Captured(media())), Resolution::Stale);
        assert!(card.is_capturing());
    }

    #[test]
    fn test_failure_returns_to_idle() {
        let mut card = card();
        let ticket = card.begin_capture().unwrap();

        let outcome = CaptureOutcome::Failed(CaptureError::Failed("disk full".to_string()));
        assert_eq!(card.resolve(ticket, outcome), Resolution::Reset);
        assert_eq!(card.state(), &CaptureState::Idle);
    }

    #[test]
    fn test_media_type_only_while_idle() {
        let mut card = card();
        card.select_media_type(MediaType::Photo).unwrap();
        assert_eq!(card.capture_label(), "Take Photo");

        card.begin_capture().unwrap();
        assert!(matches!(
            card.select_media_type(MediaType::Video),
            Err(AppError::CaptureInProgress)
        ));
        assert!(matches!(card.begin_capture(), Err(AppError::CaptureInProgress)));
    }
}
