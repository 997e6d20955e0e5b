//! Application error types
//!
//! Errors surfaced by the controller and the view state machines.

use thiserror::Error;

use crate::model::AppView;
use crate::storage::StorageError;

/// Errors that can occur while driving the application
#[derive(Error, Debug)]
pub enum AppError {
    /// Profile navigation to an id that is neither the current user nor a sample user
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Onboarding confirmed without any category selected
    #[error("Select at least one category to continue")]
    EmptySelection,

    /// An action was requested from a screen where it is not available
    #[error("Cannot {action} from the {view} screen")]
    InvalidTransition { view: AppView, action: &'static str },

    /// Navigation attempted before onboarding finished
    #[error("Onboarding has not been completed")]
    OnboardingIncomplete,

    /// A catalog must contain at least one glimmer
    #[error("Catalog contains no glimmers")]
    EmptyCatalog,

    /// Publish or edit requested before media was captured
    #[error("No media has been captured yet")]
    NothingCaptured,

    /// A capture was requested while one is already running
    #[error("A capture is already in progress")]
    CaptureInProgress,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidTransition {
            view: AppView::Feed,
            action: "complete the challenge",
        };
        assert_eq!(err.to_string(), "Cannot complete the challenge from the feed screen");

        let err = AppError::UserNotFound("u99".to_string());
        assert_eq!(err.to_string(), "User not found: u99");
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: AppError = StorageError::Corrupt {
            key: "glimmerly-categories".to_string(),
            reason: "expected a list".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Storage(StorageError::Corrupt { .. })));
    }
}
