//! Media Capture
//!
//! Device capture is an external collaborator: "start capture, then
//! success with a media handle, failure, or cancel". This module provides:
//! - `CaptureService`: the capability trait
//! - `SimulatedCapture`: fixed-delay stand-in that always succeeds
//! - `PendingCapture`: a spawned capture that can be cancelled
//!
//! # Example
//!
//! ```rust,no_run
//! use glimmerly::capture::{CaptureOutcome, CaptureService, SimulatedCapture};
//! use glimmerly::model::MediaType;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = Arc::new(SimulatedCapture::new(Duration::from_millis(10)));
//!     let (pending, _cancel) = glimmerly::capture::spawn_capture(service, MediaType::Photo);
//!
//!     match pending.outcome().await {
//!         CaptureOutcome::Captured(media) => println!("captured {}", media.url),
//!         other => println!("no media: {:?}", other),
//!     }
//! }
//! ```

mod simulated;

pub use simulated::{SimulatedCapture, PLACEHOLDER_MEDIA_URL};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::model::MediaType;

/// Handle to captured media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaHandle {
    pub media_type: MediaType,
    pub url: String,
}

/// Errors a capture device can report
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("Capture device unavailable: {0}")]
    Unavailable(String),

    #[error("Capture failed: {0}")]
    Failed(String),
}

/// Device capture capability
#[async_trait]
pub trait CaptureService: Send + Sync {
    /// Human-readable name of the device backing this service
    fn name(&self) -> &str;

    /// Record one piece of media of the requested type
    async fn capture(&self, media_type: MediaType) -> Result<MediaHandle, CaptureError>;
}

/// How a capture attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured(MediaHandle),
    Failed(CaptureError),
    Cancelled,
}

/// Cancels a `PendingCapture` when fired or dropped
#[derive(Debug)]
pub struct CancelHandle {
    tx: Option<oneshot::Sender<()>>,
}

impl CancelHandle {
    pub fn cancel(mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A capture running on the tokio runtime
#[derive(Debug)]
pub struct PendingCapture {
    handle: JoinHandle<CaptureOutcome>,
}

impl PendingCapture {
    /// Wait for the capture to finish, fail, or be cancelled
    pub async fn outcome(self) -> CaptureOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => CaptureOutcome::Cancelled,
            Err(e) => CaptureOutcome::Failed(CaptureError::Failed(e.to_string())),
        }
    }
}

/// Start a capture in the background
///
/// The returned `CancelHandle` aborts the capture when `cancel` is called or
/// when the handle is dropped.
pub fn spawn_capture(
    service: Arc<dyn CaptureService>,
    media_type: MediaType,
) -> (PendingCapture, CancelHandle) {
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        tokio::select! {
            result = service.capture(media_type) => match result {
                Ok(media) => CaptureOutcome::Captured(media),
                Err(e) => CaptureOutcome::Failed(e),
            },
            _ = rx => {
                tracing::debug!(device = service.name(), "Capture cancelled");
                CaptureOutcome::Cancelled
            }
        }
    });

    (PendingCapture { handle }, CancelHandle { tx: Some(tx) })
}
