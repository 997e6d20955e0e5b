//! Simulated capture device

use async_trait::async_trait;
use std::time::Duration;

use super::{CaptureError, CaptureService, MediaHandle};
use crate::model::MediaType;

/// Media URL returned by every simulated capture
pub const PLACEHOLDER_MEDIA_URL: &str = "https://i.pravatar.cc/300?img=32";

/// Resolves unconditionally after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedCapture {
    delay: Duration,
    url: String,
}

impl SimulatedCapture {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            url: PLACEHOLDER_MEDIA_URL.to_string(),
        }
    }

    /// Builder method: return a different placeholder URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedCapture {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl CaptureService for SimulatedCapture {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn capture(&self, media_type: MediaType) -> Result<MediaHandle, CaptureError> {
        tracing::debug!(%media_type, delay_ms = self.delay.as_millis() as u64, "Simulating capture");
        tokio::time::sleep(self.delay).await;

        Ok(MediaHandle {
            media_type,
            url: self.url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_custom_url() {
        let camera = SimulatedCapture::new(Duration::ZERO).url("file:///tmp/clip.mp4");
        let media = camera.capture(MediaType::Video).await.unwrap();

        assert_eq!(media.url, "file:///tmp/clip.mp4");
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedCapture::default().delay(), Duration::from_millis(1500));
    }
}
