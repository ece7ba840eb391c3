use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::GenerationBackend;
use crate::{canned_response, GenerationRequest};

/// Offline responder. Replies are selected by purpose only and returned
/// after a short artificial delay imitating request latency.
#[derive(Debug, Clone)]
pub struct MockBackend {
    delay: Duration,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }

    /// Override the artificial delay; tests use a near-zero value.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn is_available(&self) -> Result<bool> {
        Ok(true)
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok(canned_response(request.purpose).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Purpose;

    #[tokio::test]
    async fn test_mock_ignores_request_content() {
        let backend = MockBackend::new().with_delay(Duration::from_millis(1));
        let a = backend
            .generate(&GenerationRequest::new(Purpose::Dialogue, "one thing"))
            .await
            .unwrap();
        let b = backend
            .generate(&GenerationRequest::new(Purpose::Dialogue, "another"))
            .await
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a, canned_response(Purpose::Dialogue));
    }

    #[tokio::test]
    async fn test_mock_is_always_available() {
        assert!(MockBackend::default().is_available().await.unwrap());
    }
}
