//! Mock model providers for testing.
//!
//! Configurable implementations of the `TextModel` and `ImageModel` ports:
//! queued responses, error injection and call tracking, so tests can assert
//! fallback behavior and that validation failures issue zero upstream calls.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GeneratedImage, ImageModel, ModelError, TextModel};

/// A configured mock reply.
enum MockReply<T> {
    Success(T),
    Error(MockFailure),
}

/// Failure modes the mocks can inject.
#[derive(Debug, Clone)]
enum MockFailure {
    Upstream { status: u16 },
    Network,
    MissingCredential,
}

impl From<MockFailure> for ModelError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Upstream { status } => ModelError::upstream(status, "injected failure"),
            MockFailure::Network => ModelError::network("injected network failure"),
            MockFailure::MissingCredential => ModelError::MissingCredential,
        }
    }
}

/// Mock text model with queued replies and call tracking.
///
/// An empty queue yields a fixed default response, so tests that only care
/// about call counts need no setup.
#[derive(Clone)]
pub struct MockTextModel {
    replies: Arc<Mutex<VecDeque<MockReply<String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTextModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTextModel {
    /// Creates a new mock with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful text reply.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(text.into()));
        self
    }

    /// Queues an upstream error with the given status.
    pub fn with_upstream_error(self, status: u16) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(MockFailure::Upstream { status }));
        self
    }

    /// Queues a network error.
    pub fn with_network_error(self) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(MockFailure::Network));
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Instructions received, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn generate_text(&self, instruction: &str) -> Result<String, ModelError> {
        self.calls.lock().unwrap().push(instruction.to_string());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Success(text)) => Ok(text),
            Some(MockReply::Error(failure)) => Err(failure.into()),
            None => Ok("mock text response".to_string()),
        }
    }
}

/// Mock image model with queued replies and call tracking.
#[derive(Clone)]
pub struct MockImageModel {
    replies: Arc<Mutex<VecDeque<MockReply<GeneratedImage>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockImageModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MockImageModel {
    /// Creates a new mock with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful PNG reply.
    pub fn with_png(self, bytes: Vec<u8>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(GeneratedImage::png(bytes)));
        self
    }

    /// Queues an upstream error with the given status.
    pub fn with_upstream_error(self, status: u16) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(MockFailure::Upstream { status }));
        self
    }

    /// Queues a missing-credential failure.
    pub fn with_missing_credential(self) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(MockFailure::MissingCredential));
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompts received, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageModel for MockImageModel {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ModelError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Success(image)) => Ok(image),
            Some(MockReply::Error(failure)) => Err(failure.into()),
            None => Ok(GeneratedImage::png(vec![0u8; 4])),
        }
    }
}
