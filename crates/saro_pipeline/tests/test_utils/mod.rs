//! Mock oracle for testing.

use async_trait::async_trait;
use saro_core::CompletionRequest;
use saro_error::{OracleError, OracleErrorKind};
use saro_oracle::Oracle;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock replies.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(OracleErrorKind),
    /// Return one reply per call, in order
    Sequence(Vec<MockReply>),
}

/// A single mock reply (success or error).
#[derive(Debug, Clone)]
pub enum MockReply {
    Success(String),
    Error(OracleErrorKind),
}

/// Mock oracle for tests.
///
/// Lets tests script replies, count calls, and inspect the requests the
/// pipeline actually sent, without touching the network. Clones share the
/// same counters, so a test can hand one clone to the classifier and keep
/// another for assertions.
#[derive(Debug, Clone)]
pub struct MockOracle {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockOracle {
    /// Create a mock oracle that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock oracle that always fails with the given error.
    pub fn new_error(error: OracleErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock oracle with a sequence of replies.
    pub fn new_sequence(replies: Vec<MockReply>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(replies))
    }

    fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times complete() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Get copies of every request received so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, OracleError> {
        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;
        drop(count);
        self.requests.lock().unwrap().push(request.clone());

        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(OracleError::new(kind.clone())),
            MockBehavior::Sequence(replies) => match replies.get(current) {
                Some(MockReply::Success(text)) => Ok(text.clone()),
                Some(MockReply::Error(kind)) => Err(OracleError::new(kind.clone())),
                // Past end of sequence, return error
                None => Err(OracleError::new(OracleErrorKind::Transport(format!(
                    "Mock sequence exhausted (call {} beyond {} replies)",
                    current + 1,
                    replies.len()
                )))),
            },
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
