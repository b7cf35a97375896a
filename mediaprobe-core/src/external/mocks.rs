// mediaprobe-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;

use super::FfprobeExecutor;
use crate::error::{CoreError, CoreResult};

/// What the mock answers for a given path.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A successful ffprobe report.
    Document(Value),
    /// ffprobe exceeded the given bound.
    Timeout(Duration),
    /// The input file does not exist.
    NotFound,
    /// ffprobe printed something that is not JSON.
    InvalidJson(String),
}

/// In-memory [`FfprobeExecutor`] returning canned responses per path.
///
/// Paths without an expectation answer `InputNotFound`.
#[derive(Debug, Default)]
pub struct MockFfprobeExecutor {
    responses: HashMap<PathBuf, MockResponse>,
    received_calls: RefCell<Vec<PathBuf>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>, document: Value) -> Self {
        self.responses.insert(path.into(), MockResponse::Document(document));
        self
    }

    pub fn with_response(mut self, path: impl Into<PathBuf>, response: MockResponse) -> Self {
        self.responses.insert(path.into(), response);
        self
    }

    /// Paths probed so far, in call order.
    pub fn received_calls(&self) -> Vec<PathBuf> {
        self.received_calls.borrow().clone()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe(&self, path: &Path) -> CoreResult<Value> {
        log::debug!("MockFfprobeExecutor: probe {}", path.display());
        self.received_calls.borrow_mut().push(path.to_path_buf());

        match self.responses.get(path) {
            Some(MockResponse::Document(document)) => Ok(document.clone()),
            Some(MockResponse::Timeout(timeout)) => Err(CoreError::Timeout {
                command: "ffprobe".to_string(),
                timeout: *timeout,
            }),
            Some(MockResponse::InvalidJson(msg)) => Err(CoreError::JsonParse(msg.clone())),
            Some(MockResponse::NotFound) | None => {
                Err(CoreError::InputNotFound(path.to_path_buf()))
            }
        }
    }
}
