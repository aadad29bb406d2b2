//! Mock issue tracker for testing

#![allow(dead_code)]

use async_trait::async_trait;
use merge_gate::error::{Error, Result};
use merge_gate::tracker::IssueTracker;
use merge_gate::types::Bug;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Mock tracker serving bugs from an in-memory map
#[derive(Default)]
pub struct MockIssueTracker {
    bugs: Mutex<HashMap<u64, Bug>>,
    fail_ids: Mutex<HashSet<u64>>,
    fetch_calls: Mutex<Vec<u64>>,
}

impl MockIssueTracker {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bug the mock will serve
    pub fn add_bug(&self, bug: Bug) {
        self.bugs.lock().unwrap().insert(bug.id, bug);
    }

    /// Make `fetch_bug` fail for a specific id
    pub fn fail_bug(&self, id: u64) {
        self.fail_ids.lock().unwrap().insert(id);
    }

    /// Get all bug ids `fetch_bug` was called with
    pub fn fetch_calls(&self) -> Vec<u64> {
        self.fetch_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    async fn fetch_bug(&self, id: u64) -> Result<Bug> {
        self.fetch_calls.lock().unwrap().push(id);

        if self.fail_ids.lock().unwrap().contains(&id) {
            return Err(Error::Tracker(format!("injected failure for bug {id}")));
        }

        self.bugs
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::Tracker(format!("bug {id} not found")))
    }
}
