//! Mock hosting service for testing
//!
//! Manually implements `HostingService` with call tracking and error
//! injection, so tests can verify exactly which effects a run performed.

#![allow(dead_code)]

use async_trait::async_trait;
use merge_gate::error::{Error, Result};
use merge_gate::platform::HostingService;
use merge_gate::types::{Milestone, PullRequest};
use std::sync::Mutex;

/// Call record for `set_milestone`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMilestoneCall {
    pub pr_number: u64,
    pub milestone_title: String,
}

/// Call record for `post_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCommentCall {
    pub pr_number: u64,
    pub body: String,
}

/// Simple mock hosting service for testing
///
/// Features:
/// - Configurable pull requests, branches, and milestones
/// - `set_milestone` updates the stored pull request, so repeated runs see
///   the corrected state (for idempotence tests)
/// - Call tracking for verification
/// - Error injection for failure path testing
#[derive(Default)]
pub struct MockHostingService {
    pull_requests: Mutex<Vec<PullRequest>>,
    branches: Mutex<Vec<String>>,
    milestones: Mutex<Vec<Milestone>>,
    // Call tracking
    set_milestone_calls: Mutex<Vec<SetMilestoneCall>>,
    post_comment_calls: Mutex<Vec<PostCommentCall>>,
    // Error injection
    error_on_set_milestone: Mutex<Option<String>>,
    error_on_post_comment: Mutex<Option<String>>,
}

impl MockHostingService {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the open pull requests the mock returns
    pub fn set_pull_requests(&self, prs: Vec<PullRequest>) {
        *self.pull_requests.lock().unwrap() = prs;
    }

    /// Replace the known branches
    pub fn set_branches(&self, branches: &[&str]) {
        *self.branches.lock().unwrap() = branches.iter().map(ToString::to_string).collect();
    }

    /// Replace the known milestones
    pub fn set_milestones(&self, milestones: Vec<Milestone>) {
        *self.milestones.lock().unwrap() = milestones;
    }

    /// Make `set_milestone` return an error
    pub fn fail_set_milestone(&self, msg: &str) {
        *self.error_on_set_milestone.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `post_comment` return an error
    pub fn fail_post_comment(&self, msg: &str) {
        *self.error_on_post_comment.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all `set_milestone` calls
    pub fn set_milestone_calls(&self) -> Vec<SetMilestoneCall> {
        self.set_milestone_calls.lock().unwrap().clone()
    }

    /// Get all `post_comment` calls
    pub fn post_comment_calls(&self) -> Vec<PostCommentCall> {
        self.post_comment_calls.lock().unwrap().clone()
    }

    /// Get the comments posted on one pull request
    pub fn comments_for(&self, pr_number: u64) -> Vec<String> {
        self.post_comment_calls()
            .into_iter()
            .filter(|c| c.pr_number == pr_number)
            .map(|c| c.body)
            .collect()
    }

    /// Assert that `set_milestone` was called with a specific title
    pub fn assert_milestone_set(&self, pr_number: u64, title: &str) {
        let calls = self.set_milestone_calls();
        assert!(
            calls
                .iter()
                .any(|c| c.pr_number == pr_number && c.milestone_title == title),
            "Expected set_milestone({pr_number}, {title}) but got: {calls:?}"
        );
    }

    /// Assert that `set_milestone` was never called for a pull request
    pub fn assert_milestone_not_set(&self, pr_number: u64) {
        let calls = self.set_milestone_calls();
        assert!(
            !calls.iter().any(|c| c.pr_number == pr_number),
            "Expected set_milestone({pr_number}) NOT to be called but it was: {calls:?}"
        );
    }
}

#[async_trait]
impl HostingService for MockHostingService {
    async fn get_open_pull_requests(&self) -> Result<Vec<PullRequest>> {
        Ok(self.pull_requests.lock().unwrap().clone())
    }

    async fn get_known_branches(&self) -> Result<Vec<String>> {
        Ok(self.branches.lock().unwrap().clone())
    }

    async fn get_known_milestones(&self) -> Result<Vec<Milestone>> {
        Ok(self.milestones.lock().unwrap().clone())
    }

    async fn set_milestone(&self, pr_number: u64, milestone: &Milestone) -> Result<()> {
        self.set_milestone_calls
            .lock()
            .unwrap()
            .push(SetMilestoneCall {
                pr_number,
                milestone_title: milestone.title.clone(),
            });

        if let Some(msg) = self.error_on_set_milestone.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        // Reflect the change so later runs see the corrected state
        let mut prs = self.pull_requests.lock().unwrap();
        if let Some(pr) = prs.iter_mut().find(|pr| pr.number == pr_number) {
            pr.milestone = Some(milestone.clone());
        }
        Ok(())
    }

    async fn post_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        self.post_comment_calls
            .lock()
            .unwrap()
            .push(PostCommentCall {
                pr_number,
                body: body.to_string(),
            });

        if let Some(msg) = self.error_on_post_comment.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(())
    }
}
