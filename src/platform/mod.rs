//! Hosting-system services
//!
//! Provides the narrow interface the evaluator and harness consume from the
//! code-hosting system.

mod github;

pub use github::GitHubService;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Milestone, PullRequest};

/// Hosting service trait for pull-request and milestone operations
///
/// This trait abstracts the code-hosting system so the evaluation loop can
/// run against GitHub in production and a mock in tests.
#[async_trait]
pub trait HostingService: Send + Sync {
    /// Fetch all open pull requests, in the order the host returns them
    ///
    /// Descriptions are returned raw; linked bugs are resolved by the
    /// harness through the issue tracker.
    async fn get_open_pull_requests(&self) -> Result<Vec<PullRequest>>;

    /// List the branches the host knows about
    ///
    /// The evaluator only uses the count, as the digit floor for short-form
    /// wildcarded branch titles.
    async fn get_known_branches(&self) -> Result<Vec<String>>;

    /// List all milestones, open and closed
    async fn get_known_milestones(&self) -> Result<Vec<Milestone>>;

    /// Assign a milestone to a pull request
    async fn set_milestone(&self, pr_number: u64, milestone: &Milestone) -> Result<()>;

    /// Post a comment on a pull request
    async fn post_comment(&self, pr_number: u64, body: &str) -> Result<()>;
}
