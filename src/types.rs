//! Core types for merge-gate

use serde::{Deserialize, Serialize};

use crate::links;

/// A pull request snapshot under policy evaluation
///
/// Fetched once per evaluation pass. The hosting client fills the
/// hosting-side fields; the harness hydrates `upstream_required` (from
/// configuration) and `bugs` (from the issue tracker) before evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// PR title
    pub title: String,
    /// Target (base) branch title, e.g. "7.2.x"
    pub target_branch: String,
    /// Currently assigned milestone, if any
    pub milestone: Option<Milestone>,
    /// Free-text description (PR body)
    pub description: String,
    /// Whether release policy requires an upstream reference for this PR
    pub upstream_required: bool,
    /// Tracker bugs linked from the description, resolved by the harness
    pub bugs: Vec<Bug>,
}

impl PullRequest {
    /// Whether the description references any supported issue tracker
    pub fn has_bug_link(&self) -> bool {
        !links::tracker_refs(&self.description).is_empty()
    }

    /// Whether the description references the primary tracker (Bugzilla)
    pub fn has_bugzilla_link(&self) -> bool {
        links::tracker_refs(&self.description)
            .iter()
            .any(|r| matches!(r, TrackerRef::Bugzilla(_)))
    }

    /// Whether the description references a related pull request
    pub fn has_related_pull_request(&self) -> bool {
        links::has_related_pull_request(&self.description)
    }
}

/// An issue-tracker bug record linked from a pull request description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bug {
    /// Tracker bug id
    pub id: u64,
    /// Releases this bug is slated to ship in (may be empty or multi-valued)
    pub fix_versions: Vec<String>,
    /// Target milestone within the release; sentinels like "---" mean unset
    pub target_milestone: String,
}

/// A hosting-system release marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Hosting-system milestone number
    pub number: u64,
    /// Milestone title, e.g. "7.2.1.GA"
    pub title: String,
    /// Open or closed
    pub state: MilestoneState,
}

/// Milestone state on the hosting system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    /// Milestone is open and usable
    Open,
    /// Milestone is closed; assignments to it are rejected
    Closed,
}

impl std::fmt::Display for MilestoneState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// A bug reference found in a pull request description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerRef {
    /// Bugzilla bug id
    Bugzilla(u64),
    /// Jira issue key, e.g. "WFLY-1234" (recognized but not yet validated)
    Jira(String),
}
