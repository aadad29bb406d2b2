//! Shared fixtures for merge-gate tests

#![allow(dead_code)]

pub mod mock_host;
pub mod mock_tracker;

use merge_gate::evaluate::HostSnapshot;
use merge_gate::types::{Bug, Milestone, MilestoneState, PullRequest};

/// Bugzilla link for a bug id, in the form the link scanner recognizes
pub fn bugzilla_link(id: u64) -> String {
    format!("https://bugzilla.redhat.com/show_bug.cgi?id={id}")
}

/// A pull request against `branch` with the given description
pub fn make_pr(number: u64, branch: &str, description: &str) -> PullRequest {
    PullRequest {
        number,
        html_url: format!("https://github.com/acme/widget/pull/{number}"),
        title: format!("Fix for PR {number}"),
        target_branch: branch.to_string(),
        milestone: None,
        description: description.to_string(),
        upstream_required: false,
        bugs: Vec::new(),
    }
}

/// A bug with the given fix-versions and target milestone
pub fn make_bug(id: u64, fix_versions: &[&str], target_milestone: &str) -> Bug {
    Bug {
        id,
        fix_versions: fix_versions.iter().map(ToString::to_string).collect(),
        target_milestone: target_milestone.to_string(),
    }
}

/// An open milestone
pub fn open_milestone(number: u64, title: &str) -> Milestone {
    Milestone {
        number,
        title: title.to_string(),
        state: MilestoneState::Open,
    }
}

/// A closed milestone
pub fn closed_milestone(number: u64, title: &str) -> Milestone {
    Milestone {
        number,
        title: title.to_string(),
        state: MilestoneState::Closed,
    }
}

/// A host snapshot with the given branch count and milestones
pub fn snapshot(known_branch_count: usize, milestones: Vec<Milestone>) -> HostSnapshot {
    HostSnapshot {
        known_branch_count,
        milestones,
    }
}
