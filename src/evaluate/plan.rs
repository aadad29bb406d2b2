//! Policy evaluation - pure functions for deciding mergeability
//!
//! No I/O happens here - the harness snapshots hosting-system state and
//! resolves tracker bugs up front, then this module decides. Short-circuit
//! and pass-through points are explicit stages rather than nested branches,
//! so each is independently testable.

use regex::Regex;
use tracing::debug;

use crate::config::PolicyConfig;
use crate::evaluate::branch::release_pattern;
use crate::evaluate::messages;
use crate::evaluate::verdict::Verdict;
use crate::types::{Bug, Milestone, MilestoneState, PullRequest};

/// Hosting-system state snapshotted once per evaluation pass
#[derive(Debug, Clone, Default)]
pub struct HostSnapshot {
    /// Number of branches the hosting system knows about
    pub known_branch_count: usize,
    /// All milestones the hosting system knows about
    pub milestones: Vec<Milestone>,
}

/// Outcome of evaluating one pull request
///
/// The milestone change, when present, is applied regardless of the final
/// verdict: a milestone can be corrected even while the pull request is
/// flagged not-mergeable for another reason.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Accumulated verdict with ordered complaints
    pub verdict: Verdict,
    /// Milestone the pull request should be reassigned to, if any
    pub milestone_change: Option<Milestone>,
}

/// Evaluate release policy for one pull request (PURE - no I/O)
///
/// Sequence:
/// 1. A current milestone titled with the configured hold label bypasses
///    every check.
/// 2. Bug sub-evaluation (see [`evaluate_bugs`]).
/// 3. If upstream is required, the description must reference a related
///    pull request. The referenced PR's own state is not checked here.
pub fn evaluate(pr: &PullRequest, snapshot: &HostSnapshot, policy: &PolicyConfig) -> Evaluation {
    if let Some(current) = &pr.milestone
        && current.title == policy.hold_label
    {
        debug!(pr = pr.number, "milestone is the hold label; skipping all checks");
        return Evaluation {
            verdict: Verdict::new(),
            milestone_change: None,
        };
    }

    let (verdict, milestone_change) = evaluate_bugs(pr, snapshot, policy, Verdict::new());

    let verdict = if pr.upstream_required && !pr.has_related_pull_request() {
        verdict.reject(messages::MISSING_UPSTREAM)
    } else {
        verdict
    };

    Evaluation {
        verdict,
        milestone_change,
    }
}

/// Bug sub-evaluation: cross-check linked bugs against branch and milestones
///
/// Stages, each able to stop early with a complaint. Indeterminate
/// situations (non-primary tracker, multiple matching bugs) pass the verdict
/// through unchanged: the policy does not block on conditions it cannot yet
/// adjudicate.
fn evaluate_bugs(
    pr: &PullRequest,
    snapshot: &HostSnapshot,
    policy: &PolicyConfig,
    verdict: Verdict,
) -> (Verdict, Option<Milestone>) {
    if !pr.has_bug_link() {
        return (verdict.reject(messages::MISSING_BUG), None);
    }

    // TODO: validate Jira references once the tracker client supports them
    if !pr.has_bugzilla_link() {
        debug!(pr = pr.number, "non-Bugzilla tracker reference; cannot validate yet");
        return (verdict, None);
    }

    let pattern = release_pattern(&pr.target_branch, snapshot.known_branch_count, policy.wildcard);
    let matches = matching_bugs(pr, pattern.as_ref());
    if matches.is_empty() {
        return (verdict.reject(messages::NO_MATCHING_BUG), None);
    }
    if matches.len() > 1 {
        debug!(
            pr = pr.number,
            count = matches.len(),
            "multiple bugs match the branch; not disambiguating"
        );
        return (verdict, None);
    }
    let bug = matches[0];
    debug!(pr = pr.number, bug = bug.id, "using matching bug");

    if bug.fix_versions.len() != 1 {
        return (verdict.reject(messages::multiple_releases(bug.id)), None);
    }
    let release = &bug.fix_versions[0];

    // An unset target-milestone is a complaint but not a dead end: fall back
    // to the branch title, which doubles as the placeholder milestone title.
    let (verdict, desired_title) = if policy.is_milestone_set(&bug.target_milestone) {
        (verdict, format!("{release}.{}", bug.target_milestone))
    } else {
        (
            verdict.reject(messages::milestone_not_set(bug.id)),
            pr.target_branch.clone(),
        )
    };

    let Some(milestone) = usable_milestone(&snapshot.milestones, &desired_title) else {
        return (
            verdict.reject(messages::milestone_missing_or_closed(&desired_title)),
            None,
        );
    };

    match &pr.milestone {
        None => (verdict, Some(milestone.clone())),
        // A wildcard placeholder milestone gives way to a more specific one
        Some(current)
            if current.title.contains(policy.wildcard)
                && !milestone.title.contains(policy.wildcard) =>
        {
            (verdict, Some(milestone.clone()))
        }
        Some(current) if current.title != desired_title => (
            verdict.reject(messages::milestone_mismatch(&current.title, &desired_title)),
            None,
        ),
        Some(_) => {
            debug!(pr = pr.number, "milestone already matches the bug milestone");
            (verdict, None)
        }
    }
}

/// Linked bugs with at least one fix-version matching the branch pattern
///
/// An absent pattern means the branch is unusable for matching, which
/// behaves as zero matches.
fn matching_bugs<'a>(pr: &'a PullRequest, pattern: Option<&Regex>) -> Vec<&'a Bug> {
    let Some(pattern) = pattern else {
        debug!(
            pr = pr.number,
            branch = %pr.target_branch,
            "branch title is unusable for release matching"
        );
        return Vec::new();
    };

    pr.bugs
        .iter()
        .filter(|bug| bug.fix_versions.iter().any(|release| pattern.is_match(release)))
        .collect()
}

/// Find an open milestone by exact title
fn usable_milestone<'a>(milestones: &'a [Milestone], title: &str) -> Option<&'a Milestone> {
    milestones
        .iter()
        .find(|m| m.title == title)
        .filter(|m| m.state == MilestoneState::Open)
}
