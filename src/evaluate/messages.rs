//! Complaint text posted back to pull requests
//!
//! Every rule violation the evaluator can report lives here, so the wording
//! stays consistent across stages and tests.

/// Description contains no issue-tracker reference
pub const MISSING_BUG: &str = "Missing bug reference in the pull request description.";

/// Upstream is required but the description has no related pull request
pub const MISSING_UPSTREAM: &str =
    "Upstream pull request is required but none is referenced in the description.";

/// No linked bug has a fix-version matching the target branch
pub const NO_MATCHING_BUG: &str = "No linked bug targets a release matching this branch.";

/// Bug has zero or multiple fix-versions
pub fn multiple_releases(bug_id: u64) -> String {
    format!("Bug {bug_id} has multiple or no target releases set.")
}

/// Bug's target-milestone field is unset
pub fn milestone_not_set(bug_id: u64) -> String {
    format!("Milestone is not set on bug {bug_id}.")
}

/// Derived milestone is missing from the hosting system or closed
pub fn milestone_missing_or_closed(title: &str) -> String {
    format!("Milestone '{title}' does not exist or is closed.")
}

/// Current milestone disagrees with the one derived from the bug
pub fn milestone_mismatch(current: &str, expected: &str) -> String {
    format!("Milestone '{current}' does not match expected milestone '{expected}'.")
}

/// Notification posted when the evaluator corrects the milestone
pub fn milestone_changed(title: &str) -> String {
    format!("Milestone changed to '{title}'")
}
