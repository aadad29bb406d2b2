//! Description reference scanning
//!
//! Pure regex helpers that recognize tracker and pull-request references in
//! free-text pull request descriptions. These back the `PullRequest`
//! predicates used by the evaluator.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::TrackerRef;

static BUGZILLA_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://bugzilla\.redhat\.com/show_bug\.cgi\?id=(\d+)")
        .expect("bugzilla link pattern")
});

// Jira issues are recognized by URL only. A bare KEY-123 pattern would also
// match prose tokens like "UTF-8" and defeat the missing-bug check.
static JIRA_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://issues\.redhat\.com/browse/([A-Z][A-Z0-9]*-\d+)")
        .expect("jira link pattern")
});

static RELATED_PR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://github\.com/[\w.-]+/[\w.-]+/pull/\d+|\b[\w.-]+/[\w.-]+#\d+")
        .expect("related PR pattern")
});

/// Find all tracker references in a description, in order of appearance
///
/// Bugzilla and Jira issues are both matched by URL.
pub fn tracker_refs(description: &str) -> Vec<TrackerRef> {
    let mut refs = Vec::new();

    for capture in BUGZILLA_LINK.captures_iter(description) {
        if let Ok(id) = capture[1].parse::<u64>() {
            refs.push(TrackerRef::Bugzilla(id));
        }
    }

    for capture in JIRA_LINK.captures_iter(description) {
        refs.push(TrackerRef::Jira(capture[1].to_string()));
    }

    refs
}

/// Extract the Bugzilla bug ids referenced by a description
///
/// Used by the harness to decide which bugs to resolve via the tracker.
pub fn bug_ids(description: &str) -> Vec<u64> {
    tracker_refs(description)
        .into_iter()
        .filter_map(|r| match r {
            TrackerRef::Bugzilla(id) => Some(id),
            TrackerRef::Jira(_) => None,
        })
        .collect()
}

/// Whether the description references a related pull request
///
/// Recognizes full GitHub pull URLs and `owner/repo#123` shorthand.
pub fn has_related_pull_request(description: &str) -> bool {
    RELATED_PR.is_match(description)
}
