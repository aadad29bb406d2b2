//! Branch-to-release pattern derivation

use regex::Regex;
use tracing::debug;

/// Derive a release-matching pattern from a target branch title
///
/// Branch titles carry a wildcard character standing for an unreleased
/// micro/minor component (e.g. "7.x", "7.2.x"). Exactly two shapes are
/// recognized:
///
/// - 3-character titles ("7.x"): the wildcard becomes `[<count>-9]+`, where
///   `<count>` is the number of branches already established. A short-form
///   wildcard must not match retired short-form releases, and the branch
///   count is the floor used for that.
/// - 5-character titles ("7.2.x"): the wildcard becomes `[0-9]+`.
///
/// Anything else, including titles without the wildcard, yields `None`:
/// callers must treat absence as "cannot validate", never "matches
/// everything". Matching is unanchored substring search.
pub fn release_pattern(branch: &str, known_branch_count: usize, wildcard: char) -> Option<Regex> {
    if !branch.contains(wildcard) {
        return None;
    }

    let digits = match branch.len() {
        3 => format!("[{known_branch_count}-9]+"),
        5 => "[0-9]+".to_string(),
        _ => {
            debug!(branch, "unsupported wildcarded branch title");
            return None;
        }
    };

    let pattern = branch.replace(wildcard, &digits);
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            debug!(branch, %pattern, error = %e, "derived pattern failed to compile");
            None
        }
    }
}
