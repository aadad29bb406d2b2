//! Error types for merge-gate

use thiserror::Error;

/// Errors surfaced by collaborator calls and configuration loading.
///
/// Policy violations are never errors: they accumulate as complaints on a
/// [`Verdict`](crate::evaluate::Verdict). Errors here mean a collaborator
/// (hosting API, issue tracker) or the configuration failed, and they
/// propagate to the per-pull-request loop in the harness.
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub API error with context
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Underlying octocrab error
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Issue tracker (Bugzilla) error
    #[error("tracker error: {0}")]
    Tracker(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
