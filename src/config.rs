//! Run and policy configuration
//!
//! The milestone sentinels, the hold label, and the wildcard marker are
//! tracker conventions, not logic, so they live in configuration with
//! defaults matching the production release process.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default Bugzilla instance used to resolve bug links.
const DEFAULT_BUGZILLA_URL: &str = "https://bugzilla.redhat.com";

/// Policy constants consumed by the evaluator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Milestone title that bypasses all checks
    pub hold_label: String,
    /// Bug target-milestone values that mean "unset"
    pub unset_sentinels: Vec<String>,
    /// Wildcard character in branch titles and placeholder milestones
    pub wildcard: char,
    /// Whether pull requests must reference an upstream pull request
    pub upstream_required: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            hold_label: "on hold".to_string(),
            unset_sentinels: vec!["---".to_string(), "Pending".to_string()],
            wildcard: 'x',
            upstream_required: false,
        }
    }
}

impl PolicyConfig {
    /// Whether a bug's target-milestone field is meaningfully set
    pub fn is_milestone_set(&self, target_milestone: &str) -> bool {
        !self
            .unset_sentinels
            .iter()
            .any(|sentinel| sentinel == target_milestone)
    }
}

/// Full configuration for an evaluation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom GitHub host (None for github.com)
    pub github_host: Option<String>,
    /// Base URL of the Bugzilla instance
    pub bugzilla_url: String,
    /// Report intended changes without performing milestone mutations
    pub dry_run: bool,
    /// Policy constants for the evaluator
    pub policy: PolicyConfig,
}

impl RunConfig {
    /// Create a config for a repository with default policy
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            bugzilla_url: DEFAULT_BUGZILLA_URL.to_string(),
            ..Self::default()
        }
    }

    /// Check that required fields are present
    pub fn validate(&self) -> Result<()> {
        if self.owner.is_empty() || self.repo.is_empty() {
            return Err(Error::Config(
                "repository not configured; set owner/repo in the config file or pass --repo"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Bugzilla URL, falling back to the default when unset
    pub fn bugzilla_url(&self) -> &str {
        if self.bugzilla_url.is_empty() {
            DEFAULT_BUGZILLA_URL
        } else {
            &self.bugzilla_url
        }
    }
}

/// Load run configuration from a TOML file
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: RunConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}
