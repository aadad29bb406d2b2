//! Issue tracker services
//!
//! Resolves bug references found in pull request descriptions into full
//! tracker records.

mod bugzilla;

pub use bugzilla::BugzillaClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Bug;

/// Issue tracker trait for bug lookups
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch a bug record by id
    async fn fetch_bug(&self, id: u64) -> Result<Bug>;
}
