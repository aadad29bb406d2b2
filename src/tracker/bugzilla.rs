//! Bugzilla tracker client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::tracker::IssueTracker;
use crate::types::Bug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize)]
struct BugsResponse {
    bugs: Vec<BugWire>,
}

#[derive(Deserialize)]
struct BugWire {
    id: u64,
    /// Red Hat Bugzilla models fix-versions as the target_release array
    #[serde(default)]
    target_release: Vec<String>,
    #[serde(default)]
    target_milestone: String,
}

impl From<BugWire> for Bug {
    fn from(wire: BugWire) -> Self {
        Self {
            id: wire.id,
            fix_versions: wire.target_release,
            target_milestone: wire.target_milestone,
        }
    }
}

/// Bugzilla REST client using reqwest
#[derive(Debug)]
pub struct BugzillaClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl BugzillaClient {
    /// Create a new Bugzilla client for the given instance
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid Bugzilla URL '{base_url}': {e}")))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Tracker(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn bug_url(&self, id: u64) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("rest/bug/{id}"))
            .map_err(|e| Error::Tracker(format!("failed to build bug URL: {e}")))?;

        url.query_pairs_mut()
            .append_pair("include_fields", "id,target_release,target_milestone");
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("api_key", key);
        }
        Ok(url)
    }
}

#[async_trait]
impl IssueTracker for BugzillaClient {
    async fn fetch_bug(&self, id: u64) -> Result<Bug> {
        debug!(bug = id, "fetching bug");
        let url = self.bug_url(id)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Tracker(format!("failed to fetch bug {id}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Tracker(format!(
                "fetching bug {id} returned {}",
                response.status()
            )));
        }

        let body: BugsResponse = response
            .json()
            .await
            .map_err(|e| Error::Tracker(format!("failed to parse bug {id}: {e}")))?;

        let bug = body
            .bugs
            .into_iter()
            .next()
            .map(Bug::from)
            .ok_or_else(|| Error::Tracker(format!("bug {id} not found")))?;

        debug!(bug = bug.id, releases = bug.fix_versions.len(), "fetched bug");
        Ok(bug)
    }
}
