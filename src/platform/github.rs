//! GitHub hosting service implementation

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::platform::HostingService;
use crate::types::{Milestone, MilestoneState, PullRequest};

/// Page size for list endpoints.
const PER_PAGE: u8 = 100;

/// Append pagination parameters to a route, honoring an existing query string.
fn paged(route: &str, page: u32) -> String {
    let sep = if route.contains('?') { '&' } else { '?' };
    format!("{route}{sep}per_page={PER_PAGE}&page={page}")
}

// Wire types for raw REST routes. Kept separate from the domain types so
// API shape changes stay contained here.

#[derive(Deserialize)]
struct BranchWire {
    name: String,
}

#[derive(Deserialize)]
struct MilestoneWire {
    number: u64,
    title: String,
    state: String,
}

#[derive(Deserialize)]
struct RefWire {
    #[serde(rename = "ref")]
    ref_field: String,
}

#[derive(Deserialize)]
struct PullRequestWire {
    number: u64,
    html_url: String,
    title: String,
    body: Option<String>,
    base: RefWire,
    milestone: Option<MilestoneWire>,
}

impl From<MilestoneWire> for Milestone {
    fn from(wire: MilestoneWire) -> Self {
        let state = if wire.state == "closed" {
            MilestoneState::Closed
        } else {
            MilestoneState::Open
        };
        Self {
            number: wire.number,
            title: wire.title,
            state,
        }
    }
}

impl From<PullRequestWire> for PullRequest {
    fn from(wire: PullRequestWire) -> Self {
        Self {
            number: wire.number,
            html_url: wire.html_url,
            title: wire.title,
            target_branch: wire.base.ref_field,
            milestone: wire.milestone.map(Milestone::from),
            description: wire.body.unwrap_or_default(),
            // Hydrated by the harness before evaluation
            upstream_required: false,
            bugs: Vec::new(),
        }
    }
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` selects a GitHub Enterprise instance; `None` means github.com.
    pub fn new(token: &str, owner: String, repo: String, host: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            owner,
            repo,
        })
    }

    /// Fetch every page of a list endpoint.
    async fn get_all_pages<T: DeserializeOwned>(&self, route: &str) -> Result<Vec<T>> {
        let mut result = Vec::new();
        let mut page = 1u32;

        loop {
            let items: Vec<T> = self.client.get(paged(route, page), None::<&()>).await?;
            let fetched = items.len();
            result.extend(items);

            if fetched < usize::from(PER_PAGE) {
                break;
            }
            page += 1;
        }

        Ok(result)
    }
}

#[async_trait]
impl HostingService for GitHubService {
    async fn get_open_pull_requests(&self) -> Result<Vec<PullRequest>> {
        debug!("fetching open pull requests");
        let route = format!("/repos/{}/{}/pulls?state=open", self.owner, self.repo);
        let prs: Vec<PullRequestWire> = self.get_all_pages(&route).await?;

        debug!(count = prs.len(), "fetched open pull requests");
        Ok(prs.into_iter().map(PullRequest::from).collect())
    }

    async fn get_known_branches(&self) -> Result<Vec<String>> {
        debug!("fetching branches");
        let route = format!("/repos/{}/{}/branches", self.owner, self.repo);
        let branches: Vec<BranchWire> = self.get_all_pages(&route).await?;

        debug!(count = branches.len(), "fetched branches");
        Ok(branches.into_iter().map(|b| b.name).collect())
    }

    async fn get_known_milestones(&self) -> Result<Vec<Milestone>> {
        debug!("fetching milestones");
        let route = format!("/repos/{}/{}/milestones?state=all", self.owner, self.repo);
        let milestones: Vec<MilestoneWire> = self.get_all_pages(&route).await?;

        debug!(count = milestones.len(), "fetched milestones");
        Ok(milestones.into_iter().map(Milestone::from).collect())
    }

    async fn set_milestone(&self, pr_number: u64, milestone: &Milestone) -> Result<()> {
        debug!(pr_number, milestone = %milestone.title, "setting milestone");
        // Milestones are assigned through the issues endpoint
        let route = format!("/repos/{}/{}/issues/{pr_number}", self.owner, self.repo);
        let _: serde_json::Value = self
            .client
            .patch(
                route,
                Some(&serde_json::json!({ "milestone": milestone.number })),
            )
            .await?;

        debug!(pr_number, "milestone set");
        Ok(())
    }

    async fn post_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        debug!(pr_number, "posting comment");
        self.client
            .issues(&self.owner, &self.repo)
            .create_comment(pr_number, body)
            .await?;
        debug!(pr_number, "posted comment");
        Ok(())
    }
}
