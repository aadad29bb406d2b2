//! Evaluation pass over all open pull requests
//!
//! Gathers hosting-system state once, then evaluates pull requests strictly
//! in the order the host returns them. A failure while processing one pull
//! request is logged and does not abort the rest of the batch.

use chrono::Utc;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::Result;
use crate::evaluate::{HostSnapshot, apply, evaluate};
use crate::links;
use crate::platform::HostingService;
use crate::tracker::IssueTracker;
use crate::types::{Bug, PullRequest};

/// Run one evaluation pass over all open pull requests
pub async fn run(
    host: &dyn HostingService,
    tracker: &dyn IssueTracker,
    config: &RunConfig,
) -> Result<()> {
    info!(started_at = %Utc::now(), "starting evaluation pass");

    let branches = host.get_known_branches().await?;
    let milestones = host.get_known_milestones().await?;
    let snapshot = HostSnapshot {
        known_branch_count: branches.len(),
        milestones,
    };

    let pull_requests = host.get_open_pull_requests().await?;
    info!(count = pull_requests.len(), "fetched open pull requests");

    for pr in pull_requests {
        let number = pr.number;
        if let Err(e) = process_pull_request(host, tracker, config, &snapshot, pr).await {
            warn!(pr = number, error = %e, "failed to process pull request; continuing");
        }
    }

    info!(completed_at = %Utc::now(), "evaluation pass complete");
    Ok(())
}

/// Evaluate a single pull request and carry out the consequences
async fn process_pull_request(
    host: &dyn HostingService,
    tracker: &dyn IssueTracker,
    config: &RunConfig,
    snapshot: &HostSnapshot,
    mut pr: PullRequest,
) -> Result<()> {
    info!(pr = pr.number, url = %pr.html_url, "processing pull request");

    pr.upstream_required = config.policy.upstream_required;
    pr.bugs = resolve_bugs(tracker, &pr).await?;

    let evaluation = evaluate(&pr, snapshot, &config.policy);
    apply(&pr, &evaluation, host, config.dry_run).await?;

    if evaluation.verdict.is_mergeable() {
        info!(pr = pr.number, "no complaints");
        return Ok(());
    }

    // Complaints are reporting, not mutation, so dry run posts them too
    let text = evaluation.verdict.complaints().join("\n");
    host.post_comment(pr.number, &text).await?;
    info!(
        pr = pr.number,
        count = evaluation.verdict.complaints().len(),
        "posted complaints"
    );

    Ok(())
}

/// Resolve the Bugzilla bugs referenced by a pull request description
async fn resolve_bugs(tracker: &dyn IssueTracker, pr: &PullRequest) -> Result<Vec<Bug>> {
    let mut bugs = Vec::new();
    for id in links::bug_ids(&pr.description) {
        bugs.push(tracker.fetch_bug(id).await?);
    }
    Ok(bugs)
}
