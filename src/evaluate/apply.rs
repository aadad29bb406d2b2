//! Evaluation application - effectful operations
//!
//! Takes an [`Evaluation`] (created by the pure planning functions) and
//! performs the planned milestone change via the hosting service. Complaint
//! posting stays with the harness; this module only handles the milestone
//! side effect and its notification comment.

use tracing::info;

use crate::error::Result;
use crate::evaluate::messages;
use crate::evaluate::plan::Evaluation;
use crate::platform::HostingService;
use crate::types::PullRequest;

/// Apply the planned milestone change, if any (EFFECTFUL)
///
/// Runs before complaints are posted so the observable order matches the
/// evaluation order, and runs regardless of the verdict. Dry run gates only
/// the milestone mutation; the notification comment is still posted so the
/// intended change is reported on the pull request.
pub async fn apply(
    pr: &PullRequest,
    evaluation: &Evaluation,
    host: &dyn HostingService,
    dry_run: bool,
) -> Result<()> {
    let Some(milestone) = &evaluation.milestone_change else {
        return Ok(());
    };

    if dry_run {
        info!(
            pr = pr.number,
            milestone = %milestone.title,
            "dry run: skipping milestone change"
        );
    } else {
        host.set_milestone(pr.number, milestone).await?;
        info!(pr = pr.number, milestone = %milestone.title, "milestone changed");
    }

    host.post_comment(pr.number, &messages::milestone_changed(&milestone.title))
        .await?;

    Ok(())
}
