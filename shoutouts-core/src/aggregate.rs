//! Pull request aggregation across the repository scope.
//!
//! Only the first page of closed pull requests is fetched per repository; older merges
//! on busy repositories can be missed. That limitation is deliberate and applies to
//! every [`GitHubApi`] implementation.

use futures::future::try_join_all;
use tracing::{debug, error, info};

use crate::contract::{GitHubApi, PullRequestRecord, RepositoryRef};
use crate::error::ShoutoutError;

/// Fetch closed pull requests for every repository and concatenate them in scope order.
///
/// Fails fast: the first repository that errors aborts the whole aggregation and no
/// partial results are returned.
pub async fn aggregate_pull_requests<A>(
    api: &A,
    repos: &[RepositoryRef],
) -> Result<Vec<PullRequestRecord>, ShoutoutError>
where
    A: GitHubApi + ?Sized,
{
    info!(repos = repos.len(), "[AGGREGATE] Fetching closed pull requests");

    let per_repo = try_join_all(repos.iter().map(|repo| async move {
        match api.list_closed_pull_requests(&repo.owner, &repo.name).await {
            Ok(prs) => {
                debug!(repository = %repo, pull_requests = prs.len(), "[AGGREGATE] Fetched");
                Ok(prs)
            }
            Err(e) => {
                error!(repository = %repo, error = %e, "[AGGREGATE][ERROR] Fetch failed");
                Err(ShoutoutError::aggregation(repo.to_string(), e))
            }
        }
    }))
    .await?;

    let all: Vec<PullRequestRecord> = per_repo.into_iter().flatten().collect();
    info!(pull_requests = all.len(), "[AGGREGATE] Aggregation complete");
    Ok(all)
}
