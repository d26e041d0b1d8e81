//! Repository resolution: decides which repositories are in scope for one run.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::contract::{GitHubApi, RepositoryRef};
use crate::error::ShoutoutError;

/// Resolve the repository scope.
///
/// Explicit repository names win and are used verbatim, owned by `org`. Otherwise the
/// repositories of every team are appended in team order. Repositories shared by two
/// teams appear twice; the aggregator tolerates that.
pub async fn resolve_repositories<A>(
    api: &A,
    org: &str,
    repo_names: &[String],
    team_names: &[String],
) -> Result<Vec<RepositoryRef>, ShoutoutError>
where
    A: GitHubApi + ?Sized,
{
    if !repo_names.is_empty() {
        info!(
            org,
            repos = repo_names.len(),
            "[REPOS] Using explicitly configured repositories"
        );
        return Ok(repo_names
            .iter()
            .map(|name| RepositoryRef::new(org, name.as_str()))
            .collect());
    }

    info!(org, teams = team_names.len(), "[REPOS] Resolving repositories from teams");
    let per_team = try_join_all(team_names.iter().map(|team| async move {
        debug!(team = %team, "[REPOS] Fetching team repositories");
        api.list_team_repos(org, team)
            .await
            .map_err(|e| ShoutoutError::resolution(format!("repositories of team {org}/{team}"), e))
    }))
    .await?;

    let repos: Vec<RepositoryRef> = per_team.into_iter().flatten().collect();
    info!(repos = repos.len(), "[REPOS] Repository scope resolved");
    Ok(repos)
}
