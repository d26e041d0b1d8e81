//! High-level pipeline: orchestrates resolve → aggregate → filter → render for one project.
//!
//! This module ties the attribution stages together for a validated [`ProjectConfig`]:
//!   - Resolves the core identity set and the repository scope (concurrently; both must succeed)
//!   - Aggregates closed pull requests across the scope
//!   - Filters them down to merges by non-core authors within the recency window
//!   - Hands every survivor to a rendering callback
//!
//! # Responsibilities
//! - Strictly linear, fail-fast: any stage error ends the run before anything is rendered
//! - Evaluates "now" after aggregation, when the filter runs
//! - Holds no state between runs; all inputs are borrowed, all outputs owned
//!
//! # Callable From
//! - The CLI crate and the integration tests, with any [`GitHubApi`] implementation
//!
//! # Navigation
//! - Main entrypoint: [`run`]
//! - Without rendering: [`collect_shoutouts`], or [`collect_shoutouts_at`] with a fixed clock

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::aggregate::aggregate_pull_requests;
use crate::config::ProjectConfig;
use crate::contract::{AttributionResult, GitHubApi, PullRequestRecord};
use crate::error::ShoutoutError;
use crate::filter::filter_contributions;
use crate::identity::{resolve_identities, IdentitySet};
use crate::repository::resolve_repositories;

/// Validate, resolve, and aggregate. Everything up to (not including) filtering.
async fn gather<A>(
    config: &ProjectConfig,
    api: &A,
) -> Result<(IdentitySet, Vec<PullRequestRecord>), ShoutoutError>
where
    A: GitHubApi + ?Sized,
{
    config.validate()?;
    info!(project = %config.name, org = %config.org_name, "[PIPELINE] Starting shoutout run");

    let (core, repos) = futures::try_join!(
        resolve_identities(api, &config.org_name, &config.team_names, &config.dev_names),
        resolve_repositories(api, &config.org_name, &config.repo_names, &config.team_names),
    )
    .map_err(|e| {
        error!(error = %e, "[PIPELINE][ERROR] Resolution failed");
        e
    })?;

    let prs = aggregate_pull_requests(api, &repos).await.map_err(|e| {
        error!(error = %e, "[PIPELINE][ERROR] Aggregation failed");
        e
    })?;

    Ok((core, prs))
}

/// Run the attribution stages with an explicit clock.
pub async fn collect_shoutouts_at<A>(
    config: &ProjectConfig,
    api: &A,
    now: DateTime<Utc>,
) -> Result<AttributionResult, ShoutoutError>
where
    A: GitHubApi + ?Sized,
{
    let (core, prs) = gather(config, api).await?;
    Ok(filter_contributions(prs, &core, config.window_days, now))
}

/// Run the attribution stages, measuring the window from the moment filtering starts.
pub async fn collect_shoutouts<A>(
    config: &ProjectConfig,
    api: &A,
) -> Result<AttributionResult, ShoutoutError>
where
    A: GitHubApi + ?Sized,
{
    let (core, prs) = gather(config, api).await?;
    Ok(filter_contributions(
        prs,
        &core,
        config.window_days,
        Utc::now(),
    ))
}

/// Entrypoint: collect shoutouts and pass each one to `render`, in order.
///
/// `render` is only called once every stage has succeeded.
pub async fn run<A, F>(
    config: &ProjectConfig,
    api: &A,
    mut render: F,
) -> Result<AttributionResult, ShoutoutError>
where
    A: GitHubApi + ?Sized,
    F: FnMut(&PullRequestRecord),
{
    let result = collect_shoutouts(config, api).await?;
    match serde_json::to_string_pretty(&result) {
        Ok(json) => debug!(json = %json, "[PIPELINE][DEBUG] AttributionResult as JSON"),
        Err(e) => error!(error = ?e, "[PIPELINE][DEBUG] Failed to serialize AttributionResult"),
    }
    for pr in result.iter() {
        render(pr);
    }
    info!(
        project = %config.name,
        shoutouts = result.len(),
        "[PIPELINE] Shoutout run complete"
    );
    Ok(result)
}
