//! Contribution filter: keeps merged pull requests by non-core authors inside the window.
//!
//! Pure functions of their inputs. `now` is passed in so the window is measured at
//! filter time, and so tests can pin the clock.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::contract::{AttributionResult, PullRequestRecord};
use crate::identity::IdentitySet;

/// Keep pull requests whose author login is absent from `core`.
pub fn filter_by_author(
    prs: Vec<PullRequestRecord>,
    core: &IdentitySet,
) -> Vec<PullRequestRecord> {
    prs.into_iter()
        .filter(|pr| {
            let external = !core.contains(&pr.author_login);
            if !external {
                debug!(author = %pr.author_login, url = %pr.url, "[FILTER] Excluding core author");
            }
            external
        })
        .collect()
}

/// Keep pull requests merged no more than `window_days` days before `now`.
///
/// Inclusive at the boundary. Pull requests closed without merging never pass.
pub fn filter_by_recency(
    prs: Vec<PullRequestRecord>,
    window_days: u32,
    now: DateTime<Utc>,
) -> Vec<PullRequestRecord> {
    let window = Duration::days(i64::from(window_days));
    prs.into_iter()
        .filter(|pr| match pr.merged_at {
            Some(merged_at) => {
                let recent = now.signed_duration_since(merged_at) <= window;
                if !recent {
                    debug!(url = %pr.url, %merged_at, "[FILTER] Merged outside window");
                }
                recent
            }
            None => {
                debug!(url = %pr.url, "[FILTER] Closed without merging");
                false
            }
        })
        .collect()
}

/// Apply both filters and wrap the survivors, preserving their aggregated order.
pub fn filter_contributions(
    prs: Vec<PullRequestRecord>,
    core: &IdentitySet,
    window_days: u32,
    now: DateTime<Utc>,
) -> AttributionResult {
    let total = prs.len();
    let external = filter_by_author(prs, core);
    let external_count = external.len();
    let pull_requests = filter_by_recency(external, window_days, now);
    info!(
        total,
        external = external_count,
        eligible = pull_requests.len(),
        window_days,
        "[FILTER] Contributions filtered"
    );
    AttributionResult { pull_requests }
}
