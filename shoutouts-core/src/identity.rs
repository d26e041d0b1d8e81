//! Identity resolution: builds the set of core-team logins excluded from attribution.
//!
//! Team rosters are resolved first (team-list order, then roster order), followed by the
//! explicit developer handles that no team already contributed. The resulting
//! [`IdentitySet`] is keyed by login handle and iterates in insertion order, so listing
//! it is deterministic for the same inputs.

use futures::future::try_join_all;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info};

use crate::contract::{GitHubApi, Identity};
use crate::error::ShoutoutError;

/// Insertion-ordered set of identities, unique by login handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentitySet {
    by_login: IndexMap<String, Identity>,
}

impl IdentitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `identity` unless its login is already present. Returns whether it was added.
    pub fn insert(&mut self, identity: Identity) -> bool {
        if self.by_login.contains_key(&identity.login) {
            return false;
        }
        self.by_login.insert(identity.login.clone(), identity);
        true
    }

    /// Exact, case-sensitive membership test on login handle.
    pub fn contains(&self, login: &str) -> bool {
        self.by_login.contains_key(login)
    }

    pub fn len(&self) -> usize {
        self.by_login.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_login.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.by_login.values()
    }

    pub fn logins(&self) -> impl Iterator<Item = &str> {
        self.by_login.keys().map(String::as_str)
    }
}

impl FromIterator<Identity> for IdentitySet {
    fn from_iter<I: IntoIterator<Item = Identity>>(iter: I) -> Self {
        let mut set = IdentitySet::new();
        for identity in iter {
            set.insert(identity);
        }
        set
    }
}

/// Resolve the core identity set from team rosters plus explicit handles.
///
/// Roster fetches run concurrently but are merged in team-list order; any failed fetch
/// aborts resolution with [`ShoutoutError::Resolution`].
pub async fn resolve_identities<A>(
    api: &A,
    org: &str,
    team_names: &[String],
    dev_names: &[String],
) -> Result<IdentitySet, ShoutoutError>
where
    A: GitHubApi + ?Sized,
{
    info!(
        org,
        teams = team_names.len(),
        devs = dev_names.len(),
        "[IDENTITY] Resolving core identities"
    );

    let rosters = try_join_all(team_names.iter().map(|team| async move {
        debug!(team = %team, "[IDENTITY] Fetching team members");
        api.list_team_members(org, team)
            .await
            .map_err(|e| ShoutoutError::resolution(format!("members of team {org}/{team}"), e))
    }))
    .await?;

    let mut identities = IdentitySet::new();
    for (team, members) in team_names.iter().zip(rosters) {
        debug!(team = %team, members = members.len(), "[IDENTITY] Team roster fetched");
        for member in members {
            let login = member.login.clone();
            if identities.insert(member) {
                debug!(team = %team, login = %login, "[IDENTITY] Found user");
            } else {
                debug!(team = %team, login = %login, "[IDENTITY] Skipping user, already present");
            }
        }
    }

    let mut pending: IndexSet<&str> = IndexSet::new();
    for login in dev_names {
        if identities.contains(login) || !pending.insert(login.as_str()) {
            debug!(login = %login, "[IDENTITY] Skipping user, already present");
        }
    }

    let explicit = try_join_all(pending.iter().map(|login| async move {
        debug!(login = %login, "[IDENTITY] Fetching user");
        api.get_user(login)
            .await
            .map_err(|e| ShoutoutError::resolution(format!("user {login}"), e))
    }))
    .await?;

    for user in explicit {
        identities.insert(user);
    }

    info!(identities = identities.len(), "[IDENTITY] Core identities resolved");
    Ok(identities)
}
