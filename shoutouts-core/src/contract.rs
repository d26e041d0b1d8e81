//! # contract: data model and the remote API seam
//!
//! This module defines the plain data types that flow through the attribution
//! pipeline and the single trait ([`GitHubApi`]) through which the core talks to
//! the source-code-hosting service.
//!
//! ## Interface & Extensibility
//! - Implement [`GitHubApi`] to plug in a real REST client (see the CLI crate) or a fake.
//! - All methods are async and return [`ApiError`], a boxed error; the core wraps it
//!   with stage context (which team, which repository) before surfacing it.
//! - Only the first page of each listing is expected; implementors must not page.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall` so tests can script every remote call.

use chrono::{DateTime, Utc};
use serde::Serialize;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Error type returned by every remote call (simple boxed error, as the transport sees fit).
pub type ApiError = Box<dyn std::error::Error + Send + Sync>;

/// A person who may author a pull request or be excluded from attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Login handle; the key of the identity set.
    pub login: String,
    /// Display name, when the service returned one.
    pub name: Option<String>,
}

impl Identity {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A repository in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A closed pull request as returned by the service. Never mutated, only filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestRecord {
    pub author_login: String,
    pub author_url: String,
    pub title: String,
    pub url: String,
    /// `None` when the pull request was closed without merging.
    pub merged_at: Option<DateTime<Utc>>,
    pub state: String,
}

/// The filtered pull requests of one run, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributionResult {
    pub pull_requests: Vec<PullRequestRecord>,
}

impl AttributionResult {
    pub fn len(&self) -> usize {
        self.pull_requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pull_requests.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PullRequestRecord> {
        self.pull_requests.iter()
    }
}

impl IntoIterator for AttributionResult {
    type Item = PullRequestRecord;
    type IntoIter = std::vec::IntoIter<PullRequestRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.pull_requests.into_iter()
    }
}

/// Read-only operations the attribution engine needs from the hosting service.
///
/// The implementor owns authentication and transport; the trait is agnostic of both.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// List the members of `team` (a team slug) in organization `org`.
    async fn list_team_members(&self, org: &str, team: &str) -> Result<Vec<Identity>, ApiError>;

    /// List the repositories `team` is associated with.
    async fn list_team_repos(&self, org: &str, team: &str)
        -> Result<Vec<RepositoryRef>, ApiError>;

    /// Fetch a single user by login handle.
    async fn get_user(&self, login: &str) -> Result<Identity, ApiError>;

    /// List closed pull requests (merged or not) of `owner/repo`, first page only.
    async fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestRecord>, ApiError>;
}
