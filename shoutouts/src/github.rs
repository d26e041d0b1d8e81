#![doc = "GitHub REST client for the CLI: implements the core's `GitHubApi` trait over reqwest."]
//
//! # GitHub client (CLI <-> Core)
//!
//! This module wires the [`GitHubApi`] trait from `shoutouts-core` to the real GitHub REST API.
//!
//! - Construct [`GitHubClient`] from a validated [`ProjectConfig`] (base URL and bearer token).
//! - Every call requests the first page only and maps the JSON payload onto core types.
//! - Non-2xx statuses become an error carrying the method, URL, status and GitHub's message.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use shoutouts_core::contract::{ApiError, GitHubApi, Identity, PullRequestRecord, RepositoryRef};
use shoutouts_core::ProjectConfig;

const USER_AGENT: &str = concat!("shoutouts/", env!("CARGO_PKG_VERSION"));
const TEAM_MEMBERS_PER_PAGE: &str = "100";

#[derive(Debug, Deserialize)]
struct WireUser {
    login: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct WireRepo {
    name: String,
    owner: WireOwner,
}

#[derive(Debug, Deserialize)]
struct WirePull {
    title: String,
    html_url: String,
    state: String,
    #[serde(default)]
    merged_at: Option<DateTime<Utc>>,
    // Deleted accounts come back as `null`.
    #[serde(default)]
    user: Option<WireUser>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(default)]
    message: Option<String>,
}

impl From<WirePull> for PullRequestRecord {
    fn from(pull: WirePull) -> Self {
        let (author_login, author_url) = match pull.user {
            Some(user) => {
                let url = user
                    .html_url
                    .unwrap_or_else(|| format!("https://github.com/{}", user.login));
                (user.login, url)
            }
            None => ("ghost".to_string(), "https://github.com/ghost".to_string()),
        };
        PullRequestRecord {
            author_login,
            author_url,
            title: pull.title,
            url: pull.html_url,
            merged_at: pull.merged_at,
            state: pull.state,
        }
    }
}

pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| {
            tracing::error!(error = ?e, base_url, "Invalid GitHub API base URL");
            e
        })?;
        if parsed.cannot_be_a_base() {
            return Err(format!("GitHub API base URL {base_url} cannot carry a path").into());
        }
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to build HTTP client");
                e
            })?;
        tracing::info!(
            base_url,
            token_set = !token.is_empty(),
            "Initialized GitHubClient"
        );
        Ok(Self {
            http,
            base_url: parsed,
            token: token.to_string(),
        })
    }

    pub fn from_config(config: &ProjectConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_url, &config.token)
    }

    /// Joins `segments` onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| format!("GitHub API base URL {} cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(url = %url, ?query, "GET");

        let response = self
            .http
            .get(url.clone())
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, url = %url, "Failed to reach GitHub API");
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<WireError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(body);
            tracing::error!(status = %status, url = %url, message = %message, "GitHub API returned error");
            return Err(format!("GET {url} returned {status}: {message}").into());
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!(error = ?e, url = %url, "Failed to decode GitHub API response");
            e.into()
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_team_members(&self, org: &str, team: &str) -> Result<Vec<Identity>, ApiError> {
        let members: Vec<WireUser> = self
            .get_json(
                &["orgs", org, "teams", team, "members"],
                &[("per_page", TEAM_MEMBERS_PER_PAGE)],
            )
            .await?;
        tracing::info!(org, team, members = members.len(), "Fetched team members");
        Ok(members
            .into_iter()
            .map(|m| Identity {
                login: m.login,
                name: m.name,
            })
            .collect())
    }

    async fn list_team_repos(
        &self,
        org: &str,
        team: &str,
    ) -> Result<Vec<RepositoryRef>, ApiError> {
        let repos: Vec<WireRepo> = self
            .get_json(&["orgs", org, "teams", team, "repos"], &[])
            .await?;
        tracing::info!(org, team, repos = repos.len(), "Fetched team repositories");
        Ok(repos
            .into_iter()
            .map(|r| RepositoryRef::new(r.owner.login, r.name))
            .collect())
    }

    async fn get_user(&self, login: &str) -> Result<Identity, ApiError> {
        let user: WireUser = self.get_json(&["users", login], &[]).await?;
        tracing::info!(login = %user.login, "Fetched user");
        Ok(Identity {
            login: user.login,
            name: user.name,
        })
    }

    async fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestRecord>, ApiError> {
        let pulls: Vec<WirePull> = self
            .get_json(&["repos", owner, repo, "pulls"], &[("state", "closed")])
            .await?;
        tracing::info!(owner, repo, pull_requests = pulls.len(), "Fetched closed pull requests");
        Ok(pulls.into_iter().map(PullRequestRecord::from).collect())
    }
}
