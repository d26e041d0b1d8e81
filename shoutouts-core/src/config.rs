use tracing::{debug, info};

use crate::error::ShoutoutError;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Immutable run parameters for one project: an umbrella of repositories within
/// one organization. Built once by the caller, validated, then passed by reference.
#[derive(Clone)]
pub struct ProjectConfig {
    /// Display name of the project being thanked on.
    pub name: String,
    /// Organization that owns the repositories and teams.
    pub org_name: String,
    /// Explicit repositories in scope. When empty, scope comes from the teams.
    pub repo_names: Vec<String>,
    /// Core developer logins excluded in addition to team members.
    pub dev_names: Vec<String>,
    /// Teams whose members are excluded (and whose repos form the default scope).
    pub team_names: Vec<String>,
    /// Bearer credential for the remote API.
    pub token: String,
    /// Maximum age in whole days of a merge to stay eligible.
    pub window_days: u32,
    /// Base URL of the REST API.
    pub api_url: String,
}

impl ProjectConfig {
    pub fn new(org_name: impl Into<String>, token: impl Into<String>) -> Self {
        let org_name = org_name.into();
        Self {
            name: org_name.clone(),
            org_name,
            repo_names: Vec::new(),
            dev_names: Vec::new(),
            team_names: Vec::new(),
            token: token.into(),
            window_days: DEFAULT_WINDOW_DAYS,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Reject configurations no run can succeed with.
    ///
    /// An empty scope (no teams, no repos) is allowed; it yields an empty result.
    pub fn validate(&self) -> Result<(), ShoutoutError> {
        if self.org_name.trim().is_empty() {
            return Err(ShoutoutError::Config(
                "organization name must not be empty".to_string(),
            ));
        }
        if self.token.trim().is_empty() {
            return Err(ShoutoutError::Config(
                "please provide a GitHub API token".to_string(),
            ));
        }
        if self.window_days == 0 {
            return Err(ShoutoutError::Config(
                "window must be at least one day".to_string(),
            ));
        }
        Ok(())
    }

    pub fn trace_loaded(&self) {
        info!(
            project = %self.name,
            org = %self.org_name,
            teams = self.team_names.len(),
            repos = self.repo_names.len(),
            devs = self.dev_names.len(),
            window_days = self.window_days,
            "Loaded ProjectConfig"
        );
        debug!(?self, "ProjectConfig loaded (full debug)");
    }
}

impl std::fmt::Debug for ProjectConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectConfig")
            .field("name", &self.name)
            .field("org_name", &self.org_name)
            .field("repo_names", &self.repo_names)
            .field("dev_names", &self.dev_names)
            .field("team_names", &self.team_names)
            .field("token", &"<redacted>")
            .field("window_days", &self.window_days)
            .field("api_url", &self.api_url)
            .finish()
    }
}
