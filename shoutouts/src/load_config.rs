/// `load_config` module: merges an optional YAML project file, the environment, and command-line
/// overrides into a validated [`ProjectConfig`].
///
/// This module is the only place where user-supplied YAML is parsed.
///
/// # Precedence
/// Lowest to highest: YAML file, environment (`GITHUB_TOKEN`), command-line flags. A list given
/// on the command line replaces the file's list rather than extending it.
///
/// # Secrets
/// The YAML file carries no credential. The token comes from `GITHUB_TOKEN` or `--token`.
///
/// # Errors
/// All errors use `anyhow::Error` with context and are surfaced at the CLI boundary.
use anyhow::{Context, Result};
use serde::Deserialize;
use shoutouts_core::ProjectConfig;
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Static project description as written in the YAML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    pub name: Option<String>,
    pub org: Option<String>,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub repos: Vec<String>,
    #[serde(default)]
    pub devs: Vec<String>,
    pub window_days: Option<u32>,
    pub api_url: Option<String>,
}

/// Values supplied on the command line; `None`/empty means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub name: Option<String>,
    pub org: Option<String>,
    pub teams: Vec<String>,
    pub repos: Vec<String>,
    pub devs: Vec<String>,
    pub window_days: Option<u32>,
    pub api_url: Option<String>,
    pub token: Option<String>,
}

/// Reads and parses a YAML project file.
pub fn read_project_file<P: AsRef<Path>>(path: P) -> Result<ProjectFile> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let content = fs::read_to_string(path_ref).map_err(|e| {
        error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
        anyhow::anyhow!("Failed to read config file {:?}: {}", path_ref, e)
    })?;

    let file: ProjectFile = serde_yaml::from_str(&content).map_err(|e| {
        error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
        anyhow::anyhow!("Failed to parse config YAML: {e}")
    })?;
    info!(config_path = ?path_ref, "Parsed config YAML successfully");
    Ok(file)
}

/// Builds the validated project configuration for one run.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> Result<ProjectConfig> {
    let file = match path {
        Some(p) => read_project_file(p)?,
        None => ProjectFile::default(),
    };

    let token = overrides
        .token
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .unwrap_or_default();
    let org = overrides.org.or(file.org).unwrap_or_default();

    let mut config = ProjectConfig::new(org, token);
    if let Some(name) = overrides.name.or(file.name) {
        config.name = name;
    }
    config.team_names = pick(overrides.teams, file.teams);
    config.repo_names = pick(overrides.repos, file.repos);
    config.dev_names = pick(overrides.devs, file.devs);
    if let Some(days) = overrides.window_days.or(file.window_days) {
        config.window_days = days;
    }
    if let Some(url) = overrides.api_url.or(file.api_url) {
        config.api_url = url;
    }

    config
        .validate()
        .context("Configuration is incomplete")?;
    config.trace_loaded();
    Ok(config)
}

fn pick(flag: Vec<String>, file: Vec<String>) -> Vec<String> {
    if flag.is_empty() {
        file
    } else {
        flag
    }
}
