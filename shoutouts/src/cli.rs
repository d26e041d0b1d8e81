///
/// This module implements the CLI for shoutouts: flag parsing, config assembly, and rendering
/// of results to stdout.
///
/// All decision logic (resolution, aggregation, filtering) lives in the [`shoutouts-core`] crate.
/// This module is strictly CLI glue.
///
/// ## How To Use
/// - From the shell: `shoutouts --org <org> --team <team> [run|devs|repos]`, token via
///   `--token` or `GITHUB_TOKEN`.
/// - Programmatically: call [`run`] with a constructed [`Cli`].
///
/// [`shoutouts-core`]: ../../shoutouts-core/
use crate::github::GitHubClient;
use crate::load_config::{load_config, Overrides};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use shoutouts_core::identity::resolve_identities;
use shoutouts_core::pipeline;
use shoutouts_core::repository::resolve_repositories;
use shoutouts_core::shoutout::format_shoutout;
use std::path::PathBuf;

/// CLI for shoutouts: thank outside contributors for recently merged pull requests.
#[derive(Parser)]
#[clap(
    name = "shoutouts",
    version,
    about = "List recently merged pull requests from contributors outside the core team"
)]
pub struct Cli {
    #[clap(flatten)]
    pub options: Options,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct Options {
    /// Path to a YAML project file
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// GitHub API token (falls back to GITHUB_TOKEN)
    #[clap(long, global = true)]
    pub token: Option<String>,

    /// GitHub organization owning the teams and repositories
    #[clap(long, global = true)]
    pub org: Option<String>,

    /// Project name used in the summary line
    #[clap(long, global = true)]
    pub name: Option<String>,

    /// Team whose members are core developers (repeatable)
    #[clap(long = "team", global = true)]
    pub teams: Vec<String>,

    /// Repository in scope (repeatable); defaults to the teams' repositories
    #[clap(long = "repo", global = true)]
    pub repos: Vec<String>,

    /// Additional core developer login (repeatable)
    #[clap(long = "dev", global = true)]
    pub devs: Vec<String>,

    /// Recency window in days
    #[clap(long, global = true)]
    pub days: Option<u32>,

    /// Base URL of the GitHub REST API
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Print debug lines
    #[clap(long, global = true)]
    pub debug: bool,
}

impl From<Options> for Overrides {
    fn from(o: Options) -> Self {
        Overrides {
            name: o.name,
            org: o.org,
            teams: o.teams,
            repos: o.repos,
            devs: o.devs,
            window_days: o.days,
            api_url: o.api_url,
            token: o.token,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Print shoutouts for recently merged outside contributions (default)
    Run,
    /// Print the resolved core developers
    Devs,
    /// Print the repositories in scope
    Repos,
}

/// Async CLI entrypoint shared by main() and the integration tests.
pub async fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Run);
    tracing::info!(command = ?command, "CLI run starting");

    let config_path = cli.options.config.clone();
    let config = load_config(config_path.as_deref(), cli.options.into())?;
    let client = GitHubClient::from_config(&config).map_err(|e| anyhow::anyhow!(e))?;

    match command {
        Commands::Run => {
            let result = pipeline::run(&config, &client, |pr| {
                println!("{}", format_shoutout(pr));
            })
            .await
            .map_err(|e| {
                tracing::error!(command = "run", error = %e, "Shoutout run failed");
                e
            })?;
            println!();
            println!(
                "{} shoutout(s) for {} in the last {} day(s)",
                result.len(),
                config.name,
                config.window_days
            );
        }
        Commands::Devs => {
            let devs = resolve_identities(
                &client,
                &config.org_name,
                &config.team_names,
                &config.dev_names,
            )
            .await?;
            for dev in devs.iter() {
                println!(
                    "Login: {}, Name: {}",
                    dev.login,
                    dev.name.as_deref().unwrap_or("")
                );
            }
        }
        Commands::Repos => {
            let repos = resolve_repositories(
                &client,
                &config.org_name,
                &config.repo_names,
                &config.team_names,
            )
            .await?;
            for repo in &repos {
                println!("{repo}");
            }
        }
    }

    tracing::info!(command = ?command, "CLI run complete");
    Ok(())
}
