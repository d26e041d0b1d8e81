#![doc = "shoutouts-core: contributor attribution engine for shoutouts."]

//! This crate holds all decision logic: resolving the core team, scoping repositories,
//! aggregating closed pull requests, and filtering them down to recent merges by
//! outside contributors. Remote access goes through the [`contract::GitHubApi`] trait;
//! the concrete HTTP client lives in the CLI crate.
//!
//! # Usage
//! Build a [`config::ProjectConfig`], then call [`pipeline::run`] with a `GitHubApi`
//! implementation and a rendering callback such as [`shoutout::format_shoutout`].

pub mod aggregate;
pub mod config;
pub mod contract;
pub mod error;
pub mod filter;
pub mod identity;
pub mod pipeline;
pub mod repository;
pub mod shoutout;

pub use config::ProjectConfig;
pub use error::ShoutoutError;
