//! GitHub REST API access shared by the metric scorers.

mod client;

pub use client::{Client, ContentEntry, Contributor, DeclaredLicense, Issue, PullRequestMarker, RepoLicense, Repository};

/// Public GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";
