//! GitHub API client
//!
//! Minimal client for the handful of repository endpoints the metric
//! scorers need. There is no retry or backoff: any transport or HTTP error
//! is fatal for the evaluation that triggered it.

use crate::Result;
use crate::resolve::RepoSpec;
use chrono::{DateTime, Utc};
use ohno::bail;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "   hosting";

/// Repository metadata from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub pushed_at: Option<DateTime<Utc>>,
}

/// One entry from `GET /repos/{owner}/{repo}/contributors`.
#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    pub contributions: u64,
}

/// Minimal issue info with only the fields we need
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub pull_request: Option<PullRequestMarker>,
}

/// Marker type to detect if an issue is actually a pull request; the issues
/// endpoint returns pull requests interleaved with real issues.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestMarker {
    pub url: Option<String>,
}

/// Response of `GET /repos/{owner}/{repo}/license`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoLicense {
    pub license: Option<DeclaredLicense>,
}

/// The license GitHub detected for a repository.
#[derive(Debug, Clone, Deserialize)]
pub struct DeclaredLicense {
    pub spdx_id: Option<String>,
}

/// One entry from a `GET /repos/{owner}/{repo}/contents/{path}` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// GitHub API client used by all metric scorers.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new client with an optional authentication token and base URL.
    pub fn new(token: Option<&str>, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}"))?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        Ok(Self {
            client: reqwest::Client::builder().user_agent("pkg-score").default_headers(headers).build()?,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Repository metadata; a missing repository is an error.
    pub async fn repository(&self, repo: &RepoSpec) -> Result<Repository> {
        let path = format!("repos/{}/{}", repo.owner(), repo.repo());
        match self.get_json(&path).await? {
            Some(repository) => Ok(repository),
            None => bail!("repository '{repo}' not found"),
        }
    }

    /// Contributors with their contribution counts; empty for repositories
    /// with no commit history.
    pub async fn contributors(&self, repo: &RepoSpec) -> Result<Vec<Contributor>> {
        let path = format!("repos/{}/{}/contributors?per_page=100&anon=true", repo.owner(), repo.repo());
        Ok(self.get_json(&path).await?.unwrap_or_default())
    }

    /// Recently closed issues. Pull requests are included by the API and
    /// must be filtered by the caller via [`Issue::pull_request`].
    pub async fn closed_issues(&self, repo: &RepoSpec) -> Result<Vec<Issue>> {
        let path = format!("repos/{}/{}/issues?state=closed&per_page=100", repo.owner(), repo.repo());
        Ok(self.get_json(&path).await?.unwrap_or_default())
    }

    /// The license GitHub detected for the repository, if any.
    pub async fn license(&self, repo: &RepoSpec) -> Result<Option<RepoLicense>> {
        let path = format!("repos/{}/{}/license", repo.owner(), repo.repo());
        self.get_json(&path).await
    }

    /// Raw readme content, or `None` if the repository has no readme.
    pub async fn readme(&self, repo: &RepoSpec) -> Result<Option<String>> {
        let url = self.url(&format!("repos/{}/{}/readme", repo.owner(), repo.repo()));
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self.client.get(&url).header(ACCEPT, "application/vnd.github.raw+json").send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(resp.error_for_status()?.text().await?))
    }

    /// Directory listing, or `None` if the path does not exist.
    pub async fn contents(&self, repo: &RepoSpec, dir: &str) -> Result<Option<Vec<ContentEntry>>> {
        let path = format!("repos/{}/{}/contents/{dir}", repo.owner(), repo.repo());
        self.get_json(&path).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// GET a JSON payload. 404 and 204 (GitHub's empty-repository answer)
    /// map to `None`; any other non-success status is an error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.url(path);
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self.client.get(&url).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND | StatusCode::NO_CONTENT => Ok(None),
            _ => Ok(Some(resp.error_for_status()?.json().await?)),
        }
    }
}
