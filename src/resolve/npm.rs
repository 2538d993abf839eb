//! npm registry lookup.
//!
//! Resolves a package name to the source repository declared in its registry
//! packument. The registry is a black-box dependency: a missing package, a
//! packument without a repository, or a transport error all surface as
//! resolution failures.

use crate::Result;
use ohno::{IntoAppError, bail};
use serde::Deserialize;
use url::Url;

const LOG_TARGET: &str = "  registry";

/// Public npm registry.
pub const NPM_REGISTRY_BASE: &str = "https://registry.npmjs.org";

/// The subset of an npm packument the resolver cares about.
#[derive(Debug, Deserialize)]
struct Packument {
    repository: Option<RepositoryField>,
}

/// npm accepts both the object and the bare-string form of the `repository`
/// field, so both must deserialize.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RepositoryField {
    Detailed { url: Option<String> },
    Plain(String),
}

impl RepositoryField {
    fn url(&self) -> Option<&str> {
        match self {
            Self::Detailed { url } => url.as_deref(),
            Self::Plain(url) => Some(url),
        }
    }
}

/// npm registry client used to map package names to repository URLs.
#[derive(Debug, Clone)]
pub struct Registry {
    client: reqwest::Client,
    base_url: String,
}

impl Registry {
    /// Create a registry client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().user_agent("pkg-score").build()?,
            base_url: base_url.into(),
        })
    }

    /// Look up the source repository declared by an npm package.
    ///
    /// The declared URL is propagated as-is apart from syntactic
    /// normalization; no further validation is performed.
    pub async fn repository_url(&self, package: &str) -> Result<Url> {
        // Scoped package names contain a slash that must stay encoded.
        let url = format!("{}/{}", self.base_url, package.replace('/', "%2F"));
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self.client.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            bail!("npm package '{package}' not found in the registry");
        }

        let packument: Packument = resp.error_for_status()?.json().await?;
        let Some(raw) = packument.repository.as_ref().and_then(RepositoryField::url) else {
            bail!("npm package '{package}' does not declare a source repository");
        };

        Url::parse(&normalize_repository_url(raw)).into_app_err("parsing declared repository URL")
    }
}

/// Bring a packument's repository URL into a form `Url` can parse.
///
/// Registry data uses `git+https://`, `git://`, `ssh://git@`, and scp-like
/// `git@host:` forms interchangeably.
fn normalize_repository_url(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.strip_prefix("git+").unwrap_or(raw);

    if let Some(rest) = raw.strip_prefix("git://") {
        return format!("https://{rest}");
    }

    if let Some(rest) = raw.strip_prefix("ssh://git@") {
        return format!("https://{rest}");
    }

    if let Some(rest) = raw.strip_prefix("git@") {
        return format!("https://{}", rest.replacen(':', "/", 1));
    }

    raw.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_git_plus_https() {
        assert_eq!(
            normalize_repository_url("git+https://github.com/expressjs/express.git"),
            "https://github.com/expressjs/express.git"
        );
    }

    #[test]
    fn test_normalize_git_scheme() {
        assert_eq!(
            normalize_repository_url("git://github.com/jshttp/cookie.git"),
            "https://github.com/jshttp/cookie.git"
        );
    }

    #[test]
    fn test_normalize_ssh_scheme() {
        assert_eq!(
            normalize_repository_url("git+ssh://git@github.com/lodash/lodash.git"),
            "https://github.com/lodash/lodash.git"
        );
    }

    #[test]
    fn test_normalize_scp_like() {
        assert_eq!(
            normalize_repository_url("git@github.com:caolan/async.git"),
            "https://github.com/caolan/async.git"
        );
    }

    #[test]
    fn test_normalize_plain_https_unchanged() {
        assert_eq!(
            normalize_repository_url("https://github.com/expressjs/express"),
            "https://github.com/expressjs/express"
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_repository_url("  https://github.com/expressjs/express\n"),
            "https://github.com/expressjs/express"
        );
    }

    #[test]
    fn test_packument_object_repository() {
        let json = r#"{
            "name": "express",
            "repository": {
                "type": "git",
                "url": "git+https://github.com/expressjs/express.git"
            }
        }"#;

        let packument: Packument = serde_json::from_str(json).unwrap();
        let repo = packument.repository.unwrap();
        assert_eq!(repo.url(), Some("git+https://github.com/expressjs/express.git"));
    }

    #[test]
    fn test_packument_string_repository() {
        let json = r#"{"repository": "https://github.com/expressjs/express"}"#;

        let packument: Packument = serde_json::from_str(json).unwrap();
        let repo = packument.repository.unwrap();
        assert_eq!(repo.url(), Some("https://github.com/expressjs/express"));
    }

    #[test]
    fn test_packument_missing_repository() {
        let json = r#"{"name": "left-pad"}"#;

        let packument: Packument = serde_json::from_str(json).unwrap();
        assert!(packument.repository.is_none());
    }

    #[test]
    fn test_packument_repository_without_url() {
        let json = r#"{"repository": {"type": "git"}}"#;

        let packument: Packument = serde_json::from_str(json).unwrap();
        assert_eq!(packument.repository.unwrap().url(), None);
    }
}
