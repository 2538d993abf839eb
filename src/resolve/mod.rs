//! URL classification and repository resolution.
//!
//! Every input URL is either a GitHub repository URL (already canonical) or
//! an npm package page whose repository is looked up in the registry.
//! Anything else is a classification failure that aborts the run.

pub mod npm;
mod repo_spec;

pub use repo_spec::RepoSpec;

use crate::Result;
use ohno::{IntoAppError, bail};
use url::Url;

const LOG_TARGET: &str = "  resolver";

const GITHUB_HOST: &str = "github.com";
const NPM_HOSTS: &[&str] = &["www.npmjs.com", "npmjs.com"];

/// Classification of one input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UrlKind {
    /// A GitHub repository URL, used as-is.
    GitHub(Url),

    /// An npm package page; holds the package name (possibly scoped).
    NpmPackage(String),
}

fn classify(raw: &str) -> Result<UrlKind> {
    let url = Url::parse(raw).into_app_err("parsing input URL")?;

    match url.host_str() {
        Some(GITHUB_HOST) => Ok(UrlKind::GitHub(url)),
        Some(host) if NPM_HOSTS.contains(&host) => {
            let segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();
            let Some((&"package", rest)) = segments.split_first() else {
                bail!("invalid npm package URL: '{raw}'");
            };

            // Scoped packages occupy two path segments: /package/@scope/name
            let name = match rest {
                [scope, name, ..] if scope.starts_with('@') && !name.is_empty() => format!("{scope}/{name}"),
                [name, ..] if !name.is_empty() && !name.starts_with('@') => (*name).to_owned(),
                _ => bail!("invalid npm package URL: '{raw}'"),
            };

            Ok(UrlKind::NpmPackage(name))
        }
        _ => bail!("'{raw}' is neither a GitHub repository URL nor an npm package URL"),
    }
}

/// Maps input URLs to canonical GitHub repositories, resolving npm package
/// pages through the registry.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: npm::Registry,
}

impl Resolver {
    #[must_use]
    pub const fn new(registry: npm::Registry) -> Self {
        Self { registry }
    }

    /// Resolve one input URL to its canonical repository.
    pub async fn resolve(&self, raw: &str) -> Result<RepoSpec> {
        match classify(raw)? {
            UrlKind::GitHub(url) => RepoSpec::parse(&url),
            UrlKind::NpmPackage(name) => {
                log::debug!(target: LOG_TARGET, "resolving npm package '{name}'");
                let repo_url = self.registry.repository_url(&name).await?;
                RepoSpec::parse(&repo_url)
            }
        }
    }
}
