use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::{IntoAppError, bail};
use url::Url;

/// Canonical source-repository identifier.
///
/// Normalizes to `https://<host>/<owner>/<repo>`: extra path segments and a
/// trailing `.git` are stripped, and the scheme is coerced to `https` so two
/// references to the same repository compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    url: Url,
    owner: String,
    repo: String,
}

impl RepoSpec {
    pub fn parse(url: &Url) -> Result<Self> {
        let segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();

        let (owner, repo) = match segments.as_slice() {
            [owner, repo, ..] => (*owner, repo.trim_end_matches(".git")),
            _ => bail!("repository URL '{url}' is missing owner or repository name"),
        };

        if owner.is_empty() || repo.is_empty() {
            bail!("repository URL '{url}' has an empty owner or repository name");
        }

        let host = url.host_str().unwrap_or_default();
        let clean_url = Url::parse(&format!("https://{host}/{owner}/{repo}")).into_app_err("normalizing repository URL")?;

        Ok(Self {
            url: clean_url,
            owner: owner.to_owned(),
            repo: repo.to_owned(),
        })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.url)
    }
}
