//! Onboarding friction signal from readme content.

use super::Scorer;
use crate::Result;
use crate::hosting;
use crate::resolve::RepoSpec;

/// Documentation topics a newcomer needs; each one found in the readme is
/// worth [`SIGNAL_WEIGHT`].
const DOC_SIGNALS: &[&str] = &["install", "usage", "example", "doc", "test"];

const SIGNAL_WEIGHT: f64 = 0.2;

/// Scores how easy it is to get started with the repository, based on what
/// its readme covers. A repository without a readme scores 0.0.
#[derive(Debug)]
pub struct RampUp {
    client: hosting::Client,
}

impl RampUp {
    #[must_use]
    pub const fn new(client: hosting::Client) -> Self {
        Self { client }
    }
}

impl Scorer for RampUp {
    async fn score(&self, repo: &RepoSpec) -> Result<f64> {
        let readme = self.client.readme(repo).await?;
        Ok(readme.as_deref().map_or(0.0, readme_score))
    }
}

fn readme_score(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let hits = DOC_SIGNALS.iter().filter(|signal| lower.contains(*signal)).count();

    #[expect(clippy::cast_precision_loss, reason = "hits is bounded by DOC_SIGNALS.len()")]
    let score = hits as f64 * SIGNAL_WEIGHT;
    score.clamp(0.0, 1.0)
}
