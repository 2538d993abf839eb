//! Contributor-concentration risk.

use super::Scorer;
use crate::Result;
use crate::hosting;
use crate::resolve::RepoSpec;

/// Scores how evenly the commit history is spread across contributors.
///
/// A repository where one person authored every change scores 0.0; the more
/// evenly contributions are distributed, the closer the score gets to 1.0.
#[derive(Debug)]
pub struct BusFactor {
    client: hosting::Client,
}

impl BusFactor {
    #[must_use]
    pub const fn new(client: hosting::Client) -> Self {
        Self { client }
    }
}

impl Scorer for BusFactor {
    async fn score(&self, repo: &RepoSpec) -> Result<f64> {
        let contributors = self.client.contributors(repo).await?;
        let counts: Vec<_> = contributors.iter().map(|c| c.contributions).collect();
        Ok(concentration_score(&counts))
    }
}

/// One minus the top contributor's share of all contributions.
fn concentration_score(contributions: &[u64]) -> f64 {
    let total: u64 = contributions.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let top = contributions.iter().copied().max().unwrap_or_default();

    #[expect(clippy::cast_precision_loss, reason = "contribution counts are far below 2^52")]
    let share = top as f64 / total as f64;
    (1.0 - share).clamp(0.0, 1.0)
}
