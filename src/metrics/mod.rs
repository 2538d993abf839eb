//! The five quality-metric scorers.
//!
//! Each scorer gathers its own data from the hosting provider and reduces it
//! to a normalized score in [0, 1]. Scorers are constructed fresh for every
//! evaluated URL and hold no cross-URL state. Missing upstream data yields
//! the conservative score 0.0; transport errors abort the evaluation.

mod bus_factor;
mod correctness;
mod license;
mod ramp_up;
mod responsiveness;

pub use bus_factor::BusFactor;
pub use correctness::Correctness;
pub use license::License;
pub use ramp_up::RampUp;
pub use responsiveness::ResponsiveMaintainer;

use crate::Result;
use crate::resolve::RepoSpec;
use std::time::Instant;

/// A normalized quality score plus the wall-clock time spent producing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricResult {
    pub score: f64,
    pub latency: f64,
}

/// One quality dimension of a repository.
#[expect(async_fn_in_trait, reason = "scorers are crate-internal and never boxed")]
pub trait Scorer {
    /// Gather this metric's data and reduce it to a score in [0, 1].
    async fn score(&self, repo: &RepoSpec) -> Result<f64>;
}

/// Run a scorer, bracketing its asynchronous work with wall-clock timing.
///
/// The measurement is independent of concurrent work in sibling scorers.
pub async fn measure<S: Scorer>(scorer: &S, repo: &RepoSpec) -> Result<MetricResult> {
    let started = Instant::now();
    let score = scorer.score(repo).await?;

    Ok(MetricResult {
        score,
        latency: started.elapsed().as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    struct FixedScorer(f64);

    impl Scorer for FixedScorer {
        async fn score(&self, _repo: &RepoSpec) -> Result<f64> {
            Ok(self.0)
        }
    }

    struct FailingScorer;

    impl Scorer for FailingScorer {
        async fn score(&self, _repo: &RepoSpec) -> Result<f64> {
            ohno::bail!("upstream data unavailable")
        }
    }

    fn repo() -> RepoSpec {
        RepoSpec::parse(&Url::parse("https://github.com/acme/widget").unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_measure_passes_score_through() {
        let result = measure(&FixedScorer(0.75), &repo()).await.unwrap();
        assert!((result.score - 0.75).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_measure_latency_is_non_negative() {
        let result = measure(&FixedScorer(1.0), &repo()).await.unwrap();
        assert!(result.latency >= 0.0);
    }

    #[tokio::test]
    async fn test_measure_propagates_scorer_failure() {
        let _ = measure(&FailingScorer, &repo()).await.unwrap_err();
    }
}
