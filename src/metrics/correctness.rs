//! Build-health and test signals.

use super::Scorer;
use crate::Result;
use crate::hosting;
use crate::resolve::RepoSpec;
use chrono::{Duration, Utc};

const CI_WEIGHT: f64 = 0.5;
const TESTS_WEIGHT: f64 = 0.3;
const FRESHNESS_WEIGHT: f64 = 0.2;

/// A repository pushed within this window still counts as maintained.
const FRESHNESS_WINDOW_DAYS: i64 = 365;

/// Directory names that indicate a test suite at the repository root.
const TEST_DIR_NAMES: &[&str] = &["test", "tests", "spec", "__tests__"];

/// Scores observable correctness signals: CI configuration, a test suite,
/// and recent development activity.
#[derive(Debug)]
pub struct Correctness {
    client: hosting::Client,
}

impl Correctness {
    #[must_use]
    pub const fn new(client: hosting::Client) -> Self {
        Self { client }
    }
}

impl Scorer for Correctness {
    async fn score(&self, repo: &RepoSpec) -> Result<f64> {
        let repository = self.client.repository(repo).await?;
        let workflows = self.client.contents(repo, ".github/workflows").await?;
        let root = self.client.contents(repo, "").await?;

        let has_ci = workflows.is_some_and(|entries| !entries.is_empty());
        let has_tests = root
            .unwrap_or_default()
            .iter()
            .any(|entry| entry.kind == "dir" && TEST_DIR_NAMES.contains(&entry.name.to_lowercase().as_str()));
        let recently_pushed = repository
            .pushed_at
            .is_some_and(|pushed_at| Utc::now() - pushed_at < Duration::days(FRESHNESS_WINDOW_DAYS));

        Ok(signal_score(has_ci, has_tests, recently_pushed))
    }
}

fn signal_score(has_ci: bool, has_tests: bool, recently_pushed: bool) -> f64 {
    let mut score = 0.0;
    if has_ci {
        score += CI_WEIGHT;
    }
    if has_tests {
        score += TESTS_WEIGHT;
    }
    if recently_pushed {
        score += FRESHNESS_WEIGHT;
    }
    score
}
