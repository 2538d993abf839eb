//! Maintainer responsiveness from issue turnaround.

use super::Scorer;
use crate::Result;
use crate::hosting::{self, Issue};
use crate::resolve::RepoSpec;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Close times at or beyond this many days score 0.0.
const MAX_CLOSE_DAYS: f64 = 30.0;

/// Scores how quickly maintainers close issues.
///
/// Uses the median created-to-closed interval of recently closed issues,
/// mapped linearly so that immediate closure scores 1.0 and a median of
/// [`MAX_CLOSE_DAYS`] or more scores 0.0. Repositories with no closed
/// issues score the conservative 0.0.
#[derive(Debug)]
pub struct ResponsiveMaintainer {
    client: hosting::Client,
}

impl ResponsiveMaintainer {
    #[must_use]
    pub const fn new(client: hosting::Client) -> Self {
        Self { client }
    }
}

impl Scorer for ResponsiveMaintainer {
    async fn score(&self, repo: &RepoSpec) -> Result<f64> {
        let issues = self.client.closed_issues(repo).await?;
        let durations = close_durations(&issues);
        Ok(median(durations).map_or(0.0, turnaround_score))
    }
}

/// Created-to-closed intervals in days, pull requests excluded.
fn close_durations(issues: &[Issue]) -> Vec<f64> {
    issues
        .iter()
        .filter(|issue| issue.pull_request.is_none())
        .filter_map(|issue| {
            let closed_at = issue.closed_at?;
            Some((closed_at - issue.created_at).num_seconds() as f64 / SECONDS_PER_DAY)
        })
        .collect()
}

fn median(mut durations: Vec<f64>) -> Option<f64> {
    if durations.is_empty() {
        return None;
    }

    durations.sort_by(f64::total_cmp);
    let mid = durations.len() / 2;
    if durations.len() % 2 == 0 {
        Some(f64::midpoint(durations[mid - 1], durations[mid]))
    } else {
        Some(durations[mid])
    }
}

fn turnaround_score(median_days: f64) -> f64 {
    (1.0 - median_days / MAX_CLOSE_DAYS).clamp(0.0, 1.0)
}
