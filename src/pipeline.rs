//! Per-URL evaluation orchestration.

use crate::Result;
use crate::aggregate::{WEIGHTS, aggregate};
use crate::hosting;
use crate::metrics::{BusFactor, Correctness, License, RampUp, ResponsiveMaintainer, measure};
use crate::output::EvaluationRecord;
use crate::resolve::Resolver;

const LOG_TARGET: &str = "  pipeline";

/// Orchestrates resolution, scoring, and aggregation for one URL.
///
/// Holds no per-URL state: scorers are constructed fresh for every
/// evaluation from the shared hosting client.
#[derive(Debug, Clone)]
pub struct Pipeline {
    resolver: Resolver,
    hosting: hosting::Client,
}

impl Pipeline {
    #[must_use]
    pub const fn new(resolver: Resolver, hosting: hosting::Client) -> Self {
        Self { resolver, hosting }
    }

    /// Evaluate a single input URL into a complete record.
    ///
    /// Fails if resolution, any scorer, or aggregation fails; no partial
    /// record is produced in that case.
    pub async fn evaluate(&self, url: &str) -> Result<EvaluationRecord> {
        let repo = self.resolver.resolve(url).await?;
        log::info!(target: LOG_TARGET, "evaluating '{repo}'");

        let bus_factor = BusFactor::new(self.hosting.clone());
        let responsive = ResponsiveMaintainer::new(self.hosting.clone());
        let license = License::new(self.hosting.clone());
        let ramp_up = RampUp::new(self.hosting.clone());
        let correctness = Correctness::new(self.hosting.clone());

        // The scorers are independent; fan out and join before aggregating.
        // Each branch brackets its own latency measurement.
        let (bus_factor, responsive, license, ramp_up, correctness) = tokio::join!(
            measure(&bus_factor, &repo),
            measure(&responsive, &repo),
            measure(&license, &repo),
            measure(&ramp_up, &repo),
            measure(&correctness, &repo),
        );
        let (bus_factor, responsive, license, ramp_up, correctness) =
            (bus_factor?, responsive?, license?, ramp_up?, correctness?);

        let scores = [bus_factor.score, responsive.score, license.score, ramp_up.score, correctness.score];
        let (net_score, net_score_latency) = aggregate(&scores, &WEIGHTS)?;

        Ok(EvaluationRecord {
            url: repo.to_string(),
            net_score,
            net_score_latency,
            bus_factor: bus_factor.score,
            bus_factor_latency: bus_factor.latency,
            responsive_maintainer: responsive.score,
            responsive_maintainer_latency: responsive.latency,
            ramp_up: ramp_up.score,
            ramp_up_latency: ramp_up.latency,
            correctness: correctness.score,
            correctness_latency: correctness.latency,
            license: license.score,
            license_latency: license.latency,
        })
    }
}
