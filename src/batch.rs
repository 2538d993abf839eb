//! Batch driver: reads the input URL list and evaluates each line in order.

use crate::Result;
use crate::host::Host;
use crate::output::ResultSink;
use crate::pipeline::Pipeline;
use ohno::{EnrichableExt, IntoAppError, bail};
use std::fs;
use std::path::Path;

const LOG_TARGET: &str = "     batch";

/// Read and trim the input lines, skipping lines that are empty after
/// trimming.
fn read_urls(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        bail!("input file '{}' does not exist", path.display());
    }

    let text = fs::read_to_string(path).into_app_err("reading input file")?;
    Ok(text.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_owned).collect())
}

/// Evaluate every URL in `input`, appending one record per URL to `output`.
///
/// The input file is checked before `output` is touched, so a missing input
/// leaves any previous output intact. URLs are processed strictly in file
/// order, one at a time, and the batch is fail-fast: the first failure
/// aborts the run, leaving the records of prior URLs in place.
pub async fn run<H: Host>(host: &mut H, pipeline: &Pipeline, input: &Path, output: &Path) -> Result<()> {
    let urls = read_urls(input)?;
    let mut sink = ResultSink::create(output)?;

    log::info!(target: LOG_TARGET, "evaluating {} URLs", urls.len());
    for url in &urls {
        let record = pipeline
            .evaluate(url)
            .await
            .map_err(|e| e.enrich_with(|| format!("evaluating '{url}'")))?;
        sink.write(host, &record)?;
    }

    Ok(())
}
