use super::EvaluationRecord;
use crate::Result;
use crate::host::Host;
use ohno::IntoAppError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const LOG_TARGET: &str = "      sink";

/// Serializes evaluation records into an append-only NDJSON stream, one
/// record per line, mirroring each line to the host's output channel.
#[derive(Debug)]
pub struct ResultSink<W: Write> {
    out: W,
}

impl ResultSink<BufWriter<File>> {
    /// Create the output file, truncating any previous contents.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).into_app_err("creating output file")?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ResultSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Append one record; the line is durably flushed before returning.
    pub fn write<H: Host>(&mut self, host: &mut H, record: &EvaluationRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;

        writeln!(self.out, "{line}").into_app_err("writing evaluation record")?;
        self.out.flush().into_app_err("flushing evaluation record")?;

        // Best-effort mirror for interactive visibility
        if let Err(e) = writeln!(host.output(), "{line}") {
            log::debug!(target: LOG_TARGET, "could not mirror record: {e}");
        }

        Ok(())
    }
}
