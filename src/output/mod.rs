//! Evaluation records and the NDJSON result sink.

mod record;
mod sink;

pub use record::EvaluationRecord;
pub use sink::ResultSink;
