// File: src/sink.rs
// Purpose: Destinations for accepted submissions

use anyhow::{Context, Result};
use std::io::Write;

use crate::clock::Clock;
use crate::state::{FormState, SubmitOutcome};
use crate::values::FormValues;

/// Receives each snapshot the form accepts.
pub trait SubmissionSink {
    fn accept(&mut self, values: &FormValues) -> Result<()>;
}

/// Logs accepted snapshots at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn accept(&mut self, values: &FormValues) -> Result<()> {
        tracing::info!(
            name = %values.name,
            email = %values.email,
            "registration accepted"
        );
        Ok(())
    }
}

/// Writes one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonLinesSink<W> {
    fn accept(&mut self, values: &FormValues) -> Result<()> {
        serde_json::to_writer(&mut self.writer, values).context("Failed to encode submission")?;
        writeln!(self.writer).context("Failed to write submission")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl SubmissionSink for Vec<FormValues> {
    fn accept(&mut self, values: &FormValues) -> Result<()> {
        self.push(values.clone());
        Ok(())
    }
}

impl<C: Clock> FormState<C> {
    /// Submit and forward an accepted snapshot to `sink`.
    pub fn submit_to<S: SubmissionSink + ?Sized>(&mut self, sink: &mut S) -> Result<SubmitOutcome> {
        let outcome = self.on_submit();
        if let SubmitOutcome::Accepted(values) = &outcome {
            sink.accept(values)?;
        }
        Ok(outcome)
    }
}
