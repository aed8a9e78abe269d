//! Step records and the sinks they are written to.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::env::Info;

/// Everything observed about one step of one episode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepRecord<O, A> {
    pub episode: usize,
    /// Zero-based index of the step within its episode.
    pub step: usize,
    pub observation: O,
    pub reward: f32,
    pub done: bool,
    pub truncated: bool,
    pub info: Info,
    pub action: A,
}

impl<O: fmt::Debug, A: fmt::Debug> fmt::Display for StepRecord<O, A> {
    /// `step observation reward done truncated info action`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = serde_json::to_string(&self.info).map_err(|_| fmt::Error)?;
        write!(
            f,
            "{} {:?} {:?} {} {} {} {:?}",
            self.step, self.observation, self.reward, self.done, self.truncated, info, self.action
        )
    }
}

/// Destination for step records.
pub trait RecordSink<O, A> {
    /// # Errors
    ///
    /// Returns any I/O error raised while writing the record.
    fn record(&mut self, record: &StepRecord<O, A>) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns any I/O error raised while flushing buffered output.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<O: Clone, A: Clone> RecordSink<O, A> for Vec<StepRecord<O, A>> {
    fn record(&mut self, record: &StepRecord<O, A>) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Writes one human-readable line per record.
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, O: fmt::Debug, A: fmt::Debug> RecordSink<O, A> for TextSink<W> {
    fn record(&mut self, record: &StepRecord<O, A>) -> io::Result<()> {
        writeln!(self.out, "{record}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Writes one JSON object per line.
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, O: Serialize, A: Serialize> RecordSink<O, A> for JsonLinesSink<W> {
    fn record(&mut self, record: &StepRecord<O, A>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
