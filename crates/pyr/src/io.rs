//! The output sink `exec` (and `input`'s prompt) write through.
//!
//! Shaped after the teacher's `PrintWriter` trait (`StdPrint`/`CollectStringPrint`/
//! `NoPrint` in `ouros::io`): one trait, one line-oriented write method, three
//! implementations covering real stdout, in-memory collection for tests, and a sink
//! that discards everything.

use std::io::{self, Write as _};

/// Destination for program output.
pub trait OutputSink {
    /// Writes one already-formatted line, including its trailing newline.
    fn write_line(&mut self, line: &str);

    /// Writes raw text with no trailing newline — used for `input()`'s prompt.
    fn write_prompt(&mut self, text: &str);
}

/// Writes to real process stdout, flushing after every prompt so interactive prompts
/// appear before the terminal blocks on the next `input()` read.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn write_prompt(&mut self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }
}

/// Collects everything written to it into an in-memory string, for asserting on
/// `exec` output in tests without capturing process stdout.
#[derive(Debug, Default)]
pub struct CollectSink(String);

impl CollectSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.0
    }
}

impl OutputSink for CollectSink {
    fn write_line(&mut self, line: &str) {
        self.0.push_str(line);
        self.0.push('\n');
    }

    fn write_prompt(&mut self, text: &str) {
        self.0.push_str(text);
    }
}

/// Discards all output. Useful for benchmarking or when only the return value matters.
#[derive(Debug, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn write_line(&mut self, _line: &str) {}
    fn write_prompt(&mut self, _text: &str) {}
}
