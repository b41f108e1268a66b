use std::ops::ControlFlow;
use std::sync::Mutex;

use crate::context::git_runner::GitRunner;
use crate::error::PecogitError;

/// A GitRunner that replays canned stdout and records every invocation.
///
/// `lines_read` counts how many lines were handed to a streaming consumer,
/// which lets tests observe early termination.
pub struct FixedOutputGitRunner {
    stdout: String,
    failure: Option<String>,
    calls: Mutex<Vec<Vec<String>>>,
    lines_read: Mutex<usize>,
}

impl FixedOutputGitRunner {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            failure: None,
            calls: Mutex::new(Vec::new()),
            lines_read: Mutex::new(0),
        }
    }

    pub fn from_lines(lines: &[&str]) -> Self {
        let mut stdout = lines.join("\n");
        stdout.push('\n');
        Self::new(stdout)
    }

    /// Reports a non-zero exit after all output has been produced
    pub fn failing(mut self, detail: impl Into<String>) -> Self {
        self.failure = Some(detail.into());
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lines_read(&self) -> usize {
        *self.lines_read.lock().unwrap()
    }

    fn record(&self, args: &[String]) {
        self.calls.lock().unwrap().push(args.to_vec());
    }

    fn status(&self, args: &[String]) -> Result<(), PecogitError> {
        match &self.failure {
            Some(detail) => Err(PecogitError::subprocess(args, detail.clone())),
            None => Ok(()),
        }
    }
}

impl GitRunner for FixedOutputGitRunner {
    fn stream_lines(
        &self,
        args: &[String],
        on_line: &mut dyn FnMut(&str) -> ControlFlow<()>,
    ) -> Result<(), PecogitError> {
        self.record(args);
        for line in self.stdout.lines() {
            *self.lines_read.lock().unwrap() += 1;
            if on_line(line).is_break() {
                return Ok(());
            }
        }
        self.status(args)
    }

    fn output(&self, args: &[String]) -> Result<String, PecogitError> {
        self.record(args);
        self.status(args)?;
        Ok(self.stdout.clone())
    }
}
