use std::io::{BufRead, BufReader};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};
use tracing::{debug, trace};

use crate::error::PecogitError;

/// Runs `git` with an argument vector.
pub trait GitRunner: Send + Sync {
    /// Streams stdout to `on_line` one line at a time as git produces it.
    ///
    /// Returning `ControlFlow::Break` stops reading; the process is then
    /// terminated and its exit status is not checked. Otherwise the process
    /// is waited on after stdout closes and a non-zero exit is an error.
    fn stream_lines(
        &self,
        args: &[String],
        on_line: &mut dyn FnMut(&str) -> ControlFlow<()>,
    ) -> Result<(), PecogitError>;

    /// Runs git to completion and returns all of stdout.
    fn output(&self, args: &[String]) -> Result<String, PecogitError>;
}

/// Runs the `git` found on `PATH`, optionally from a fixed working directory.
#[derive(Debug, Clone, Default)]
pub struct DefaultGitRunner {
    working_dir: Option<PathBuf>,
}

impl DefaultGitRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs git inside `dir` instead of the current directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }

    fn command(&self, args: &[String]) -> Command {
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl GitRunner for DefaultGitRunner {
    fn stream_lines(
        &self,
        args: &[String],
        on_line: &mut dyn FnMut(&str) -> ControlFlow<()>,
    ) -> Result<(), PecogitError> {
        debug!("Streaming git {}", args.join(" "));
        let mut process = GitProcess::spawn(self.command(args), args)?;
        let stdout = process
            .take_stdout()
            .ok_or_else(|| PecogitError::subprocess(args, "stdout was not captured"))?;

        let flow = read_lines(BufReader::new(stdout), on_line)
            .map_err(|e| PecogitError::subprocess(args, e.to_string()))?;

        match flow {
            ControlFlow::Break(()) => {
                debug!("Stopped reading git output early");
                process.terminate();
                Ok(())
            }
            ControlFlow::Continue(()) => process.finish(args),
        }
    }

    fn output(&self, args: &[String]) -> Result<String, PecogitError> {
        debug!("Running git {}", args.join(" "));
        let output = self
            .command(args)
            .output()
            .map_err(|e| PecogitError::subprocess(args, e.to_string()))?;

        if !output.status.success() {
            return Err(PecogitError::subprocess(
                args,
                failure_detail(output.status, &output.stderr),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Feeds each line of `reader` to `on_line` until it breaks or input ends.
///
/// The line terminator and a trailing `\r` are removed. Bytes that are not
/// valid UTF-8 are replaced rather than failing the read.
pub fn read_lines<R: BufRead>(
    mut reader: R,
    on_line: &mut dyn FnMut(&str) -> ControlFlow<()>,
) -> std::io::Result<ControlFlow<()>> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ControlFlow::Continue(()));
        }
        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
        let line = line.strip_suffix('\r').unwrap_or(line);
        trace!("git: {line}");
        if on_line(line).is_break() {
            return Ok(ControlFlow::Break(()));
        }
    }
}

/// Owns a running git child and reaps it on every exit path.
struct GitProcess {
    child: Child,
    reaped: bool,
}

impl GitProcess {
    fn spawn(mut command: Command, args: &[String]) -> Result<Self, PecogitError> {
        // stderr goes straight to the terminal so an unread pipe can never block git
        let child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| PecogitError::subprocess(args, e.to_string()))?;
        Ok(Self {
            child,
            reaped: false,
        })
    }

    fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    /// Waits for a normal exit and reports a non-zero status.
    fn finish(mut self, args: &[String]) -> Result<(), PecogitError> {
        self.reaped = true;
        let status = self
            .child
            .wait()
            .map_err(|e| PecogitError::subprocess(args, e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(PecogitError::subprocess(args, failure_detail(status, &[])))
        }
    }

    /// Kills the child and waits so no zombie is left behind.
    fn terminate(mut self) {
        self.kill_and_reap();
    }

    fn kill_and_reap(&mut self) {
        if self.reaped {
            return;
        }
        self.reaped = true;
        drop(self.child.stdout.take());
        if let Err(e) = self.child.kill() {
            trace!("git already exited: {e}");
        }
        if let Err(e) = self.child.wait() {
            debug!("Failed to reap git process: {e}");
        }
    }
}

impl Drop for GitProcess {
    fn drop(&mut self) {
        self.kill_and_reap();
    }
}

fn failure_detail(status: ExitStatus, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {stderr}")
    }
}
