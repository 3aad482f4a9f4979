use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::{
    outcome::{Failure, Outcome},
    ui,
};

/// Status reported when the shell itself could not be started.
pub const SPAWN_FAILURE: i32 = 127;

/// Status reported when the child was killed by a signal.
pub const SIGNALLED: i32 = -1;

/// How many trailing stderr lines a [`Failure`] keeps.
const STDERR_TAIL: usize = 5;

// ── Result type ───────────────────────────────────────────────────────────────

/// Exit status and captured output of one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A zero-status result carrying `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        CommandOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A nonzero-status result carrying `stderr`.
    pub fn failed(status: i32, stderr: impl Into<String>) -> Self {
        CommandOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }
}

// ── Executor ──────────────────────────────────────────────────────────────────

/// Runs shell command lines.
///
/// Implementations never fail: a command that could not run, or ran and
/// exited nonzero, is reported through [`CommandOutput::status`].
pub trait CommandExecutor {
    /// Runs `line` with stdout and stderr captured.
    fn execute(&self, line: &str) -> CommandOutput;

    /// Runs `line` with the terminal handed over to the child.
    /// Captured output is always empty.
    fn execute_interactive(&self, line: &str) -> CommandOutput {
        self.execute(line)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn execute(&self, line: &str) -> CommandOutput {
        (**self).execute(line)
    }

    fn execute_interactive(&self, line: &str) -> CommandOutput {
        (**self).execute_interactive(line)
    }
}

/// Executor backed by `sh -c` on the host.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    /// Print commands instead of running them.
    pub dry_run: bool,
    /// Show a spinner while a captured command runs.
    pub spinner: bool,
}

impl ShellExecutor {
    /// Executor for step actions.
    pub fn for_steps(dry_run: bool) -> Self {
        ShellExecutor {
            dry_run,
            spinner: true,
        }
    }

    /// Executor for read-only probes; always runs, never draws.
    pub fn quiet() -> Self {
        ShellExecutor {
            dry_run: false,
            spinner: false,
        }
    }

    fn simulate(&self, line: &str) -> CommandOutput {
        info!(command = line, "dry run");
        ui::print_info(&format!("[dry-run] {}", line));
        CommandOutput::ok("")
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, line: &str) -> CommandOutput {
        if self.dry_run {
            return self.simulate(line);
        }

        debug!(command = line, "running captured");
        let pb = self.spinner.then(|| ui::spinner(line.to_string()));
        let result = Command::new("sh")
            .arg("-c")
            .arg(line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        let output = match result {
            Ok(output) => CommandOutput {
                status: output.status.code().unwrap_or(SIGNALLED),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => CommandOutput::failed(SPAWN_FAILURE, e.to_string()),
        };
        debug!(command = line, status = output.status, "finished");
        output
    }

    fn execute_interactive(&self, line: &str) -> CommandOutput {
        if self.dry_run {
            return self.simulate(line);
        }

        debug!(command = line, "running interactive");
        let output = match Command::new("sh").arg("-c").arg(line).status() {
            Ok(status) => CommandOutput {
                status: status.code().unwrap_or(SIGNALLED),
                ..CommandOutput::default()
            },
            Err(e) => CommandOutput::failed(SPAWN_FAILURE, e.to_string()),
        };
        debug!(command = line, status = output.status, "finished");
        output
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

/// Runs the commands of one step and remembers which of them failed.
///
/// A failure does not stop the batch; the operator decides whether to rerun
/// the step.
pub struct Batch<'a> {
    exec: &'a dyn CommandExecutor,
    failures: Vec<Failure>,
}

impl<'a> Batch<'a> {
    pub fn new(exec: &'a dyn CommandExecutor) -> Self {
        Batch {
            exec,
            failures: Vec::new(),
        }
    }

    pub fn run(&mut self, line: &str) -> CommandOutput {
        let output = self.exec.execute(line);
        self.note(line, &output);
        output
    }

    pub fn run_interactive(&mut self, line: &str) -> CommandOutput {
        let output = self.exec.execute_interactive(line);
        self.note(line, &output);
        output
    }

    /// `Completed(done)` if nothing failed, otherwise the list of failures.
    pub fn finish(self, done: impl Into<String>) -> Outcome {
        if self.failures.is_empty() {
            Outcome::Completed(done.into())
        } else {
            Outcome::Failed(self.failures)
        }
    }

    fn note(&mut self, line: &str, output: &CommandOutput) {
        if !output.success() {
            self.failures.push(Failure {
                command: line.to_string(),
                status: output.status,
                stderr: tail(&output.stderr, STDERR_TAIL),
            });
        }
    }
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.trim().lines().collect();
    all[all.len().saturating_sub(lines)..].join("\n")
}

// ── Command construction ──────────────────────────────────────────────────────

/// Wraps `value` in single quotes so `sh` reads it as one word.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// `pacman -S` with an operator-supplied, space-separated package list.
/// The list is passed through as typed.
pub fn pacman_install(packages: &str) -> String {
    format!("pacman -S {}", packages)
}

/// Appends a `[name]` / `Include = …` stanza to `conf`.
pub fn append_stanza(name: &str, include: &str, conf: &str) -> String {
    format!(
        "printf '\\n[{}]\\nInclude = {}\\n' >> {}",
        name, include, conf
    )
}
