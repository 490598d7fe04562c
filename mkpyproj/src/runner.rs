//! Running the external steps.

use std::ffi::{OsStr, OsString};
use std::fmt;

use mkpyproj_core::run_command_visible;

/// What happened when a step's program was run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    /// The program ran but exited unsuccessfully. `code` is `None` when it
    /// was terminated by a signal.
    Exited { code: Option<i32> },
    /// The program could not be started.
    LaunchFailed { reason: String },
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StepOutcome::Succeeded => write!(f, "succeeded"),
            StepOutcome::Exited { code: Some(code) } => write!(f, "exit code {}", code),
            StepOutcome::Exited { code: None } => write!(f, "terminated by a signal"),
            StepOutcome::LaunchFailed { reason } => write!(f, "could not be started ({})", reason),
        }
    }
}

/// Runs a program to completion and reports the outcome.
pub trait CommandRunner {
    fn run(&self, program: &OsStr, args: &[OsString]) -> StepOutcome;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &OsStr, args: &[OsString]) -> StepOutcome {
        (**self).run(program, args)
    }
}

/// Runs real processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[OsString]) -> StepOutcome {
        match run_command_visible(program, args) {
            Ok(status) if status.success() => StepOutcome::Succeeded,
            Ok(status) => StepOutcome::Exited {
                code: status.code(),
            },
            Err(e) => StepOutcome::LaunchFailed {
                reason: e.to_string(),
            },
        }
    }
}
