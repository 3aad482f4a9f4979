use std::fmt;

/// A precondition that was not met when a step was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmet {
    NoDriveSelected,
    NotInsideTargetRoot,
}

impl fmt::Display for Unmet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unmet::NoDriveSelected => {
                write!(f, "No drive selected! Choose a drive first (option 1).")
            }
            Unmet::NotInsideTargetRoot => write!(
                f,
                "You are not inside the chroot environment. Please chroot into the system first."
            ),
        }
    }
}

/// One command that exited nonzero while a step ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub command: String,
    pub status: i32,
    /// Last lines of the command's stderr, empty for interactive commands.
    pub stderr: String,
}

/// What the operator sees after each menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every command the step ran exited zero.
    Completed(String),
    /// At least one command failed; later commands still ran.
    Failed(Vec<Failure>),
    Unmet(Unmet),
    /// The operator backed out, or there was nothing to do.
    Skipped(String),
    /// A system fact the step depends on could not be determined.
    Aborted(String),
    InvalidChoice,
    Quit,
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}
