use thiserror::Error;

/// Errors that end the menu loop.
///
/// Step outcomes (failed commands, unmet preconditions) are never errors;
/// they are reported through [`crate::outcome::Outcome`].
#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Operator input closed")]
    InputClosed,

    #[error("This helper must be run as root (sudo)")]
    NotRoot,
}
