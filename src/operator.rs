use dialoguer::{Confirm, Input, Password};

use crate::error::InstallerError;

/// The human at the keyboard.
pub trait Operator {
    /// Reads one line of free text. Empty input is allowed.
    fn read_line(&mut self, prompt: &str) -> Result<String, InstallerError>;

    /// Reads a line without echoing it.
    fn read_secret(&mut self, prompt: &str) -> Result<String, InstallerError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, InstallerError>;

    /// Blocks until the operator presses Enter.
    fn acknowledge(&mut self, prompt: &str) -> Result<(), InstallerError> {
        self.read_line(prompt).map(|_| ())
    }
}

/// [`Operator`] reading from the terminal through `dialoguer`.
#[derive(Debug, Default)]
pub struct TerminalOperator;

impl Operator for TerminalOperator {
    fn read_line(&mut self, prompt: &str) -> Result<String, InstallerError> {
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String, InstallerError> {
        Ok(Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, InstallerError> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
