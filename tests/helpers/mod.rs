//! Fakes shared by the integration tests.

#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque};

use arch_install_helper::{
    cmd::{CommandExecutor, CommandOutput},
    error::InstallerError,
    lsblk::Drive,
    operator::Operator,
    probe::{MicroarchLevel, Probe},
};

/// Records every command line and answers from a list of prefix rules.
/// Unmatched commands succeed with empty output.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: RefCell<Vec<String>>,
    rules: Vec<(String, CommandOutput)>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands starting with `prefix` return `output`.
    pub fn respond(mut self, prefix: &str, output: CommandOutput) -> Self {
        self.rules.push((prefix.to_string(), output));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.contains(needle)).count()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, line: &str) -> CommandOutput {
        self.calls.borrow_mut().push(line.to_string());
        self.rules
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, out)| out.clone())
            .unwrap_or_default()
    }
}

/// Probe answering from fields. Drive lists are served in order; the last
/// one repeats once the others are used up.
#[derive(Default)]
pub struct FakeProbe {
    pub inside_root: bool,
    pub timezone: Option<String>,
    pub memory_kib: Option<u64>,
    pub v3: bool,
    pub v4: bool,
    pub installed: Vec<String>,
    pub drive_lists: RefCell<VecDeque<Vec<Drive>>>,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drives(self, drives: Vec<Drive>) -> Self {
        self.drive_lists.borrow_mut().push_back(drives);
        self
    }
}

impl Probe for FakeProbe {
    fn inside_target_root(&self) -> bool {
        self.inside_root
    }

    fn current_timezone(&self) -> Option<String> {
        self.timezone.clone()
    }

    fn total_memory_kib(&self) -> Option<u64> {
        self.memory_kib
    }

    fn supports_microarch(&self, level: MicroarchLevel) -> bool {
        match level {
            MicroarchLevel::V3 => self.v3,
            MicroarchLevel::V4 => self.v4,
        }
    }

    fn package_installed(&self, name: &str) -> bool {
        self.installed.iter().any(|p| p == name)
    }

    fn block_devices(&self) -> Vec<Drive> {
        let mut lists = self.drive_lists.borrow_mut();
        if lists.len() > 1 {
            lists.pop_front().unwrap_or_default()
        } else {
            lists.front().cloned().unwrap_or_default()
        }
    }
}

/// Operator replaying canned answers. Running out is an `InputClosed` error.
/// `confirm` treats an answer starting with `y` as yes.
pub struct ScriptedOperator {
    answers: VecDeque<String>,
}

impl ScriptedOperator {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedOperator {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self) -> Result<String, InstallerError> {
        self.answers.pop_front().ok_or(InstallerError::InputClosed)
    }
}

impl Operator for ScriptedOperator {
    fn read_line(&mut self, _prompt: &str) -> Result<String, InstallerError> {
        self.next()
    }

    fn read_secret(&mut self, _prompt: &str) -> Result<String, InstallerError> {
        self.next()
    }

    fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool, InstallerError> {
        Ok(self.next()?.trim().to_lowercase().starts_with('y'))
    }
}

pub fn sda() -> Drive {
    Drive::new("/dev/sda", "465.8G", "Samsung SSD 870")
}

pub fn sdb() -> Drive {
    Drive::new("/dev/sdb", "14.9G", "SanDisk Cruzer")
}
