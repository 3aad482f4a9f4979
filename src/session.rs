use std::collections::BTreeSet;

use crate::lsblk::Drive;

// ── Session state ─────────────────────────────────────────────────────────────

/// State shared by every step for the lifetime of one run.
#[derive(Debug, Default)]
pub struct Session {
    drive: Option<Drive>,
    /// Selectors whose most recent run completed cleanly. Display only.
    completed: BTreeSet<u8>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Replaces any previous selection.
    pub fn select_drive(&mut self, drive: Drive) {
        self.drive = Some(drive);
    }

    pub fn selected_drive(&self) -> Option<&Drive> {
        self.drive.as_ref()
    }

    pub fn record_completed(&mut self, selector: u8) {
        self.completed.insert(selector);
    }

    /// A failed rerun clears the mark again.
    pub fn record_not_completed(&mut self, selector: u8) {
        self.completed.remove(&selector);
    }

    pub fn has_completed(&self, selector: u8) -> bool {
        self.completed.contains(&selector)
    }
}
