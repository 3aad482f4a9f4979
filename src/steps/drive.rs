use tracing::info;

use crate::{
    outcome::Outcome,
    registry::{ActionResult, Context},
    ui,
};

/// What the operator typed at the drive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveChoice {
    /// Zero-based index into the listed drives.
    Drive(usize),
    Return,
    Invalid,
}

/// Interprets `input` against a list of `count` drives numbered from 1,
/// followed by the "return" entry at `count + 1`.
pub fn parse_choice(input: &str, count: usize) -> DriveChoice {
    let input = input.trim();
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return DriveChoice::Invalid;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => DriveChoice::Drive(n - 1),
        Ok(n) if n == count + 1 => DriveChoice::Return,
        _ => DriveChoice::Invalid,
    }
}

/// Lists block devices and stores the operator's pick in the session.
///
/// The list is enumerated again after every invalid answer, so drives
/// plugged in meanwhile show up. Returning to the menu, or finding no
/// drives, leaves any earlier selection in place.
pub fn choose(ctx: &mut Context<'_>) -> ActionResult {
    loop {
        ui::clear_screen();
        let drives = ctx.probe.block_devices();
        if drives.is_empty() {
            return Ok(Outcome::Aborted("No drives detected!".to_string()));
        }

        ui::print_drives(&drives);
        let input = ctx.operator.read_line(
            "Enter the number of the drive you want to install to or return to the main menu",
        )?;

        match parse_choice(&input, drives.len()) {
            DriveChoice::Drive(idx) => {
                let drive = drives[idx].clone();
                info!(path = %drive.path, "drive selected");
                let msg = format!(
                    "Selected drive {} ({}, {}).",
                    drive.path, drive.size, drive.model
                );
                ctx.session.select_drive(drive);
                return Ok(Outcome::Completed(msg));
            }
            DriveChoice::Return => {
                return Ok(Outcome::Skipped("Returned to the main menu.".to_string()));
            }
            DriveChoice::Invalid => {
                ui::print_error(
                    "Invalid choice. Please select a valid drive number or return to the main menu.",
                );
                ctx.operator.acknowledge("Press Enter to continue")?;
            }
        }
    }
}
