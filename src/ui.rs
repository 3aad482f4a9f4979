use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::{
    lsblk::Drive,
    outcome::Outcome,
    registry::Registry,
    session::Session,
};

// ── Terminal helpers ──────────────────────────────────────────────────────────

fn term_width() -> usize {
    Term::stdout().size().1.max(60) as usize
}

fn rule() -> String {
    style("─".repeat(term_width().min(52))).dim().to_string()
}

pub fn clear_screen() {
    let _ = Term::stdout().clear_screen();
}

// ── Banner ────────────────────────────────────────────────────────────────────

pub fn print_banner() {
    clear_screen();

    println!();
    println!("{}", style("   Arch Linux Installation Helper").cyan().bold());
    println!(
        "{}",
        style(format!("   Btrfs  ·  KDE  ·  zRAM  ·  v{}", env!("CARGO_PKG_VERSION")))
            .dim()
            .italic()
    );
    println!();
    println!("{}", rule());
    println!();
}

// ── Menus ─────────────────────────────────────────────────────────────────────

/// Prints a section header above a menu or sub-menu.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("  {}", title)).white().bold());
    println!("{}", rule());
}

/// Renders the main menu: session box, then one line per step.
pub fn print_menu(registry: &Registry, session: &Session, dry_run: bool) {
    print_header("Arch Linux Installation Menu");

    let drive = session
        .selected_drive()
        .map(|d| format!("{} ({}, {})", d.path, d.size, d.model))
        .unwrap_or_else(|| "none".to_string());
    let mode = if dry_run { "dry-run" } else { "live" };
    print_kv_box("Session", &[("Drive", drive.as_str()), ("Mode", mode)]);
    println!();

    for step in registry.steps() {
        let mark = if session.has_completed(step.selector) {
            style("✓").green().bold().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "  {} {:>3}) {}",
            mark,
            style(step.selector).cyan().bold(),
            step.label
        );
    }
    println!();
}

/// Numbered drive list followed by the "return" entry.
pub fn print_drives(drives: &[Drive]) {
    print_header("Available drives");
    println!(
        "       {:<12}  {:>8}   {}",
        style("DISK").dim(),
        style("SIZE").dim(),
        style("MODEL").dim()
    );
    for (idx, drive) in drives.iter().enumerate() {
        println!("  {:>3}. {}", style(idx + 1).cyan().bold(), drive);
    }
    println!(
        "  {:>3}. Return to main menu",
        style(drives.len() + 1).cyan().bold()
    );
    println!();
}

/// Prints a numbered list of plain options.
pub fn print_options(options: &[&str]) {
    for (idx, option) in options.iter().enumerate() {
        println!("  {:>3}) {}", style(idx + 1).cyan().bold(), option);
    }
    println!();
}

// ── Outcome ───────────────────────────────────────────────────────────────────

pub fn print_outcome(outcome: &Outcome) {
    println!();
    match outcome {
        Outcome::Completed(msg) => print_success(msg),
        Outcome::Skipped(msg) => print_warning(msg),
        Outcome::Aborted(msg) => print_error(msg),
        Outcome::Unmet(unmet) => print_warning(&unmet.to_string()),
        Outcome::InvalidChoice => print_error("Invalid choice!"),
        Outcome::Quit => print_info("Exiting..."),
        Outcome::Failed(failures) => {
            print_error(&format!("{} command(s) failed:", failures.len()));
            for failure in failures {
                eprintln!(
                    "     {} {}",
                    style(format!("[exit {}]", failure.status)).red(),
                    failure.command
                );
                for line in failure.stderr.lines() {
                    eprintln!("       {}", style(line).dim());
                }
            }
        }
    }
}

// ── Feedback messages ─────────────────────────────────────────────────────────

/// Green ✓ — operation completed successfully.
pub fn print_success(msg: &str) {
    println!("  {}  {}", style("✓").green().bold(), style(msg).green());
}

/// Blue → — neutral info / progress note.
pub fn print_info(msg: &str) {
    println!("  {}  {}", style("→").blue().bold(), msg);
}

/// Yellow ⚠  — non-fatal notice.
pub fn print_warning(msg: &str) {
    println!("  {}  {}", style("⚠").yellow().bold(), style(msg).yellow());
}

/// Red ✗ — error (written to stderr).
pub fn print_error(msg: &str) {
    eprintln!("  {}  {}", style("✗").red().bold(), style(msg).red());
}

// ── Info box ──────────────────────────────────────────────────────────────────

/// Renders a bordered key→value box in the terminal.
///
/// ```text
/// ┌─ Session ─────────────────────────────┐
/// │  Drive        /dev/sda (20G, Samsung)
/// │  Mode         live
/// └───────────────────────────────────────┘
/// ```
pub fn print_kv_box(title: &str, rows: &[(&str, &str)]) {
    const BOX_INNER: usize = 38;

    let dashes = "─".repeat(BOX_INNER.saturating_sub(title.chars().count() + 2));
    println!(
        "  ┌─ {} {}┐",
        style(title).white().bold(),
        style(&dashes).dim()
    );

    for (key, val) in rows {
        println!(
            "  │  {:<13}{}",
            style(*key).dim(),
            style(*val).white().bold()
        );
    }

    println!("  └{}┘", style("─".repeat(BOX_INNER + 2)).dim());
}

// ── Spinner ───────────────────────────────────────────────────────────────────

/// Returns a running braille spinner. Call `pb.finish_and_clear()` when done.
pub fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("  {spinner:.cyan.bold}  {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
