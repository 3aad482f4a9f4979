use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, FmtSubscriber};

use arch_install_helper::{
    cli::Cli,
    cmd::ShellExecutor,
    config::Settings,
    error::InstallerError,
    menu::Menu,
    operator::{Operator, TerminalOperator},
    probe::HostProbe,
    registry::Context,
    ui,
};

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::from(cli.log_level))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {}", e);
    }

    if let Err(e) = run(&cli) {
        error!("{}", e);
        println!();
        ui::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), InstallerError> {
    let settings = cli.settings();

    // ── Guard ─────────────────────────────────────────────────────────────────
    check_root(&settings)?;

    let mut operator = TerminalOperator;

    // ── Welcome ───────────────────────────────────────────────────────────────
    if !cli.skip_intro {
        print_intro(&settings);
        operator.acknowledge("Press Enter to continue")?;
    }

    let exec = ShellExecutor::for_steps(settings.dry_run);
    let probe = HostProbe::new(ShellExecutor::quiet());
    let mut ctx = Context::new(&exec, &probe, &mut operator, &settings);

    info!(dry_run = settings.dry_run, "starting menu");
    Menu::default().run(&mut ctx)?;
    info!("operator quit");

    Ok(())
}

fn print_intro(settings: &Settings) {
    ui::print_banner();

    if settings.dry_run {
        ui::print_warning("DRY-RUN MODE: system-changing commands are printed, not run.");
    }

    ui::print_info("Use the numbers provided to navigate through the menu options.");
    ui::print_info("Run this from a live Arch Linux environment with an internet connection.");
    ui::print_warning("Back up important data before changing drives or partitions.");
    println!();
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Checks that the process is running as root (UID 0).
/// Skipped in dry-run mode.
fn check_root(settings: &Settings) -> Result<(), InstallerError> {
    if settings.dry_run {
        return Ok(());
    }

    let uid = std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|s| {
            s.lines()
                .find(|l| l.starts_with("Uid:"))
                .and_then(|l| l.split_whitespace().nth(1))
                .and_then(|v| v.parse::<u32>().ok())
        })
        .unwrap_or(1); // default to non-root if unreadable

    if uid != 0 {
        return Err(InstallerError::NotRoot);
    }

    Ok(())
}
