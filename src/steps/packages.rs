use console::style;

use crate::{
    cmd::{self, Batch},
    config::{ADDITIONAL_PACKAGES, ESSENTIAL_PACKAGES, KDE_PACKAGES, TARGET_ROOT},
    outcome::Outcome,
    registry::{ActionResult, Context},
    ui,
};

// ── Base system ───────────────────────────────────────────────────────────────

/// Installs the base system into `/mnt` via `pacstrap`.
pub fn install_essential(ctx: &mut Context<'_>) -> ActionResult {
    ui::print_info(&format!(
        "Installing {} into {}…",
        style(ESSENTIAL_PACKAGES.join(" ")).cyan().bold(),
        TARGET_ROOT
    ));

    // pacstrap streams download progress, so keep it interactive.
    let mut batch = Batch::new(ctx.exec);
    batch.run_interactive(&format!(
        "pacstrap {} {}",
        TARGET_ROOT,
        ESSENTIAL_PACKAGES.join(" ")
    ));
    Ok(batch.finish("Essential packages installed."))
}

// ── Package sets ──────────────────────────────────────────────────────────────

pub fn install_kde(ctx: &mut Context<'_>) -> ActionResult {
    install_set(ctx, KDE_PACKAGES, "KDE packages installed.")
}

pub fn install_additional(ctx: &mut Context<'_>) -> ActionResult {
    install_set(ctx, ADDITIONAL_PACKAGES, "Additional packages installed.")
}

fn install_set(ctx: &mut Context<'_>, packages: &[&str], done: &str) -> ActionResult {
    let mut batch = Batch::new(ctx.exec);
    batch.run_interactive(&cmd::pacman_install(&packages.join(" ")));
    Ok(batch.finish(done))
}

// ── Custom list ───────────────────────────────────────────────────────────────

/// Installs whatever space-separated list the operator types.
pub fn install_custom(ctx: &mut Context<'_>) -> ActionResult {
    let packages = ctx.operator.read_line(
        "Enter a space-separated list of additional packages you want to install",
    )?;
    if packages.trim().is_empty() {
        return Ok(Outcome::Skipped("No packages entered.".to_string()));
    }

    let mut batch = Batch::new(ctx.exec);
    batch.run_interactive(&cmd::pacman_install(packages.trim()));
    Ok(batch.finish("Custom packages installed."))
}
