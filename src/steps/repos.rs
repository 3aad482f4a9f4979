//! Official and third-party pacman repositories.
//!
//! The third-party steps only make sense inside the installed system; the
//! registry gates them on [`crate::registry::Precondition::InsideTargetRoot`].
//! Stanzas are appended to `pacman.conf` without checking whether they are
//! already present, so running a step twice duplicates them.

use tracing::{info, warn};

use crate::{
    cmd::{self, Batch},
    config::{
        PacmanRepo, RepoStanza, ThirdPartyRepo, CACHYOS, CACHYOS_V3_STANZAS, CACHYOS_V4_STANZAS,
        CHAOTIC_AUR, PACMAN_CONF,
    },
    outcome::Outcome,
    probe::MicroarchLevel,
    registry::{ActionResult, Context},
    ui,
};

// ── Official repositories ─────────────────────────────────────────────────────

/// `sed` line uncommenting the `[section]` header and its `Include` line.
pub fn uncomment_command(repo: PacmanRepo) -> String {
    format!(
        "sed -i '/\\[{}\\]/,/Include/s/^#//' {}",
        repo.section(),
        PACMAN_CONF
    )
}

/// Lets the operator enable any of the repositories shipped commented out.
pub fn configure_official(ctx: &mut Context<'_>) -> ActionResult {
    ui::print_header("Available repositories");
    let names: Vec<&str> = PacmanRepo::ALL.iter().map(|r| r.section()).collect();
    ui::print_options(&names);

    let input = ctx
        .operator
        .read_line("Use space to select multiple repositories. Enter your choice (e.g. 1 3)")?;

    let mut selected = Vec::new();
    for choice in input.split_whitespace() {
        match PacmanRepo::from_choice(choice) {
            Some(repo) if !selected.contains(&repo) => selected.push(repo),
            Some(_) => {}
            None => ui::print_warning(&format!("Ignoring unknown choice '{}'.", choice)),
        }
    }
    if selected.is_empty() {
        return Ok(Outcome::Skipped("No repositories selected.".to_string()));
    }

    let mut batch = Batch::new(ctx.exec);
    for repo in &selected {
        batch.run(&uncomment_command(*repo));
    }
    let names: Vec<&str> = selected.iter().map(|r| r.section()).collect();
    Ok(batch.finish(format!("Enabled repositories: {}.", names.join(", "))))
}

// ── Third-party repositories ──────────────────────────────────────────────────

/// Microarchitecture levels detected on this CPU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MicroarchSupport {
    pub v3: bool,
    pub v4: bool,
}

impl MicroarchSupport {
    pub fn detect(ctx: &Context<'_>) -> Self {
        MicroarchSupport {
            v3: ctx.probe.supports_microarch(MicroarchLevel::V3),
            v4: ctx.probe.supports_microarch(MicroarchLevel::V4),
        }
    }
}

/// Stanzas to append for CachyOS, in order: v4 mirrors, v3 mirrors, then
/// the base repository, which is always present.
pub fn cachyos_stanzas(support: MicroarchSupport) -> Vec<RepoStanza> {
    let mut stanzas = Vec::new();
    if support.v4 {
        stanzas.extend_from_slice(CACHYOS_V4_STANZAS);
    }
    if support.v3 {
        stanzas.extend_from_slice(CACHYOS_V3_STANZAS);
    }
    stanzas.push(CACHYOS.base_stanza);
    stanzas
}

/// Imports and locally signs the repository key, then installs its keyring
/// and mirror list packages.
fn bootstrap(batch: &mut Batch<'_>, repo: &ThirdPartyRepo) {
    batch.run(&format!(
        "pacman-key --recv-keys {} --keyserver {}",
        repo.key_fingerprint, repo.keyserver
    ));
    batch.run(&format!("pacman-key --lsign-key {}", repo.key_fingerprint));

    let urls: Vec<String> = repo.bootstrap_packages.iter().map(|u| cmd::quote(u)).collect();
    batch.run_interactive(&format!("pacman -U {}", urls.join(" ")));
}

fn append(batch: &mut Batch<'_>, stanzas: &[RepoStanza]) {
    for stanza in stanzas {
        batch.run(&cmd::append_stanza(stanza.name, stanza.include, PACMAN_CONF));
    }
}

pub fn setup_chaotic_aur(ctx: &mut Context<'_>) -> ActionResult {
    ui::print_info("Setting up Chaotic-AUR inside chroot environment...");

    let mut batch = Batch::new(ctx.exec);
    bootstrap(&mut batch, &CHAOTIC_AUR);
    append(&mut batch, &[CHAOTIC_AUR.base_stanza]);
    Ok(batch.finish(format!("{} setup complete!", CHAOTIC_AUR.display_name)))
}

pub fn setup_cachyos(ctx: &mut Context<'_>) -> ActionResult {
    ui::print_info("Setting up CachyOS repository inside chroot environment...");

    let mut batch = Batch::new(ctx.exec);
    bootstrap(&mut batch, &CACHYOS);

    let support = MicroarchSupport::detect(ctx);
    info!(v3 = support.v3, v4 = support.v4, "cpu microarchitecture");
    if !support.v3 && !support.v4 {
        warn!("neither x86-64-v3 nor x86-64-v4 detected, adding base repository only");
    }
    append(&mut batch, &cachyos_stanzas(support));
    Ok(batch.finish(format!("{} repository setup complete!", CACHYOS.display_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(support: MicroarchSupport) -> Vec<&'static str> {
        cachyos_stanzas(support).iter().map(|s| s.name).collect()
    }

    #[test]
    fn v3_only_adds_three_v3_stanzas() {
        assert_eq!(
            names(MicroarchSupport { v3: true, v4: false }),
            ["cachyos-v3", "cachyos-core-v3", "cachyos-extra-v3", "cachyos"]
        );
    }

    #[test]
    fn v4_only_adds_v4_stanza() {
        assert_eq!(
            names(MicroarchSupport { v3: false, v4: true }),
            ["cachyos-v4", "cachyos"]
        );
    }

    #[test]
    fn both_levels_put_v4_first() {
        assert_eq!(
            names(MicroarchSupport { v3: true, v4: true }),
            ["cachyos-v4", "cachyos-v3", "cachyos-core-v3", "cachyos-extra-v3", "cachyos"]
        );
    }

    #[test]
    fn no_level_keeps_base_only() {
        assert_eq!(names(MicroarchSupport::default()), ["cachyos"]);
    }

    #[test]
    fn sed_targets_exact_section() {
        assert_eq!(
            uncomment_command(PacmanRepo::Multilib),
            r"sed -i '/\[multilib\]/,/Include/s/^#//' /etc/pacman.conf"
        );
    }
}
