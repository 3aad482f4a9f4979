use crate::{
    cmd::Batch,
    config::DESKTOP_META_PACKAGE,
    registry::{ActionResult, Context},
};

/// Enables NetworkManager, and SDDM when the KDE meta package is installed.
pub fn enable(ctx: &mut Context<'_>) -> ActionResult {
    let mut batch = Batch::new(ctx.exec);
    let mut enabled = vec!["NetworkManager"];

    batch.run("systemctl enable NetworkManager");
    if ctx.probe.package_installed(DESKTOP_META_PACKAGE) {
        batch.run("systemctl enable sddm");
        enabled.push("sddm");
    }

    Ok(batch.finish(format!("Enabled: {}.", enabled.join(", "))))
}
