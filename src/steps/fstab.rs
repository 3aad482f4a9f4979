use crate::{
    cmd::Batch,
    config::TARGET_ROOT,
    registry::{ActionResult, Context},
};

/// Appends UUID-based mount entries to `/mnt/etc/fstab`.
///
/// Equivalent to: `genfstab -U /mnt >> /mnt/etc/fstab`
pub fn generate(ctx: &mut Context<'_>) -> ActionResult {
    let mut batch = Batch::new(ctx.exec);
    batch.run(&format!(
        "genfstab -U {root} >> {root}/etc/fstab",
        root = TARGET_ROOT
    ));
    Ok(batch.finish(format!("fstab written to {}/etc/fstab.", TARGET_ROOT)))
}
