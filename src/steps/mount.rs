use crate::{
    cmd::Batch,
    config::{MOUNT_COMPRESSION, SUBVOLUMES, TARGET_ROOT},
    lsblk::Drive,
    registry::{ActionResult, Context},
};

/// Creates the `@` and `@home` subvolumes on the selected drive.
///
/// The top-level volume is mounted on `/mnt` only for the duration of the
/// step.
pub fn create_subvolumes(ctx: &mut Context<'_>, drive: &Drive) -> ActionResult {
    let mut batch = Batch::new(ctx.exec);

    batch.run(&format!("mount {} {}", drive.path, TARGET_ROOT));
    for sub in SUBVOLUMES {
        batch.run(&format!("btrfs subvolume create {}/{}", TARGET_ROOT, sub.name));
    }
    batch.run(&format!("umount {}", TARGET_ROOT));

    Ok(batch.finish(format!("Subvolumes @ and @home created on {}.", drive.path)))
}

/// Mounts the subvolumes into the installation tree.
///
/// Mount order:
///   1. `@`     → /mnt
///   2. create /mnt/home
///   3. `@home` → /mnt/home
pub fn mount_subvolumes(ctx: &mut Context<'_>, drive: &Drive) -> ActionResult {
    let mut batch = Batch::new(ctx.exec);

    for (i, sub) in SUBVOLUMES.iter().enumerate() {
        if i > 0 {
            batch.run(&format!("mkdir -p {}", sub.mount_point));
        }
        batch.run(&format!(
            "mount -o {},subvol={} {} {}",
            MOUNT_COMPRESSION, sub.name, drive.path, sub.mount_point
        ));
    }

    Ok(batch.finish(format!("{} mounted at {}.", drive.path, TARGET_ROOT)))
}
