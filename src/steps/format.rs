use console::style;

use crate::{
    cmd::Batch,
    lsblk::Drive,
    outcome::Outcome,
    registry::{ActionResult, Context},
};

/// Builds the `mkfs.btrfs` line for `device`.
pub fn mkfs_command(device: &str, compress: bool) -> String {
    if compress {
        format!("mkfs.btrfs -f --compress=zstd {}", device)
    } else {
        format!("mkfs.btrfs -f {}", device)
    }
}

/// Puts a single Btrfs filesystem across the whole selected drive.
///
/// Asks twice: once to confirm the wipe (default no), once for compression.
pub fn run(ctx: &mut Context<'_>, drive: &Drive) -> ActionResult {
    println!();
    println!(
        "  {}",
        style(format!("⚠  WARNING: You are about to format the drive {}.", drive.path))
            .red()
            .bold()
    );
    println!(
        "  {}",
        style("All data on this drive will be permanently lost!").red()
    );
    println!();

    if !ctx
        .operator
        .confirm("Are you sure you want to proceed?", false)?
    {
        return Ok(Outcome::Skipped("Operation cancelled.".to_string()));
    }

    let compress = ctx
        .operator
        .confirm("Do you want to enable Btrfs compression?", false)?;

    let mut batch = Batch::new(ctx.exec);
    batch.run(&mkfs_command(&drive.path, compress));
    Ok(batch.finish(format!("{} formatted as Btrfs.", drive.path)))
}
