use crate::{
    cmd::Batch,
    outcome::Outcome,
    registry::{ActionResult, Context},
};

/// zRAM device size: half of physical memory, rounded down.
pub fn zram_size_kib(total_memory_kib: u64) -> u64 {
    total_memory_kib / 2
}

/// udev rule sizing `zram0` to `size_kib` and handing it to systemd.
pub fn udev_rule(size_kib: u64) -> String {
    format!(
        "KERNEL==\"zram0\", ATTR{{disksize}}=\"{}K\",TAG+=\"systemd\"",
        size_kib
    )
}

/// Configures a single zRAM device at boot: module load, module options and
/// a udev rule with the computed size.
pub fn run(ctx: &mut Context<'_>) -> ActionResult {
    let Some(total) = ctx.probe.total_memory_kib() else {
        return Ok(Outcome::Aborted(
            "Could not read total memory from /proc/meminfo.".to_string(),
        ));
    };
    let size = zram_size_kib(total);

    let mut batch = Batch::new(ctx.exec);
    batch.run("echo \"zram0\" > /etc/modules-load.d/zram.conf");
    batch.run("echo \"options zram num_devices=1\" > /etc/modprobe.d/zram.conf");
    batch.run(&format!(
        "echo '{}' > /etc/udev/rules.d/99-zram.rules",
        udev_rule(size)
    ));
    Ok(batch.finish(format!("zRAM configured with {} KiB.", size)))
}
