use crate::{
    cmd::Batch,
    outcome::Outcome,
    registry::{ActionResult, Context},
};

/// Links `/etc/localtime` to the live system's current zone and writes the
/// hardware clock.
pub fn run(ctx: &mut Context<'_>) -> ActionResult {
    let Some(tz) = ctx.probe.current_timezone() else {
        return Ok(Outcome::Aborted(
            "Could not determine the current time zone.".to_string(),
        ));
    };

    let mut batch = Batch::new(ctx.exec);
    batch.run(&format!("ln -sf /usr/share/zoneinfo/{} /etc/localtime", tz));
    batch.run("hwclock --systohc");
    Ok(batch.finish(format!("Time zone set to {}.", tz)))
}
