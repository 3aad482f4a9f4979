use crate::{
    cmd::Batch,
    config::LOCALE,
    registry::{ActionResult, Context},
};

/// Enables the UTF-8 US English locale and makes it the system default.
pub fn run(ctx: &mut Context<'_>) -> ActionResult {
    let mut batch = Batch::new(ctx.exec);
    batch.run(&format!("echo \"{} UTF-8\" >> /etc/locale.gen", LOCALE));
    batch.run("locale-gen");
    batch.run(&format!("echo \"LANG={}\" > /etc/locale.conf", LOCALE));
    Ok(batch.finish(format!("Locale set to {}.", LOCALE)))
}
