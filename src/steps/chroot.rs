use console::style;

use crate::{
    cmd::Batch,
    config::TARGET_ROOT,
    registry::{ActionResult, Context},
    ui,
};

/// Opens a shell inside the new system via `arch-chroot`.
pub fn run(ctx: &mut Context<'_>) -> ActionResult {
    println!();
    println!(
        "  {}",
        style("Tip: type 'exit' or press Ctrl-D to leave the chroot.")
            .dim()
            .italic()
    );
    ui::print_info("Entering chroot…");
    println!();

    // arch-chroot is fully interactive; hand over the terminal.
    let mut batch = Batch::new(ctx.exec);
    batch.run_interactive(&format!("arch-chroot {}", TARGET_ROOT));
    Ok(batch.finish("Exited chroot."))
}
