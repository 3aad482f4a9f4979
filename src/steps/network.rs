use tracing::info;

use crate::{
    cmd::{quote, Batch},
    config::CONNECTIVITY_HOST,
    outcome::Outcome,
    registry::{ActionResult, Context},
    ui,
};

const OPTIONS: [&str; 4] = ["Wired", "Wi-Fi", "Check current connection", "Return to main menu"];

/// Builds the `iwctl` line joining `ssid` on `interface`.
pub fn wifi_connect_command(interface: &str, ssid: &str, passphrase: &str) -> String {
    format!(
        "iwctl station {} connect {} --passphrase {}",
        interface,
        quote(ssid),
        quote(passphrase)
    )
}

/// Network sub-menu. Loops until the operator picks "Return".
///
/// Each action reports its own result right away; the outcome returned to
/// the main menu only records that the sub-menu was left.
pub fn run(ctx: &mut Context<'_>) -> ActionResult {
    loop {
        ui::clear_screen();
        ui::print_header("Network Configuration");
        println!("  Choose a network connection method:");
        ui::print_options(&OPTIONS);

        let choice = ctx.operator.read_line("Enter your choice")?;
        match choice.trim() {
            "1" => {
                ui::print_info("Please ensure your ethernet cable is connected.");
                ctx.operator.acknowledge("Press Enter to continue")?;
            }
            "2" => {
                let ssid = ctx.operator.read_line("Enter the SSID of the Wi-Fi network")?;
                let password = ctx
                    .operator
                    .read_secret("Enter the password for the Wi-Fi network")?;
                info!(ssid = %ssid, interface = %ctx.settings.wifi_interface, "connecting");

                let mut batch = Batch::new(ctx.exec);
                batch.run(&wifi_connect_command(
                    &ctx.settings.wifi_interface,
                    ssid.trim(),
                    &password,
                ));
                ui::print_outcome(&batch.finish(format!("Connected to {}.", ssid.trim())));
                ctx.operator.acknowledge("Press Enter to continue")?;
            }
            "3" => {
                let out = ctx.exec.execute(&format!("ping -c 1 {}", CONNECTIVITY_HOST));
                if out.success() {
                    ui::print_success("You are connected to the internet.");
                } else {
                    ui::print_warning(
                        "You are not connected to the internet. Please check your connection.",
                    );
                }
                ctx.operator.acknowledge("Press Enter to continue")?;
            }
            "4" => {
                return Ok(Outcome::Completed(
                    "Left network configuration.".to_string(),
                ));
            }
            _ => {
                ui::print_error("Invalid choice!");
                ctx.operator.acknowledge("Press Enter to continue")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssid_with_spaces_stays_one_argument() {
        assert_eq!(
            wifi_connect_command("wlan0", "Home Net", "p@ss word"),
            "iwctl station wlan0 connect 'Home Net' --passphrase 'p@ss word'"
        );
    }
}
