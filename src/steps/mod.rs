//! The installation steps offered by the main menu.

pub mod chroot;
pub mod drive;
pub mod format;
pub mod fstab;
pub mod locale;
pub mod mount;
pub mod network;
pub mod packages;
pub mod repos;
pub mod services;
pub mod timezone;
pub mod zram;

use crate::registry::{Action, Precondition, Registry, Step};

/// Selector that ends the session.
pub const QUIT: u8 = 19;

fn step(selector: u8, label: &'static str, precondition: Precondition, action: Action) -> Step {
    Step {
        selector,
        label,
        precondition,
        action,
    }
}

/// The full menu, in display order.
pub fn catalog() -> Registry {
    use Precondition::{Always, DriveSelected, InsideTargetRoot};

    Registry::new(vec![
        step(1, "Choose drive", Always, Action::Run(drive::choose)),
        step(2, "Format partitions", DriveSelected, Action::OnDrive(format::run)),
        step(
            3,
            "Create Btrfs subvolumes",
            DriveSelected,
            Action::OnDrive(mount::create_subvolumes),
        ),
        step(4, "Mount file system", DriveSelected, Action::OnDrive(mount::mount_subvolumes)),
        step(5, "Install essential packages", Always, Action::Run(packages::install_essential)),
        step(6, "Configure fstab", Always, Action::Run(fstab::generate)),
        step(7, "Chroot into system", Always, Action::Run(chroot::run)),
        step(8, "Set time zone", Always, Action::Run(timezone::run)),
        step(9, "Localization", Always, Action::Run(locale::run)),
        step(10, "Network configuration", Always, Action::Run(network::run)),
        step(11, "Install KDE packages", Always, Action::Run(packages::install_kde)),
        step(12, "Install additional packages", Always, Action::Run(packages::install_additional)),
        step(13, "Install custom packages", Always, Action::Run(packages::install_custom)),
        step(14, "Setup zRAM", Always, Action::Run(zram::run)),
        step(15, "Enable necessary services", Always, Action::Run(services::enable)),
        step(16, "Configure pacman repositories", Always, Action::Run(repos::configure_official)),
        step(17, "Setup Chaotic-AUR", InsideTargetRoot, Action::Run(repos::setup_chaotic_aur)),
        step(18, "Setup CachyOS Repository", InsideTargetRoot, Action::Run(repos::setup_cachyos)),
        step(QUIT, "Quit", Always, Action::Quit),
    ])
}
