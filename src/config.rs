//! Run-time settings and the fixed installation policy.

/// Where the target system is assembled.
pub const TARGET_ROOT: &str = "/mnt";

/// Mount option shared by every subvolume mount.
pub const MOUNT_COMPRESSION: &str = "compress=zstd";

/// Repository configuration edited by the repository steps.
pub const PACMAN_CONF: &str = "/etc/pacman.conf";

/// Package that, when installed, means the KDE display manager should be enabled.
pub const DESKTOP_META_PACKAGE: &str = "plasma-meta";

pub const ESSENTIAL_PACKAGES: &[&str] = &["base", "linux", "linux-firmware"];

pub const KDE_PACKAGES: &[&str] = &[
    "plasma-meta",
    "plasma-wayland-session",
    "kde-utilities",
    "kde-system",
    "dolphin-plugins",
    "sddm",
    "sddm-kcm",
    "kde-graphics",
    "ksysguard",
];

pub const ADDITIONAL_PACKAGES: &[&str] = &[
    "btrfs-progs",
    "grub",
    "grub-btrfs",
    "rsync",
    "efibootmgr",
    "snapper",
    "reflector",
    "snap-pac",
    "zram-generator",
    "sudo",
    "micro",
    "git",
    "neofetch",
    "zsh",
    "man-db",
    "man-pages",
    "texinfo",
    "samba",
    "chromium",
    "nano",
];

pub const LOCALE: &str = "en_US.UTF-8";

/// Host pinged by the connectivity check.
pub const CONNECTIVITY_HOST: &str = "google.com";

/// Settings collected from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Print mutating commands instead of running them.
    pub dry_run: bool,
    /// Wireless interface handed to `iwctl`.
    pub wifi_interface: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            dry_run: false,
            wifi_interface: "wlan0".to_string(),
        }
    }
}

// ── Btrfs layout ──────────────────────────────────────────────────────────────

/// One subvolume of the fixed two-subvolume layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subvolume {
    pub name: &'static str,
    pub mount_point: &'static str,
}

/// `@` holds the root filesystem, `@home` the home directories.
pub const SUBVOLUMES: [Subvolume; 2] = [
    Subvolume {
        name: "@",
        mount_point: "/mnt",
    },
    Subvolume {
        name: "@home",
        mount_point: "/mnt/home",
    },
];

// ── Official repositories ─────────────────────────────────────────────────────

/// Official repositories shipped commented-out in `pacman.conf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacmanRepo {
    Multilib,
    MultilibTesting,
    Testing,
}

impl PacmanRepo {
    pub const ALL: [PacmanRepo; 3] = [
        PacmanRepo::Multilib,
        PacmanRepo::MultilibTesting,
        PacmanRepo::Testing,
    ];

    /// Section name as it appears between brackets in `pacman.conf`.
    pub fn section(self) -> &'static str {
        match self {
            PacmanRepo::Multilib => "multilib",
            PacmanRepo::MultilibTesting => "multilib-testing",
            PacmanRepo::Testing => "testing",
        }
    }

    /// Maps the operator's numeric choice (`1`-`3`) to a repository.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(PacmanRepo::Multilib),
            "2" => Some(PacmanRepo::MultilibTesting),
            "3" => Some(PacmanRepo::Testing),
            _ => None,
        }
    }
}

// ── Third-party repositories ──────────────────────────────────────────────────

/// A `[name]` section with a single `Include =` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoStanza {
    pub name: &'static str,
    pub include: &'static str,
}

/// Signing key, bootstrap packages and base stanza of a third-party repository.
#[derive(Debug, Clone, Copy)]
pub struct ThirdPartyRepo {
    pub display_name: &'static str,
    pub key_fingerprint: &'static str,
    pub keyserver: &'static str,
    pub bootstrap_packages: &'static [&'static str],
    pub base_stanza: RepoStanza,
}

pub const CHAOTIC_AUR: ThirdPartyRepo = ThirdPartyRepo {
    display_name: "Chaotic-AUR",
    key_fingerprint: "3056513887B78AEB",
    keyserver: "keyserver.ubuntu.com",
    bootstrap_packages: &[
        "https://cdn-mirror.chaotic.cx/chaotic-aur/chaotic-keyring.pkg.tar.zst",
        "https://cdn-mirror.chaotic.cx/chaotic-aur/chaotic-mirrorlist.pkg.tar.zst",
    ],
    base_stanza: RepoStanza {
        name: "chaotic-aur",
        include: "/etc/pacman.d/chaotic-mirrorlist",
    },
};

pub const CACHYOS: ThirdPartyRepo = ThirdPartyRepo {
    display_name: "CachyOS",
    key_fingerprint: "F3B607488DB35A47",
    keyserver: "keyserver.ubuntu.com",
    bootstrap_packages: &[
        "https://mirror.cachyos.org/repo/x86_64/cachyos/cachyos-keyring-3-1-any.pkg.tar.zst",
        "https://mirror.cachyos.org/repo/x86_64/cachyos/cachyos-mirrorlist-17-1-any.pkg.tar.zst",
        "https://mirror.cachyos.org/repo/x86_64/cachyos/cachyos-v3-mirrorlist-17-1-any.pkg.tar.zst",
        "https://mirror.cachyos.org/repo/x86_64/cachyos/cachyos-v4-mirrorlist-5-1-any.pkg.tar.zst",
        "https://mirror.cachyos.org/repo/x86_64/cachyos/pacman-6.0.2-13-x86_64.pkg.tar.zst",
    ],
    base_stanza: RepoStanza {
        name: "cachyos",
        include: "/etc/pacman.d/cachyos-mirrorlist",
    },
};

/// Unlocked when the CPU supports x86-64-v4.
pub const CACHYOS_V4_STANZAS: &[RepoStanza] = &[RepoStanza {
    name: "cachyos-v4",
    include: "/etc/pacman.d/cachyos-v4-mirrorlist",
}];

/// Unlocked when the CPU supports x86-64-v3.
pub const CACHYOS_V3_STANZAS: &[RepoStanza] = &[
    RepoStanza {
        name: "cachyos-v3",
        include: "/etc/pacman.d/cachyos-v3-mirrorlist",
    },
    RepoStanza {
        name: "cachyos-core-v3",
        include: "/etc/pacman.d/cachyos-v3-mirrorlist",
    },
    RepoStanza {
        name: "cachyos-extra-v3",
        include: "/etc/pacman.d/cachyos-v3-mirrorlist",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_choices_map_to_sections() {
        let sections: Vec<_> = ["1", "2", "3"]
            .iter()
            .filter_map(|c| PacmanRepo::from_choice(c))
            .map(PacmanRepo::section)
            .collect();
        assert_eq!(sections, ["multilib", "multilib-testing", "testing"]);
        assert_eq!(PacmanRepo::from_choice("4"), None);
    }

    #[test]
    fn layout_is_root_then_home() {
        assert_eq!(SUBVOLUMES[0].name, "@");
        assert_eq!(SUBVOLUMES[1].mount_point, "/mnt/home");
    }
}
