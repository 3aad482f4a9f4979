//! Read-only queries of the live system.
//!
//! Every query is answered fresh; nothing here is cached, because the
//! answers change as the installation progresses (most notably after
//! entering the chroot).

use std::{
    fmt, fs,
    os::unix::fs::MetadataExt,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    cmd::CommandExecutor,
    lsblk::{self, Drive},
};

/// Dynamic loader whose `--help` lists the supported x86-64 levels.
pub const DYNAMIC_LOADER: &str = "/lib/ld-linux-x86-64.so.2";

/// x86-64 microarchitecture levels the repository steps care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicroarchLevel {
    V3,
    V4,
}

impl MicroarchLevel {
    /// Name used in the loader's diagnostics, e.g. `x86-64-v3`.
    pub fn loader_name(self) -> &'static str {
        match self {
            MicroarchLevel::V3 => "x86-64-v3",
            MicroarchLevel::V4 => "x86-64-v4",
        }
    }
}

impl fmt::Display for MicroarchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.loader_name())
    }
}

/// Read-only facts about the machine the helper runs on.
pub trait Probe {
    /// `true` when `/` is not the root seen by PID 1, i.e. we run chrooted.
    fn inside_target_root(&self) -> bool;

    fn current_timezone(&self) -> Option<String>;

    fn total_memory_kib(&self) -> Option<u64>;

    fn supports_microarch(&self, level: MicroarchLevel) -> bool;

    fn package_installed(&self, name: &str) -> bool;

    /// Whole-disk block devices, enumerated on every call.
    fn block_devices(&self) -> Vec<Drive>;
}

// ── Host implementation ───────────────────────────────────────────────────────

/// [`Probe`] answering from the running system.
pub struct HostProbe<E> {
    exec: E,
    root: PathBuf,
    init_root: PathBuf,
}

impl<E: CommandExecutor> HostProbe<E> {
    pub fn new(exec: E) -> Self {
        HostProbe {
            exec,
            root: PathBuf::from("/"),
            init_root: PathBuf::from("/proc/1/root/."),
        }
    }

    /// Compares `root` against `init_root` instead of `/` and PID 1's root.
    pub fn with_roots(mut self, root: impl Into<PathBuf>, init_root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self.init_root = init_root.into();
        self
    }
}

impl<E: CommandExecutor> Probe for HostProbe<E> {
    fn inside_target_root(&self) -> bool {
        match (identity(&self.root), identity(&self.init_root)) {
            (Some(ours), Some(init)) => {
                debug!(?ours, ?init, "root identities");
                ours != init
            }
            _ => {
                warn!(
                    root = %self.root.display(),
                    init_root = %self.init_root.display(),
                    "cannot stat roots, assuming not chrooted"
                );
                false
            }
        }
    }

    fn current_timezone(&self) -> Option<String> {
        let out = self
            .exec
            .execute("timedatectl show --property=Timezone --value");
        if !out.success() {
            warn!(status = out.status, "timedatectl failed");
            return None;
        }
        let tz = out.stdout.trim();
        (!tz.is_empty()).then(|| tz.to_string())
    }

    fn total_memory_kib(&self) -> Option<u64> {
        let out = self.exec.execute("grep MemTotal /proc/meminfo");
        let kib = parse_mem_total(&out.stdout);
        if kib.is_none() {
            warn!(status = out.status, "could not read MemTotal");
        }
        kib
    }

    fn supports_microarch(&self, level: MicroarchLevel) -> bool {
        let out = self.exec.execute(&format!("{} --help", DYNAMIC_LOADER));
        level_supported(&out.stdout, level)
    }

    fn package_installed(&self, name: &str) -> bool {
        self.exec.execute(&format!("pacman -Qq {}", name)).success()
    }

    fn block_devices(&self) -> Vec<Drive> {
        let out = self.exec.execute(lsblk::LIST_DRIVES);
        if !out.success() {
            warn!(status = out.status, "lsblk failed");
            return vec![];
        }
        lsblk::parse_drives(&out.stdout)
    }
}

// ── Interpretation ────────────────────────────────────────────────────────────

/// Device and inode of `path`, following symlinks.
fn identity(path: &Path) -> Option<(u64, u64)> {
    fs::metadata(path).ok().map(|m| (m.dev(), m.ino()))
}

/// Reads the kibibyte count from a `MemTotal:   16314920 kB` line.
pub fn parse_mem_total(text: &str) -> Option<u64> {
    text.lines()
        .find(|l| l.starts_with("MemTotal:"))
        .and_then(|l| l.split_whitespace().nth(1))
        .and_then(|v| v.parse().ok())
}

/// `true` if the loader's `--help` output marks `level` as
/// `supported, searched`.
pub fn level_supported(help: &str, level: MicroarchLevel) -> bool {
    help.lines()
        .any(|l| l.contains(level.loader_name()) && l.contains("supported, searched"))
}
