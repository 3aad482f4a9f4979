use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    /// Print system-changing commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Set the log level (logs go to stderr)
    #[arg(short, long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Wireless interface used by the Wi-Fi option
    #[arg(long, default_value = "wlan0")]
    pub wifi_interface: String,

    /// Go straight to the main menu
    #[arg(long)]
    pub skip_intro: bool,
}

/// Verbosity of the `tracing` output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            dry_run: self.dry_run,
            wifi_interface: self.wifi_interface.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["arch-install-helper"]);
        assert!(!cli.dry_run);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.settings().wifi_interface, "wlan0");
    }

    #[test]
    fn flags_reach_settings() {
        let cli = Cli::parse_from([
            "arch-install-helper",
            "--dry-run",
            "--wifi-interface",
            "wlp2s0",
            "-l",
            "debug",
        ]);
        let settings = cli.settings();
        assert!(settings.dry_run);
        assert_eq!(settings.wifi_interface, "wlp2s0");
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::DEBUG);
    }
}
