//! Interactive Arch Linux installation helper.
//!
//! A numbered menu of installation steps. Each step shells out to system
//! tools; the steps share one [`session::Session`] holding the selected drive.

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod lsblk;
pub mod menu;
pub mod operator;
pub mod outcome;
pub mod probe;
pub mod registry;
pub mod session;
pub mod steps;
pub mod ui;
