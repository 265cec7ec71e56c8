//! Terminal Dashboard
//!
//! An interactive terminal menu for inspecting the local host: system
//! information, files, processes, network interfaces and a resource monitor.
//!
//! ## Features
//!
//! - **System Information**: platform, architecture, cores, memory, uptime
//! - **File Operations**: directory listing, disk usage, large-file search
//! - **Process Management**: process listing sorted by CPU or memory
//! - **Network Information**: interface addresses and active connections
//! - **System Monitor**: memory usage, load average and uptime
//!
//! ## Safety
//!
//! - Only read-only commands are run, taken from [`DashboardConfig`]
//! - Command failures are printed inline and never end the session
//! - Command output is passed through verbatim, never parsed

pub mod core;
pub mod monitor;
pub mod platform;
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use crate::core::config::{CommandTable, DashboardConfig};
pub use crate::core::controller::DashboardController;
pub use crate::core::error::DashboardError;
pub use crate::core::menu::{FileChoice, MainChoice, MenuOption, ProcessChoice};
pub use crate::platform::{
    CommandError, CommandRunner, HostFactsProvider, HostSnapshot, MemorySnapshot,
    NetworkInterface, PlatformError, PlatformResult, ShellRunner, SysinfoHost,
};
pub use crate::tui::{DialoguerInteraction, Interaction};
