//! Platform Abstraction Traits for the Terminal Dashboard
//!
//! This module defines the two capabilities the dashboard controller is built
//! on: a read-only view of host facts (CPU, memory, uptime, network) and a
//! runner for external read-only commands.
//!
//! # Architecture
//!
//! ```text
//! +----------------------+
//! | DashboardController  |
//! +----------------------+
//!       |          |
//! +-----v-----+ +--v------------+
//! | HostFacts | | CommandRunner |  <- This module (defines interfaces)
//! +-----------+ +---------------+
//!       |          |
//! +-----v-----+ +--v----------+
//! | SysinfoHost| | ShellRunner |  <- Host-backed implementations
//! +-----------+ +-------------+
//! ```
//!
//! Tests substitute fixed providers and recording runners so the controller
//! can run without a real host or terminal.

use std::net::IpAddr;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for host fact queries.
#[derive(Debug, Clone, Error)]
pub enum PlatformError {
    /// A fact the OS did not report (CPU list, home directory)
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Failure of a single external command invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The shell could not be started at all
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// The command ran and exited unsuccessfully
    #[error(
        "Command failed: {command} (exit code {}){}",
        format_code(.code),
        format_stderr(.stderr)
    )]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn format_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

// ============================================================================
// Memory Types
// ============================================================================

/// Physical memory totals in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    /// Total physical memory in bytes
    pub total_bytes: u64,
    /// Memory available to new allocations in bytes
    pub free_bytes: u64,
}

impl MemorySnapshot {
    /// Used physical memory in bytes, never more than the total.
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    /// Used memory as a percentage of the total (0.0 when total is unknown).
    pub fn usage_percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        (self.used_bytes() as f64 / self.total_bytes as f64) * 100.0
    }
}

/// 1, 5 and 15 minute load averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

// ============================================================================
// Host Snapshot
// ============================================================================

/// Point-in-time view of the host, as shown by the info routines.
#[derive(Debug, Clone, Serialize)]
pub struct HostSnapshot {
    /// Operating system family (e.g. "linux", "macos", "windows")
    pub platform: String,
    /// CPU architecture (e.g. "x86_64")
    pub arch: String,
    /// Machine hostname, if the OS reports one
    pub hostname: Option<String>,
    /// Long OS version string, if available
    pub os_version: Option<String>,
    /// Brand string of the first CPU
    pub cpu_model: String,
    /// Number of logical CPU cores
    pub cpu_cores: usize,
    /// Physical memory totals
    pub memory: MemorySnapshot,
    /// System uptime in seconds
    pub uptime_secs: u64,
    /// Load averages; `None` where the OS has no such concept
    pub load_average: Option<LoadAverage>,
    /// Home directory of the current user
    pub home_dir: PathBuf,
    /// Name of the current user
    pub username: String,
    /// When this snapshot was taken
    pub taken_at: DateTime<Local>,
}

// ============================================================================
// Network Types
// ============================================================================

/// IP address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressFamily {
    IPv4,
    IPv6,
}

/// A single address bound to an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceAddress {
    pub address: IpAddr,
    pub family: AddressFamily,
    /// Loopback addresses are internal
    pub internal: bool,
}

impl InterfaceAddress {
    pub fn new(address: IpAddr) -> Self {
        let family = match address {
            IpAddr::V4(_) => AddressFamily::IPv4,
            IpAddr::V6(_) => AddressFamily::IPv6,
        };
        Self {
            address,
            family,
            internal: address.is_loopback(),
        }
    }
}

/// A network interface and its addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInterface {
    pub name: String,
    pub addresses: Vec<InterfaceAddress>,
}

// ============================================================================
// Traits
// ============================================================================

/// Read-only access to OS-level facts.
pub trait HostFactsProvider {
    /// Take a fresh snapshot of CPU, memory, uptime and user facts.
    fn snapshot(&mut self) -> PlatformResult<HostSnapshot>;

    /// List network interfaces with their addresses.
    fn network_interfaces(&mut self) -> PlatformResult<Vec<NetworkInterface>>;
}

/// Runs an external command line and captures its standard output.
pub trait CommandRunner {
    /// Run `command` to completion and return its stdout verbatim.
    fn run(&self, command: &str) -> Result<String, CommandError>;
}
