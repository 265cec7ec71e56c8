//! Platform Abstraction Layer for the Terminal Dashboard
//!
//! This module provides the capabilities the dashboard reads the host
//! through: OS facts and external command execution.
//!
//! # Architecture
//!
//! ```text
//! src/platform/
//! +-- mod.rs           <- This file (module definitions)
//! +-- traits.rs        <- Platform-agnostic trait definitions and snapshot types
//! +-- host.rs          <- sysinfo-backed HostFactsProvider
//! +-- shell.rs         <- Shell-backed CommandRunner
//! ```
//!
//! # Platform Support
//!
//! | Feature | Windows | Linux | macOS |
//! |---------|---------|-------|-------|
//! | CPU / Memory / Uptime | Full | Full | Full |
//! | Load Average | - | Full | Full |
//! | Interface Addresses | Full | Full | Full |
//! | Shell | `cmd /C` | `sh -c` | `sh -c` |

// Core trait definitions - always available
pub mod traits;

pub mod host;
pub mod shell;

// Re-export all trait types for convenience
pub use traits::{
    // Error types
    CommandError,
    PlatformError,
    PlatformResult,
    // Snapshot types
    AddressFamily,
    HostSnapshot,
    InterfaceAddress,
    LoadAverage,
    MemorySnapshot,
    NetworkInterface,
    // Traits
    CommandRunner,
    HostFactsProvider,
};

pub use host::SysinfoHost;
pub use shell::ShellRunner;

/// Check if the host is Unix-like (load averages are available).
pub fn is_unix() -> bool {
    cfg!(unix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unix() {
        #[cfg(unix)]
        assert!(is_unix());
        #[cfg(not(unix))]
        assert!(!is_unix());
    }
}
