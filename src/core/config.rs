//! Configuration for the terminal dashboard

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::DashboardError;

/// External command lines run by the file, process and network routines.
///
/// Each entry is handed to the shell as-is, so pipes and redirections work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandTable {
    pub list_directory: String,
    pub disk_usage: String,
    pub find_large_files: String,
    pub list_processes: String,
    pub top_cpu: String,
    pub top_memory: String,
    pub active_connections: String,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self {
            list_directory: "ls -la".into(),
            disk_usage: "df -h".into(),
            find_large_files: "find . -type f -size +100M -ls 2>/dev/null | head -10".into(),
            list_processes: "ps aux | head -20".into(),
            top_cpu: "ps aux --sort=-%cpu | head -15".into(),
            top_memory: "ps aux --sort=-%mem | head -15".into(),
            active_connections: "netstat -an | head -20".into(),
        }
    }
}

/// Main dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Width of the banner rule drawn above and below the title
    pub header_width: usize,

    /// Also list IPv6 interface addresses
    pub show_ipv6: bool,

    /// Also list loopback addresses
    pub show_internal: bool,

    /// Command lines for the routines that shell out
    pub commands: CommandTable,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            header_width: 60,
            show_ipv6: false,
            show_internal: false,
            commands: CommandTable::default(),
        }
    }
}

impl DashboardConfig {
    /// Load config from TOML file
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let content = std::fs::read_to_string(path).map_err(|e| DashboardError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| DashboardError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save config to TOML file
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `<config dir>/termdash/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("termdash").join("config.toml"))
    }

    /// Pick the configuration for this run.
    ///
    /// An explicit path must load. Without one, the default path is used when
    /// the file exists, otherwise built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, DashboardError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}
