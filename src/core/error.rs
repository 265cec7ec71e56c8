//! Errors that can reach the dashboard loop

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The prompt backend failed; no further input can be read
    #[error("Interaction failed: {0}")]
    Interaction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration at {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// A prompt returned an index outside its option list
    #[error("Invalid selection {index} (expected fewer than {len})")]
    InvalidSelection { index: usize, len: usize },
}

impl DashboardError {
    /// Whether the loop can keep going after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DashboardError::Interaction(_))
    }
}

impl From<dialoguer::Error> for DashboardError {
    fn from(err: dialoguer::Error) -> Self {
        DashboardError::Interaction(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        assert!(!DashboardError::Interaction("terminal closed".into()).is_recoverable());
        assert!(DashboardError::InvalidSelection { index: 9, len: 6 }.is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        assert!(DashboardError::Io(io).is_recoverable());
    }

    #[test]
    fn test_config_error_names_path() {
        let err = DashboardError::Config {
            path: PathBuf::from("/etc/termdash.toml"),
            message: "missing field".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration at /etc/termdash.toml: missing field"
        );
    }
}
