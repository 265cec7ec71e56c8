//! External command execution through the host shell.

use std::process::Command;
use std::time::Instant;

use tracing::{debug, warn};

use super::traits::{CommandError, CommandRunner};

/// Runs command lines through `sh -c` (`cmd /C` on Windows).
///
/// Going through the shell keeps pipes and redirections in the configured
/// command strings working. There is no timeout: a command that never exits
/// blocks the caller.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_command(command: &str) -> Command {
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        }

        #[cfg(not(target_os = "windows"))]
        {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String, CommandError> {
        let start = Instant::now();

        let output = Self::shell_command(command)
            .output()
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        debug!(
            command,
            status = ?output.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Command finished"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(command, code = ?output.status.code(), "Command exited unsuccessfully");
            return Err(CommandError::Failed {
                command: command.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
