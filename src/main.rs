//! Terminal Dashboard - interactive host inspection menu

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use termdash::monitor::render::{render_monitor, render_system_info};
use termdash::{
    DashboardConfig, DashboardController, DialoguerInteraction, HostFactsProvider, ShellRunner,
    SysinfoHost,
};

#[derive(Parser)]
#[command(name = "termdash")]
#[command(version, long_about = None)]
#[command(about = "Interactive terminal dashboard for system information")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load configuration from this TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive dashboard (default)
    Run,

    /// Show the effective configuration
    Config,

    /// Print system information once and exit
    Snapshot {
        /// Emit the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so they never interleave with menu output
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> ExitCode {
    match run_cli(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_message(&*err));
            ExitCode::FAILURE
        }
    }
}

/// One-line, human-readable form of a fatal error.
fn error_message(err: &dyn std::error::Error) -> String {
    format!("Error: {}", err)
}

fn run_cli(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(cli.verbose)?;

    let config = DashboardConfig::resolve(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            info!("Starting interactive dashboard");
            let mut dashboard = DashboardController::new(
                SysinfoHost::new(),
                ShellRunner::new(),
                DialoguerInteraction::new(),
                std::io::stdout(),
                config,
            );
            dashboard.run()?;
        }

        Commands::Config => {
            if let Some(path) = DashboardConfig::default_path() {
                println!("# Default location: {}", path.display());
            }
            println!("{}", toml::to_string_pretty(&config)?);
        }

        Commands::Snapshot { json } => {
            let mut host = SysinfoHost::new();
            let snapshot = host.snapshot()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("System Information:");
                println!("{}", render_system_info(&snapshot));
                println!("\nSystem Monitor:");
                println!("{}", render_monitor(&snapshot));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termdash::DashboardError;

    #[test]
    fn test_error_message_uses_display_text() {
        let err = DashboardError::Interaction("IO error: not a terminal".into());
        let msg = error_message(&err);

        assert_eq!(msg, "Error: Interaction failed: IO error: not a terminal");
        assert!(!msg.contains("Interaction(\""));
    }

    #[test]
    fn test_cli_defaults_to_interactive_run() {
        let cli = Cli::try_parse_from(["termdash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);

        let cli = Cli::try_parse_from(["termdash", "snapshot", "--json", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Snapshot { json: true })));
        assert!(cli.verbose);
    }
}
