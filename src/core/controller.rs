//! Dashboard controller: the interactive menu loop
//!
//! ```text
//! {Menu} -> {Info routine} -> {Acknowledgment} -> {Menu}
//!    \
//!     -> {Exit}
//! ```
//!
//! Routines catch their own gathering failures and print them inline. Any
//! other error that escapes a routine is reported by the loop, which then
//! resumes. Only a failing prompt backend ends `run` early.

use std::io::Write;

use colored::Colorize;
use tracing::{debug, info, warn};

use super::config::DashboardConfig;
use super::error::DashboardError;
use super::menu::{FileChoice, MainChoice, MenuOption, ProcessChoice};
use crate::monitor::render::{
    render_header, render_interfaces, render_monitor, render_system_info,
};
use crate::platform::{CommandRunner, HostFactsProvider};
use crate::tui::Interaction;

pub struct DashboardController<H, R, I, W>
where
    H: HostFactsProvider,
    R: CommandRunner,
    I: Interaction,
    W: Write,
{
    host: H,
    runner: R,
    ui: I,
    out: W,
    config: DashboardConfig,
    running: bool,
}

impl<H, R, I, W> DashboardController<H, R, I, W>
where
    H: HostFactsProvider,
    R: CommandRunner,
    I: Interaction,
    W: Write,
{
    pub fn new(host: H, runner: R, ui: I, out: W, config: DashboardConfig) -> Self {
        Self {
            host,
            runner,
            ui,
            out,
            config,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn interaction(&self) -> &I {
        &self.ui
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the menu loop until Exit is chosen.
    pub fn run(&mut self) -> Result<(), DashboardError> {
        self.running = true;
        self.refresh_screen()?;

        writeln!(self.out, "{}", "Welcome to Terminal Dashboard!".green())?;
        writeln!(
            self.out,
            "{}\n",
            "Navigate through various system information and tools.".bright_black()
        )?;
        info!("Dashboard started");

        while self.running {
            if let Err(err) = self.iteration() {
                if !err.is_recoverable() {
                    return Err(err);
                }
                warn!(error = %err, "Unhandled error in dashboard loop");
                writeln!(self.out, "{} {}", "\nAn error occurred:".red(), err)?;
                self.press_enter_to_continue()?;
                self.refresh_screen()?;
            }
        }

        info!("Dashboard stopped");
        Ok(())
    }

    fn iteration(&mut self) -> Result<(), DashboardError> {
        let choice = self.show_main_menu()?;
        self.refresh_screen()?;
        self.dispatch(choice)?;
        if self.running {
            self.refresh_screen()?;
        }
        Ok(())
    }

    fn refresh_screen(&mut self) -> Result<(), DashboardError> {
        self.ui.clear_screen()?;
        writeln!(self.out, "{}", render_header(self.config.header_width))?;
        Ok(())
    }

    fn select<M: MenuOption>(&mut self) -> Result<M, DashboardError> {
        let labels = M::labels();
        let index = self.ui.select_one(M::PROMPT, &labels)?;
        M::from_index(index).ok_or(DashboardError::InvalidSelection {
            index,
            len: labels.len(),
        })
    }

    /// Present the six top-level actions and return the chosen one.
    pub fn show_main_menu(&mut self) -> Result<MainChoice, DashboardError> {
        self.select::<MainChoice>()
    }

    /// Route `choice` to its routine. Exit stops the loop.
    pub fn dispatch(&mut self, choice: MainChoice) -> Result<(), DashboardError> {
        debug!(choice = choice.id(), "Dispatching menu choice");
        match choice {
            MainChoice::System => self.show_system_info(),
            MainChoice::Files => self.show_file_operations(),
            MainChoice::Processes => self.show_processes(),
            MainChoice::Network => self.show_network_info(),
            MainChoice::Monitor => self.show_system_monitor(),
            MainChoice::Exit => {
                self.running = false;
                writeln!(self.out, "{}", "\n👋 Thank you for using Terminal Dashboard!".green())?;
                writeln!(self.out, "{}\n", "Goodbye!".bright_black())?;
                Ok(())
            }
        }
    }

    fn section(&mut self, title: &str) -> Result<(), DashboardError> {
        writeln!(self.out, "{}", format!("\n{}\n", title).blue().bold())?;
        Ok(())
    }

    fn report_error(
        &mut self,
        label: &str,
        err: &dyn std::fmt::Display,
    ) -> Result<(), DashboardError> {
        warn!(error = %err, "{}", label);
        writeln!(self.out, "{} {}", label.red(), err)?;
        Ok(())
    }

    /// Run one configured command and print its output verbatim.
    ///
    /// `empty_notice` replaces blank output when given.
    fn command_section(
        &mut self,
        heading: &str,
        command: &str,
        error_label: &str,
        empty_notice: Option<&str>,
    ) -> Result<(), DashboardError> {
        writeln!(self.out, "{}", format!("\n{}\n", heading).green())?;
        match self.runner.run(command) {
            Ok(stdout) => match empty_notice {
                Some(notice) if stdout.trim().is_empty() => {
                    writeln!(self.out, "{}", notice.yellow())?;
                }
                _ => writeln!(self.out, "{}", stdout)?,
            },
            Err(err) => self.report_error(error_label, &err)?,
        }
        Ok(())
    }

    pub fn show_system_info(&mut self) -> Result<(), DashboardError> {
        self.section("📊 System Information")?;

        match self.host.snapshot() {
            Ok(snap) => writeln!(self.out, "{}", render_system_info(&snap))?,
            Err(err) => self.report_error("Error fetching system information:", &err)?,
        }

        self.press_enter_to_continue()
    }

    pub fn show_file_operations(&mut self) -> Result<(), DashboardError> {
        self.section("📁 File Operations")?;

        let commands = self.config.commands.clone();
        match self.select::<FileChoice>()? {
            FileChoice::List => self.command_section(
                "📂 Current Directory Contents:",
                &commands.list_directory,
                "Error listing directory:",
                None,
            )?,
            FileChoice::Disk => self.command_section(
                "💾 Disk Usage:",
                &commands.disk_usage,
                "Error getting disk usage:",
                None,
            )?,
            FileChoice::Large => self.command_section(
                "🔍 Finding large files (>100MB)...",
                &commands.find_large_files,
                "Error finding large files:",
                Some("No large files found in current directory."),
            )?,
            FileChoice::Back => return Ok(()),
        }

        self.press_enter_to_continue()
    }

    pub fn show_processes(&mut self) -> Result<(), DashboardError> {
        self.section("⚙️  Process Management")?;

        let commands = self.config.commands.clone();
        match self.select::<ProcessChoice>()? {
            ProcessChoice::List => self.command_section(
                "🔄 Running Processes:",
                &commands.list_processes,
                "Error listing processes:",
                None,
            )?,
            ProcessChoice::TopCpu => self.command_section(
                "🔥 Top Processes by CPU:",
                &commands.top_cpu,
                "Error showing top processes:",
                None,
            )?,
            ProcessChoice::TopMemory => self.command_section(
                "🧠 Memory Usage:",
                &commands.top_memory,
                "Error showing memory usage:",
                None,
            )?,
            ProcessChoice::Back => return Ok(()),
        }

        self.press_enter_to_continue()
    }

    pub fn show_network_info(&mut self) -> Result<(), DashboardError> {
        self.section("🌐 Network Information")?;

        writeln!(self.out, "{}", "Network Interfaces:".cyan())?;
        match self.host.network_interfaces() {
            Ok(interfaces) => write!(
                self.out,
                "{}",
                render_interfaces(&interfaces, self.config.show_ipv6, self.config.show_internal)
            )?,
            Err(err) => self.report_error("Error getting network information:", &err)?,
        }

        writeln!(self.out, "{}", "\nActive Network Connections:".cyan())?;
        let command = self.config.commands.active_connections.clone();
        match self.runner.run(&command) {
            Ok(stdout) => writeln!(self.out, "{}", stdout)?,
            Err(err) => self.report_error("Error getting network information:", &err)?,
        }

        self.press_enter_to_continue()
    }

    pub fn show_system_monitor(&mut self) -> Result<(), DashboardError> {
        self.section("📈 System Monitor")?;

        match self.host.snapshot() {
            Ok(snap) => {
                writeln!(self.out, "{}", render_monitor(&snap))?;
                let sampled = format!("\nSampled at {}", snap.taken_at.format("%Y-%m-%d %H:%M:%S"));
                writeln!(self.out, "{}", sampled.bright_black())?;
            }
            Err(err) => self.report_error("Error in system monitor:", &err)?,
        }

        self.press_enter_to_continue()
    }

    /// Acknowledgment gate shown after every routine.
    pub fn press_enter_to_continue(&mut self) -> Result<(), DashboardError> {
        writeln!(self.out)?;
        self.out.flush()?;
        self.ui.wait_for_acknowledgment()
    }
}
