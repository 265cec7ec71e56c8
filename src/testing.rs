//! Test doubles for driving the dashboard without a host or terminal.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::core::error::DashboardError;
use crate::platform::{
    CommandError, CommandRunner, HostFactsProvider, HostSnapshot, InterfaceAddress, LoadAverage,
    MemorySnapshot, NetworkInterface, PlatformError, PlatformResult,
};
use crate::tui::Interaction;

const GIB: u64 = 1024 * 1024 * 1024;

pub fn sample_snapshot() -> HostSnapshot {
    HostSnapshot {
        platform: "linux".into(),
        arch: "x86_64".into(),
        hostname: Some("devbox".into()),
        os_version: None,
        cpu_model: "Example CPU @ 3.00GHz".into(),
        cpu_cores: 8,
        memory: MemorySnapshot {
            total_bytes: 2 * GIB,
            free_bytes: GIB,
        },
        uptime_secs: 90_061,
        load_average: Some(LoadAverage {
            one: 0.25,
            five: 0.5,
            fifteen: 1.0,
        }),
        home_dir: PathBuf::from("/home/dev"),
        username: "dev".into(),
        taken_at: chrono::Local::now(),
    }
}

/// Host that always reports [`sample_snapshot`], or fails on demand.
#[derive(Default)]
pub struct FixedHost {
    pub fail: bool,
}

impl HostFactsProvider for FixedHost {
    fn snapshot(&mut self) -> PlatformResult<HostSnapshot> {
        if self.fail {
            return Err(PlatformError::NotFound("/proc/meminfo".into()));
        }
        Ok(sample_snapshot())
    }

    fn network_interfaces(&mut self) -> PlatformResult<Vec<NetworkInterface>> {
        if self.fail {
            return Err(PlatformError::NotFound("interface table".into()));
        }
        Ok(vec![NetworkInterface {
            name: "eth0".into(),
            addresses: vec![InterfaceAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7)))],
        }])
    }
}

/// Runner that records every command line and answers from a script.
///
/// Commands in `failing` exit with status 127; `empty` ones print nothing;
/// everything else prints `output of <command>`.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<String>>,
    pub failing: HashSet<String>,
    pub empty: HashSet<String>,
}

impl RecordingRunner {
    pub fn failing(commands: &[&str]) -> Self {
        Self {
            failing: commands.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> Result<String, CommandError> {
        self.calls.borrow_mut().push(command.to_string());
        if self.failing.contains(command) {
            return Err(CommandError::Failed {
                command: command.to_string(),
                code: Some(127),
                stderr: format!("sh: {}: not found", command),
            });
        }
        if self.empty.contains(command) {
            return Ok(String::new());
        }
        Ok(format!("output of {}\n", command))
    }
}

/// Interaction that replays scripted selections.
///
/// Once the script runs out, `select_one` fails like a closed terminal,
/// which ends the dashboard loop.
#[derive(Default)]
pub struct ScriptedInteraction {
    pub selections: VecDeque<usize>,
    pub prompts: Vec<String>,
    pub acknowledgments: usize,
    pub clears: usize,
}

impl ScriptedInteraction {
    pub fn new(selections: &[usize]) -> Self {
        Self {
            selections: selections.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn prompt_count(&self, prompt: &str) -> usize {
        self.prompts.iter().filter(|p| p.as_str() == prompt).count()
    }
}

impl Interaction for ScriptedInteraction {
    fn select_one(&mut self, prompt: &str, _options: &[String]) -> Result<usize, DashboardError> {
        self.prompts.push(prompt.to_string());
        self.selections
            .pop_front()
            .ok_or_else(|| DashboardError::Interaction("script exhausted".into()))
    }

    fn wait_for_acknowledgment(&mut self) -> Result<(), DashboardError> {
        self.acknowledgments += 1;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DashboardError> {
        self.clears += 1;
        Ok(())
    }
}
