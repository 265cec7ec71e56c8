//! Host facts gathered with the `sysinfo` crate.

use sysinfo::{
    CpuRefreshKind, MemoryRefreshKind, Networks, ProcessRefreshKind, ProcessesToUpdate,
    RefreshKind, System, UpdateKind, Users,
};
use tracing::debug;

use super::traits::{
    HostFactsProvider, HostSnapshot, InterfaceAddress, LoadAverage, MemorySnapshot,
    NetworkInterface, PlatformError, PlatformResult,
};

/// `HostFactsProvider` backed by a long-lived `sysinfo::System`.
///
/// Only CPU and memory are refreshed per snapshot. The process table is
/// only touched for the dashboard's own entry, to find its owner.
pub struct SysinfoHost {
    system: System,
    networks: Networks,
}

impl SysinfoHost {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        Self {
            system,
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl SysinfoHost {
    /// Owner of this process as the OS reports it.
    ///
    /// `USER`/`USERNAME` are only consulted when the user database has no
    /// entry for the process owner.
    fn current_username(&mut self) -> String {
        self.os_username()
            .or_else(env_username)
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn os_username(&mut self) -> Option<String> {
        let pid = sysinfo::get_current_pid().ok()?;
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            false,
            ProcessRefreshKind::new().with_user(UpdateKind::Always),
        );
        let uid = self.system.process(pid)?.user_id()?.clone();

        let users = Users::new_with_refreshed_list();
        let name = users.get_user_by_id(&uid)?.name().to_string();
        debug!(%name, "Resolved process owner");
        Some(name).filter(|name| !name.is_empty())
    }
}

impl Default for SysinfoHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostFactsProvider for SysinfoHost {
    fn snapshot(&mut self) -> PlatformResult<HostSnapshot> {
        self.system.refresh_memory();
        self.system.refresh_cpu_all();
        let username = self.current_username();

        let cpus = self.system.cpus();
        if cpus.is_empty() {
            return Err(PlatformError::NotFound("no CPUs reported by the OS".into()));
        }
        let cpu_model = cpus[0].brand().trim().to_string();

        let memory = MemorySnapshot {
            total_bytes: self.system.total_memory(),
            free_bytes: self.system.available_memory(),
        };

        let home_dir = dirs::home_dir()
            .ok_or_else(|| PlatformError::NotFound("home directory".into()))?;

        let snapshot = HostSnapshot {
            platform: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            hostname: System::host_name(),
            os_version: System::long_os_version(),
            cpu_model: if cpu_model.is_empty() {
                "Unknown CPU".to_string()
            } else {
                cpu_model
            },
            cpu_cores: cpus.len(),
            memory,
            uptime_secs: System::uptime(),
            load_average: load_average(),
            home_dir,
            username,
            taken_at: chrono::Local::now(),
        };

        debug!(
            cores = snapshot.cpu_cores,
            total = snapshot.memory.total_bytes,
            free = snapshot.memory.free_bytes,
            "Host snapshot taken"
        );

        Ok(snapshot)
    }

    fn network_interfaces(&mut self) -> PlatformResult<Vec<NetworkInterface>> {
        self.networks.refresh_list();

        let mut interfaces: Vec<NetworkInterface> = self
            .networks
            .list()
            .iter()
            .map(|(name, data)| NetworkInterface {
                name: name.clone(),
                addresses: data
                    .ip_networks()
                    .iter()
                    .map(|net| InterfaceAddress::new(net.addr))
                    .collect(),
            })
            .filter(|iface| !iface.addresses.is_empty())
            .collect();

        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(interfaces)
    }
}

/// Load averages are a Unix concept; other hosts report nothing.
fn load_average() -> Option<LoadAverage> {
    if !super::is_unix() {
        return None;
    }
    let load = System::load_average();
    Some(LoadAverage {
        one: load.one,
        five: load.five,
        fifteen: load.fifteen,
    })
}

fn env_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|name| !name.is_empty())
}
