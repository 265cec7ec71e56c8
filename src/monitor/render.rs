//! Text reports for the info routines

use colored::Colorize;

use super::format::{
    format_gb, format_load_average, format_percent, format_uptime, format_uptime_hours,
};
use crate::platform::{AddressFamily, HostSnapshot, NetworkInterface};

const HEADER_TITLE: &str = "           🚀 TERMINAL DASHBOARD 🚀";

/// Title banner framed by `═` rules of `width` columns.
///
/// The title keeps a fixed indent; emoji widths vary between terminals.
pub fn render_header(width: usize) -> String {
    let rule = "═".repeat(width);
    format!(
        "{}\n{}\n{}\n",
        rule.cyan().bold(),
        HEADER_TITLE.cyan().bold(),
        rule.cyan().bold()
    )
}

fn field(key: &str, value: impl std::fmt::Display) -> String {
    format!("{}{}", format!("{:<20}: ", key).cyan(), value.to_string().white())
}

/// Key/value listing for the System Information routine.
pub fn render_system_info(snap: &HostSnapshot) -> String {
    let rows = [
        field("Platform", &snap.platform),
        field("Architecture", &snap.arch),
        field("CPU Cores", snap.cpu_cores),
        field("Total Memory", format_gb(snap.memory.total_bytes)),
        field("Free Memory", format_gb(snap.memory.free_bytes)),
        field("Uptime", format_uptime_hours(snap.uptime_secs)),
        field("Dashboard Version", env!("CARGO_PKG_VERSION")),
        field("Home Directory", snap.home_dir.display()),
        field("Username", &snap.username),
    ];
    rows.join("\n")
}

fn label(key: &str, value: impl std::fmt::Display) -> String {
    format!("{}{}", format!("{}: ", key).cyan(), value.to_string().white())
}

/// CPU, memory, load and uptime figures for the System Monitor routine.
///
/// The load average line is left out when the snapshot has none.
pub fn render_monitor(snap: &HostSnapshot) -> String {
    let mem = &snap.memory;
    let mut lines = vec![
        label("CPU Model", &snap.cpu_model),
        label("CPU Cores", snap.cpu_cores),
        String::new(),
        label("Memory Usage", format_percent(mem.usage_percent())),
        label("Total Memory", format_gb(mem.total_bytes)),
        label("Used Memory", format_gb(mem.used_bytes())),
        label("Free Memory", format_gb(mem.free_bytes)),
    ];

    if let Some(load) = &snap.load_average {
        lines.push(String::new());
        lines.push(label("Load Average", format_load_average(load)));
    }
    lines.push(label("System Uptime", format_uptime(snap.uptime_secs)));

    lines.join("\n")
}

/// Interface names with their visible addresses.
///
/// By default only external IPv4 addresses are listed; `show_ipv6` and
/// `show_internal` widen the filter. Interface names are always printed.
pub fn render_interfaces(
    interfaces: &[NetworkInterface],
    show_ipv6: bool,
    show_internal: bool,
) -> String {
    let mut out = String::new();
    for iface in interfaces {
        out.push_str(&format!("\n{}\n", format!("{}:", iface.name).yellow()));
        for addr in &iface.addresses {
            if addr.family == AddressFamily::IPv6 && !show_ipv6 {
                continue;
            }
            if addr.internal && !show_internal {
                continue;
            }
            let line = match addr.family {
                AddressFamily::IPv4 => format!("  IP: {}", addr.address),
                AddressFamily::IPv6 => format!("  IPv6: {}", addr.address),
            };
            out.push_str(&format!("{}\n", line.white()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InterfaceAddress;
    use crate::testing::sample_snapshot;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_system_info_fields() {
        let text = render_system_info(&sample_snapshot());
        assert_eq!(text.lines().count(), 9);
        for key in [
            "Platform",
            "Architecture",
            "CPU Cores",
            "Total Memory",
            "Free Memory",
            "Uptime",
            "Dashboard Version",
            "Home Directory",
            "Username",
        ] {
            assert!(text.contains(key), "missing {key}");
        }
        assert!(text.contains("2.00 GB"));
        assert!(text.contains("1.00 GB"));
        assert!(text.contains("25 hours"));
        assert!(text.contains("/home/dev"));
    }

    #[test]
    fn test_monitor_report() {
        let text = render_monitor(&sample_snapshot());
        assert!(text.contains("50.00%"));
        assert!(text.contains("Used Memory"));
        assert!(text.contains("0.25, 0.50, 1.00"));
        assert!(text.contains("1d 1h 1m"));
    }

    #[test]
    fn test_monitor_omits_missing_load_average() {
        let mut snap = sample_snapshot();
        snap.load_average = None;
        let text = render_monitor(&snap);
        assert!(!text.contains("Load Average"));
        assert!(text.contains("System Uptime"));
    }

    fn interfaces() -> Vec<NetworkInterface> {
        vec![
            NetworkInterface {
                name: "eth0".into(),
                addresses: vec![
                    InterfaceAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7))),
                    InterfaceAddress::new(IpAddr::V6(
                        "fe80::1".parse::<Ipv6Addr>().unwrap(),
                    )),
                ],
            },
            NetworkInterface {
                name: "lo".into(),
                addresses: vec![InterfaceAddress::new(IpAddr::V4(Ipv4Addr::LOCALHOST))],
            },
        ]
    }

    #[test]
    fn test_interfaces_default_filter() {
        let text = render_interfaces(&interfaces(), false, false);
        assert!(text.contains("eth0:"));
        assert!(text.contains("lo:"));
        assert!(text.contains("IP: 10.0.0.7"));
        assert!(!text.contains("127.0.0.1"));
        assert!(!text.contains("fe80::1"));
    }

    #[test]
    fn test_interfaces_wide_filter() {
        let text = render_interfaces(&interfaces(), true, true);
        assert!(text.contains("IPv6: fe80::1"));
        assert!(text.contains("IP: 127.0.0.1"));
    }

    #[test]
    fn test_header_width() {
        let header = render_header(60);
        assert!(header.contains(&"═".repeat(60)));
        assert!(header.contains("TERMINAL DASHBOARD"));
    }

    #[test]
    fn test_header_title_indent_is_fixed() {
        for width in [40, 60, 120] {
            let header = render_header(width);
            assert!(header.contains("           🚀 TERMINAL DASHBOARD 🚀"));
            assert!(!header.contains("            🚀"));
        }
    }
}
