use crate::docker;
use std::time::Duration;
use sysinfo::System;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl OsFamily {
    pub fn current() -> Self {
        Self::from_os_str(std::env::consts::OS)
    }

    pub fn from_os_str(os: &str) -> Self {
        match os {
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::MacOs,
            "windows" => OsFamily::Windows,
            _ => OsFamily::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OsFamily::Linux => "Linux",
            OsFamily::MacOs => "macOS",
            OsFamily::Windows => "Windows",
            OsFamily::Other => "Unknown",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SystemProfile {
    pub os: OsFamily,
    pub arch: String,
    pub runtime_available: bool,
}

/// Inspect the host. Never fails: a missing, broken or hung runtime binary
/// just reports as unavailable.
pub fn detect(runtime_bin: &str, probe_timeout: Duration) -> SystemProfile {
    SystemProfile {
        os: OsFamily::current(),
        arch: std::env::consts::ARCH.to_string(),
        runtime_available: docker::runtime_responds(runtime_bin, probe_timeout),
    }
}

/// Lines for the System Information card.
pub fn host_summary(profile: &SystemProfile) -> Vec<String> {
    let mut sys = System::new();
    sys.refresh_memory();

    let os_name = System::name().unwrap_or_else(|| profile.os.label().to_string());
    let mut lines = vec![format!("Operating System: {} {}", os_name, profile.arch)];
    if let Some(kernel) = System::kernel_version() {
        lines.push(format!("Kernel: {}", kernel));
    }
    lines.push(format!(
        "Memory: {}",
        crate::utils::format_bytes(sys.total_memory())
    ));
    lines.push(format!(
        "Docker: {}",
        if profile.runtime_available {
            "Available"
        } else {
            "Not installed (will be installed automatically)"
        }
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_absorbs_missing_runtime() {
        let profile = detect("definitely-not-a-container-runtime", Duration::from_secs(1));
        assert!(!profile.runtime_available);
        assert_eq!(profile.os, OsFamily::current());
        assert!(!profile.arch.is_empty());
    }

    #[test]
    fn os_family_mapping() {
        assert_eq!(OsFamily::from_os_str("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_os_str("macos"), OsFamily::MacOs);
        assert_eq!(OsFamily::from_os_str("windows"), OsFamily::Windows);
        assert_eq!(OsFamily::from_os_str("freebsd"), OsFamily::Other);
    }

    #[test]
    fn host_summary_reports_runtime_state() {
        let profile = SystemProfile {
            os: OsFamily::Linux,
            arch: "x86_64".to_string(),
            runtime_available: false,
        };
        let lines = host_summary(&profile);
        assert!(lines.iter().any(|l| l.contains("Not installed")));
    }
}
