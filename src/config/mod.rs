use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Installer settings. Defaults match the published VX0 endpoints; a
/// `config.toml` in the user's config directory can override them, which is
/// mainly useful for pointing the wizard at a staging installer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallerConfig {
    pub installer_url: String,
    pub installer_filename: String,
    pub dashboard_url: String,
    pub docs_url: String,
    pub support_url: String,
    pub issues_url: String,
    pub container_filter: String,
    pub runtime_bin: String,
    pub probe_timeout_secs: u64,
    pub verify_timeout_secs: u64,
    pub verify_grace_secs: u64,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            installer_url: "https://raw.githubusercontent.com/vx0net/daemon/main/install-vx0.sh"
                .to_string(),
            installer_filename: "vx0-installer.sh".to_string(),
            dashboard_url: "http://localhost:8090".to_string(),
            docs_url: "https://docs.vx0.network".to_string(),
            support_url: "https://discord.gg/vx0network".to_string(),
            issues_url: "https://github.com/vx0net/daemon/issues".to_string(),
            container_filter: "vx0".to_string(),
            runtime_bin: "docker".to_string(),
            probe_timeout_secs: 5,
            verify_timeout_secs: 10,
            verify_grace_secs: 2,
        }
    }
}

impl InstallerConfig {
    pub fn config_dir() -> PathBuf {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vx0-installer");
        fs::create_dir_all(&dir).ok();
        dir
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        log::error!("Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    log::error!("Failed to read config: {}", e);
                }
            }
        }
        let config = Self::default();
        config.save_to(path);
        config
    }

    pub fn save_to(&self, path: &Path) {
        match toml::to_string_pretty(self) {
            Ok(content) => {
                if let Err(e) = fs::write(path, content) {
                    log::error!("Failed to save config: {}", e);
                }
            }
            Err(e) => {
                log::error!("Failed to serialize config: {}", e);
            }
        }
    }

    /// Where the downloaded installer script lands.
    pub fn installer_path(&self) -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(&self.installer_filename)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.verify_timeout_secs)
    }

    pub fn verify_grace(&self) -> Duration {
        Duration::from_secs(self.verify_grace_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_published_endpoints() {
        let config = InstallerConfig::default();
        assert!(config.installer_url.ends_with("install-vx0.sh"));
        assert_eq!(config.container_filter, "vx0");
        assert_eq!(config.runtime_bin, "docker");
        assert_eq!(config.probe_timeout(), Duration::from_secs(5));
        assert_eq!(config.verify_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn installer_path_is_under_home() {
        let config = InstallerConfig::default();
        let path = config.installer_path();
        assert!(path.ends_with("vx0-installer.sh"));
    }

    #[test]
    fn toml_round_trip() {
        let config = InstallerConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: InstallerConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.installer_url, config.installer_url);
        assert_eq!(parsed.verify_grace_secs, config.verify_grace_secs);
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = InstallerConfig::load_from(&path);
        assert_eq!(config.container_filter, "vx0");
        assert!(path.exists());

        // A second load reads the file it just wrote.
        let reloaded = InstallerConfig::load_from(&path);
        assert_eq!(reloaded.dashboard_url, config.dashboard_url);
    }
}
