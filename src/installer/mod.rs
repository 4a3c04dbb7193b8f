pub mod error;
pub mod fetch;
pub mod prereq;
pub mod script;
pub mod verify;

pub use error::InstallError;

use crate::config::InstallerConfig;
use crate::probe::{self, SystemProfile};
use crossbeam_channel::{Receiver, Sender};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const MAX_LOG_LINES: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPhase {
    Idle,
    PreppingRuntime,
    Downloading,
    Installing,
    Verifying,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub enum InstallEvent {
    Log(String),
    Status(String),
    Phase(InstallPhase),
    Error(String),
    Finished(bool),
}

/// Worker-side handle for everything the UI can observe: the log buffer, the
/// status line and the current phase. Cheap to clone into helper threads.
#[derive(Clone)]
pub struct Reporter {
    tx: Sender<InstallEvent>,
    logs: Arc<Mutex<VecDeque<String>>>,
    phase: Arc<Mutex<InstallPhase>>,
}

impl Reporter {
    pub fn log(&self, line: impl Into<String>) {
        let stamped = format!("[{}] {}", chrono::Local::now().format("%H:%M:%S"), line.into());
        {
            let mut logs = self.logs.lock().unwrap();
            logs.push_back(stamped.clone());
            if logs.len() > MAX_LOG_LINES {
                let drain = logs.len() - MAX_LOG_LINES;
                logs.drain(0..drain);
            }
        }
        self.tx.send(InstallEvent::Log(stamped)).ok();
    }

    pub fn status(&self, message: impl Into<String>) {
        self.tx.send(InstallEvent::Status(message.into())).ok();
    }

    pub fn phase(&self, phase: InstallPhase) {
        *self.phase.lock().unwrap() = phase;
        self.tx.send(InstallEvent::Phase(phase)).ok();
    }
}

/// The four installation steps plus the probe, behind a seam so the state
/// machine can run against fakes.
pub trait Steps {
    fn probe(&self) -> SystemProfile;
    fn ensure_runtime(&self, profile: &SystemProfile, reporter: &Reporter)
        -> Result<(), InstallError>;
    fn fetch_installer(&self, reporter: &Reporter) -> Result<PathBuf, InstallError>;
    fn run_installer(&self, script: &Path, reporter: &Reporter) -> Result<(), InstallError>;
    fn verify(&self, reporter: &Reporter) -> bool;
    fn grace_period(&self) -> Duration;
}

/// Production steps: real subprocesses, real network, real browser.
pub struct SystemSteps {
    config: InstallerConfig,
}

impl SystemSteps {
    pub fn new(config: InstallerConfig) -> Self {
        Self { config }
    }
}

impl Steps for SystemSteps {
    fn probe(&self) -> SystemProfile {
        probe::detect(&self.config.runtime_bin, self.config.probe_timeout())
    }

    fn ensure_runtime(
        &self,
        profile: &SystemProfile,
        reporter: &Reporter,
    ) -> Result<(), InstallError> {
        prereq::ensure_runtime(profile, &prereq::SystemShell, &prereq::SystemBrowser, reporter)
    }

    fn fetch_installer(&self, reporter: &Reporter) -> Result<PathBuf, InstallError> {
        let dest = self.config.installer_path();
        fetch::fetch(&self.config.installer_url, &dest)?;
        reporter.log(format!("Downloaded installer to {}", dest.display()));
        Ok(dest)
    }

    fn run_installer(&self, script: &Path, reporter: &Reporter) -> Result<(), InstallError> {
        script::run(script, reporter)
    }

    fn verify(&self, reporter: &Reporter) -> bool {
        let lister = verify::DockerLister {
            bin: self.config.runtime_bin.clone(),
            timeout: self.config.verify_timeout(),
        };
        verify::verify(&lister, &self.config.container_filter, reporter)
    }

    fn grace_period(&self) -> Duration {
        self.config.verify_grace()
    }
}

/// Owns the installation state machine. One background worker per run; the UI
/// observes progress through the event channel and the shared log buffer.
pub struct Installer {
    pub event_tx: Sender<InstallEvent>,
    pub event_rx: Receiver<InstallEvent>,
    pub logs: Arc<Mutex<VecDeque<String>>>,
    pub phase: Arc<Mutex<InstallPhase>>,
    pub running: Arc<Mutex<bool>>,
    pub succeeded: Arc<Mutex<bool>>,
}

impl Installer {
    pub fn new() -> Self {
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        Self {
            event_tx,
            event_rx,
            logs: Arc::new(Mutex::new(VecDeque::new())),
            phase: Arc::new(Mutex::new(InstallPhase::Idle)),
            running: Arc::new(Mutex::new(false)),
            succeeded: Arc::new(Mutex::new(false)),
        }
    }

    pub fn reporter(&self) -> Reporter {
        Reporter {
            tx: self.event_tx.clone(),
            logs: self.logs.clone(),
            phase: self.phase.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        *self.running.lock().unwrap()
    }

    pub fn start(&self, config: &InstallerConfig) -> bool {
        self.start_with(SystemSteps::new(config.clone()))
    }

    /// Spawn one worker for a full run. A second start while a run is in
    /// flight is a no-op returning false; a start after a terminal state
    /// begins a fresh run.
    pub fn start_with<S: Steps + Send + 'static>(&self, steps: S) -> bool {
        {
            let mut running = self.running.lock().unwrap();
            if *running {
                return false;
            }
            *running = true;
        }

        let reporter = self.reporter();
        let tx = self.event_tx.clone();
        let running = self.running.clone();
        let succeeded = self.succeeded.clone();

        thread::spawn(move || {
            let outcome = run_sequence(&steps, &reporter);

            let ok = match outcome {
                Ok(true) => {
                    reporter.phase(InstallPhase::Succeeded);
                    reporter.log("[vx0] Installation completed successfully");
                    reporter.status("Installation complete");
                    true
                }
                Ok(false) => {
                    let msg = "verification failed: no vx0 containers are running".to_string();
                    reporter.phase(InstallPhase::Failed);
                    reporter.log(format!("[vx0] Installation failed: {}", msg));
                    reporter.status("Installation failed");
                    tx.send(InstallEvent::Error(msg)).ok();
                    false
                }
                Err(e) => {
                    reporter.phase(InstallPhase::Failed);
                    reporter.log(format!("[vx0] Installation failed: {}", e));
                    reporter.status("Installation failed");
                    tx.send(InstallEvent::Error(e.to_string())).ok();
                    false
                }
            };

            // Guaranteed cleanup for both terminal states.
            *succeeded.lock().unwrap() = ok;
            *running.lock().unwrap() = false;
            tx.send(InstallEvent::Finished(ok)).ok();
        });

        true
    }
}

fn run_sequence(steps: &dyn Steps, reporter: &Reporter) -> Result<bool, InstallError> {
    reporter.log("[vx0] Starting VX0 Network installation...");
    reporter.status("Installing...");

    reporter.phase(InstallPhase::PreppingRuntime);
    let profile = steps.probe();
    if profile.runtime_available {
        reporter.log("[vx0] Docker already installed");
    } else {
        reporter.log("[vx0] Docker not found, installing...");
        reporter.status("Installing Docker...");
        steps.ensure_runtime(&profile, reporter)?;
    }

    reporter.phase(InstallPhase::Downloading);
    reporter.log("[vx0] Downloading VX0 installer...");
    reporter.status("Downloading VX0 installer...");
    let script = steps.fetch_installer(reporter)?;

    reporter.phase(InstallPhase::Installing);
    reporter.log("[vx0] Running VX0 installer...");
    reporter.status("Setting up VX0 node...");
    steps.run_installer(&script, reporter)?;

    reporter.phase(InstallPhase::Verifying);
    reporter.log("[vx0] Verifying installation...");
    reporter.status("Verifying installation...");
    // Give freshly started containers a moment before asking after them.
    thread::sleep(steps.grace_period());
    Ok(steps.verify(reporter))
}
