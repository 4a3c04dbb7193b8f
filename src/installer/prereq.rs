use crate::installer::{InstallError, Reporter};
use crate::probe::{OsFamily, SystemProfile};
use std::io;
use std::process::{Command, Output};

pub const DOCKER_INSTALL_CMD: &str = "curl -fsSL https://get.docker.com | sh";
pub const DOCKER_GROUP_CMD: &str = "sudo usermod -aG docker $USER";
pub const DOCKER_DESKTOP_URL: &str = "https://www.docker.com/products/docker-desktop";

/// Seam for the shell pipeline so platform dispatch is testable with fakes.
pub trait Shell {
    fn run(&self, command: &str) -> io::Result<Output>;
}

pub struct SystemShell;

impl Shell for SystemShell {
    fn run(&self, command: &str) -> io::Result<Output> {
        Command::new("sh").arg("-c").arg(command).output()
    }
}

pub trait Browser {
    fn open(&self, url: &str);
}

pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) {
        crate::utils::open_url(url);
    }
}

/// Install the container runtime, or direct the user to. One-shot and not
/// idempotent; the orchestrator only calls this when the probe reported the
/// runtime as unavailable.
///
/// Known issue: on Linux the `usermod -aG docker` step takes effect on the
/// next login session, so `docker ps` may still be denied for the current
/// session even after this returns Ok.
pub fn ensure_runtime(
    profile: &SystemProfile,
    shell: &dyn Shell,
    browser: &dyn Browser,
    reporter: &Reporter,
) -> Result<(), InstallError> {
    match profile.os {
        OsFamily::Linux => {
            for command in [DOCKER_INSTALL_CMD, DOCKER_GROUP_CMD] {
                reporter.log(format!("Running: {}", command));
                let output = shell.run(command).map_err(|e| {
                    InstallError::Prerequisite(format!("failed to run `{}`: {}", command, e))
                })?;
                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    return Err(InstallError::Prerequisite(format!(
                        "Docker installation failed: {}",
                        stderr.trim()
                    )));
                }
            }
            Ok(())
        }
        OsFamily::MacOs | OsFamily::Windows => {
            reporter.log(format!(
                "Please install Docker Desktop from {}",
                DOCKER_DESKTOP_URL
            ));
            browser.open(DOCKER_DESKTOP_URL);
            Err(InstallError::Prerequisite(
                "Please install Docker Desktop and run this installer again".to_string(),
            ))
        }
        OsFamily::Other => Err(InstallError::Prerequisite(format!(
            "unsupported operating system: {}",
            std::env::consts::OS
        ))),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::installer::Installer;
    use std::cell::RefCell;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    struct FakeShell {
        exit_code: i32,
        stderr: &'static str,
        ran: RefCell<Vec<String>>,
    }

    impl FakeShell {
        fn new(exit_code: i32, stderr: &'static str) -> Self {
            Self {
                exit_code,
                stderr,
                ran: RefCell::new(Vec::new()),
            }
        }
    }

    impl Shell for FakeShell {
        fn run(&self, command: &str) -> io::Result<Output> {
            self.ran.borrow_mut().push(command.to_string());
            Ok(Output {
                status: ExitStatus::from_raw(self.exit_code << 8),
                stdout: Vec::new(),
                stderr: self.stderr.as_bytes().to_vec(),
            })
        }
    }

    struct FakeBrowser {
        opened: RefCell<Vec<String>>,
    }

    impl FakeBrowser {
        fn new() -> Self {
            Self {
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl Browser for FakeBrowser {
        fn open(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    fn profile(os: OsFamily) -> SystemProfile {
        SystemProfile {
            os,
            arch: "x86_64".to_string(),
            runtime_available: false,
        }
    }

    #[test]
    fn linux_runs_install_and_group_commands() {
        let shell = FakeShell::new(0, "");
        let browser = FakeBrowser::new();
        let installer = Installer::new();

        ensure_runtime(
            &profile(OsFamily::Linux),
            &shell,
            &browser,
            &installer.reporter(),
        )
        .unwrap();

        let ran = shell.ran.borrow();
        assert_eq!(ran.as_slice(), [DOCKER_INSTALL_CMD, DOCKER_GROUP_CMD]);
        assert!(browser.opened.borrow().is_empty());
    }

    #[test]
    fn linux_failure_carries_stderr() {
        let shell = FakeShell::new(1, "curl: (6) could not resolve host");
        let browser = FakeBrowser::new();
        let installer = Installer::new();

        let err = ensure_runtime(
            &profile(OsFamily::Linux),
            &shell,
            &browser,
            &installer.reporter(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("could not resolve host"));
    }

    #[test]
    fn macos_and_windows_open_download_page_and_fail() {
        for os in [OsFamily::MacOs, OsFamily::Windows] {
            let shell = FakeShell::new(0, "");
            let browser = FakeBrowser::new();
            let installer = Installer::new();

            let err = ensure_runtime(&profile(os), &shell, &browser, &installer.reporter())
                .unwrap_err();

            assert!(err.to_string().contains("Docker Desktop"));
            assert_eq!(browser.opened.borrow().as_slice(), [DOCKER_DESKTOP_URL]);
            assert!(shell.ran.borrow().is_empty());
        }
    }

    #[test]
    fn other_os_is_unsupported() {
        let shell = FakeShell::new(0, "");
        let browser = FakeBrowser::new();
        let installer = Installer::new();

        let err = ensure_runtime(
            &profile(OsFamily::Other),
            &shell,
            &browser,
            &installer.reporter(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("unsupported operating system"));
        assert!(browser.opened.borrow().is_empty());
    }
}
