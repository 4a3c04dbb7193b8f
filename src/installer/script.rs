use crate::installer::{InstallError, Reporter};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

pub const NONINTERACTIVE_VAR: &str = "VX0_NONINTERACTIVE";

/// Execute the downloaded installer script and stream its output to the log
/// as it arrives. stderr is drained on a helper thread into the same sink so
/// a long-running script stays visibly alive. Blocks until the child exits.
pub fn run(script_path: &Path, reporter: &Reporter) -> Result<(), InstallError> {
    let mut child = Command::new("/bin/sh")
        .arg(script_path)
        .env(NONINTERACTIVE_VAR, "1")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| InstallError::InstallerExit(format!("could not start script: {}", e)))?;

    let stderr_thread = child.stderr.take().map(|stderr| {
        let reporter = reporter.clone();
        thread::spawn(move || {
            for line in BufReader::new(stderr).lines().map_while(Result::ok) {
                reporter.log(line);
            }
        })
    });

    if let Some(stdout) = child.stdout.take() {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            reporter.log(line);
        }
    }

    if let Some(handle) = stderr_thread {
        handle.join().ok();
    }

    let status = child
        .wait()
        .map_err(|e| InstallError::InstallerExit(format!("wait failed: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(InstallError::InstallerExit(status.to_string()))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::installer::Installer;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn write_script(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("installer.sh");
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn log_snapshot(installer: &Installer) -> Vec<String> {
        installer.logs.lock().unwrap().iter().cloned().collect()
    }

    #[test]
    fn streams_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "#!/bin/sh\necho alpha\necho bravo\necho charlie\n");
        let installer = Installer::new();

        run(&script, &installer.reporter()).unwrap();

        let logs = log_snapshot(&installer);
        let pos = |needle: &str| logs.iter().position(|l| l.contains(needle)).unwrap();
        assert!(pos("alpha") < pos("bravo"));
        assert!(pos("bravo") < pos("charlie"));
    }

    #[test]
    fn sets_noninteractive_flag_for_child() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "#!/bin/sh\necho \"noninteractive=$VX0_NONINTERACTIVE\"\n",
        );
        let installer = Installer::new();

        run(&script, &installer.reporter()).unwrap();

        let logs = log_snapshot(&installer);
        assert!(logs.iter().any(|l| l.contains("noninteractive=1")));
    }

    #[test]
    fn stderr_reaches_the_log() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "#!/bin/sh\necho warning-line >&2\n");
        let installer = Installer::new();

        run(&script, &installer.reporter()).unwrap();

        let logs = log_snapshot(&installer);
        assert!(logs.iter().any(|l| l.contains("warning-line")));
    }

    #[test]
    fn nonzero_exit_is_an_installer_error() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "#!/bin/sh\necho about-to-fail\nexit 3\n");
        let installer = Installer::new();

        let err = run(&script, &installer.reporter()).unwrap_err();
        assert!(err.to_string().contains("installer failed"));

        // The script's own output still reached the log.
        let logs = log_snapshot(&installer);
        assert!(logs.iter().any(|l| l.contains("about-to-fail")));
    }
}
