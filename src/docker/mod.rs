use std::io;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Run a command to completion, killing it if it overruns the deadline.
///
/// Output is captured, stdin is closed. A timed-out child is killed and
/// reaped before the error is returned.
pub fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> io::Result<Output> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;
    let deadline = Instant::now() + timeout;

    loop {
        if child.try_wait()?.is_some() {
            return child.wait_with_output();
        }
        if Instant::now() >= deadline {
            child.kill().ok();
            child.wait().ok();
            return Err(io::Error::new(io::ErrorKind::TimedOut, "command timed out"));
        }
        thread::sleep(Duration::from_millis(50));
    }
}

/// Best-effort probe for a callable container runtime. Missing binary,
/// non-zero exit and timeout all collapse into `false`.
pub fn runtime_responds(bin: &str, timeout: Duration) -> bool {
    if which::which(bin).is_err() {
        return false;
    }
    let mut cmd = Command::new(bin);
    cmd.arg("--version");
    match run_with_timeout(&mut cmd, timeout) {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

/// Names of running containers whose name matches the filter, via
/// `<bin> ps --filter name=<filter> --format {{.Names}}`.
pub fn running_container_names(
    bin: &str,
    filter: &str,
    timeout: Duration,
) -> io::Result<Vec<String>> {
    let mut cmd = Command::new(bin);
    cmd.arg("ps")
        .arg("--filter")
        .arg(format!("name={}", filter))
        .arg("--format")
        .arg("{{.Names}}");

    let output = run_with_timeout(&mut cmd, timeout)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(io::Error::other(format!(
            "{} ps exited with {}: {}",
            bin,
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}
