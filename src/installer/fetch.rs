use crate::installer::InstallError;
use std::fs;
use std::path::Path;

/// Download the installer script to `dest` and mark it executable.
/// No retry and no checksum; a failed download fails the whole run.
pub fn fetch(url: &str, dest: &Path) -> Result<(), InstallError> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .send()
        .map_err(|e| InstallError::Download(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(InstallError::Download(format!("HTTP {} from {}", status, url)));
    }

    let bytes = response
        .bytes()
        .map_err(|e| InstallError::Download(e.to_string()))?;
    fs::write(dest, &bytes).map_err(|e| {
        InstallError::Download(format!("failed to write {}: {}", dest.display(), e))
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o755);
        fs::set_permissions(dest, perms).map_err(|e| {
            InstallError::Download(format!("failed to chmod {}: {}", dest.display(), e))
        })?;
    }

    Ok(())
}
