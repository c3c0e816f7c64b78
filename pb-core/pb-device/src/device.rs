//! Lifecycle of the virtual device file.
//!
//! The mock stands in for a controller that exposes a FIFO at a well-known
//! path. The FIFO is created at startup if missing and removed again on
//! shutdown; while the process runs, its existence is what writers rely on.

use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::DeviceError;

/// Where the real controller exposes its control FIFO.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/pi-blaster";

/// Permission bits for the FIFO: owner read/write, everyone else write-only.
/// Writers echo commands in; only the mock reads.
const DEVICE_MODE: u32 = 0o622;

/// Handle on the virtual device path.
#[derive(Debug, Clone)]
pub struct VirtualDevice {
    path: PathBuf,
}

impl VirtualDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the FIFO if it does not exist and fix up its permission bits.
    ///
    /// Idempotent within a session: an already-present FIFO is left in
    /// place. Errors here are startup-fatal; the mock cannot show anything
    /// without its input device.
    pub fn ensure(&self) -> Result<(), DeviceError> {
        if !self.path.exists() {
            mkfifo(&self.path).map_err(|source| DeviceError::Create {
                path: self.path.display().to_string(),
                source,
            })?;
            debug!("created device fifo at {}", self.path.display());
        }
        // mkfifo mode is masked by the umask; chmod to the intended bits.
        fs::set_permissions(&self.path, fs::Permissions::from_mode(DEVICE_MODE)).map_err(
            |source| DeviceError::Permissions {
                path: self.path.display().to_string(),
                source,
            },
        )
    }

    /// Remove the FIFO if present; no-op when it is already gone.
    pub fn remove(&self) -> Result<(), DeviceError> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|source| DeviceError::Remove {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Best-effort removal for shutdown paths: failures are logged, never
    /// propagated, and the process still exits cleanly.
    pub fn remove_logged(&self) {
        if let Err(err) = self.remove() {
            warn!("device cleanup failed: {err}");
        }
    }
}

fn mkfifo(path: &Path) -> std::io::Result<()> {
    let c_path = std::ffi::CString::new(path.as_os_str().as_bytes())
        .map_err(|_| std::io::Error::from(std::io::ErrorKind::InvalidInput))?;
    // SAFETY: c_path is a valid NUL-terminated path for the call's duration.
    let rc = unsafe { libc::mkfifo(c_path.as_ptr(), DEVICE_MODE as libc::mode_t) };
    if rc == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}
