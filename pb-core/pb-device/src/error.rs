//! Error types for pb-device

use core::fmt;
use std::io;

/// Error type for virtual device operations
#[derive(Debug)]
pub enum DeviceError {
    /// Creating the FIFO failed
    Create { path: String, source: io::Error },
    /// Setting the FIFO permission bits failed
    Permissions { path: String, source: io::Error },
    /// Opening the FIFO for reading failed
    Open { path: String, source: io::Error },
    /// Removing the FIFO failed
    Remove { path: String, source: io::Error },
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Create { path, source } => {
                write!(f, "failed to create device {path}: {source}")
            }
            DeviceError::Permissions { path, source } => {
                write!(f, "failed to set permissions on device {path}: {source}")
            }
            DeviceError::Open { path, source } => {
                write!(f, "failed to open device {path}: {source}")
            }
            DeviceError::Remove { path, source } => {
                write!(f, "failed to remove device {path}: {source}")
            }
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeviceError::Create { source, .. }
            | DeviceError::Permissions { source, .. }
            | DeviceError::Open { source, .. }
            | DeviceError::Remove { source, .. } => Some(source),
        }
    }
}
