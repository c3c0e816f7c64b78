//! Virtual device plumbing for the pi-blaster rgb mock.
//!
//! The real controller is driven through a FIFO special file; this crate
//! owns the mock's copy of that interface: creating and removing the FIFO,
//! and tailing it from a background thread that feeds newline-stripped
//! lines into an mpsc handoff channel.

pub mod device;
pub mod error;
pub mod listener;

pub use device::{DEFAULT_DEVICE_PATH, VirtualDevice};
pub use error::DeviceError;
pub use listener::{DeviceListener, POLL_INTERVAL};
