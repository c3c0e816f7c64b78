//! Background tail of the virtual device.
//!
//! A dedicated thread opens the FIFO for reading and forwards every
//! non-empty line into an unbounded mpsc channel. The UI drains that
//! channel one message per tick on its own timer; the two sides never share
//! anything else.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error};

/// Sleep between read attempts. One line is read per interval at most, a
/// deliberate rate limit; bursts stay buffered in the FIFO and drain on
/// later iterations.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Handle on the spawned listener thread.
///
/// The thread runs for the lifetime of the process and is never joined;
/// process exit tears it down.
pub struct DeviceListener {
    handle: JoinHandle<()>,
}

impl DeviceListener {
    /// Spawn the listener on `path`, forwarding lines into `lines`.
    ///
    /// The open blocks until a writer appears, per FIFO semantics, so the
    /// thread may sit in the open call indefinitely. If the open fails the
    /// error is reported once and the thread ends; the UI keeps running
    /// without updates.
    pub fn spawn(path: PathBuf, lines: Sender<String>) -> Self {
        let handle = thread::Builder::new()
            .name("device-listener".into())
            .spawn(move || run(&path, &lines))
            .expect("spawning listener thread");
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

fn run(path: &Path, lines: &Sender<String>) {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            error!("cannot open device {} for reading: {err}", path.display());
            return;
        }
    };
    debug!("listening on {}", path.display());

    let mut reader = BufReader::new(file);
    let mut buf = String::new();
    loop {
        thread::sleep(POLL_INTERVAL);
        buf.clear();
        match reader.read_line(&mut buf) {
            // 0 bytes means no writer is connected right now; keep polling,
            // the same descriptor delivers data once a writer returns.
            Ok(0) => {}
            Ok(_) => {
                let line = buf.trim_end_matches('\n');
                if !line.is_empty() {
                    if lines.send(line.to_string()).is_err() {
                        // receiver dropped, UI is gone
                        return;
                    }
                }
            }
            Err(err) => {
                error!("read error on device {}: {err}", path.display());
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::VirtualDevice;
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::sync::mpsc;
    use std::time::Duration;

    const RECV_TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn forwards_lines_in_fifo_order() {
        let dir = tempfile::tempdir().unwrap();
        let device = VirtualDevice::new(dir.path().join("pi-blaster"));
        device.ensure().unwrap();

        let (tx, rx) = mpsc::channel();
        let listener = DeviceListener::spawn(device.path().to_path_buf(), tx);

        // Opening the write end unblocks the listener's own open.
        let mut writer = OpenOptions::new().write(true).open(device.path()).unwrap();
        writeln!(writer, "17=0.1").unwrap();
        writeln!(writer, "17=0.9").unwrap();
        writeln!(writer, "22=1.0").unwrap();
        writer.flush().unwrap();

        assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), "17=0.1");
        assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), "17=0.9");
        assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), "22=1.0");
        assert!(listener.is_running());
    }

    #[test]
    fn blank_lines_are_not_forwarded() {
        let dir = tempfile::tempdir().unwrap();
        let device = VirtualDevice::new(dir.path().join("pi-blaster"));
        device.ensure().unwrap();

        let (tx, rx) = mpsc::channel();
        let _listener = DeviceListener::spawn(device.path().to_path_buf(), tx);

        let mut writer = OpenOptions::new().write(true).open(device.path()).unwrap();
        writeln!(writer).unwrap();
        writeln!(writer, "24=0.5").unwrap();
        writer.flush().unwrap();

        // The blank line is skipped; the first delivery is the real update.
        assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), "24=0.5");
    }

    #[test]
    fn listener_exits_when_device_is_unopenable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-there");

        let (tx, _rx) = mpsc::channel();
        let listener = DeviceListener::spawn(missing, tx);

        // Regular-file open of a missing path fails immediately.
        for _ in 0..100 {
            if !listener.is_running() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("listener should have exited");
    }
}
