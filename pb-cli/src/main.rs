//! pi-blaster rgb mock entry point.
//!
//! Wires the pieces together: create the virtual device, hook SIGINT so the
//! FIFO disappears again on interrupt, spawn the listener thread, and hand
//! the receiving end of the channel to the UI loop.

use std::path::PathBuf;
use std::process;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use pb_device::{DEFAULT_DEVICE_PATH, DeviceListener, VirtualDevice};

mod ui;

/// Desktop mock of a pi-blaster style PWM RGB controller.
///
/// Echo `<pin>=<fraction>` lines into the device FIFO and watch the window
/// mirror the color the hardware would show.
#[derive(Parser)]
#[command(name = "pb-mock", version)]
struct Args {
    /// Path of the virtual device FIFO
    #[arg(long, default_value = DEFAULT_DEVICE_PATH)]
    device: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let device = VirtualDevice::new(args.device);
    device
        .ensure()
        .with_context(|| format!("creating virtual device {}", device.path().display()))?;
    info!("virtual device ready at {}", device.path().display());

    // SIGINT in the terminal removes the FIFO and exits cleanly.
    let interrupt_device = device.clone();
    ctrlc::set_handler(move || {
        info!("interrupted, removing virtual device");
        interrupt_device.remove_logged();
        process::exit(0);
    })
    .context("registering interrupt handler")?;

    let (tx, rx) = mpsc::channel();
    let _listener = DeviceListener::spawn(device.path().to_path_buf(), tx);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 300.0])
            .with_min_inner_size([300.0, 200.0])
            .with_title(ui::WINDOW_TITLE),
        ..Default::default()
    };
    let run_result = eframe::run_native(
        ui::WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(ui::MockApp::new(rx)))),
    )
    .map_err(|e| anyhow::anyhow!("ui loop failed: {e}"));

    // Window closed (or the loop failed): same cleanup as the signal path.
    device.remove_logged();
    run_result
}
