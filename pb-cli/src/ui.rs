//! Mock window: swatch rendering and the per-tick update pump.
//!
//! The app owns the channel levels and the receiving end of the listener's
//! handoff channel. On every tick it pulls at most one pending line,
//! decodes it, and repaints; lines queued faster than the tick rate stay
//! queued and drain one per tick.

use std::sync::mpsc::Receiver;
use std::time::Instant;

use egui::Color32;
use log::debug;

use pb_device::POLL_INTERVAL;
use pb_model::color::{channel_rgb, channel_text_is_light, composite_text_is_light, rgb_hex};
use pb_model::{Channel, ChannelLevels, decode_line};

pub const WINDOW_TITLE: &str = "pi-blaster rgb mock";

/// Caption shown before the first update arrives.
const NO_COLOR_TEXT: &str = "no color set yet";

/// Mock application state.
pub struct MockApp {
    /// Current display levels, mutated only by the update pump.
    levels: ChannelLevels,
    /// Lines from the listener thread.
    lines: Receiver<String>,
    /// When the pump last pulled a line.
    last_poll: Instant,
    /// False until the first update is applied; captions show a
    /// placeholder until then.
    has_update: bool,
}

impl MockApp {
    pub fn new(lines: Receiver<String>) -> Self {
        Self {
            levels: ChannelLevels::new(),
            lines,
            last_poll: Instant::now(),
            has_update: false,
        }
    }

    /// Pull at most one line per poll interval.
    ///
    /// `update` runs on every repaint, which can be far more often than the
    /// tick rate when the window sees input events; the time gate keeps the
    /// drain rate fixed.
    fn poll_one(&mut self) {
        if self.last_poll.elapsed() < POLL_INTERVAL {
            return;
        }
        self.last_poll = Instant::now();
        self.apply_next_line();
    }

    /// Pull one pending line, if any, and apply it. Returns whether a line
    /// was consumed. Lines that do not decode are dropped silently.
    fn apply_next_line(&mut self) -> bool {
        let Ok(line) = self.lines.try_recv() else {
            return false;
        };
        if let Some(update) = decode_line(&line) {
            self.levels.set(update.channel, update.level);
            self.has_update = true;
            debug!(
                "{} -> {} (#{})",
                update.channel,
                update.level,
                rgb_hex(self.levels.red, self.levels.green, self.levels.blue)
            );
        }
        true
    }

    fn channel_caption(&self, channel: Channel) -> String {
        if self.has_update {
            format!("{}: {}", channel.label(), self.levels.get(channel))
        } else {
            NO_COLOR_TEXT.to_string()
        }
    }

    fn combined_caption(&self) -> String {
        if self.has_update {
            self.levels.to_string()
        } else {
            NO_COLOR_TEXT.to_string()
        }
    }
}

impl eframe::App for MockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_one();
        // Keep ticking even when no input events arrive.
        ctx.request_repaint_after(POLL_INTERVAL);

        // Ctrl+C inside the window closes it, like the terminal signal.
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::C)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let composite = Color32::from_rgb(self.levels.red, self.levels.green, self.levels.blue);
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(composite))
            .show(ctx, |ui| {
                let row_height = ui.available_height() * 0.4;
                ui.columns(3, |columns| {
                    for (column, channel) in columns.iter_mut().zip(Channel::ALL) {
                        let level = self.levels.get(channel);
                        let (r, g, b) = channel_rgb(channel, level);
                        swatch(
                            column,
                            Color32::from_rgb(r, g, b),
                            channel_text_is_light(level),
                            &self.channel_caption(channel),
                            row_height,
                        );
                    }
                });
                ui.add_space(4.0);
                swatch(
                    ui,
                    composite,
                    composite_text_is_light(&self.levels),
                    &self.combined_caption(),
                    ui.available_height(),
                );
            });
    }
}

/// One colored label: `fill` background, contrast foreground, centered text.
fn swatch(ui: &mut egui::Ui, fill: Color32, light_text: bool, caption: &str, height: f32) {
    let fg = if light_text {
        Color32::WHITE
    } else {
        Color32::BLACK
    };
    egui::Frame::default().fill(fill).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.set_min_height(height);
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(caption).color(fg));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn app_with_lines(lines: &[&str]) -> MockApp {
        let (tx, rx) = mpsc::channel();
        for line in lines {
            tx.send((*line).to_string()).unwrap();
        }
        MockApp::new(rx)
    }

    #[test]
    fn applies_one_line_per_pull_in_order() {
        let mut app = app_with_lines(&["17=0.1", "17=0.9"]);

        assert!(app.apply_next_line());
        assert_eq!(app.levels.red, 26);

        assert!(app.apply_next_line());
        assert_eq!(app.levels.red, 230);

        assert!(!app.apply_next_line());
    }

    #[test]
    fn unknown_pin_consumes_a_pull_but_changes_nothing() {
        let mut app = app_with_lines(&["99=0.5", "22=1.0"]);

        assert!(app.apply_next_line());
        assert_eq!(app.levels, ChannelLevels::new());
        assert!(!app.has_update);

        assert!(app.apply_next_line());
        assert_eq!(app.levels.green, 255);
        assert_eq!(app.levels.red, 0);
        assert_eq!(app.levels.blue, 0);
    }

    #[test]
    fn non_numeric_fraction_changes_nothing() {
        let mut app = app_with_lines(&["17=abc"]);
        assert!(app.apply_next_line());
        assert_eq!(app.levels, ChannelLevels::new());
    }

    #[test]
    fn captions_show_placeholder_until_first_update() {
        let mut app = app_with_lines(&["17=0.5"]);
        assert_eq!(app.channel_caption(Channel::Red), NO_COLOR_TEXT);
        assert_eq!(app.combined_caption(), NO_COLOR_TEXT);

        app.apply_next_line();
        assert_eq!(app.channel_caption(Channel::Red), "red: 128");
        assert_eq!(app.channel_caption(Channel::Green), "green: 0");
        assert_eq!(app.combined_caption(), "red: 128, green: 0, blue: 0");
    }

    #[test]
    fn empty_queue_is_a_noop() {
        let mut app = app_with_lines(&[]);
        assert!(!app.apply_next_line());
        assert_eq!(app.levels, ChannelLevels::new());
    }
}
