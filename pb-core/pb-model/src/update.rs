//! Decoding of device lines into channel updates.
//!
//! Writers echo `<pin>=<fraction>` lines into the virtual device, one update
//! per line, fraction in [0.0, 1.0]. Anything that does not decode is
//! dropped without surfacing an error; the mock mirrors whatever valid
//! traffic it sees and ignores the rest.

use log::trace;

use crate::channel::Channel;

/// A decoded update: one channel moving to a new display level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update {
    pub channel: Channel,
    pub level: u8,
}

/// Scale a duty-cycle fraction to a display level.
///
/// Rounds half away from zero (`0.5` becomes 128) and clamps to [0, 255],
/// so out-of-range fractions saturate instead of wrapping. NaN maps to 0.
pub fn level_from_fraction(fraction: f32) -> u8 {
    let scaled = (fraction * 255.0).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 255.0) as u8
}

/// Decode one device line into an [`Update`].
///
/// The line is matched against each known `<pin>=` prefix in red, green,
/// blue order; the remainder after the first match must parse as a float.
/// Unknown pins and non-numeric fractions yield `None`.
pub fn decode_line(line: &str) -> Option<Update> {
    for channel in Channel::ALL {
        let Some(rest) = line.strip_prefix(channel.line_prefix()) else {
            continue;
        };
        return match rest.parse::<f32>() {
            Ok(fraction) => Some(Update {
                channel,
                level: level_from_fraction(fraction),
            }),
            Err(_) => {
                trace!("dropping line with non-numeric fraction: {line:?}");
                None
            }
        };
    }
    trace!("dropping line with unknown pin: {line:?}");
    None
}

impl Channel {
    /// `<pin>=` prefix this channel answers to on the wire.
    fn line_prefix(self) -> &'static str {
        match self {
            Channel::Red => "17=",
            Channel::Green => "22=",
            Channel::Blue => "24=",
        }
    }
}
