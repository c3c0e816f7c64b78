//! Color and contrast math for the swatch labels.

use crate::channel::{Channel, ChannelLevels};

/// Levels below this render with light text on their own swatch.
pub const CONTRAST_THRESHOLD: u16 = 128;

/// Lowercase `rrggbb` hex for a composite color, as it appears in logs.
pub fn rgb_hex(r: u8, g: u8, b: u8) -> String {
    format!(
        "{:06x}",
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    )
}

/// RGB triple for a single channel's swatch: that channel at its own level,
/// the other two at 0.
pub fn channel_rgb(channel: Channel, level: u8) -> (u8, u8, u8) {
    match channel {
        Channel::Red => (level, 0, 0),
        Channel::Green => (0, level, 0),
        Channel::Blue => (0, 0, level),
    }
}

/// Whether a single-channel swatch needs light text.
///
/// One uniform rule for all three channels: dark background, light text.
pub fn channel_text_is_light(level: u8) -> bool {
    u16::from(level) < CONTRAST_THRESHOLD
}

/// Whether the combined swatch (and window background) needs light text.
pub fn composite_text_is_light(levels: &ChannelLevels) -> bool {
    levels.sum() < CONTRAST_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(rgb_hex(0, 0, 0), "000000");
        assert_eq!(rgb_hex(255, 255, 255), "ffffff");
        assert_eq!(rgb_hex(16, 32, 64), "102040");
        assert_eq!(rgb_hex(255, 0, 10), "ff000a");
    }

    #[test]
    fn channel_rgb_leaves_other_channels_dark() {
        assert_eq!(channel_rgb(Channel::Red, 200), (200, 0, 0));
        assert_eq!(channel_rgb(Channel::Green, 200), (0, 200, 0));
        assert_eq!(channel_rgb(Channel::Blue, 200), (0, 0, 200));
    }

    #[test]
    fn contrast_flips_at_threshold() {
        assert!(channel_text_is_light(0));
        assert!(channel_text_is_light(127));
        assert!(!channel_text_is_light(128));
        assert!(!channel_text_is_light(255));
    }

    #[test]
    fn blue_uses_the_same_rule_as_red_and_green() {
        // all channels share one contrast policy
        assert!(!channel_text_is_light(200));
    }

    #[test]
    fn composite_contrast_uses_channel_sum() {
        let dark = ChannelLevels {
            red: 40,
            green: 40,
            blue: 40,
        };
        assert!(composite_text_is_light(&dark));
        let bright = ChannelLevels {
            red: 40,
            green: 48,
            blue: 40,
        };
        assert!(!composite_text_is_light(&bright));
    }
}
