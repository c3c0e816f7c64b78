//! Color channels and the level state owned by the UI.

use core::fmt;

/// One PWM color channel of the mocked controller.
///
/// Each channel is driven through a fixed GPIO pin; the pin number is the
/// prefix writers use on the device line protocol (`<pin>=<fraction>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels, in the order they are matched against incoming lines
    /// and laid out in the UI.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// GPIO pin driving this channel on the real controller.
    pub fn pin(self) -> u8 {
        match self {
            Channel::Red => 17,
            Channel::Green => 22,
            Channel::Blue => 24,
        }
    }

    /// Lowercase channel name used in captions and logs.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current display levels of the three channels.
///
/// Owned by the UI controller and mutated only when it applies a decoded
/// update; writing one channel never touches the other two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelLevels {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ChannelLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn set(&mut self, channel: Channel, level: u8) {
        match channel {
            Channel::Red => self.red = level,
            Channel::Green => self.green = level,
            Channel::Blue => self.blue = level,
        }
    }

    /// Sum of all three levels, used for the combined contrast rule.
    pub fn sum(&self) -> u16 {
        u16::from(self.red) + u16::from(self.green) + u16::from(self.blue)
    }
}

impl fmt::Display for ChannelLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "red: {}, green: {}, blue: {}",
            self.red, self.green, self.blue
        )
    }
}
