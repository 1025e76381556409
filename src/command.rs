//! The bridge opcode table.

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::frame::Frame;

/// Highest brightness level the hardware accepts.
pub const MAX_BRIGHTNESS: u8 = 0x1B;

/// Every operation the bridge understands.
///
/// Group-scoped commands spread their base key over the four group slots
/// (`base + (id - 1) * 2`). Global commands and the value-carrying hue and
/// brightness commands use their base key as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Command {
    AllOn,
    AllOff,
    On,
    Off,
    White,
    Night,
    Disco,
    DiscoFaster,
    DiscoSlower,
    SetHue,
    SetBrightness,
}

impl Command {
    /// Key before any group offset is applied.
    pub fn base_key(self) -> u8 {
        match self {
            Command::AllOn => 0x42,
            Command::AllOff => 0x41,
            Command::On => 0x45,
            Command::Off => 0x46,
            Command::White => 0xC5,
            Command::Night => 0xC6,
            Command::Disco => 0x4D,
            Command::DiscoFaster => 0x44,
            Command::DiscoSlower => 0x43,
            // Hue and brightness address whichever group was activated
            // last, so their keys carry no group offset.
            Command::SetHue => 0x40,
            Command::SetBrightness => 0x4E,
        }
    }

    /// Whether the key itself encodes the target group.
    pub fn is_group_scoped(self) -> bool {
        matches!(
            self,
            Command::On
                | Command::Off
                | Command::White
                | Command::Night
                | Command::Disco
                | Command::DiscoFaster
                | Command::DiscoSlower
        )
    }

    /// Final key for the given group id.
    pub fn key_for(self, group_id: u8) -> u8 {
        if self.is_group_scoped() {
            self.base_key() + (group_id - 1) * 2
        } else {
            self.base_key()
        }
    }

    /// Look up the command a wire key decodes to for the given group.
    ///
    /// Useful when sniffing bridge traffic; the protocol itself never
    /// requires decoding.
    pub fn from_key(key: u8, group_id: u8) -> Option<Self> {
        Command::iter().find(|command| command.key_for(group_id) == key)
    }

    pub(crate) fn frame(self, group_id: u8, value: u8) -> Frame {
        Frame::new(self.key_for(group_id), value)
    }
}
