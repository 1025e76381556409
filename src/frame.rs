//! The fixed 3-byte command frame.

use serde::{Deserialize, Serialize};

/// Terminator byte carried by every frame.
pub const SUFFIX: u8 = 0x55;

/// A single command frame as it travels on the wire.
///
/// Every command the bridge understands is exactly three bytes: an operation
/// key, an operand, and the fixed `0x55` terminator. There are no
/// variable-length frames in this protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    key: u8,
    value: u8,
    suffix: u8,
}

impl Frame {
    /// Build a frame for the given key and operand.
    ///
    /// No legality check happens here; key and value validation is the
    /// caller's responsibility.
    pub fn new(key: u8, value: u8) -> Self {
        Frame {
            key,
            value,
            suffix: SUFFIX,
        }
    }

    pub fn key(&self) -> u8 {
        self.key
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Serialize to wire order: key, value, suffix.
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.key, self.value, self.suffix]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let frame = Frame::new(0x40, 0xD5);
        assert_eq!(frame.to_bytes(), [0x40, 0xD5, 0x55]);
    }

    #[test]
    fn test_suffix_is_fixed() {
        for key in [0x00, 0x41, 0x42, 0xC6, 0xFF] {
            let frame = Frame::new(key, 0);
            assert_eq!(frame.to_bytes()[2], SUFFIX);
        }
    }
}
