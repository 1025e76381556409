use std::io;

/// All error types that can occur when talking to a bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested brightness exceeds the hardware ceiling of `0x1B`.
    #[error("brightness {0:#04x} too high (max 0x1b)")]
    InvalidBrightness(u8),

    /// A UDP write toward the bridge failed.
    #[error("transport {action} error: {err:?}")]
    TransportWrite { action: String, err: io::Error },

    /// A command was issued before the controller's transport was opened.
    #[error("connection to controller not open")]
    ConnectionNotOpen,
}

impl Error {
    /// Create a new transport write error
    pub fn transport(action: &str, err: io::Error) -> Self {
        Error::TransportWrite {
            action: action.to_string(),
            err,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
