//! Error types for scanlib.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Transport-layer, protocol-layer, and
//! application-layer errors are all captured here.

/// The error type for all scanlib operations.
///
/// Variants cover the full range of failure modes encountered when
/// communicating with scanner radios: physical transport failures,
/// protocol violations, timeouts, and commands the firmware (or this
/// driver) does not implement.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transport-level error (serial port open/configuration failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// A protocol-level error (missing terminator, unexpected reply
    /// content, or a negative acknowledge from the radio).
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Timed out waiting for a reply from the scanner.
    ///
    /// This typically indicates the scanner is powered off, the baud rate
    /// is wrong, or the cable is disconnected.
    #[error("timeout waiting for reply")]
    Timeout,

    /// The command is not implemented by this driver.
    ///
    /// Returned by the frequency get/set stubs, which document the wire
    /// encoding but are not wired to the transaction engine yet.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// An invalid parameter was passed, or the radio classified the
    /// command as malformed (`ERR` reply).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No connection to the scanner has been established.
    #[error("not connected")]
    NotConnected,

    /// The connection to the scanner was lost unexpectedly.
    #[error("connection lost")]
    ConnectionLost,

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
