//! Builder for connecting to Uniden scanners.
//!
//! # Example
//!
//! ```no_run
//! use scanlib_uniden::{UnidenBuilder, models};
//!
//! # async fn connect() -> scanlib_core::Result<()> {
//! let scanner = UnidenBuilder::new(models::bcd396t())
//!     .serial_port("/dev/ttyUSB0")
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use scanlib_core::error::{Error, Result};
use scanlib_core::transport::Transport;
use scanlib_transport::SerialTransport;

use crate::models::UnidenModel;
use crate::rig::UnidenScanner;

/// Default number of re-attempts after a failed exchange.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default per-read timeout for one reply.
const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_millis(500);

/// Fluent builder for [`UnidenScanner`].
///
/// The baud rate defaults to the model's factory setting; override it
/// with [`baud_rate()`](UnidenBuilder::baud_rate) if the radio has been
/// reconfigured.
pub struct UnidenBuilder {
    model: UnidenModel,
    serial_port: Option<String>,
    baud_rate: Option<u32>,
    max_retries: u32,
    command_timeout: Duration,
}

impl UnidenBuilder {
    /// Start building a connection to the given model.
    pub fn new(model: UnidenModel) -> Self {
        UnidenBuilder {
            model,
            serial_port: None,
            baud_rate: None,
            max_retries: DEFAULT_MAX_RETRIES,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Serial device path (e.g. `/dev/ttyUSB0` or `COM3`).
    pub fn serial_port(mut self, port: impl Into<String>) -> Self {
        self.serial_port = Some(port.into());
        self
    }

    /// Override the model's default baud rate.
    pub fn baud_rate(mut self, baud: u32) -> Self {
        self.baud_rate = Some(baud);
        self
    }

    /// Number of re-attempts after a transient exchange failure.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Per-read timeout waiting for one reply line.
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Open the configured serial port and build the scanner.
    pub async fn build(self) -> Result<UnidenScanner> {
        let port = self
            .serial_port
            .as_deref()
            .ok_or_else(|| Error::InvalidParameter("serial port not configured".into()))?;
        let baud = self.baud_rate.unwrap_or(self.model.default_baud_rate);
        let transport = SerialTransport::open(port, baud).await?;
        Ok(UnidenScanner::new(
            Box::new(transport),
            self.model,
            self.max_retries,
            self.command_timeout,
        ))
    }

    /// Build the scanner over an existing transport.
    ///
    /// Used by tests with a mock transport and by callers that manage
    /// the link themselves.
    pub fn build_with_transport(self, transport: Box<dyn Transport>) -> UnidenScanner {
        UnidenScanner::new(
            transport,
            self.model,
            self.max_retries,
            self.command_timeout,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{bcd396t, bcd996t};
    use scanlib_core::scanner::Scanner;
    use scanlib_test_harness::MockTransport;

    #[test]
    fn builder_with_mock_transport() {
        let scanner = UnidenBuilder::new(bcd396t())
            .max_retries(1)
            .command_timeout(Duration::from_millis(50))
            .build_with_transport(Box::new(MockTransport::new()));
        assert_eq!(scanner.info().model_name, "BCD396T");
    }

    #[test]
    fn builder_carries_model_capabilities() {
        let scanner =
            UnidenBuilder::new(bcd996t()).build_with_transport(Box::new(MockTransport::new()));
        assert_eq!(scanner.capabilities().memory_channels, 6000);
        assert!(!scanner.capabilities().has_frequency_control);
    }

    #[tokio::test]
    async fn build_without_port_is_invalid_parameter() {
        let result = UnidenBuilder::new(bcd396t()).build().await;
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}
