//! The `Scanner` trait -- unified interface for all scanner backends.
//!
//! This trait is the primary API surface of scanlib. Monitoring tools
//! and logging frontends program against `dyn Scanner` without needing
//! to know which manufacturer's protocol is in use.
//!
//! Each manufacturer backend (currently `scanlib-uniden`) provides a
//! concrete type that implements this trait.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::types::{ScannerCapabilities, ScannerInfo};

/// Unified asynchronous interface for controlling a scanner radio.
///
/// All methods that communicate with the radio are `async` because the
/// underlying transport involves serial round-trips. Methods that return
/// cached state ([`info()`](Scanner::info) and
/// [`capabilities()`](Scanner::capabilities)) are synchronous.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Return static information about the connected scanner
    /// (manufacturer, model).
    fn info(&self) -> &ScannerInfo;

    /// Return the capabilities of the connected scanner.
    fn capabilities(&self) -> &ScannerCapabilities;

    /// Query the radio for a human-readable identification string.
    ///
    /// Combines whatever status and version queries the protocol offers.
    /// Returns `None` if the radio cannot be identified; a partially
    /// answered query degrades to a shorter string rather than an error.
    async fn get_info(&self) -> Option<String> {
        None
    }

    /// Get the currently tuned frequency in hertz.
    async fn get_frequency(&self) -> Result<u64> {
        Err(Error::NotImplemented(
            "frequency control not supported".into(),
        ))
    }

    /// Tune to a frequency in hertz.
    async fn set_frequency(&self, _freq_hz: u64) -> Result<()> {
        Err(Error::NotImplemented(
            "frequency control not supported".into(),
        ))
    }
}
