//! Transport trait for scanner communication.
//!
//! The [`Transport`] trait abstracts over the physical link to a scanner.
//! Implementations exist for serial ports (the common case for Uniden
//! units) and mock transports for testing.
//!
//! Protocol engines (e.g. the transaction engine in `scanlib-uniden`)
//! operate on a `Transport` rather than directly on a serial port,
//! enabling both real hardware control and deterministic unit testing
//! with `MockTransport` from the `scanlib-test-harness` crate.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;

/// Asynchronous byte-level transport to a scanner.
///
/// Implementations handle buffering and error recovery at the physical
/// layer. Protocol-level concerns (command framing, reply
/// classification, retries) are handled by the protocol engines that
/// consume this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send raw bytes to the scanner.
    ///
    /// Implementations should block until all bytes have been written to
    /// the underlying transport (serial TX buffer, etc.).
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive bytes from the scanner into the provided buffer.
    ///
    /// Returns the number of bytes actually read. Will wait up to
    /// `timeout` for data to arrive; returns
    /// [`Error::Timeout`](crate::error::Error::Timeout) if no data is
    /// received within the deadline.
    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize>;

    /// Discard any unread input pending on the transport.
    ///
    /// The transaction engine calls this before each write so a stale or
    /// half-read reply from an earlier exchange cannot be mistaken for
    /// the reply to the current command.
    async fn flush(&mut self) -> Result<()>;

    /// Close the transport connection.
    ///
    /// After calling `close()`, subsequent `send()` and `receive()` calls
    /// should return [`Error::NotConnected`](crate::error::Error::NotConnected).
    async fn close(&mut self) -> Result<()>;

    /// Check whether the transport is currently connected.
    fn is_connected(&self) -> bool;
}
