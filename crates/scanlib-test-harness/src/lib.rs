//! scanlib-test-harness: Test utilities and mock transports for scanlib.
//!
//! This crate provides [`MockTransport`] for deterministic unit testing
//! of protocol engines without requiring real scanner hardware.

pub mod mock_serial;

pub use mock_serial::{MockHandle, MockTransport};
