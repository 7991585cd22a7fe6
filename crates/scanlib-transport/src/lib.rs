//! scanlib-transport: Transport implementations for scanlib.
//!
//! Provides [`SerialTransport`], the serial port implementation of the
//! [`Transport`](scanlib_core::Transport) trait used to talk to real
//! scanner hardware. Protocol engines stay transport-agnostic; tests use
//! the mock transport from `scanlib-test-harness` instead.

pub mod serial;

pub use serial::SerialTransport;
