//! Mock transport for deterministic testing of protocol engines.
//!
//! [`MockTransport`] implements the [`Transport`] trait with pre-loaded
//! request/response pairs. This lets you test command encoding, reply
//! classification, and retry behaviour without real hardware.
//!
//! # Example
//!
//! ```
//! use scanlib_test_harness::MockTransport;
//!
//! let mut mock = MockTransport::new();
//! // Pre-load: when the protocol engine sends this request, return this reply.
//! mock.expect(b"STS\r", b"SI BC250D,0000000000,104\r");
//!
//! // Keep a handle to inspect traffic after the driver takes ownership.
//! let spy = mock.handle();
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use scanlib_core::error::{Error, Result};
use scanlib_core::transport::Transport;

/// A pre-loaded request/response pair for the mock transport.
#[derive(Debug, Clone)]
struct Expectation {
    /// The exact bytes we expect to be sent.
    request: Vec<u8>,
    /// The bytes to return when the matching request is received.
    response: Vec<u8>,
}

#[derive(Debug)]
struct MockState {
    /// Ordered queue of expected request/response pairs.
    expectations: VecDeque<Expectation>,
    /// The response data pending for the next `receive()` call.
    pending_response: Option<Vec<u8>>,
    /// Cursor into the pending response (how many bytes have been read so far).
    response_cursor: usize,
    /// Whether the transport is "connected".
    connected: bool,
    /// Whether the next `send()` call should fail with an I/O error.
    fail_next_send: bool,
    /// Log of all bytes sent through this transport.
    sent_log: Vec<Vec<u8>>,
    /// Number of `flush()` calls observed.
    flush_count: usize,
}

/// A mock [`Transport`] for testing protocol engines without hardware.
///
/// Expectations are consumed in order. When `send()` is called, the sent
/// data is recorded and matched against the next expectation. The
/// corresponding response is then returned by subsequent `receive()`
/// calls. Retrying engines re-send the same command, so a retry scenario
/// is modelled by queueing the same request several times with different
/// responses.
///
/// Replies can also be queued without a matching request via
/// [`push_response()`](MockTransport::push_response), for engines that
/// poll read-only (no command written).
///
/// If no expectation matches or the queue is exhausted, an error is
/// returned.
///
/// State lives behind an `Arc`, so a [`MockHandle`] obtained via
/// [`handle()`](MockTransport::handle) keeps observing traffic after the
/// transport itself has been boxed and handed to a driver.
#[derive(Debug)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

/// An inspection handle onto a [`MockTransport`].
///
/// Cheap to clone; reads the same shared state as the transport it was
/// taken from.
#[derive(Debug, Clone)]
pub struct MockHandle {
    state: Arc<Mutex<MockState>>,
}

fn lock(state: &Arc<Mutex<MockState>>) -> MutexGuard<'_, MockState> {
    // Poisoning only happens if a test already panicked while holding
    // the lock; propagating the panic is the right outcome there.
    state.lock().unwrap()
}

impl MockTransport {
    /// Create a new mock transport in the connected state.
    pub fn new() -> Self {
        MockTransport {
            state: Arc::new(Mutex::new(MockState {
                expectations: VecDeque::new(),
                pending_response: None,
                response_cursor: 0,
                connected: true,
                fail_next_send: false,
                sent_log: Vec::new(),
                flush_count: 0,
            })),
        }
    }

    /// Obtain an inspection handle that outlives this transport.
    pub fn handle(&self) -> MockHandle {
        MockHandle {
            state: Arc::clone(&self.state),
        }
    }

    /// Add an expected request/response pair.
    ///
    /// When `send()` is called with data matching `request`, subsequent
    /// `receive()` calls will return `response`.
    pub fn expect(&mut self, request: &[u8], response: &[u8]) {
        lock(&self.state).expectations.push_back(Expectation {
            request: request.to_vec(),
            response: response.to_vec(),
        });
    }

    /// Queue a response with no matching request.
    ///
    /// The bytes become available to `receive()` immediately, without a
    /// preceding `send()`. Used for read-only polls and unsolicited
    /// traffic.
    pub fn push_response(&mut self, response: &[u8]) {
        let mut state = lock(&self.state);
        state.pending_response = Some(response.to_vec());
        state.response_cursor = 0;
    }

    /// Make the next `send()` call fail with an I/O error.
    pub fn fail_next_send(&mut self) {
        lock(&self.state).fail_next_send = true;
    }

    /// Return a copy of all data that has been sent through this
    /// transport.
    ///
    /// Each element is the byte slice from one `send()` call.
    pub fn sent_data(&self) -> Vec<Vec<u8>> {
        lock(&self.state).sent_log.clone()
    }

    /// Return the number of expectations that have not yet been consumed.
    pub fn remaining_expectations(&self) -> usize {
        lock(&self.state).expectations.len()
    }

    /// Return how many times `flush()` has been called.
    pub fn flush_count(&self) -> usize {
        lock(&self.state).flush_count
    }

    /// Set the connected state of the mock transport.
    ///
    /// When set to `false`, subsequent `send()` and `receive()` calls
    /// will return [`Error::NotConnected`].
    pub fn set_connected(&mut self, connected: bool) {
        lock(&self.state).connected = connected;
    }
}

impl MockHandle {
    /// A copy of all data sent so far, one element per `send()` call.
    pub fn sent_data(&self) -> Vec<Vec<u8>> {
        lock(&self.state).sent_log.clone()
    }

    /// How many `send()` calls have been recorded.
    pub fn sent_count(&self) -> usize {
        lock(&self.state).sent_log.len()
    }

    /// The number of expectations not yet consumed.
    pub fn remaining_expectations(&self) -> usize {
        lock(&self.state).expectations.len()
    }

    /// How many times `flush()` has been called.
    pub fn flush_count(&self) -> usize {
        lock(&self.state).flush_count
    }

    /// Whether the transport is currently connected.
    pub fn is_connected(&self) -> bool {
        lock(&self.state).connected
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut state = lock(&self.state);

        if !state.connected {
            return Err(Error::NotConnected);
        }

        if state.fail_next_send {
            state.fail_next_send = false;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "injected send failure",
            )));
        }

        // Record what was sent.
        state.sent_log.push(data.to_vec());

        // Match against the next expectation.
        if let Some(expectation) = state.expectations.pop_front() {
            if data != expectation.request.as_slice() {
                return Err(Error::Protocol(format!(
                    "unexpected send data: expected {:02X?}, got {:02X?}",
                    expectation.request, data
                )));
            }
            state.pending_response = Some(expectation.response);
            state.response_cursor = 0;
            Ok(())
        } else {
            Err(Error::Protocol(
                "no more expectations in mock transport".into(),
            ))
        }
    }

    async fn receive(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize> {
        let mut state = lock(&self.state);

        if !state.connected {
            return Err(Error::NotConnected);
        }

        let Some(response) = state.pending_response.take() else {
            return Err(Error::Timeout);
        };

        let remaining = &response[state.response_cursor..];
        if remaining.is_empty() {
            state.response_cursor = 0;
            return Err(Error::Timeout);
        }
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        state.response_cursor += n;
        if state.response_cursor >= response.len() {
            // All response bytes consumed; clear for next exchange.
            state.response_cursor = 0;
        } else {
            state.pending_response = Some(response);
        }
        Ok(n)
    }

    async fn flush(&mut self) -> Result<()> {
        let mut state = lock(&self.state);
        if !state.connected {
            return Err(Error::NotConnected);
        }
        // Real transports discard stale input here. The mock only counts
        // calls: pending responses are left intact so a queued retry
        // reply survives the flush at the top of the next attempt.
        state.flush_count += 1;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        let mut state = lock(&self.state);
        state.connected = false;
        state.pending_response = None;
        state.response_cursor = 0;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        lock(&self.state).connected
    }
}
