//! UnidenScanner -- the [`Scanner`] trait implementation for Uniden
//! digital scanners.
//!
//! This module ties the protocol codec ([`protocol`], [`commands`]) to a
//! [`Transport`] to produce a working Uniden backend. The centrepiece is
//! the transaction engine: one command/reply exchange over a half-duplex
//! serial link, with reply classification, prefix validation, and a
//! bounded retry loop shared across every transient failure cause.
//!
//! The protocol is strictly one-request-at-a-time: the transport sits
//! behind a mutex that is held for the whole transaction, and a
//! cooperative decode-suspension flag tells any unsolicited-notification
//! decoder to keep its hands off the byte stream while an exchange is in
//! flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use scanlib_core::error::{Error, Result};
use scanlib_core::scanner::Scanner;
use scanlib_core::transport::Transport;
use scanlib_core::types::{ScannerCapabilities, ScannerInfo};

use crate::commands;
use crate::models::UnidenModel;
use crate::protocol::{
    EOM, ReplyClass, TERMINATOR, classify_reply, is_squelch_exception, prefix_matches,
    strip_terminator,
};

/// Replies longer than this are treated as framing garbage.
const MAX_REPLY_LEN: usize = 256;

/// Chunk size for draining the transport.
const READ_CHUNK: usize = 64;

/// The status record must carry at least one byte past its 3-character
/// lead-in to be usable.
const MIN_STATUS_LEN: usize = 4;

/// Length of the fixed lead-in on the status reply (`"SI "`).
const STATUS_LEAD_IN: usize = 3;

/// A connected Uniden scanner.
///
/// Constructed via [`UnidenBuilder`](crate::builder::UnidenBuilder). All
/// radio communication goes through the [`Transport`] provided at build
/// time.
pub struct UnidenScanner {
    transport: Arc<Mutex<Box<dyn Transport>>>,
    model: UnidenModel,
    max_retries: u32,
    command_timeout: Duration,
    info: ScannerInfo,
    /// Cooperative guard: while true, an unsolicited-notification decoder
    /// sharing this connection must not consume bytes. Set for the
    /// duration of each transaction, cleared on every exit path.
    decode_suspended: Arc<AtomicBool>,
}

/// RAII holder for the decode-suspension flag.
///
/// Sets the flag on construction and clears it on drop, so every return
/// path out of the transaction engine -- success, retry exhaustion, or
/// fatal I/O error -- restores it.
struct DecodeSuspendGuard {
    flag: Arc<AtomicBool>,
}

impl DecodeSuspendGuard {
    fn hold(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        DecodeSuspendGuard {
            flag: Arc::clone(flag),
        }
    }
}

impl Drop for DecodeSuspendGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Read one reply line from the transport.
///
/// Accumulates bytes until the terminator is seen. A timeout with
/// nothing read is a read failure; a timeout with partial data returns
/// the partial line so the caller's framing check can flag it. Bytes
/// read past the first terminator are discarded.
async fn read_reply(transport: &mut dyn Transport, timeout: Duration) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    let mut buf = [0u8; READ_CHUNK];

    loop {
        match tokio::time::timeout(timeout, transport.receive(&mut buf, timeout)).await {
            Ok(Ok(n)) => {
                line.extend_from_slice(&buf[..n]);
                if let Some(pos) = line.iter().position(|&b| b == TERMINATOR) {
                    line.truncate(pos + 1);
                    return Ok(line);
                }
                if line.len() >= MAX_REPLY_LEN {
                    // Unterminated garbage; let the framing check reject it.
                    return Ok(line);
                }
            }
            Ok(Err(Error::Timeout)) | Err(_) => {
                if line.is_empty() {
                    return Err(Error::Timeout);
                }
                return Ok(line);
            }
            Ok(Err(e)) => return Err(e),
        }
    }
}

impl UnidenScanner {
    /// Create a new `UnidenScanner` from its constituent parts.
    ///
    /// This is called by [`UnidenBuilder`](crate::builder::UnidenBuilder);
    /// callers should use the builder API instead.
    pub(crate) fn new(
        transport: Box<dyn Transport>,
        model: UnidenModel,
        max_retries: u32,
        command_timeout: Duration,
    ) -> Self {
        let info = ScannerInfo::from(&model);
        UnidenScanner {
            transport: Arc::new(Mutex::new(transport)),
            model,
            max_retries,
            command_timeout,
            info,
            decode_suspended: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a transaction currently holds the connection.
    ///
    /// An unsolicited-notification decoder sharing the connection must
    /// check this before consuming bytes. Always false between calls.
    pub fn decode_suspended(&self) -> bool {
        self.decode_suspended.load(Ordering::SeqCst)
    }

    /// Execute one command/reply transaction.
    ///
    /// Sends `command` (if present -- `None` means a read-only poll),
    /// reads one `\r`-terminated reply line, classifies it, and returns
    /// the terminator-stripped body. An `OK\r` acknowledge yields an
    /// empty string.
    ///
    /// `expected_reply` is the prefix the reply must start with; when
    /// `None` it defaults to the command itself (terminator stripped).
    /// With neither a command nor an expected prefix, any data reply is
    /// accepted. The first character is compared always, the second only
    /// if the expected prefix has one. Squelch commands (`SQ...`) with a
    /// sign-prefixed expected reply (`+`/`-`) skip validation entirely,
    /// since their replies do not echo the command prefix.
    ///
    /// # Retries
    ///
    /// Read timeouts, missing terminators, and reply-prefix mismatches
    /// all draw on one shared retry budget (`max_retries` re-attempts
    /// after the initial try). Write failures are assumed non-transient
    /// (link down) and are fatal immediately. `NG`/`ORER` surface as
    /// [`Error::Protocol`] and `ERR` as [`Error::InvalidParameter`]
    /// without retrying -- the radio understood us fine and said no.
    pub async fn transaction(
        &self,
        command: Option<&[u8]>,
        expected_reply: Option<&str>,
    ) -> Result<String> {
        let _suspend = DecodeSuspendGuard::hold(&self.decode_suspended);
        let mut transport = self.transport.lock().await;

        // The squelch carve-out only applies to a caller-supplied
        // expected prefix, never the command-derived default.
        let squelch = match (command, expected_reply) {
            (Some(cmd), Some(expected)) => is_squelch_exception(cmd, expected),
            _ => false,
        };

        let expected: Option<&str> = expected_reply.or_else(|| {
            command
                .and_then(|c| std::str::from_utf8(c).ok())
                .map(strip_terminator)
        });

        let mut last_err = Error::Timeout;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                debug!(attempt, "transaction retry");
            }

            transport.flush().await?;

            if let Some(cmd) = command {
                transport.send(cmd).await?;
            }

            let line = match read_reply(&mut **transport, self.command_timeout).await {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "read failed");
                    last_err = e;
                    continue;
                }
            };

            // The wire protocol is 7-bit ASCII; anything else is line
            // noise. Rejecting non-ASCII here also guarantees that byte
            // offsets into a returned body land on char boundaries.
            let text = match String::from_utf8(line) {
                Ok(text) if text.is_ascii() => text,
                _ => {
                    debug!("reply is not ASCII");
                    last_err = Error::Protocol("reply is not ASCII".into());
                    continue;
                }
            };

            if !text.ends_with(EOM) {
                debug!(reply = %text.escape_debug(), "reply not correctly terminated");
                last_err = Error::Protocol(format!("reply not correctly terminated: {text:?}"));
                continue;
            }

            // Classification is exact-match on the whole line, terminator
            // included; everything else is a data reply.
            match classify_reply(&text) {
                ReplyClass::Accepted => return Ok(String::new()),
                ReplyClass::Rejected | ReplyClass::Overflow => {
                    debug!(reply = %text.escape_debug(), "command rejected (NG/ORER)");
                    return Err(Error::Protocol(format!(
                        "command rejected: {}",
                        strip_terminator(&text)
                    )));
                }
                ReplyClass::FormatError => {
                    debug!("command format error (ERR)");
                    return Err(Error::InvalidParameter("command format error".into()));
                }
                ReplyClass::Data => {}
            }

            let body = strip_terminator(&text);

            if squelch {
                return Ok(body.to_string());
            }

            if let Some(exp) = expected {
                if !prefix_matches(body, exp) {
                    debug!(reply = %body, expected = %exp, "unexpected reply");
                    last_err = Error::Protocol(format!("unexpected reply: {body:?}"));
                    continue;
                }
            }

            return Ok(body.to_string());
        }

        Err(last_err)
    }
}

#[async_trait]
impl Scanner for UnidenScanner {
    fn info(&self) -> &ScannerInfo {
        &self.info
    }

    fn capabilities(&self) -> &ScannerCapabilities {
        &self.model.capabilities
    }

    /// Query the radio for a human-readable identification string.
    ///
    /// Issues the status query (`STS`), strips its fixed `SI ` lead-in,
    /// and -- on models that answer it -- appends the model/version
    /// reply on a second line. A failed or unsupported version query
    /// degrades to the status record alone; a failed or undersized
    /// status reply yields `None`.
    async fn get_info(&self) -> Option<String> {
        let status = match self
            .transaction(Some(&commands::cmd_get_status()), Some("SI"))
            .await
        {
            Ok(status) => status,
            Err(e) => {
                debug!(error = %e, "status query failed");
                return None;
            }
        };

        if status.len() < MIN_STATUS_LEN {
            debug!(len = status.len(), "status reply too short");
            return None;
        }

        let mut out = status[STATUS_LEAD_IN..].to_string();

        if self.model.capabilities.has_model_ident {
            match self
                .transaction(Some(&commands::cmd_get_model()), Some("VR"))
                .await
            {
                Ok(version) => {
                    out.push('\n');
                    out.push(' ');
                    out.push_str(&version);
                }
                Err(e) => {
                    // Not every firmware answers MDL; the field is optional.
                    debug!(error = %e, "model/version query failed, omitting");
                }
            }
        }

        Some(out)
    }

    /// Get the currently tuned frequency.
    ///
    /// Not wired up yet. The wire encoding is ready in
    /// [`commands::cmd_read_frequency`] and
    /// [`commands::parse_frequency_response`]; a future implementation
    /// runs the command through [`transaction`](UnidenScanner::transaction)
    /// and rescales the 8-digit reply field.
    async fn get_frequency(&self) -> Result<u64> {
        Err(Error::NotImplemented(
            "frequency readback not supported".into(),
        ))
    }

    /// Tune to a frequency.
    ///
    /// Not wired up yet; see [`commands::cmd_set_frequency`] for the
    /// intended encoding.
    async fn set_frequency(&self, _freq_hz: u64) -> Result<()> {
        Err(Error::NotImplemented(
            "frequency control not supported".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bcd396t;
    use scanlib_test_harness::MockTransport;

    /// Helper to build a UnidenScanner with a MockTransport for testing.
    fn make_test_scanner(mock: MockTransport) -> UnidenScanner {
        UnidenScanner::new(
            Box::new(mock),
            bcd396t(),
            3, // max_retries
            Duration::from_millis(100),
        )
    }

    // -----------------------------------------------------------------
    // Data replies
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn data_reply_is_terminator_stripped() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"SI BC250D,0000000000,104\r");

        let scanner = make_test_scanner(mock);
        let body = scanner
            .transaction(Some(b"STS\r"), Some("SI"))
            .await
            .unwrap();
        assert_eq!(body, "SI BC250D,0000000000,104");
    }

    #[tokio::test]
    async fn expected_prefix_defaults_to_command() {
        // Reply echoes the command prefix, so the default passes.
        let mut mock = MockTransport::new();
        mock.expect(b"MDL\r", b"MDL BCD396T\r");

        let scanner = make_test_scanner(mock);
        let body = scanner.transaction(Some(b"MDL\r"), None).await.unwrap();
        assert_eq!(body, "MDL BCD396T");
    }

    #[tokio::test]
    async fn default_prefix_rejects_non_echoing_reply() {
        // STS is answered with "SI ...", which does not echo the command
        // prefix; without an explicit expected prefix the engine retries
        // and gives up.
        let mut mock = MockTransport::new();
        for _ in 0..4 {
            mock.expect(b"STS\r", b"SI BC250D,0000000000,104\r");
        }

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"STS\r"), None).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[tokio::test]
    async fn no_command_no_prefix_accepts_any_data_reply() {
        let mut mock = MockTransport::new();
        mock.push_response(b"GLG 0,1\r");

        let scanner = make_test_scanner(mock);
        let body = scanner.transaction(None, None).await.unwrap();
        assert_eq!(body, "GLG 0,1");
    }

    #[tokio::test]
    async fn read_only_poll_with_expected_prefix() {
        let mut mock = MockTransport::new();
        mock.push_response(b"GLG 0,1\r");

        let scanner = make_test_scanner(mock);
        let body = scanner.transaction(None, Some("GLG")).await.unwrap();
        assert_eq!(body, "GLG 0,1");
    }

    // -----------------------------------------------------------------
    // Acknowledge / rejection classification
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn ok_reply_yields_empty_success() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"OK\r");

        let scanner = make_test_scanner(mock);
        let body = scanner.transaction(Some(b"STS\r"), None).await.unwrap();
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn err_reply_is_invalid_parameter_without_retry() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"ERR\r");

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"STS\r"), None).await;
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn ng_reply_is_protocol_error_without_retry() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"NG\r");

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"STS\r"), None).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[tokio::test]
    async fn orer_reply_is_protocol_error_without_retry() {
        let mut mock = MockTransport::new();
        mock.expect(b"RF01465250\r", b"ORER\r");

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"RF01465250\r"), None).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[tokio::test]
    async fn rejections_classify_regardless_of_command() {
        // Classification is content-only.
        let mut mock = MockTransport::new();
        mock.expect(b"MDL\r", b"NG\r");

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"MDL\r"), Some("VR")).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    // -----------------------------------------------------------------
    // Retry behaviour
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn missing_terminator_retried_then_protocol_error() {
        let mut mock = MockTransport::new();
        // 1 initial attempt + 3 retries, all unterminated.
        for _ in 0..4 {
            mock.expect(b"STS\r", b"SI BC250D");
        }

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"STS\r"), Some("SI")).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[tokio::test]
    async fn missing_terminator_consumes_exactly_the_budget() {
        let mut mock = MockTransport::new();
        // One spare expectation proves the engine stops at the budget.
        for _ in 0..5 {
            mock.expect(b"STS\r", b"SI BC250D");
        }
        let spy = mock.handle();

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"STS\r"), Some("SI")).await;

        assert!(matches!(result, Err(Error::Protocol(_))));
        // 1 initial attempt + 3 retries, each preceded by a flush.
        assert_eq!(spy.sent_count(), 4);
        assert_eq!(spy.flush_count(), 4);
        assert_eq!(spy.remaining_expectations(), 1);
    }

    #[tokio::test]
    async fn bad_frame_then_good_frame_succeeds() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"SI BC250D"); // unterminated
        mock.expect(b"STS\r", b"SI BC250D,0000000000,104\r");

        let scanner = make_test_scanner(mock);
        let body = scanner
            .transaction(Some(b"STS\r"), Some("SI"))
            .await
            .unwrap();
        assert_eq!(body, "SI BC250D,0000000000,104");
    }

    #[tokio::test]
    async fn non_ascii_reply_retried_then_protocol_error() {
        let mut mock = MockTransport::new();
        // Valid UTF-8 but not ASCII: a combining accent inside the body.
        // Must be rejected as line noise, not handed to the caller.
        for _ in 0..4 {
            mock.expect(b"STS\r", b"SI\xCC\x81x\r");
        }

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"STS\r"), Some("SI")).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[tokio::test]
    async fn prefix_mismatch_retried_then_protocol_error() {
        let mut mock = MockTransport::new();
        for _ in 0..4 {
            mock.expect(b"STS\r", b"XX unrelated\r");
        }

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"STS\r"), Some("SI")).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[tokio::test]
    async fn prefix_mismatch_then_match_succeeds() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"XX unrelated\r");
        mock.expect(b"STS\r", b"SI BC250D,0000000000,104\r");

        let scanner = make_test_scanner(mock);
        let body = scanner
            .transaction(Some(b"STS\r"), Some("SI"))
            .await
            .unwrap();
        assert_eq!(body, "SI BC250D,0000000000,104");
    }

    #[tokio::test]
    async fn read_timeout_retried_then_surfaced() {
        let mut mock = MockTransport::new();
        // Empty responses: the send is accepted but nothing comes back.
        for _ in 0..4 {
            mock.expect(b"STS\r", b"");
        }

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"STS\r"), Some("SI")).await;
        assert!(matches!(result, Err(Error::Timeout)));
    }

    #[tokio::test]
    async fn write_failure_is_fatal_without_retry() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"SI BC250D,0000000000,104\r");
        mock.fail_next_send();
        let spy = mock.handle();

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"STS\r"), Some("SI")).await;
        assert!(matches!(result, Err(Error::Io(_))));
        // No retry happened: the expectation is still queued.
        assert_eq!(spy.remaining_expectations(), 1);
    }

    // -----------------------------------------------------------------
    // Squelch exception
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn squelch_reply_bypasses_prefix_validation() {
        let mut mock = MockTransport::new();
        mock.expect(b"SQ\r", b"+2\r");

        let scanner = make_test_scanner(mock);
        let body = scanner.transaction(Some(b"SQ\r"), Some("+")).await.unwrap();
        assert_eq!(body, "+2");
    }

    #[tokio::test]
    async fn squelch_accepts_body_regardless_of_sign() {
        // Expected "+" but the radio answered "-5": still accepted.
        let mut mock = MockTransport::new();
        mock.expect(b"SQ\r", b"-5\r");

        let scanner = make_test_scanner(mock);
        let body = scanner.transaction(Some(b"SQ\r"), Some("+")).await.unwrap();
        assert_eq!(body, "-5");
    }

    #[tokio::test]
    async fn squelch_exception_needs_signed_expected_prefix() {
        // With an ordinary expected prefix the normal validation runs.
        let mut mock = MockTransport::new();
        for _ in 0..4 {
            mock.expect(b"SQ\r", b"+2\r");
        }

        let scanner = make_test_scanner(mock);
        let result = scanner.transaction(Some(b"SQ\r"), Some("SQ")).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    // -----------------------------------------------------------------
    // Decode-suspension flag
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn decode_flag_clear_around_successful_transaction() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"SI BC250D,0000000000,104\r");

        let scanner = make_test_scanner(mock);
        assert!(!scanner.decode_suspended());
        scanner
            .transaction(Some(b"STS\r"), Some("SI"))
            .await
            .unwrap();
        assert!(!scanner.decode_suspended());
    }

    #[tokio::test]
    async fn decode_flag_clear_after_rejection() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"ERR\r");

        let scanner = make_test_scanner(mock);
        let _ = scanner.transaction(Some(b"STS\r"), None).await;
        assert!(!scanner.decode_suspended());
    }

    #[tokio::test]
    async fn decode_flag_clear_after_retry_exhaustion() {
        let mut mock = MockTransport::new();
        for _ in 0..4 {
            mock.expect(b"STS\r", b"");
        }

        let scanner = make_test_scanner(mock);
        let _ = scanner.transaction(Some(b"STS\r"), Some("SI")).await;
        assert!(!scanner.decode_suspended());
    }

    #[tokio::test]
    async fn decode_flag_clear_after_write_failure() {
        let mut mock = MockTransport::new();
        mock.fail_next_send();
        mock.expect(b"STS\r", b"OK\r");

        let scanner = make_test_scanner(mock);
        let _ = scanner.transaction(Some(b"STS\r"), None).await;
        assert!(!scanner.decode_suspended());
    }

    // -----------------------------------------------------------------
    // Info query
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn get_info_combines_status_and_version() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"SI BC250D,0000000000,104\r");
        mock.expect(b"MDL\r", b"VR1.00\r");

        let scanner = make_test_scanner(mock);
        let info = scanner.get_info().await.unwrap();
        assert_eq!(info, "BC250D,0000000000,104\n VR1.00");
    }

    #[tokio::test]
    async fn get_info_degrades_when_version_query_fails() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"SI BC250D,0000000000,104\r");
        mock.expect(b"MDL\r", b"ERR\r");

        let scanner = make_test_scanner(mock);
        let info = scanner.get_info().await.unwrap();
        assert_eq!(info, "BC250D,0000000000,104");
    }

    #[tokio::test]
    async fn get_info_none_when_status_fails() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"NG\r");

        let scanner = make_test_scanner(mock);
        assert_eq!(scanner.get_info().await, None);
    }

    #[tokio::test]
    async fn get_info_none_when_status_too_short() {
        let mut mock = MockTransport::new();
        mock.expect(b"STS\r", b"SI \r");

        let scanner = make_test_scanner(mock);
        assert_eq!(scanner.get_info().await, None);
    }

    #[tokio::test]
    async fn get_info_none_on_non_ascii_status() {
        // A multi-byte character straddling the lead-in boundary must not
        // panic the lead-in strip; the engine rejects the line upstream.
        let mut mock = MockTransport::new();
        for _ in 0..4 {
            mock.expect(b"STS\r", b"SI\xCC\x81x\r");
        }

        let scanner = make_test_scanner(mock);
        assert_eq!(scanner.get_info().await, None);
    }

    // -----------------------------------------------------------------
    // Stubs / static data
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn frequency_stubs_not_implemented() {
        let scanner = make_test_scanner(MockTransport::new());
        assert!(matches!(
            scanner.get_frequency().await,
            Err(Error::NotImplemented(_))
        ));
        assert!(matches!(
            scanner.set_frequency(146_525_000).await,
            Err(Error::NotImplemented(_))
        ));
    }

    #[tokio::test]
    async fn info_and_capabilities() {
        let scanner = make_test_scanner(MockTransport::new());
        assert_eq!(scanner.info().model_name, "BCD396T");
        assert!(scanner.capabilities().has_model_ident);
        assert!(!scanner.capabilities().has_frequency_control);
    }
}
