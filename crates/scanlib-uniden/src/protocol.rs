//! Uniden digital-scanner text-protocol encoder/decoder.
//!
//! The Uniden BCD396T/BCD996T remote protocol uses carriage-return
//! terminated ASCII commands over a serial link. Commands are short
//! uppercase prefixes (usually two or three letters) followed by ASCII
//! parameters, terminated with `\r`.
//!
//! # Command format
//!
//! ```text
//! <prefix><params>\r
//! ```
//!
//! - `prefix`: Two or three uppercase ASCII characters identifying the
//!   command (e.g. `STS`, `MDL`, `RF`, `SQ`).
//! - `params`: Zero or more ASCII characters (digits, commas, etc.).
//! - Terminator: `\r` (0x0D).
//!
//! # Reply format
//!
//! A command that carries no data back is acknowledged with `OK\r`.
//! Rejections come in three flavours, each a fixed word:
//!
//! | Reply   | Meaning                                               |
//! |---------|-------------------------------------------------------|
//! | `OK\r`  | command accepted, no further data                     |
//! | `NG\r`  | valid command, but wrong mode or parameters           |
//! | `ORER\r`| overflow / out-of-range                               |
//! | `ERR\r` | malformed command                                     |
//!
//! Anything else is a data reply: the command prefix echoed back,
//! followed by the payload, terminated with `\r`. The exception is the
//! squelch command family (`SQ...`), whose replies start with a `+` or
//! `-` sign instead of echoing the prefix.

use bytes::{BufMut, BytesMut};

/// Command/reply terminator byte.
pub const TERMINATOR: u8 = b'\r';

/// Command/reply terminator as a string, for building command literals.
pub const EOM: &str = "\r";

/// Classification of one complete reply line.
///
/// Classification is content-only: the same four fixed words always map
/// to the same class regardless of which command was sent. The match is
/// exact, against the whole line including its terminator, so e.g.
/// `NGX\r` is a data reply, not a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyClass {
    /// `OK\r` -- command accepted, no data follows.
    Accepted,
    /// `NG\r` -- valid command issued in the wrong mode or with wrong
    /// parameters.
    Rejected,
    /// `ORER\r` -- overflow / value out of range.
    Overflow,
    /// `ERR\r` -- the command itself was malformed.
    FormatError,
    /// Anything else -- a data-bearing reply.
    Data,
}

/// Encode a command into raw bytes ready for transmission.
///
/// Concatenates the command prefix, parameters, and the terminator `\r`.
///
/// # Arguments
///
/// * `prefix` - The command prefix (e.g. `"STS"`, `"MDL"`, `"RF"`).
/// * `params` - Parameter string (may be empty for read commands).
///
/// # Example
///
/// ```
/// use scanlib_uniden::protocol::encode_command;
///
/// let cmd = encode_command("STS", "");
/// assert_eq!(cmd, b"STS\r");
///
/// let cmd = encode_command("RF", "01465250");
/// assert_eq!(cmd, b"RF01465250\r");
/// ```
pub fn encode_command(prefix: &str, params: &str) -> Vec<u8> {
    let capacity = prefix.len() + params.len() + 1;
    let mut buf = BytesMut::with_capacity(capacity);
    buf.put_slice(prefix.as_bytes());
    buf.put_slice(params.as_bytes());
    buf.put_u8(TERMINATOR);
    buf.to_vec()
}

/// Classify one complete reply line.
///
/// `line` must be the whole received string, terminator included.
pub fn classify_reply(line: &str) -> ReplyClass {
    match line {
        "OK\r" => ReplyClass::Accepted,
        "NG\r" => ReplyClass::Rejected,
        "ORER\r" => ReplyClass::Overflow,
        "ERR\r" => ReplyClass::FormatError,
        _ => ReplyClass::Data,
    }
}

/// Strip the trailing terminator from a reply line, if present.
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix(EOM).unwrap_or(line)
}

/// Check whether a data reply belongs to the issued command.
///
/// The first character of the reply must equal the first character of
/// the expected prefix; the second characters are compared only if the
/// expected prefix has a second character. An empty expected prefix
/// matches anything.
pub fn prefix_matches(reply: &str, expected: &str) -> bool {
    let e = expected.as_bytes();
    let r = reply.as_bytes();
    match e.first() {
        None => true,
        Some(&e0) => {
            if r.first() != Some(&e0) {
                return false;
            }
            match e.get(1) {
                None => true,
                Some(&e1) => r.get(1) == Some(&e1),
            }
        }
    }
}

/// Check for the squelch carve-out.
///
/// Squelch replies are sign-prefixed numerics (`+3\r`, `-2\r`) and do
/// not echo the `SQ` command prefix, so prefix validation must be
/// skipped: a command starting with `SQ` whose caller-supplied expected
/// prefix starts with `+` or `-` is accepted unconditionally.
pub fn is_squelch_exception(command: &[u8], expected: &str) -> bool {
    command.starts_with(b"SQ")
        && matches!(expected.as_bytes().first(), Some(b'+') | Some(b'-'))
}
