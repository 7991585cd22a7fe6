//! Uniden command builders and response parsers.
//!
//! This module provides functions to construct command byte sequences
//! for the supported scanner operations and to parse the corresponding
//! replies.
//!
//! All functions are pure -- they produce or consume byte vectors /
//! string slices without performing any I/O. The caller is responsible
//! for sending the bytes through the transaction engine and feeding the
//! reply body back into the parsers.
//!
//! The frequency pair below is the template for adding further
//! commands: encode a fixed-field command string, run it through the
//! transaction engine, decode the fixed-field numeric reply, rescale.

use scanlib_core::{Error, Result};

use crate::protocol::encode_command;

/// Frequencies on the wire are in hundreds of hertz.
pub const FREQ_SCALE_HZ: u64 = 100;

/// The frequency field is exactly 8 zero-padded decimal digits.
const FREQ_FIELD_WIDTH: usize = 8;

/// Build a "read status" command (`STS\r`).
///
/// The reply is a comma-separated identification record, e.g.
/// `SI BC250D,0000000000,104`.
pub fn cmd_get_status() -> Vec<u8> {
    encode_command("STS", "")
}

/// Build a "read model/version" command (`MDL\r`).
///
/// The reply looks like `VR1.00`. Not every firmware revision
/// implements this command.
pub fn cmd_get_model() -> Vec<u8> {
    encode_command("MDL", "")
}

/// Build a "read frequency" command (`RF\r`).
pub fn cmd_read_frequency() -> Vec<u8> {
    encode_command("RF", "")
}

/// Build a "set frequency" command (`RF{freq:08}\r`).
///
/// The frequency is encoded in hundreds of hertz as exactly 8
/// zero-padded ASCII digits.
///
/// # Arguments
///
/// * `freq_hz` - Frequency in hertz (e.g. `146_525_000` for 146.525 MHz).
pub fn cmd_set_frequency(freq_hz: u64) -> Vec<u8> {
    let scaled = freq_hz / FREQ_SCALE_HZ;
    encode_command("RF", &format!("{scaled:08}"))
}

/// Parse a frequency reply body into hertz.
///
/// The body is the delimiter-stripped data reply, `RF` followed by the
/// 8-digit field in hundreds of hertz.
///
/// # Arguments
///
/// * `body` - Reply body, e.g. `"RF01465250"`.
pub fn parse_frequency_response(body: &str) -> Result<u64> {
    if body.len() < 2 + FREQ_FIELD_WIDTH {
        return Err(Error::Protocol(format!(
            "frequency reply too short: {body:?}"
        )));
    }
    let digits = &body[2..];
    let scaled: u64 = digits
        .parse()
        .map_err(|e| Error::Protocol(format!("invalid frequency digits {digits:?} ({e})")))?;
    Ok(scaled * FREQ_SCALE_HZ)
}
