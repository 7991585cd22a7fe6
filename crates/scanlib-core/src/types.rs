//! Common types shared across scanlib crates.

use std::fmt;

/// Scanner manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manufacturer {
    /// Uniden America Corporation (Bearcat scanners).
    Uniden,
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Manufacturer::Uniden => write!(f, "Uniden"),
        }
    }
}

/// Static information about a connected scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerInfo {
    /// The manufacturer of the scanner.
    pub manufacturer: Manufacturer,
    /// Human-readable model name (e.g. "BCD396T").
    pub model_name: String,
    /// Machine-readable model identifier.
    pub model_id: String,
}

/// Capability description for a scanner model.
///
/// Drivers consult these flags before issuing commands so that an
/// unsupported operation fails fast instead of waiting out a serial
/// timeout against firmware that will never answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerCapabilities {
    /// Whether the model answers the model/version identification query.
    ///
    /// Not every firmware revision implements it; the info query
    /// degrades gracefully when this is false or the query fails.
    pub has_model_ident: bool,
    /// Whether direct frequency get/set is wired up in the driver.
    pub has_frequency_control: bool,
    /// Number of conventional memory channels.
    pub memory_channels: u32,
}
