//! Uniden model definitions.
//!
//! Each supported scanner is described by a [`UnidenModel`] struct that
//! captures its default baud rate and capabilities. The BCD396T and
//! BCD996T share one remote protocol; commands documented for the
//! BCD996T may be absent or behave differently on the BCD396T, which is
//! why capability flags live here rather than in the driver.
//!
//! Models are defined as factory functions (e.g. [`bcd396t()`]) that
//! return a fully populated [`UnidenModel`].
//!
//! | Model   | Form factor | Default baud | Channels |
//! |---------|-------------|--------------|----------|
//! | BCD396T | handheld    | 57600        | 6000     |
//! | BCD996T | mobile      | 115200       | 6000     |

use scanlib_core::{Manufacturer, ScannerCapabilities, ScannerInfo};

/// Static model definition for a Uniden scanner.
#[derive(Debug, Clone)]
pub struct UnidenModel {
    /// Human-readable model name (e.g. "BCD396T").
    pub name: &'static str,
    /// Machine-readable model identifier.
    pub model_id: &'static str,
    /// Default serial baud rate.
    pub default_baud_rate: u32,
    /// Full capability description for this model.
    pub capabilities: ScannerCapabilities,
}

impl From<&UnidenModel> for ScannerInfo {
    fn from(model: &UnidenModel) -> Self {
        ScannerInfo {
            manufacturer: Manufacturer::Uniden,
            model_name: model.name.to_string(),
            model_id: model.model_id.to_string(),
        }
    }
}

/// BCD396T model definition.
///
/// The BCD396T is Uniden's handheld TrunkTracker IV digital scanner,
/// introduced in 2005. APCO-25 digital decoding, 6000 dynamically
/// allocated channels, remote control over a slide-on serial/USB cable.
pub fn bcd396t() -> UnidenModel {
    UnidenModel {
        name: "BCD396T",
        model_id: "BCD396T",
        default_baud_rate: 57_600,
        capabilities: ScannerCapabilities {
            has_model_ident: true,
            has_frequency_control: false,
            memory_channels: 6000,
        },
    }
}

/// BCD996T model definition.
///
/// The BCD996T is the mobile/base counterpart of the BCD396T, introduced
/// in 2006. Same TrunkTracker IV feature set with a rear-panel RS-232
/// jack in addition to USB.
pub fn bcd996t() -> UnidenModel {
    UnidenModel {
        name: "BCD996T",
        model_id: "BCD996T",
        default_baud_rate: 115_200,
        capabilities: ScannerCapabilities {
            has_model_ident: true,
            has_frequency_control: false,
            memory_channels: 6000,
        },
    }
}

/// Returns a list of all supported Uniden model definitions.
///
/// Useful for building model selection UIs or iterating over all known
/// models.
pub fn all_uniden_models() -> Vec<UnidenModel> {
    vec![bcd396t(), bcd996t()]
}
