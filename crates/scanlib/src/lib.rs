//! scanlib: unified async control for scanner radios.
//!
//! This facade crate re-exports the manufacturer-agnostic core API and
//! the individual backends, each behind a feature flag so applications
//! only compile the drivers they need.
//!
//! # Features
//!
//! | Feature  | Backend                                  |
//! |----------|------------------------------------------|
//! | `uniden` | Uniden Bearcat digital (BCD396T/BCD996T) |
//!
//! # Example
//!
//! ```no_run
//! use scanlib::{Scanner, uniden};
//!
//! # async fn run() -> scanlib::Result<()> {
//! let scanner = uniden::UnidenBuilder::new(uniden::models::bcd396t())
//!     .serial_port("/dev/ttyUSB0")
//!     .build()
//!     .await?;
//!
//! if let Some(info) = scanner.get_info().await {
//!     println!("{info}");
//! }
//! # Ok(())
//! # }
//! ```

pub use scanlib_core::{Error, Manufacturer, Result, Scanner, ScannerCapabilities, ScannerInfo};

pub use scanlib_transport::SerialTransport;

/// Uniden Bearcat digital scanner backend.
#[cfg(feature = "uniden")]
pub mod uniden {
    pub use scanlib_uniden::*;
}

/// Model descriptions for every scanner compiled into this build.
pub fn supported_scanners() -> Vec<ScannerInfo> {
    let mut scanners = Vec::new();

    #[cfg(feature = "uniden")]
    scanners.extend(
        scanlib_uniden::all_uniden_models()
            .iter()
            .map(ScannerInfo::from),
    );

    scanners
}
