//! scanlib-core: Core traits, types, and error definitions for scanlib.
//!
//! This crate defines the manufacturer-agnostic abstractions that all
//! scanlib backends implement. Applications depend on these types
//! without pulling in any specific scanner driver.
//!
//! # Key types
//!
//! - [`Scanner`] -- the unified trait for controlling any scanner radio
//! - [`Transport`] -- byte-level communication channel
//! - [`Error`] / [`Result`] -- error handling

pub mod error;
pub mod scanner;
pub mod transport;
pub mod types;

// Re-export key types at crate root for ergonomic `use scanlib_core::*`.
pub use error::{Error, Result};
pub use scanner::Scanner;
pub use transport::Transport;
pub use types::{Manufacturer, ScannerCapabilities, ScannerInfo};
