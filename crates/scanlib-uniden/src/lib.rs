//! scanlib-uniden: Uniden Bearcat digital scanner backend for scanlib.
//!
//! Implements the carriage-return terminated ASCII remote protocol used
//! by the BCD396T and BCD996T TrunkTracker IV scanners.
//!
//! # Example
//!
//! ```no_run
//! use scanlib_uniden::{UnidenBuilder, models};
//! use scanlib_core::Scanner;
//!
//! # async fn run() -> scanlib_core::Result<()> {
//! let scanner = UnidenBuilder::new(models::bcd396t())
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

pub mod builder;
pub mod commands;
pub mod models;
pub mod protocol;
pub mod rig;

pub use builder::UnidenBuilder;
pub use models::{UnidenModel, all_uniden_models, bcd396t, bcd996t};
pub use rig::UnidenScanner;
