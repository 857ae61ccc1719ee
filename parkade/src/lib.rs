#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # parkade
//!
//! A library for running a single-level parking lot from text commands.
//!
//! The lot hands every arriving vehicle the lowest-numbered free slot and
//! bills a flat fee for the first two hours plus an hourly rate after that.
//!
//! ## Core Types
//!
//! - [`ParkingLot`]: slot allocation and billing
//! - [`SlotNumber`] and [`VehicleId`]: validated identifiers
//! - [`Command`] and [`Dispatcher`]: line parsing and execution
//! - [`Response`]: the outcome of one line, rendered via `Display` or JSON
//! - [`Error`], [`CommandError`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use parkade::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new();
//! let transcript: Vec<String> = [
//!     "create_parking_lot 2",
//!     "park CAR-1",
//!     "leave CAR-1 3",
//! ]
//! .iter()
//! .filter_map(|line| dispatcher.execute(line))
//! .map(|response| response.to_string())
//! .collect();
//!
//! assert_eq!(transcript[1], "Allocated slot number: 1");
//! assert_eq!(
//!     transcript[2],
//!     "Registration number CAR-1 with Slot Number 1 is free with Charge $20"
//! );
//! ```

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod lot;
pub mod output;
pub mod slot;

// Re-export key types at crate root for convenience
pub use command::Command;
pub use config::{Config, ConfigBuilder};
pub use dispatch::{Dispatcher, Rejection, Response};
pub use error::{CommandError, Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use lot::{Departure, ParkingLot, StatusEntry};
pub use output::{OutputFormat, OutputFormatter};
pub use slot::{Slot, SlotNumber, VehicleId};
