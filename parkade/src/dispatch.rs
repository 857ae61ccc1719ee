//! Command dispatch.
//!
//! The [`Dispatcher`] owns the one [`ParkingLot`] of a session, applies each
//! input line to it and reports a [`Response`]. Malformed lines and business
//! failures are responses, not errors: the lot is left untouched and the next
//! line is processed normally.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::command::Command;
use crate::error::CommandError;
use crate::lot::{Departure, ParkingLot, StatusEntry};
use crate::slot::{SlotNumber, VehicleId};

/// Header line of the occupancy report.
pub const STATUS_HEADER: &str = "Slot No.\tRegistration No.";

/// Why a line was rejected without touching the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Wrong number of arguments.
    InvalidCommandFormat,
    /// Capacity was not a non-negative integer.
    InvalidCapacity,
    /// Hours were not an integer.
    InvalidHours,
    /// The command name is not recognised.
    UnknownCommand,
}

impl From<&CommandError> for Rejection {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::InvalidCommandFormat { .. } => Self::InvalidCommandFormat,
            CommandError::InvalidCapacity { .. } => Self::InvalidCapacity,
            CommandError::InvalidHours { .. } => Self::InvalidHours,
            CommandError::UnknownCommand { .. } => Self::UnknownCommand,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidCommandFormat => "Invalid command format",
            Self::InvalidCapacity => "Invalid capacity",
            Self::InvalidHours => "Invalid hours",
            Self::UnknownCommand => "Unknown command",
        })
    }
}

/// The outcome of one input line.
///
/// `Display` renders the exact user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Response {
    /// A lot was (re)created.
    Created {
        /// Number of slots.
        capacity: usize,
    },
    /// A vehicle was parked.
    Allocated {
        /// The slot it was given.
        slot: SlotNumber,
    },
    /// No free slot was available.
    Full,
    /// A vehicle left.
    Left {
        /// The departing vehicle.
        vehicle: VehicleId,
        /// The slot it freed.
        slot: SlotNumber,
        /// The charge for the stay.
        fee: u64,
    },
    /// No parked vehicle matched.
    NotFound {
        /// The registration number that was looked up.
        vehicle: String,
    },
    /// Occupancy report.
    Status {
        /// Occupied slots, ascending.
        entries: Vec<StatusEntry>,
    },
    /// The line was malformed.
    Rejected {
        /// Category of the problem.
        reason: Rejection,
        /// Diagnostic detail.
        detail: String,
    },
}

impl From<Departure> for Response {
    fn from(departure: Departure) -> Self {
        Self::Left {
            vehicle: departure.vehicle,
            slot: departure.slot,
            fee: departure.fee,
        }
    }
}

impl Response {
    /// Returns `true` if the line was rejected as malformed.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { capacity } => {
                write!(f, "Created a parking lot with {capacity} slots")
            }
            Self::Allocated { slot } => write!(f, "Allocated slot number: {slot}"),
            Self::Full => f.write_str("Sorry, parking lot is full"),
            Self::Left { vehicle, slot, fee } => write!(
                f,
                "Registration number {vehicle} with Slot Number {slot} is free with Charge ${fee}"
            ),
            Self::NotFound { vehicle } => write!(f, "Registration number {vehicle} not found"),
            Self::Status { entries } => {
                f.write_str(STATUS_HEADER)?;
                for entry in entries {
                    write!(f, "\n{}\t\t{}", entry.slot, entry.vehicle)?;
                }
                Ok(())
            }
            Self::Rejected { reason, .. } => write!(f, "{reason}"),
        }
    }
}

/// Applies command lines to an owned parking lot.
///
/// # Examples
///
/// ```
/// use parkade::Dispatcher;
///
/// let mut dispatcher = Dispatcher::new();
/// let out = dispatcher.execute("create_parking_lot 2").unwrap();
/// assert_eq!(out.to_string(), "Created a parking lot with 2 slots");
///
/// let out = dispatcher.execute("park KA-01").unwrap();
/// assert_eq!(out.to_string(), "Allocated slot number: 1");
///
/// assert!(dispatcher.execute("").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    lot: ParkingLot,
}

impl Dispatcher {
    /// Creates a dispatcher with no lot yet (capacity zero).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lot.
    #[must_use]
    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    /// Parses and applies one line. Returns `None` for blank lines.
    pub fn execute(&mut self, line: &str) -> Option<Response> {
        match Command::parse(line) {
            Ok(Some(command)) => Some(self.apply(command)),
            Ok(None) => None,
            Err(err) => {
                warn!("rejected line {:?}: {err}", line.trim());
                Some(Response::Rejected {
                    reason: Rejection::from(&err),
                    detail: err.to_string(),
                })
            }
        }
    }

    /// Applies an already parsed command.
    pub fn apply(&mut self, command: Command) -> Response {
        debug!("applying `{command}`");
        apply_to(&mut self.lot, command)
    }
}

// Business failures become `Full` and `NotFound`.
fn apply_to(lot: &mut ParkingLot, command: Command) -> Response {
    match command {
        Command::CreateParkingLot { capacity } => {
            lot.create(capacity);
            Response::Created { capacity }
        }
        Command::Park { vehicle } => match lot.park(vehicle) {
            Ok(slot) => Response::Allocated { slot },
            Err(_) => Response::Full,
        },
        Command::Leave { vehicle, hours } => match lot.leave(vehicle.as_str(), hours) {
            Ok(departure) => departure.into(),
            Err(_) => Response::NotFound {
                vehicle: vehicle.into(),
            },
        },
        Command::Status => Response::Status {
            entries: lot.status(),
        },
    }
}
