//! Error types for the parkade library.
//!
//! This module provides the error hierarchy for lot operations and
//! configuration, plus [`CommandError`] for rejected command lines, using
//! `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a parkade error.
///
/// # Examples
///
/// ```
/// use parkade::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the parkade library.
///
/// `LotFull` and `VehicleNotFound` are normal outcomes of lot operations;
/// the dispatcher reports them as responses and keeps going.
#[derive(Debug, Error)]
pub enum Error {
    /// No free slot is left in the lot.
    #[error("parking lot is full")]
    LotFull,

    /// No occupied slot holds the given vehicle.
    #[error("vehicle {vehicle} not found")]
    VehicleNotFound {
        /// The registration number that was looked up.
        vehicle: String,
    },

    /// A vehicle identifier failed validation.
    #[error("invalid vehicle id {value:?}: {reason}")]
    InvalidVehicleId {
        /// The rejected identifier.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Slot numbers start at 1.
    #[error("invalid slot number: slot numbers start at 1")]
    InvalidSlotNumber,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// Why a command line could not be parsed.
///
/// Every variant is a recoverable rejection of one input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A command had the wrong number of arguments.
    #[error("invalid command format: {command} expects {expected} argument(s), got {found}")]
    InvalidCommandFormat {
        /// The command name.
        command: String,
        /// Number of arguments the command takes.
        expected: usize,
        /// Number of arguments that were supplied.
        found: usize,
    },

    /// The capacity argument was not a non-negative integer.
    #[error("invalid capacity: {value}")]
    InvalidCapacity {
        /// The raw argument.
        value: String,
    },

    /// The hours argument was not an integer.
    #[error("invalid hours: {value}")]
    InvalidHours {
        /// The raw argument.
        value: String,
    },

    /// The command name is not recognised.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The unrecognised command name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lot_full_error() {
        let display = format!("{}", Error::LotFull);
        assert!(display.contains("full"));
    }

    #[test]
    fn test_vehicle_not_found_error() {
        let err = Error::VehicleNotFound {
            vehicle: "KA-01-HH-1234".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("KA-01-HH-1234"));
    }

    #[test]
    fn test_invalid_command_format_error() {
        let err = CommandError::InvalidCommandFormat {
            command: "leave".to_string(),
            expected: 2,
            found: 1,
        };
        let display = format!("{err}");
        assert!(display.contains("invalid command format"));
        assert!(display.contains("leave"));
        assert!(display.contains("expects 2"));
        assert!(display.contains("got 1"));
    }

    #[test]
    fn test_invalid_numeric_errors() {
        let err = CommandError::InvalidCapacity {
            value: "abc".to_string(),
        };
        assert!(format!("{err}").contains("invalid capacity: abc"));

        let err = CommandError::InvalidHours {
            value: "x".to_string(),
        };
        assert!(format!("{err}").contains("invalid hours: x"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<usize> {
            Err(Error::InvalidSlotNumber)
        }

        assert!(returns_result().is_err());
    }
}
