//! Line-oriented command parsing.
//!
//! Each input line holds one command: a name followed by arguments, separated
//! by runs of whitespace. Blank lines carry no command.

use std::fmt;

use crate::error::CommandError;
use crate::slot::VehicleId;

/// A parsed lot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_parking_lot <capacity>`
    CreateParkingLot {
        /// Number of slots in the new lot.
        capacity: usize,
    },
    /// `park <vehicle>`
    Park {
        /// The arriving vehicle.
        vehicle: VehicleId,
    },
    /// `leave <vehicle> <hours>`
    Leave {
        /// The departing vehicle.
        vehicle: VehicleId,
        /// Length of the stay. Not bounds-checked.
        hours: i64,
    },
    /// `status`
    Status,
}

impl Command {
    /// Name of the create command.
    pub const CREATE: &'static str = "create_parking_lot";
    /// Name of the park command.
    pub const PARK: &'static str = "park";
    /// Name of the leave command.
    pub const LEAVE: &'static str = "leave";
    /// Name of the status command.
    pub const STATUS: &'static str = "status";

    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line. The argument count is checked
    /// before any argument is interpreted.
    ///
    /// # Errors
    ///
    /// - [`CommandError::UnknownCommand`] for an unrecognised name
    /// - [`CommandError::InvalidCommandFormat`] for the wrong number of arguments
    /// - [`CommandError::InvalidCapacity`] if the capacity is not a non-negative integer
    /// - [`CommandError::InvalidHours`] if the hours are not an integer
    ///
    /// # Examples
    ///
    /// ```
    /// use parkade::Command;
    ///
    /// let cmd = Command::parse("  leave   CAR-1  4 ").unwrap().unwrap();
    /// assert!(matches!(cmd, Command::Leave { hours: 4, .. }));
    ///
    /// assert!(Command::parse("   ").unwrap().is_none());
    /// assert!(Command::parse("park").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = fields.collect();

        let command = match name {
            Self::CREATE => {
                let [capacity] = expect_args::<1>(name, &args)?;
                let capacity = capacity
                    .parse::<usize>()
                    .map_err(|_| CommandError::InvalidCapacity {
                        value: capacity.to_string(),
                    })?;
                Self::CreateParkingLot { capacity }
            }
            Self::PARK => {
                let [vehicle] = expect_args::<1>(name, &args)?;
                Self::Park {
                    vehicle: VehicleId::from_token(vehicle),
                }
            }
            Self::LEAVE => {
                let [vehicle, hours] = expect_args::<2>(name, &args)?;
                let hours = hours.parse::<i64>().map_err(|_| CommandError::InvalidHours {
                    value: hours.to_string(),
                })?;
                Self::Leave {
                    vehicle: VehicleId::from_token(vehicle),
                    hours,
                }
            }
            Self::STATUS => {
                expect_args::<0>(name, &args)?;
                Self::Status
            }
            other => {
                return Err(CommandError::UnknownCommand {
                    name: other.to_string(),
                })
            }
        };

        Ok(Some(command))
    }

    /// Returns the command name as written in input.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateParkingLot { .. } => Self::CREATE,
            Self::Park { .. } => Self::PARK,
            Self::Leave { .. } => Self::LEAVE,
            Self::Status => Self::STATUS,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateParkingLot { capacity } => write!(f, "{} {capacity}", Self::CREATE),
            Self::Park { vehicle } => write!(f, "{} {vehicle}", Self::PARK),
            Self::Leave { vehicle, hours } => write!(f, "{} {vehicle} {hours}", Self::LEAVE),
            Self::Status => f.write_str(Self::STATUS),
        }
    }
}

fn expect_args<'a, const N: usize>(
    command: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::InvalidCommandFormat {
        command: command.to_string(),
        expected: N,
        found: args.len(),
    })
}
