//! Slot and vehicle identifier types.
//!
//! This module provides the validated newtypes the lot is built from: a
//! 1-based [`SlotNumber`] and a whitespace-free [`VehicleId`].

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 1-based slot position.
///
/// Slot 0 does not exist; slot numbers are contiguous from 1 and never change
/// once a lot has been created.
///
/// # Examples
///
/// ```
/// use parkade::SlotNumber;
///
/// let slot = SlotNumber::try_from(3).unwrap();
/// assert_eq!(slot.value(), 3);
/// assert_eq!(slot.index(), 2);
///
/// assert!(SlotNumber::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotNumber(NonZeroUsize);

impl SlotNumber {
    /// The first slot of every lot.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Returns the slot number as printed to users.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0.get()
    }

    /// Returns the zero-based position of this slot in the lot.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() - 1
    }

    /// Builds the slot number for a zero-based position.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match NonZeroUsize::new(index.saturating_add(1)) {
            Some(n) => Self(n),
            None => Self::FIRST,
        }
    }
}

impl TryFrom<usize> for SlotNumber {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(Error::InvalidSlotNumber)
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vehicle registration number.
///
/// Identifiers are opaque: two vehicles are the same iff their identifiers
/// compare equal byte for byte. An identifier is non-empty and contains no
/// whitespace, which is exactly what the command tokenizer can produce.
///
/// # Examples
///
/// ```
/// use parkade::VehicleId;
///
/// let id = VehicleId::new("KA-01-HH-1234").unwrap();
/// assert_eq!(id.as_str(), "KA-01-HH-1234");
///
/// assert!(VehicleId::new("").is_err());
/// assert!(VehicleId::new("two words").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VehicleId(String);

impl VehicleId {
    /// Creates a vehicle identifier after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVehicleId`] if the value is empty or contains
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::InvalidVehicleId {
                value,
                reason: "must not be empty".into(),
            });
        }
        if value.chars().any(char::is_whitespace) {
            return Err(Error::InvalidVehicleId {
                value,
                reason: "must not contain whitespace".into(),
            });
        }
        Ok(Self(value))
    }

    // Tokens from `str::split_whitespace` are already non-empty and
    // whitespace-free.
    pub(crate) fn from_token(token: &str) -> Self {
        debug_assert!(Self::new(token).is_ok());
        Self(token.to_owned())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VehicleId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for VehicleId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<VehicleId> for String {
    fn from(id: VehicleId) -> Self {
        id.0
    }
}

impl AsRef<str> for VehicleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VehicleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VehicleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A view of one fixed parking position.
///
/// A slot is free when it has no occupant. Modelling the occupant as an
/// `Option` keeps "occupied" and "has a vehicle" from ever disagreeing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    number: SlotNumber,
    occupant: Option<VehicleId>,
}

impl Slot {
    /// Creates a free slot.
    #[must_use]
    pub const fn new(number: SlotNumber) -> Self {
        Self {
            number,
            occupant: None,
        }
    }

    pub(crate) const fn with_occupant(number: SlotNumber, occupant: Option<VehicleId>) -> Self {
        Self { number, occupant }
    }

    /// Returns the slot's permanent number.
    #[must_use]
    pub const fn number(&self) -> SlotNumber {
        self.number
    }

    /// Returns the parked vehicle, if any.
    #[must_use]
    pub const fn occupant(&self) -> Option<&VehicleId> {
        self.occupant.as_ref()
    }

    /// Returns `true` if a vehicle is parked here.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}
