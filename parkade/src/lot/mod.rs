//! The parking lot state machine.
//!
//! A [`ParkingLot`] owns a fixed row of slots numbered from 1. Vehicles are
//! always given the lowest-numbered free slot, and leaving bills the stay
//! with [`fee::charge_for`].
//!
//! # Examples
//!
//! ```
//! use parkade::{ParkingLot, VehicleId};
//!
//! let mut lot = ParkingLot::new(2);
//! let a = lot.park(VehicleId::new("A").unwrap()).unwrap();
//! let b = lot.park(VehicleId::new("B").unwrap()).unwrap();
//! assert_eq!((a.value(), b.value()), (1, 2));
//! assert!(lot.park(VehicleId::new("C").unwrap()).is_err());
//!
//! let departure = lot.leave("A", 4).unwrap();
//! assert_eq!(departure.slot.value(), 1);
//! assert_eq!(departure.fee, 30);
//! ```

pub mod fee;

#[cfg(test)]
mod proptests;

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::slot::{Slot, SlotNumber, VehicleId};

/// The result of a vehicle leaving the lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Departure {
    /// The vehicle that left.
    pub vehicle: VehicleId,
    /// The slot it freed.
    pub slot: SlotNumber,
    /// The charge for the stay.
    pub fee: u64,
}

/// One line of the occupancy report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    /// The occupied slot.
    pub slot: SlotNumber,
    /// The vehicle parked in it.
    pub vehicle: VehicleId,
}

/// A single-level parking lot.
///
/// The default value is the "not yet created" lot, which behaves exactly like
/// a lot of capacity zero.
///
/// Slots are materialised only once a vehicle first uses them, so creating a
/// lot costs the same for any capacity.
#[derive(Debug, Clone, Default)]
pub struct ParkingLot {
    capacity: usize,
    occupied: BTreeMap<SlotNumber, VehicleId>,
    // Slots below `untouched` that are free again; all lie below any untouched slot.
    released: BTreeSet<SlotNumber>,
    // Zero-based index of the lowest slot that has never been handed out.
    untouched: usize,
}

impl ParkingLot {
    /// Creates a lot with `capacity` free slots numbered `1..=capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Replaces the whole lot with a fresh one of `capacity` slots.
    ///
    /// Every parked vehicle is discarded. This is a reset, not a resize.
    pub fn create(&mut self, capacity: usize) {
        let discarded = self.occupied_count();
        *self = Self::new(capacity);
        info!("created parking lot with {capacity} slots (discarded {discarded} vehicle(s))");
    }

    /// Parks `vehicle` in the nearest free slot.
    ///
    /// The same vehicle may be parked more than once; each call takes another
    /// slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LotFull`] if no slot is free. The lot is unchanged.
    pub fn park(&mut self, vehicle: VehicleId) -> Result<SlotNumber> {
        let number = self.take_nearest().ok_or(Error::LotFull)?;
        debug!("allocated slot {number} to {vehicle}");
        self.occupied.insert(number, vehicle);
        Ok(number)
    }

    fn take_nearest(&mut self) -> Option<SlotNumber> {
        if let Some(number) = self.released.pop_first() {
            return Some(number);
        }
        if self.untouched < self.capacity {
            let number = SlotNumber::from_index(self.untouched);
            self.untouched += 1;
            return Some(number);
        }
        None
    }

    /// Frees the lowest-numbered slot holding `vehicle` and bills the stay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VehicleNotFound`] if no occupied slot holds the
    /// vehicle. The lot is unchanged.
    pub fn leave(&mut self, vehicle: &str, hours: i64) -> Result<Departure> {
        let found = self
            .occupied
            .iter()
            .find(|(_, parked)| *parked == vehicle)
            .map(|(&number, _)| number);
        let (number, vehicle) = found
            .and_then(|number| self.occupied.remove_entry(&number))
            .ok_or_else(|| Error::VehicleNotFound {
                vehicle: vehicle.to_string(),
            })?;
        self.released.insert(number);

        let fee = fee::charge_for(hours);
        debug!("{vehicle} left slot {number} after {hours}h, charged {fee}");
        Ok(Departure {
            vehicle,
            slot: number,
            fee,
        })
    }

    /// Lists occupied slots in ascending slot order.
    #[must_use]
    pub fn status(&self) -> Vec<StatusEntry> {
        self.occupied()
            .map(|(slot, vehicle)| StatusEntry {
                slot,
                vehicle: vehicle.clone(),
            })
            .collect()
    }

    /// Iterates over occupied slots in ascending slot order without cloning.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotNumber, &VehicleId)> + '_ {
        self.occupied.iter().map(|(&slot, vehicle)| (slot, vehicle))
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of free slots.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.capacity - self.occupied_count()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Returns `true` if no slot is free.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.capacity
    }

    /// Returns the occupant of `slot`, or `None` if it is free or out of range.
    #[must_use]
    pub fn occupant(&self, slot: SlotNumber) -> Option<&VehicleId> {
        self.occupied.get(&slot)
    }

    /// Iterates over all slots in order, free and occupied.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.capacity).map(|index| {
            let number = SlotNumber::from_index(index);
            Slot::with_occupant(number, self.occupied.get(&number).cloned())
        })
    }
}
