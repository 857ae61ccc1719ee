//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the parkade library.

use parkade::{Dispatcher, ParkingLot, VehicleId};

/// Builder for lots with some vehicles already parked.
///
/// # Examples
///
/// ```no_run
/// # use common::LotFixture;
/// let lot = LotFixture::new(3).with_vehicles(&["A", "B"]).build();
/// ```
#[allow(dead_code)]
pub struct LotFixture {
    capacity: usize,
    vehicles: Vec<String>,
}

#[allow(dead_code)]
impl LotFixture {
    /// Creates a fixture for an empty lot of `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            vehicles: Vec::new(),
        }
    }

    /// Parks these vehicles, in order, when the lot is built.
    pub fn with_vehicles(mut self, vehicles: &[&str]) -> Self {
        self.vehicles.extend(vehicles.iter().map(|v| (*v).to_string()));
        self
    }

    /// Parks `CAR-1` through `CAR-n`.
    pub fn with_numbered_cars(mut self, n: usize) -> Self {
        self.vehicles.extend((1..=n).map(|i| format!("CAR-{i}")));
        self
    }

    /// Builds the lot.
    ///
    /// # Panics
    /// Panics if the vehicles do not fit.
    pub fn build(self) -> ParkingLot {
        let mut lot = ParkingLot::new(self.capacity);
        for v in self.vehicles {
            lot.park(VehicleId::new(v).expect("valid vehicle id"))
                .expect("fixture vehicles must fit");
        }
        lot
    }
}

/// Runs every line through a fresh dispatcher and returns the rendered
/// transcript together with the dispatcher.
#[allow(dead_code)]
pub fn run_script(lines: &[&str]) -> (Vec<String>, Dispatcher) {
    let mut dispatcher = Dispatcher::new();
    let transcript = lines
        .iter()
        .filter_map(|line| dispatcher.execute(line))
        .map(|response| response.to_string())
        .collect();
    (transcript, dispatcher)
}

/// Occupancy as `(slot, vehicle)` pairs, ascending.
#[allow(dead_code)]
pub fn occupancy(lot: &ParkingLot) -> Vec<(usize, String)> {
    lot.occupied()
        .map(|(slot, vehicle)| (slot.value(), vehicle.to_string()))
        .collect()
}
