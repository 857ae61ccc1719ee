//! Property-based tests for the lot.
//!
//! Random park/leave sequences are replayed against a plain vector model that
//! scans for the first free slot, and the two must agree on every result.

use super::fee::charge_for;
use super::ParkingLot;
use crate::{Error, VehicleId};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Park(String),
    Leave(String, i64),
}

fn vehicle_strategy() -> impl Strategy<Value = String> {
    // Small pool so leaves often hit parked vehicles and duplicates occur.
    prop::sample::select(vec!["A", "B", "C", "D", "E", "F"]).prop_map(str::to_string)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        vehicle_strategy().prop_map(Op::Park),
        (vehicle_strategy(), -3i64..30).prop_map(|(v, h)| Op::Leave(v, h)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn allocation_matches_first_free_scan(
        capacity in 0usize..8,
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut lot = ParkingLot::new(capacity);
        let mut model: Vec<Option<String>> = vec![None; capacity];

        for op in ops {
            match op {
                Op::Park(v) => {
                    let expected = model.iter().position(Option::is_none);
                    let actual = lot.park(VehicleId::new(v.clone()).unwrap());
                    match expected {
                        Some(i) => {
                            prop_assert_eq!(actual.unwrap().index(), i);
                            model[i] = Some(v);
                        }
                        None => prop_assert!(matches!(actual, Err(Error::LotFull))),
                    }
                }
                Op::Leave(v, hours) => {
                    let expected = model.iter().position(|s| s.as_deref() == Some(v.as_str()));
                    let actual = lot.leave(&v, hours);
                    match expected {
                        Some(i) => {
                            let departure = actual.unwrap();
                            prop_assert_eq!(departure.slot.index(), i);
                            prop_assert_eq!(departure.fee, charge_for(hours));
                            model[i] = None;
                        }
                        None => prop_assert!(
                            matches!(actual, Err(Error::VehicleNotFound { .. })),
                            "expected not found"
                        ),
                    }
                }
            }

            let occupied: Vec<(usize, String)> = lot
                .occupied()
                .map(|(s, v)| (s.index(), v.to_string()))
                .collect();
            let modelled: Vec<(usize, String)> = model
                .iter()
                .enumerate()
                .filter_map(|(i, s)| s.clone().map(|v| (i, v)))
                .collect();
            prop_assert_eq!(occupied, modelled);
            prop_assert_eq!(lot.free_count() + lot.occupied_count(), capacity);
            prop_assert_eq!(lot.free_count(), model.iter().filter(|s| s.is_none()).count());
            prop_assert_eq!(lot.slots().filter(|s| s.is_occupied()).count(), lot.occupied_count());
        }
    }

    #[test]
    fn capacity_accepts_exactly_that_many(capacity in 0usize..64) {
        let mut lot = ParkingLot::default();
        lot.create(capacity);
        prop_assert!(lot.status().is_empty());

        for i in 0..capacity {
            let slot = lot.park(VehicleId::new(format!("V{i}")).unwrap()).unwrap();
            prop_assert_eq!(slot.value(), i + 1);
        }
        prop_assert!(matches!(
            lot.park(VehicleId::new("EXTRA").unwrap()),
            Err(Error::LotFull)
        ));
    }

    #[test]
    fn freed_slot_is_next_allocated(capacity in 1usize..32, pick in any::<prop::sample::Index>()) {
        let mut lot = ParkingLot::new(capacity);
        for i in 0..capacity {
            lot.park(VehicleId::new(format!("V{i}")).unwrap()).unwrap();
        }
        let j = pick.index(capacity);
        let departure = lot.leave(&format!("V{j}"), 1).unwrap();
        prop_assert_eq!(departure.slot.index(), j);
        let slot = lot.park(VehicleId::new("NEW").unwrap()).unwrap();
        prop_assert_eq!(slot.index(), j);
    }

    #[test]
    fn fee_is_monotonic(a in -100i64..10_000, b in -100i64..10_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(charge_for(lo) <= charge_for(hi));
    }
}
