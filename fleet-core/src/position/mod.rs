//! Position bookkeeping for an in-memory working set of cars.
//!
//! The index holds one invariant: a car occupies exactly one place at a time.
//! Both directions of the relation are kept so "where is car X" and "what is
//! at location Y" are each a single lookup. This is bookkeeping only; nothing
//! here checks capacities or rejects a placement, and absence is an empty
//! value rather than an error.
//!
//! The index is not safe for concurrent mutation. A caller sharing one index
//! across threads must hold a single lock around each call, including the
//! whole of [`PositionIndex::set_positions`], to keep its batch atomic.

use std::collections::HashMap;

use crate::domain::{CarId, LocationId};

/// Bidirectional car ↔ location index.
///
/// # Examples
///
/// ```
/// use fleet_core::domain::{CarId, LocationId};
/// use fleet_core::position::PositionIndex;
///
/// let mut index = PositionIndex::new();
/// index.set_position(CarId::new("c1"), LocationId::new("westport"));
///
/// assert_eq!(index.position(&CarId::new("c1")), Some(&LocationId::new("westport")));
/// assert_eq!(index.occupants(&LocationId::new("westport")), &[CarId::new("c1")]);
///
/// // Relocation clears the old spot.
/// index.set_position(CarId::new("c1"), LocationId::new("midvale"));
/// assert!(index.occupants(&LocationId::new("westport")).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    /// Where each tracked car currently is.
    positions: HashMap<CarId, LocationId>,
    /// Cars at each location, in insertion order. Order is not stable across
    /// relocations.
    occupants: HashMap<LocationId, Vec<CarId>>,
}

impl PositionIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally relocates a car.
    ///
    /// The car is removed from its previous location's occupant list, if it
    /// had one, then appended to the new location's. Calling twice with the
    /// same location is a no-op the second time.
    pub fn set_position(&mut self, car: CarId, location: LocationId) {
        self.clear_car(&car);
        self.occupants
            .entry(location.clone())
            .or_default()
            .push(car.clone());
        self.positions.insert(car, location);
    }

    /// Relocates a batch of cars as one step.
    ///
    /// All previous positions of the batch are cleared before any new
    /// position is applied, so two cars swapping locations (or chaining
    /// through a shared one) resolve cleanly instead of clobbering each
    /// other mid-batch.
    pub fn set_positions(&mut self, moves: &HashMap<CarId, LocationId>) {
        for car in moves.keys() {
            self.clear_car(car);
        }
        for (car, location) in moves {
            self.occupants
                .entry(location.clone())
                .or_default()
                .push(car.clone());
            self.positions.insert(car.clone(), location.clone());
        }
    }

    /// The car's current location, or `None` if it is untracked.
    pub fn position(&self, car: &CarId) -> Option<&LocationId> {
        self.positions.get(car)
    }

    /// Cars currently at a location, in insertion order. Empty for an
    /// unknown location.
    pub fn occupants(&self, location: &LocationId) -> &[CarId] {
        self.occupants
            .get(location)
            .map(|cars| cars.as_slice())
            .unwrap_or(&[])
    }

    /// The subset of `candidates` with zero current occupants.
    pub fn unoccupied<'a, I>(&self, candidates: I) -> Vec<LocationId>
    where
        I: IntoIterator<Item = &'a LocationId>,
    {
        candidates
            .into_iter()
            .filter(|location| self.occupants(location).is_empty())
            .cloned()
            .collect()
    }

    /// Number of tracked cars.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no car is tracked.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Removes a car from its current occupant list and the forward map.
    fn clear_car(&mut self, car: &CarId) {
        if let Some(previous) = self.positions.remove(car) {
            if let Some(cars) = self.occupants.get_mut(&previous) {
                cars.retain(|c| c != car);
            }
        }
    }
}
