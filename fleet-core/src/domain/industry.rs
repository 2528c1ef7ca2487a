//! Industries and their tracks.
//!
//! An industry is a served facility at a location: a freight customer, a
//! yard, or a passenger stop. Industries own an ordered list of tracks, each
//! with a stated car capacity. The capacity is declared data, not an enforced
//! limit; nothing in the core rejects a placement that exceeds it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CarId, IndustryId, LocationId, TrackId};

/// Industry classification as received from upstream.
///
/// The canonical values are `FREIGHT`, `YARD`, and `PASSENGER`, but upstream
/// data is not consistent about casing, so the raw string is preserved and
/// matching is offered in both exact and case-insensitive forms. Yard
/// resolution depends on the distinction: an industry classified exactly
/// `YARD` outranks one classified `"Yard"`.
///
/// # Examples
///
/// ```
/// use fleet_core::domain::Classification;
///
/// let canonical = Classification::yard();
/// assert!(canonical.is_exactly_yard());
///
/// let sloppy = Classification::new("Yard");
/// assert!(!sloppy.is_exactly_yard());
/// assert!(sloppy.is_yard());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classification(String);

impl Classification {
    /// Canonical freight classification.
    pub const FREIGHT: &'static str = "FREIGHT";
    /// Canonical yard classification.
    pub const YARD: &'static str = "YARD";
    /// Canonical passenger classification.
    pub const PASSENGER: &'static str = "PASSENGER";

    /// Wraps a raw classification string, preserving its casing.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The canonical `FREIGHT` classification.
    pub fn freight() -> Self {
        Self(Self::FREIGHT.to_owned())
    }

    /// The canonical `YARD` classification.
    pub fn yard() -> Self {
        Self(Self::YARD.to_owned())
    }

    /// The canonical `PASSENGER` classification.
    pub fn passenger() -> Self {
        Self(Self::PASSENGER.to_owned())
    }

    /// Returns the raw classification string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the exact canonical `YARD` spelling.
    pub fn is_exactly_yard(&self) -> bool {
        self.0 == Self::YARD
    }

    /// True for `YARD` in any casing.
    pub fn is_yard(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::YARD)
    }

    /// True for `FREIGHT` in any casing.
    pub fn is_freight(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::FREIGHT)
    }

    /// True for `PASSENGER` in any casing.
    pub fn is_passenger(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::PASSENGER)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A car-holding track within an industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Identifier from the persistence layer.
    pub id: TrackId,
    /// Display name, e.g. "House Track".
    pub name: String,
    /// Stated maximum occupancy. Declared, not enforced.
    pub max_cars: u32,
    /// Cars currently spotted here, in placement order.
    #[serde(default)]
    pub placed_cars: Vec<CarId>,
}

impl Track {
    /// Creates an empty track.
    pub fn new(id: TrackId, name: impl Into<String>, max_cars: u32) -> Self {
        Self {
            id,
            name: name.into(),
            max_cars,
            placed_cars: Vec::new(),
        }
    }

    /// Number of cars currently spotted.
    pub fn occupied(&self) -> usize {
        self.placed_cars.len()
    }

    /// True when the stated capacity is met or exceeded.
    pub fn is_full(&self) -> bool {
        self.placed_cars.len() >= self.max_cars as usize
    }

    /// Remaining spots under the stated capacity, zero when over.
    pub fn open_spots(&self) -> u32 {
        (self.max_cars as usize).saturating_sub(self.placed_cars.len()) as u32
    }
}

/// A served facility at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    /// Identifier from the persistence layer.
    pub id: IndustryId,
    /// Display name, e.g. "Acme Milling".
    pub name: String,
    /// Owning location. May dangle; lookups treat a dangling reference as
    /// unresolved rather than failing.
    pub location: LocationId,
    /// Classification string (freight / yard / passenger).
    pub classification: Classification,
    /// Block label, denormalized from the owning location.
    pub block: String,
    /// Ordered tracks at this industry.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Industry {
    /// Creates an industry with no tracks.
    pub fn new(
        id: IndustryId,
        name: impl Into<String>,
        location: LocationId,
        classification: Classification,
        block: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            classification,
            block: block.into(),
            tracks: Vec::new(),
        }
    }

    /// Appends a track, returning `self` for chained construction.
    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// The first track in placement order, if the industry has any.
    pub fn first_track(&self) -> Option<&Track> {
        self.tracks.first()
    }

    /// True when this industry sits at the given location.
    pub fn is_at(&self, location: &LocationId) -> bool {
        self.location == *location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_exact_vs_case_insensitive() {
        let canonical = Classification::yard();
        assert!(canonical.is_exactly_yard());
        assert!(canonical.is_yard());

        let sloppy = Classification::new("Yard");
        assert!(!sloppy.is_exactly_yard());
        assert!(sloppy.is_yard());

        let freight = Classification::new("freight");
        assert!(freight.is_freight());
        assert!(!freight.is_yard());
    }

    #[test]
    fn classification_preserves_raw_string() {
        let c = Classification::new("pAsSeNgEr");
        assert_eq!(c.as_str(), "pAsSeNgEr");
        assert!(c.is_passenger());
        assert_eq!(format!("{}", c), "pAsSeNgEr");
    }

    #[test]
    fn track_occupancy() {
        let mut track = Track::new(TrackId::new("t1"), "House Track", 2);
        assert_eq!(track.occupied(), 0);
        assert!(!track.is_full());
        assert_eq!(track.open_spots(), 2);

        track.placed_cars.push(CarId::new("c1"));
        track.placed_cars.push(CarId::new("c2"));
        assert!(track.is_full());
        assert_eq!(track.open_spots(), 0);

        // Over-capacity is representable; the core never rejects it.
        track.placed_cars.push(CarId::new("c3"));
        assert_eq!(track.occupied(), 3);
        assert!(track.is_full());
        assert_eq!(track.open_spots(), 0);
    }

    #[test]
    fn industry_construction() {
        let industry = Industry::new(
            IndustryId::new("ind-1"),
            "Acme Milling",
            LocationId::new("loc-1"),
            Classification::freight(),
            "West Division",
        )
        .with_track(Track::new(TrackId::new("t1"), "Dock", 3))
        .with_track(Track::new(TrackId::new("t2"), "Overflow", 5));

        assert!(industry.is_at(&LocationId::new("loc-1")));
        assert!(!industry.is_at(&LocationId::new("loc-2")));
        assert_eq!(industry.first_track().unwrap().id, TrackId::new("t1"));
    }

    #[test]
    fn serde_field_names() {
        let track = Track::new(TrackId::new("t1"), "Dock", 3);
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["maxCars"], 3);
        assert!(json["placedCars"].as_array().unwrap().is_empty());
    }
}
