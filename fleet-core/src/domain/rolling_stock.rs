//! Rolling stock.
//!
//! A car is created with no position; it gains one only through explicit
//! placement, and gains a destination only through a switchlist build. The
//! core never mutates a car in place: assignment produces an updated copy.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CarId, IndustryId, LocationId, TrackId};

/// Reporting marks: road name plus road number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingMarks {
    /// Railroad reporting mark, e.g. "ATSF".
    pub road: String,
    /// Road number, e.g. "12407".
    pub number: String,
}

impl ReportingMarks {
    /// Creates reporting marks from road and number.
    pub fn new(road: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            road: road.into(),
            number: number.into(),
        }
    }
}

impl fmt::Display for ReportingMarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.road, self.number)
    }
}

/// Where a car currently sits: an industry and one of its tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPosition {
    /// Industry the car is spotted at.
    pub industry: IndustryId,
    /// Track within that industry.
    pub track: TrackId,
}

impl CarPosition {
    /// Creates a position at the given industry and track.
    pub fn new(industry: IndustryId, track: TrackId) -> Self {
        Self { industry, track }
    }
}

/// One resolvable point on the layout, as written into destinations.
///
/// The track is optional: a destination chosen from a trackless industry
/// (notably a synthesized yard) carries no track, and the caller re-spots
/// the car within the industry on arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    /// Destination industry.
    pub industry: IndustryId,
    /// Destination track within the industry, when one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackId>,
    /// Location the industry sits at.
    pub location: LocationId,
}

/// A car's routing: the next spot on this switchlist, and optionally a
/// longer-horizon final spot the allocator does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// The next industry/track the car is routed to.
    #[serde(rename = "immediateDestination")]
    pub immediate: Spot,
    /// Longer-horizon target, untouched by the allocator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_destination: Option<Spot>,
}

impl Destination {
    /// Creates a destination with no final target.
    pub fn new(immediate: Spot) -> Self {
        Self {
            immediate,
            final_destination: None,
        }
    }
}

/// A piece of rolling stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingStock {
    /// Identifier from the persistence layer.
    pub id: CarId,
    /// Reporting marks.
    pub marks: ReportingMarks,
    /// Type code, e.g. "XM" for a boxcar.
    pub car_type: String,
    /// Free-text description.
    pub description: String,
    /// Color tag for display.
    pub color: String,
    /// The yard industry this car belongs to when off the road.
    pub home_yard: IndustryId,
    /// Current position, if the car has been placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<CarPosition>,
    /// Assigned routing, if a switchlist has claimed the car.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
}

impl RollingStock {
    /// Creates an unplaced, unassigned car.
    pub fn new(id: CarId, marks: ReportingMarks, home_yard: IndustryId) -> Self {
        Self {
            id,
            marks,
            car_type: String::new(),
            description: String::new(),
            color: String::new(),
            home_yard,
            position: None,
            destination: None,
        }
    }

    /// Places the car, returning `self` for chained construction.
    pub fn positioned_at(mut self, industry: IndustryId, track: TrackId) -> Self {
        self.position = Some(CarPosition::new(industry, track));
        self
    }

    /// True when the car currently sits at the given industry.
    pub fn is_at_industry(&self, industry: &IndustryId) -> bool {
        self.position
            .as_ref()
            .is_some_and(|p| p.industry == *industry)
    }

    /// Returns an updated copy carrying the given destination.
    pub fn with_destination(&self, destination: Destination) -> Self {
        let mut car = self.clone();
        car.destination = Some(destination);
        car
    }

    /// Clears the assigned destination, used when a switchlist operation is
    /// rolled back.
    pub fn clear_destination(&mut self) {
        self.destination = None;
    }
}
