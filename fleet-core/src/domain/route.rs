//! Train routes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LocationId, RouteId};

/// What a route carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteClass {
    /// Mixed freight and passenger.
    Mixed,
    /// Passenger only.
    Passenger,
    /// Freight only.
    Freight,
}

impl fmt::Display for RouteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RouteClass::Mixed => "MIXED",
            RouteClass::Passenger => "PASSENGER",
            RouteClass::Freight => "FREIGHT",
        };
        f.write_str(s)
    }
}

/// A train's path across the layout.
///
/// The yard fields name *locations*, not industries: which industry acts as
/// the yard at each end is resolved at build time (see
/// [`crate::builder::resolve_yard`]). `stations` is the ordered list of
/// locations traveled, origin and terminus included; traversal order is list
/// order and nothing loops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRoute {
    /// Identifier from the persistence layer.
    pub id: RouteId,
    /// Display name, e.g. "Westport Turn".
    pub name: String,
    /// Route number as shown on the timetable.
    pub number: String,
    /// What the route carries.
    pub class: RouteClass,
    /// Location of the originating yard.
    pub origin_yard: LocationId,
    /// Location of the terminating yard.
    pub terminal_yard: LocationId,
    /// Ordered locations traveled, endpoints included.
    pub stations: Vec<LocationId>,
}

impl TrainRoute {
    /// True when the location is the origin or terminus.
    pub fn is_endpoint(&self, location: &LocationId) -> bool {
        self.origin_yard == *location || self.terminal_yard == *location
    }

    /// True when the location appears in the station list.
    pub fn serves(&self, location: &LocationId) -> bool {
        self.stations.contains(location)
    }

    /// Served locations that are not the origin or terminus, in travel order.
    pub fn intermediate_stations(&self) -> impl Iterator<Item = &LocationId> {
        self.stations.iter().filter(|loc| !self.is_endpoint(loc))
    }
}
