//! Destination selection for departing cars.
//!
//! Cars leaving the origin yard are scattered among the industries the route
//! serves. The preferred pool is freight industries at intermediate
//! stations; if the route serves none, any intermediate industry will do,
//! and a route with no served industries at all sends everything through to
//! the terminating yard.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::domain::{Destination, Industry, Spot, TrainRoute};

/// The candidate pool outbound cars draw destinations from.
///
/// Computed once per build; each car then draws from it independently and
/// uniformly, so repeated cars may land on the same industry.
pub(crate) struct OutboundCandidates<'a> {
    pool: Vec<&'a Industry>,
}

impl<'a> OutboundCandidates<'a> {
    /// Collects eligible destination industries for the route.
    pub(crate) fn collect(route: &TrainRoute, industries: &'a [Industry]) -> Self {
        let strict = eligible(route, industries, true);
        if !strict.is_empty() {
            return Self { pool: strict };
        }

        let relaxed = eligible(route, industries, false);
        if !relaxed.is_empty() {
            warn!(
                route = %route.id,
                candidates = relaxed.len(),
                "no freight industries along route, relaxing destination filter"
            );
            return Self { pool: relaxed };
        }

        warn!(
            route = %route.id,
            "no industries along route, departing cars will be sent to the terminating yard"
        );
        Self { pool: Vec::new() }
    }

    /// Draws one destination uniformly at random, falling back to the
    /// terminating yard when the pool is empty.
    pub(crate) fn choose<'b, R: Rng>(
        &'b self,
        rng: &mut R,
        terminus: &'b Industry,
    ) -> &'b Industry {
        self.pool.choose(rng).copied().unwrap_or(terminus)
    }

    /// Number of industries in the pool.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.pool.len()
    }
}

/// Industries at intermediate stations of the route, optionally limited to
/// freight.
fn eligible<'a>(
    route: &TrainRoute,
    industries: &'a [Industry],
    freight_only: bool,
) -> Vec<&'a Industry> {
    industries
        .iter()
        .filter(|i| route.serves(&i.location) && !route.is_endpoint(&i.location))
        .filter(|i| !freight_only || i.classification.is_freight())
        .collect()
}

/// Builds the destination record for a chosen industry.
///
/// The spot's track is the industry's first track when it has any; a
/// trackless industry (a virtual yard, typically) yields a trackless spot.
pub(crate) fn destination_for(industry: &Industry) -> Destination {
    if let Some(track) = industry.first_track() {
        if track.is_full() {
            warn!(
                industry = %industry.id,
                track = %track.id,
                occupied = track.occupied(),
                max_cars = track.max_cars,
                "destination track already at stated capacity"
            );
        }
    }

    Destination::new(Spot {
        industry: industry.id.clone(),
        track: industry.first_track().map(|t| t.id.clone()),
        location: industry.location.clone(),
    })
}
