//! The train build entry point.
//!
//! `BuildTrain` in three steps: resolve the yard industry at each end of the
//! route, partition the fleet by where each car currently sits, and write a
//! destination into a copy of every car the train will touch. Cars already
//! at the origin yard depart for industries along the route; cars sitting at
//! intermediate stations come home to the terminating yard; everything else
//! stays in the available pool.

use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

use crate::domain::{
    Industry, IndustryId, Location, LocationId, RollingStock, SwitchlistStatus, TrainRoute,
};

use super::assign::{OutboundCandidates, destination_for};
use super::yard::{ResolvedYard, resolve_yard};

/// Error from a train build.
///
/// The only fatal condition: a route endpoint naming a location the snapshot
/// does not contain. Every other irregularity degrades and is logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A route endpoint references a location missing from the snapshot.
    #[error("route references unknown location {0}")]
    UnknownLocation(LocationId),
}

/// One build's input: a route plus an immutable snapshot of the layout.
#[derive(Debug, Clone)]
pub struct BuildRequest<'a> {
    /// The route to build a train for.
    pub route: &'a TrainRoute,
    /// Every industry on the layout.
    pub industries: &'a [Industry],
    /// Every location on the layout.
    pub locations: &'a [Location],
    /// Every car, with whatever positions they currently hold.
    pub fleet: &'a [RollingStock],
    /// Current status of the owning switchlist.
    pub status: SwitchlistStatus,
}

/// Result of a train build.
///
/// `assigned` and `available` together cover the input fleet; each assigned
/// car is an updated copy carrying its new destination. The resolved yards
/// are included so the caller can tell a virtual yard from a persisted one
/// before writing anything back.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Cars the train will move, each carrying a fresh destination.
    pub assigned: Vec<RollingStock>,
    /// Cars the build left untouched.
    pub available: Vec<RollingStock>,
    /// Switchlist status after the build.
    pub status: SwitchlistStatus,
    /// Yard resolved at the route's origin.
    pub origin: ResolvedYard,
    /// Yard resolved at the route's terminus.
    pub terminus: ResolvedYard,
}

/// How the build treats one car.
enum CarRole {
    /// At the origin yard; departs for an industry along the route.
    Departing,
    /// At an intermediate station; returns to the terminating yard.
    Pickup,
    /// Not on this train; stays available.
    Untouched,
}

/// Builds trains from layout snapshots.
///
/// The random source is injected so destination assignment can be made
/// deterministic under test; production callers hand in `rand::thread_rng()`,
/// tests a seeded generator.
pub struct TrainBuilder<R> {
    rng: R,
}

impl<R: Rng> TrainBuilder<R> {
    /// Creates a builder drawing randomness from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Builds a train for the request's route.
    ///
    /// Fails only when an endpoint location cannot be found. Zero assigned
    /// cars is a valid outcome. The input is never mutated; assigned cars
    /// come back as updated copies.
    pub fn build(&mut self, request: &BuildRequest<'_>) -> Result<BuildOutcome, BuildError> {
        let origin = resolve_yard(
            &request.route.origin_yard,
            request.locations,
            request.industries,
        )?;
        let terminus = resolve_yard(
            &request.route.terminal_yard,
            request.locations,
            request.industries,
        )?;

        let by_id: HashMap<&IndustryId, &Industry> = request
            .industries
            .iter()
            .map(|industry| (&industry.id, industry))
            .collect();
        let candidates = OutboundCandidates::collect(request.route, request.industries);

        let mut assigned = Vec::new();
        let mut available = Vec::new();

        for car in request.fleet {
            match role_of(car, &origin, &by_id, request.route) {
                CarRole::Departing => {
                    let choice = candidates.choose(&mut self.rng, terminus.industry());
                    assigned.push(car.with_destination(destination_for(choice)));
                }
                CarRole::Pickup => {
                    assigned.push(car.with_destination(destination_for(terminus.industry())));
                }
                CarRole::Untouched => available.push(car.clone()),
            }
        }

        debug!(
            route = %request.route.id,
            assigned = assigned.len(),
            available = available.len(),
            "train build complete"
        );

        Ok(BuildOutcome {
            assigned,
            available,
            status: request.status.after_build(),
            origin,
            terminus,
        })
    }
}

/// Classifies a car by its current position.
///
/// A car with no position, at an industry the snapshot doesn't know, or at
/// an endpoint industry other than the origin yard, stays untouched.
fn role_of(
    car: &RollingStock,
    origin: &ResolvedYard,
    by_id: &HashMap<&IndustryId, &Industry>,
    route: &TrainRoute,
) -> CarRole {
    let Some(position) = &car.position else {
        return CarRole::Untouched;
    };

    if position.industry == origin.industry().id {
        return CarRole::Departing;
    }

    // Dangling industry references are tolerated, not errors.
    let Some(industry) = by_id.get(&position.industry) else {
        return CarRole::Untouched;
    };

    if route.serves(&industry.location) && !route.is_endpoint(&industry.location) {
        CarRole::Pickup
    } else {
        CarRole::Untouched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CarId, Classification, ReportingMarks, RouteClass, RouteId, Track, TrackId,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn location(id: &str, name: &str) -> Location {
        Location::new(LocationId::new(id), name, "Main")
    }

    fn industry(id: &str, name: &str, at: &str, class: Classification) -> Industry {
        Industry::new(IndustryId::new(id), name, LocationId::new(at), class, "Main")
            .with_track(Track::new(TrackId::new(format!("{id}-t1")), "Track 1", 4))
    }

    fn car(id: &str, at: Option<&str>) -> RollingStock {
        let base = RollingStock::new(
            CarId::new(id),
            ReportingMarks::new("ATSF", id),
            IndustryId::new("origin-yard"),
        );
        match at {
            Some(ind) => base.positioned_at(
                IndustryId::new(ind),
                TrackId::new(format!("{ind}-t1")),
            ),
            None => base,
        }
    }

    fn route(stations: &[&str]) -> TrainRoute {
        TrainRoute {
            id: RouteId::new("r1"),
            name: "Westport Turn".to_string(),
            number: "201".to_string(),
            class: RouteClass::Freight,
            origin_yard: LocationId::new(stations[0]),
            terminal_yard: LocationId::new(stations[stations.len() - 1]),
            stations: stations.iter().map(|s| LocationId::new(*s)).collect(),
        }
    }

    fn builder() -> TrainBuilder<ChaCha8Rng> {
        TrainBuilder::new(ChaCha8Rng::seed_from_u64(7))
    }

    /// Route origin -> mid -> terminus; one freight industry at mid.
    fn standard_layout() -> (Vec<Location>, Vec<Industry>) {
        let locations = vec![
            location("origin", "Eastport"),
            location("mid", "Midvale"),
            location("terminus", "Westport"),
        ];
        let industries = vec![
            industry("origin-yard", "Eastport Yard", "origin", Classification::yard()),
            industry("ind-mid", "Midvale Freight", "mid", Classification::freight()),
            industry("term-yard", "Westport Yard", "terminus", Classification::yard()),
        ];
        (locations, industries)
    }

    #[test]
    fn origin_cars_depart_and_midroute_cars_return() {
        let (locations, industries) = standard_layout();
        let fleet = vec![
            car("c1", Some("origin-yard")),
            car("c2", Some("origin-yard")),
            car("c3", Some("ind-mid")),
        ];
        let route = route(&["origin", "mid", "terminus"]);

        let outcome = builder()
            .build(&BuildRequest {
                route: &route,
                industries: &industries,
                locations: &locations,
                fleet: &fleet,
                status: SwitchlistStatus::Created,
            })
            .unwrap();

        assert_eq!(outcome.assigned.len(), 3);
        assert!(outcome.available.is_empty());

        // c1 and c2 go to the only freight candidate along the route.
        for id in ["c1", "c2"] {
            let assigned = outcome
                .assigned
                .iter()
                .find(|c| c.id == CarId::new(id))
                .unwrap();
            let dest = assigned.destination.as_ref().unwrap();
            assert_eq!(dest.immediate.industry, IndustryId::new("ind-mid"));
            assert_eq!(dest.immediate.location, LocationId::new("mid"));
        }

        // c3 comes home to the terminating yard.
        let picked_up = outcome
            .assigned
            .iter()
            .find(|c| c.id == CarId::new("c3"))
            .unwrap();
        assert_eq!(
            picked_up.destination.as_ref().unwrap().immediate.industry,
            IndustryId::new("term-yard")
        );

        assert_eq!(outcome.status, SwitchlistStatus::InProgress);
        assert!(!outcome.origin.is_virtual());
        assert!(!outcome.terminus.is_virtual());
    }

    #[test]
    fn no_freight_candidates_relaxes_to_any_industry() {
        // Same shape, but the mid industry is a passenger stop.
        let locations = vec![
            location("origin", "Eastport"),
            location("mid", "Midvale"),
            location("terminus", "Westport"),
        ];
        let industries = vec![
            industry("origin-yard", "Eastport Yard", "origin", Classification::yard()),
            industry("ind-mid", "Midvale Depot", "mid", Classification::passenger()),
            industry("term-yard", "Westport Yard", "terminus", Classification::yard()),
        ];
        let fleet = vec![car("c1", Some("origin-yard")), car("c2", Some("origin-yard"))];
        let route = route(&["origin", "mid", "terminus"]);

        let outcome = builder()
            .build(&BuildRequest {
                route: &route,
                industries: &industries,
                locations: &locations,
                fleet: &fleet,
                status: SwitchlistStatus::Created,
            })
            .unwrap();

        for assigned in &outcome.assigned {
            assert_eq!(
                assigned.destination.as_ref().unwrap().immediate.industry,
                IndustryId::new("ind-mid")
            );
        }
    }

    #[test]
    fn no_candidates_at_all_falls_back_to_terminus() {
        let locations = vec![
            location("origin", "Eastport"),
            location("terminus", "Westport"),
        ];
        let industries = vec![
            industry("origin-yard", "Eastport Yard", "origin", Classification::yard()),
            industry("term-yard", "Westport Yard", "terminus", Classification::yard()),
        ];
        let fleet = vec![car("c1", Some("origin-yard"))];
        let route = route(&["origin", "terminus"]);

        let outcome = builder()
            .build(&BuildRequest {
                route: &route,
                industries: &industries,
                locations: &locations,
                fleet: &fleet,
                status: SwitchlistStatus::Created,
            })
            .unwrap();

        assert_eq!(
            outcome.assigned[0]
                .destination
                .as_ref()
                .unwrap()
                .immediate
                .industry,
            IndustryId::new("term-yard")
        );
    }

    #[test]
    fn virtual_terminus_receives_pickups() {
        // The terminating location has no industries at all.
        let locations = vec![
            location("origin", "Eastport"),
            location("mid", "Midvale"),
            location("terminus", "Westport"),
        ];
        let industries = vec![
            industry("origin-yard", "Eastport Yard", "origin", Classification::yard()),
            industry("ind-mid", "Midvale Freight", "mid", Classification::freight()),
        ];
        let fleet = vec![car("c3", Some("ind-mid"))];
        let route = route(&["origin", "mid", "terminus"]);

        let outcome = builder()
            .build(&BuildRequest {
                route: &route,
                industries: &industries,
                locations: &locations,
                fleet: &fleet,
                status: SwitchlistStatus::Created,
            })
            .unwrap();

        assert!(outcome.terminus.is_virtual());
        let dest = outcome.assigned[0].destination.as_ref().unwrap();
        assert_eq!(dest.immediate.industry, IndustryId::new("terminus-yard"));
        assert_eq!(dest.immediate.location, LocationId::new("terminus"));
        // A virtual yard has no tracks to spot on.
        assert!(dest.immediate.track.is_none());
    }

    #[test]
    fn unrelated_cars_stay_available() {
        let (mut locations, mut industries) = standard_layout();
        locations.push(location("branch", "Branchville"));
        industries.push(industry(
            "ind-branch",
            "Branch Mill",
            "branch",
            Classification::freight(),
        ));

        let fleet = vec![
            car("c1", Some("origin-yard")),
            car("c4", Some("ind-branch")), // off-route
            car("c5", None),               // unplaced
            car("c6", Some("term-yard")),  // already at the terminus
            car("c7", Some("ghost-ind")),  // dangling industry reference
        ];
        let route = route(&["origin", "mid", "terminus"]);

        let outcome = builder()
            .build(&BuildRequest {
                route: &route,
                industries: &industries,
                locations: &locations,
                fleet: &fleet,
                status: SwitchlistStatus::Created,
            })
            .unwrap();

        assert_eq!(outcome.assigned.len(), 1);
        assert_eq!(outcome.assigned[0].id, CarId::new("c1"));

        let available: Vec<_> = outcome.available.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(available, vec!["c4", "c5", "c6", "c7"]);
        // Untouched cars carry no destination.
        assert!(outcome.available.iter().all(|c| c.destination.is_none()));
    }

    #[test]
    fn empty_fleet_is_a_valid_outcome() {
        let (locations, industries) = standard_layout();
        let route = route(&["origin", "mid", "terminus"]);

        let outcome = builder()
            .build(&BuildRequest {
                route: &route,
                industries: &industries,
                locations: &locations,
                fleet: &[],
                status: SwitchlistStatus::Created,
            })
            .unwrap();

        assert!(outcome.assigned.is_empty());
        assert!(outcome.available.is_empty());
        assert_eq!(outcome.status, SwitchlistStatus::InProgress);
    }

    #[test]
    fn unknown_endpoint_location_aborts() {
        let (locations, industries) = standard_layout();
        let fleet = vec![car("c1", Some("origin-yard"))];
        let mut route = route(&["origin", "mid", "terminus"]);
        route.terminal_yard = LocationId::new("ghost");

        let err = builder()
            .build(&BuildRequest {
                route: &route,
                industries: &industries,
                locations: &locations,
                fleet: &fleet,
                status: SwitchlistStatus::Created,
            })
            .unwrap_err();

        assert_eq!(err, BuildError::UnknownLocation(LocationId::new("ghost")));
        assert_eq!(
            err.to_string(),
            "route references unknown location ghost"
        );
    }

    #[test]
    fn build_does_not_mutate_inputs() {
        let (locations, industries) = standard_layout();
        let fleet = vec![car("c1", Some("origin-yard"))];
        let route = route(&["origin", "mid", "terminus"]);

        let _ = builder()
            .build(&BuildRequest {
                route: &route,
                industries: &industries,
                locations: &locations,
                fleet: &fleet,
                status: SwitchlistStatus::Created,
            })
            .unwrap();

        assert!(fleet[0].destination.is_none());
    }

    #[test]
    fn status_advance_is_idempotent_across_builds() {
        let (locations, industries) = standard_layout();
        let route = route(&["origin", "mid", "terminus"]);

        for (before, after) in [
            (SwitchlistStatus::Created, SwitchlistStatus::InProgress),
            (SwitchlistStatus::InProgress, SwitchlistStatus::InProgress),
            (SwitchlistStatus::Completed, SwitchlistStatus::Completed),
        ] {
            let outcome = builder()
                .build(&BuildRequest {
                    route: &route,
                    industries: &industries,
                    locations: &locations,
                    fleet: &[],
                    status: before,
                })
                .unwrap();
            assert_eq!(outcome.status, after);
        }
    }

    #[test]
    fn same_seed_assigns_same_destinations() {
        let locations = vec![
            location("origin", "Eastport"),
            location("mid-a", "Midvale"),
            location("mid-b", "Norfield"),
            location("terminus", "Westport"),
        ];
        let industries = vec![
            industry("origin-yard", "Eastport Yard", "origin", Classification::yard()),
            industry("ind-a", "Midvale Freight", "mid-a", Classification::freight()),
            industry("ind-b", "Norfield Co-op", "mid-b", Classification::freight()),
            industry("term-yard", "Westport Yard", "terminus", Classification::yard()),
        ];
        let fleet: Vec<_> = (0..6)
            .map(|n| car(&format!("c{n}"), Some("origin-yard")))
            .collect();
        let route = route(&["origin", "mid-a", "mid-b", "terminus"]);

        let run = |seed: u64| -> Vec<IndustryId> {
            let mut builder = TrainBuilder::new(ChaCha8Rng::seed_from_u64(seed));
            builder
                .build(&BuildRequest {
                    route: &route,
                    industries: &industries,
                    locations: &locations,
                    fleet: &fleet,
                    status: SwitchlistStatus::Created,
                })
                .unwrap()
                .assigned
                .into_iter()
                .map(|c| c.destination.unwrap().immediate.industry)
                .collect()
        };

        assert_eq!(run(3), run(3));
    }
}
