//! Train building.
//!
//! This module answers the one non-trivial question in the system: given a
//! route and a snapshot of where every car sits, which cars leave the origin
//! yard and for where, and which cars along the route get picked up and
//! brought home to the terminating yard.
//!
//! Yard resolution, destination selection, and the build entry point are
//! split the way they fail: only the entry point can fail at all, and only
//! when a route names a location the snapshot doesn't contain. Every other
//! irregularity degrades through a fallback chain and is logged, never
//! raised.

mod assign;
mod build;
mod yard;

pub use build::{BuildError, BuildOutcome, BuildRequest, TrainBuilder};
pub use yard::{ResolvedYard, resolve_yard};
