//! Domain types for the fleet manager.
//!
//! This module contains the value types the allocator operates on: locations,
//! industries with their tracks, rolling stock, train routes, and
//! switchlists. All values are owned by the caller's persistence layer; the
//! core treats them as immutable snapshots for the duration of one build and
//! returns updated copies rather than mutating in place.

mod ids;
mod industry;
mod location;
mod rolling_stock;
mod route;
mod switchlist;

pub use ids::{CarId, IndustryId, LocationId, RouteId, SwitchlistId, TrackId};
pub use industry::{Classification, Industry, Track};
pub use location::Location;
pub use rolling_stock::{CarPosition, Destination, ReportingMarks, RollingStock, Spot};
pub use route::{RouteClass, TrainRoute};
pub use switchlist::{InvalidTransition, Switchlist, SwitchlistStatus};
