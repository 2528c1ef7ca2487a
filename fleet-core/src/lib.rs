//! Core allocation logic for a model-railroad fleet manager.
//!
//! The surrounding application tracks a layout's locations, industries,
//! rolling stock, and train routes behind a CRUD interface. This crate holds
//! the two pieces with real behavior: a [`position::PositionIndex`] answering
//! "where is this car" and its inverse, and a [`builder::TrainBuilder`] that
//! decides, for one route, which cars leave the origin yard, where each one
//! goes, and which cars along the route come back to the terminating yard.
//!
//! Everything here is synchronous and in-memory: one build call consumes one
//! immutable snapshot of the layout and returns updated copies. Loading the
//! snapshot and persisting the results belong to the caller.

pub mod builder;
pub mod domain;
pub mod position;
pub mod snapshot;
