//! Layout snapshots.
//!
//! A snapshot is the full input bundle the surrounding application assembles
//! before invoking the builder: every location, industry, route, car, and
//! switchlist. The JSON form mirrors the application's own field names, so a
//! dumped working set can be loaded straight into tests and development
//! tooling without the persistence layer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{
    Industry, IndustryId, Location, LocationId, RollingStock, RouteId, Switchlist, TrainRoute,
};
use crate::position::PositionIndex;

/// Error from loading a snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The file is not a valid snapshot.
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// One full working set of the layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    /// Every location on the layout.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Every industry.
    #[serde(default)]
    pub industries: Vec<Industry>,
    /// Every train route.
    #[serde(default)]
    pub routes: Vec<TrainRoute>,
    /// Every car.
    #[serde(default)]
    pub fleet: Vec<RollingStock>,
    /// Every switchlist.
    #[serde(default)]
    pub switchlists: Vec<Switchlist>,
}

impl LayoutSnapshot {
    /// Loads a snapshot from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a snapshot from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Looks up an industry by id.
    pub fn industry(&self, id: &IndustryId) -> Option<&Industry> {
        self.industries.iter().find(|i| i.id == *id)
    }

    /// Looks up a location by id.
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == *id)
    }

    /// Looks up a route by id.
    pub fn route(&self, id: &RouteId) -> Option<&TrainRoute> {
        self.routes.iter().find(|r| r.id == *id)
    }

    /// Folds every positioned car into a location-keyed position index.
    ///
    /// A car's industry is resolved to the industry's location; cars with no
    /// position, or positioned at an industry the snapshot doesn't know,
    /// are skipped.
    pub fn position_index(&self) -> PositionIndex {
        let mut index = PositionIndex::new();
        for car in &self.fleet {
            let Some(position) = &car.position else {
                continue;
            };
            let Some(industry) = self.industry(&position.industry) else {
                continue;
            };
            index.set_position(car.id.clone(), industry.location.clone());
        }
        index
    }
}
