//! Layout locations.

use serde::{Deserialize, Serialize};

use super::LocationId;

/// A named place on the layout.
///
/// Locations are grouped into blocks for display purposes only; the block
/// carries no routing semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Identifier from the persistence layer.
    pub id: LocationId,
    /// Display name, e.g. "Westport".
    pub name: String,
    /// Named grouping for display organization.
    pub block: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Location {
    /// Creates a location with no description.
    pub fn new(id: LocationId, name: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            block: block.into(),
            description: None,
        }
    }
}
