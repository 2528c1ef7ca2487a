//! Identifier newtypes.
//!
//! Every entity is keyed by an opaque string identifier minted by the
//! caller's persistence layer. The newtypes exist so a `CarId` can never be
//! handed to something expecting a `TrackId`; the core carries them intact
//! and attaches no meaning to their contents.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier string.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

id_type!(
    /// Identifier of a piece of rolling stock.
    CarId
);
id_type!(
    /// Identifier of a location on the layout.
    LocationId
);
id_type!(
    /// Identifier of an industry.
    IndustryId
);
id_type!(
    /// Identifier of a track within an industry.
    TrackId
);
id_type!(
    /// Identifier of a train route.
    RouteId
);
id_type!(
    /// Identifier of a switchlist.
    SwitchlistId
);
