//! Yard resolution.
//!
//! Routes name the *location* of each yard, but cars sit at *industries*, so
//! the builder has to find "the yard industry at this location". Upstream
//! data is messy enough that this is a fallback chain rather than a lookup:
//! exact classification first, then case-tolerant classification, then a
//! "yard" in the display name, then any industry at all, and finally a
//! synthesized stand-in so the build can proceed with nothing but a location.

use tracing::warn;

use crate::domain::{Classification, Industry, IndustryId, Location, LocationId};

use super::build::BuildError;

/// A yard industry resolved for one end of a route.
///
/// A `Virtual` yard was synthesized because the location has no industries.
/// Its identifier exists nowhere in the persisted industry set; callers may
/// display it and route cars to it, but must never write it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedYard {
    /// An industry that exists in the supplied snapshot.
    Persisted(Industry),
    /// A synthesized placeholder for a location with no industries.
    Virtual(Industry),
}

impl ResolvedYard {
    /// The resolved industry, however it was obtained.
    pub fn industry(&self) -> &Industry {
        match self {
            ResolvedYard::Persisted(industry) | ResolvedYard::Virtual(industry) => industry,
        }
    }

    /// True when the industry was synthesized rather than found.
    pub fn is_virtual(&self) -> bool {
        matches!(self, ResolvedYard::Virtual(_))
    }

    /// Consumes the resolution, yielding the industry.
    pub fn into_industry(self) -> Industry {
        match self {
            ResolvedYard::Persisted(industry) | ResolvedYard::Virtual(industry) => industry,
        }
    }
}

/// Resolves the yard industry at a route endpoint.
///
/// The fallback chain, first match wins:
/// 1. an industry at the location classified exactly `YARD`
/// 2. an industry whose classification is `YARD` in any casing
/// 3. an industry whose name contains "yard" (case-insensitive)
/// 4. any industry at the location
/// 5. a synthesized virtual yard
///
/// Only a `target` absent from `locations` fails; that aborts the whole
/// build upstream.
pub fn resolve_yard(
    target: &LocationId,
    locations: &[Location],
    industries: &[Industry],
) -> Result<ResolvedYard, BuildError> {
    let location = locations
        .iter()
        .find(|l| l.id == *target)
        .ok_or_else(|| BuildError::UnknownLocation(target.clone()))?;

    let local: Vec<&Industry> = industries.iter().filter(|i| i.is_at(target)).collect();

    if let Some(industry) = local.iter().find(|i| i.classification.is_exactly_yard()) {
        return Ok(ResolvedYard::Persisted((*industry).clone()));
    }

    if let Some(industry) = local.iter().find(|i| i.classification.is_yard()) {
        warn!(
            location = %location.id,
            industry = %industry.id,
            classification = %industry.classification,
            "yard resolved by case-insensitive classification"
        );
        return Ok(ResolvedYard::Persisted((*industry).clone()));
    }

    if let Some(industry) = local
        .iter()
        .find(|i| i.name.to_ascii_lowercase().contains("yard"))
    {
        warn!(
            location = %location.id,
            industry = %industry.id,
            "yard resolved by display name"
        );
        return Ok(ResolvedYard::Persisted((*industry).clone()));
    }

    if let Some(industry) = local.first() {
        warn!(
            location = %location.id,
            industry = %industry.id,
            classification = %industry.classification,
            "no yard at location, using first industry"
        );
        return Ok(ResolvedYard::Persisted((*industry).clone()));
    }

    warn!(location = %location.id, "no industries at location, synthesizing virtual yard");
    Ok(ResolvedYard::Virtual(virtual_yard(location)))
}

/// Synthesizes a display-only yard for a location with no industries.
fn virtual_yard(location: &Location) -> Industry {
    Industry::new(
        IndustryId::new(format!("{}-yard", location.id)),
        format!("{} Yard", location.name),
        location.id.clone(),
        Classification::yard(),
        location.block.clone(),
    )
}
