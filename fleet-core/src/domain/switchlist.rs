//! Switchlists and their status machine.
//!
//! A switchlist is a work order tying a route to a set of car movements.
//! Status only moves forward: CREATED → IN_PROGRESS → COMPLETED. Repeating
//! the current status is a no-op; anything backward or skipping is an error.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RouteId, SwitchlistId};

/// Error returned for a backward or skipping status transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot move switchlist from {from} to {to}")]
pub struct InvalidTransition {
    /// Status the switchlist was in.
    pub from: SwitchlistStatus,
    /// Status that was requested.
    pub to: SwitchlistStatus,
}

/// Lifecycle status of a switchlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwitchlistStatus {
    /// Created by a user action; no cars assigned yet.
    Created,
    /// A build has assigned cars, or an operator has started work.
    InProgress,
    /// Work finished. Terminal; no transition leaves this state.
    Completed,
}

impl SwitchlistStatus {
    /// Attempts a transition to `next`.
    ///
    /// Repeating the current status succeeds and changes nothing. The only
    /// real transitions are Created → InProgress and InProgress → Completed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleet_core::domain::SwitchlistStatus;
    ///
    /// let started = SwitchlistStatus::Created.advance(SwitchlistStatus::InProgress);
    /// assert_eq!(started, Ok(SwitchlistStatus::InProgress));
    ///
    /// // Completed is terminal.
    /// assert!(SwitchlistStatus::Completed.advance(SwitchlistStatus::Created).is_err());
    /// ```
    pub fn advance(self, next: SwitchlistStatus) -> Result<SwitchlistStatus, InvalidTransition> {
        use SwitchlistStatus::*;
        match (self, next) {
            (from, to) if from == to => Ok(from),
            (Created, InProgress) | (InProgress, Completed) => Ok(next),
            (from, to) => Err(InvalidTransition { from, to }),
        }
    }

    /// Status after a train build: a fresh switchlist moves to InProgress,
    /// anything else is left as-is.
    pub fn after_build(self) -> SwitchlistStatus {
        match self {
            SwitchlistStatus::Created => SwitchlistStatus::InProgress,
            other => other,
        }
    }

    /// True only for Completed.
    pub fn is_terminal(self) -> bool {
        self == SwitchlistStatus::Completed
    }
}

impl fmt::Display for SwitchlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SwitchlistStatus::Created => "CREATED",
            SwitchlistStatus::InProgress => "IN_PROGRESS",
            SwitchlistStatus::Completed => "COMPLETED",
        };
        f.write_str(s)
    }
}

/// A work order tying a train route to a set of car movements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Switchlist {
    /// Identifier from the persistence layer.
    pub id: SwitchlistId,
    /// Display name, e.g. "Tuesday Westport Turn".
    pub name: String,
    /// The route this work order runs over.
    pub route: RouteId,
    /// When the switchlist was created.
    pub created_at: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: SwitchlistStatus,
    /// Optional operator notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Switchlist {
    /// Creates a switchlist in the Created state.
    pub fn new(
        id: SwitchlistId,
        name: impl Into<String>,
        route: RouteId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            route,
            created_at,
            status: SwitchlistStatus::Created,
            notes: None,
        }
    }

    /// Marks work as started. Idempotent; a no-op once in progress or done.
    pub fn begin_work(&mut self) {
        self.status = self.status.after_build();
    }

    /// Marks the work order finished.
    pub fn complete(&mut self) -> Result<(), InvalidTransition> {
        self.status = self.status.advance(SwitchlistStatus::Completed)?;
        Ok(())
    }
}
