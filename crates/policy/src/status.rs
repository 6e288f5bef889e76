// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event lifecycle statuses
//!
//! Status strings arrive from session state and HTTP payloads as free-form
//! text. `EventStatus` is the closed set of stages an event moves through;
//! the two lookup helpers narrow untrusted input to it. The policy tables
//! dispatch on `from_exact` (status casing is canonical), while the status
//! overview dispatches on `from_insensitive`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when strict parsing rejects a status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event status: {0}")]
pub struct UnknownStatus(pub String);

/// Lifecycle stage of an event, from creation through publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    /// Drafted but not yet visible to the event manager
    Created,
    /// Visible and ready for recording setup
    Listed,
    /// Event manager is setting up cameras on site
    #[serde(rename = "Pre-Event")]
    PreEvent,
    /// Recording is live
    #[serde(rename = "In Progress")]
    InProgress,
    /// Recording finished, footage not yet ingested
    Completed,
    /// Footage is being ingested and transcoded
    Processing,
    /// Ready for pro audio, extra sources, and sequence work
    #[serde(rename = "Post Production")]
    PostProduction,
    /// Live to viewers
    Published,
    /// Called off; may be rescheduled
    Canceled,
    /// Awaiting updated details for a new date
    Rescheduled,
}

impl EventStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [EventStatus; 10] = [
        EventStatus::Created,
        EventStatus::Listed,
        EventStatus::PreEvent,
        EventStatus::InProgress,
        EventStatus::Completed,
        EventStatus::Processing,
        EventStatus::PostProduction,
        EventStatus::Published,
        EventStatus::Canceled,
        EventStatus::Rescheduled,
    ];

    /// Canonical wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Created => "Created",
            EventStatus::Listed => "Listed",
            EventStatus::PreEvent => "Pre-Event",
            EventStatus::InProgress => "In Progress",
            EventStatus::Completed => "Completed",
            EventStatus::Processing => "Processing",
            EventStatus::PostProduction => "Post Production",
            EventStatus::Published => "Published",
            EventStatus::Canceled => "Canceled",
            EventStatus::Rescheduled => "Rescheduled",
        }
    }

    /// Exact-case lookup. Non-canonical casing falls through to `None`.
    pub fn from_exact(s: &str) -> Option<EventStatus> {
        Self::ALL.iter().copied().find(|status| status.as_str() == s)
    }

    /// Case-insensitive lookup, used by the status overview.
    pub fn from_insensitive(s: &str) -> Option<EventStatus> {
        let lowered = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().to_lowercase() == lowered)
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_exact(s).ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
