// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Editable-field policy tables
//!
//! Which event fields a role may modify depends only on the event's current
//! status. Each role has its own table; lookups are total and unrecognized
//! statuses yield the empty set, so a caller always gets a well-formed
//! (possibly empty) slice back.

use crate::status::EventStatus;
use serde::{Deserialize, Serialize};

/// Editable attribute of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventField {
    Title,
    Status,
    Date,
    Time,
    Type,
    CoverImg,
    ManagerId,
    VenueId,
    UploadPath,
    TimestampStart,
    TimestampEnd,
}

impl EventField {
    /// Every field the admin form knows about.
    pub const ALL: [EventField; 11] = [
        EventField::Title,
        EventField::Status,
        EventField::Date,
        EventField::Time,
        EventField::Type,
        EventField::CoverImg,
        EventField::ManagerId,
        EventField::VenueId,
        EventField::UploadPath,
        EventField::TimestampStart,
        EventField::TimestampEnd,
    ];

    /// Form identifier for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventField::Title => "title",
            EventField::Status => "status",
            EventField::Date => "date",
            EventField::Time => "time",
            EventField::Type => "type",
            EventField::CoverImg => "coverImg",
            EventField::ManagerId => "managerId",
            EventField::VenueId => "venueId",
            EventField::UploadPath => "uploadPath",
            EventField::TimestampStart => "timestampStart",
            EventField::TimestampEnd => "timestampEnd",
        }
    }
}

impl std::fmt::Display for EventField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything an organization editor can touch before an event is locked in.
const FULL_DETAILS: &[EventField] = &[
    EventField::Title,
    EventField::Status,
    EventField::Date,
    EventField::Time,
    EventField::Type,
    EventField::CoverImg,
    EventField::ManagerId,
    EventField::VenueId,
    EventField::UploadPath,
];

const STATUS_AND_COVER: &[EventField] = &[EventField::Status, EventField::CoverImg];

/// Fields an organization-side editor may change while the event holds `status`.
///
/// `In Progress` and `Processing` are hands-off for the organization, as is
/// any unrecognized status.
pub fn organization_editable_fields(status: &str) -> &'static [EventField] {
    match EventStatus::from_exact(status) {
        Some(EventStatus::Created | EventStatus::Listed | EventStatus::Rescheduled) => FULL_DETAILS,
        Some(
            EventStatus::PreEvent
            | EventStatus::Completed
            | EventStatus::PostProduction
            | EventStatus::Canceled,
        ) => STATUS_AND_COVER,
        Some(EventStatus::Published) => &[EventField::CoverImg],
        Some(EventStatus::InProgress | EventStatus::Processing) | None => &[],
    }
}

/// Fields the assigned event manager may change while the event holds `status`.
///
/// The manager only ever advances status and stamps the recording window.
pub fn event_manager_editable_fields(status: &str) -> &'static [EventField] {
    match EventStatus::from_exact(status) {
        Some(EventStatus::Listed) => &[EventField::Status],
        Some(EventStatus::PreEvent) => &[EventField::Status, EventField::TimestampStart],
        Some(EventStatus::InProgress) => &[EventField::Status, EventField::TimestampEnd],
        _ => &[],
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
