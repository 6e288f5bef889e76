// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actor roles and role-dispatched policy lookups
//!
//! The engine evaluates two perspectives on the same event: the organization
//! editing metadata from the dashboard, and the event manager running the
//! recording on site. The role is always an explicit parameter; nothing here
//! reads session or cookie state.

use crate::fields::{event_manager_editable_fields, organization_editable_fields, EventField};
use crate::status::EventStatus;
use crate::transitions::{event_manager_next_statuses, organization_next_statuses};
use serde::{Deserialize, Serialize};

/// Policy perspective under which an edit or transition is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// Organization-side editor or admin working on event metadata
    Organization,
    /// The individual assigned to run the live recording
    EventManager,
}

/// Fields `role` may edit while the event holds `status`.
pub fn editable_fields(role: ActorRole, status: &str) -> &'static [EventField] {
    match role {
        ActorRole::Organization => organization_editable_fields(status),
        ActorRole::EventManager => event_manager_editable_fields(status),
    }
}

/// Statuses `role` may move the event to from `status`.
pub fn allowed_transitions(role: ActorRole, status: &str) -> &'static [EventStatus] {
    match role {
        ActorRole::Organization => organization_next_statuses(status),
        ActorRole::EventManager => event_manager_next_statuses(status),
    }
}

/// Whether `role` may edit `field` while the event holds `status`.
pub fn can_edit(role: ActorRole, status: &str, field: EventField) -> bool {
    editable_fields(role, status).contains(&field)
}

/// Whether `role` may move the event from `status` to `next`.
pub fn can_transition(role: ActorRole, status: &str, next: EventStatus) -> bool {
    allowed_transitions(role, status).contains(&next)
}

#[cfg(test)]
#[path = "role_tests.rs"]
mod tests;
