// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! encore-policy: Event lifecycle policy engine for the Encore platform
//!
//! This crate provides:
//! - The closed set of event lifecycle statuses and editable fields
//! - Per-role editable-field and status-transition tables
//! - The status overview read model for the dashboard banner
//!
//! Everything is a pure lookup over static tables: no I/O, no shared state,
//! no errors from the lookup paths. Unrecognized status input degrades to
//! the documented safe default instead of failing, so callers always get a
//! well-formed (possibly empty) answer.

pub mod fields;
pub mod overview;
pub mod role;
pub mod status;
pub mod transitions;

// Re-exports
pub use fields::{event_manager_editable_fields, organization_editable_fields, EventField};
pub use overview::{status_overview, StatusOverview};
pub use role::{
    allowed_transitions, can_edit, can_transition, editable_fields, ActorRole,
};
pub use status::{EventStatus, UnknownStatus};
pub use transitions::{event_manager_next_statuses, organization_next_statuses};
