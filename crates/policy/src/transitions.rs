// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status transition policy tables
//!
//! Which statuses an event may move to next depends on its current status
//! and on who is asking. The organization steers the administrative side of
//! the lifecycle (listing, post production, publication, rescheduling); the
//! event manager drives the on-site recording path (pre-event through
//! completed). Lookups are total: invalid input never errors.

use crate::status::EventStatus;

/// Statuses an organization-side editor may move the event to next.
///
/// Statuses outside the table (`In Progress`, `Processing`, anything
/// unrecognized) fall back to `[Created]` instead of the empty set every
/// sibling lookup returns. Admin forms depend on that fallback; keep it.
pub fn organization_next_statuses(status: &str) -> &'static [EventStatus] {
    use EventStatus::*;

    match EventStatus::from_exact(status) {
        Some(Created) => &[Created, Listed],
        Some(Listed) => &[Listed, Canceled],
        Some(PreEvent) => &[Canceled],
        Some(Completed) => &[Completed, PostProduction],
        Some(PostProduction) => &[PostProduction, Published],
        Some(Published) => &[],
        Some(Canceled) => &[Canceled, Rescheduled],
        Some(Rescheduled) => &[Rescheduled, Listed],
        Some(InProgress | Processing) | None => {
            tracing::debug!(status, "status outside organization transition table, defaulting to Created");
            &[Created]
        }
    }
}

/// Statuses the event manager may move the event to next.
///
/// The manager walks the recording path one step at a time: list → set up →
/// record → complete, with a bail-out to `Canceled` before recording starts.
pub fn event_manager_next_statuses(status: &str) -> &'static [EventStatus] {
    use EventStatus::*;

    match EventStatus::from_exact(status) {
        Some(Listed) => &[PreEvent],
        Some(PreEvent) => &[InProgress, Canceled],
        Some(InProgress) => &[Completed],
        _ => &[],
    }
}

#[cfg(test)]
#[path = "transitions_tests.rs"]
mod tests;
