// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status overview read model
//!
//! A display descriptor the dashboard renders above the event form: an
//! optional action button (label plus the status it submits) and a banner
//! message. Unlike the policy tables, the overview matches its input
//! case-insensitively.

use crate::status::EventStatus;
use serde::Serialize;

const COMPLETED_PROCESSING_SOON: &str = "Event is completed and will be begin processing soon.";

const COMPLETED_MISSING_MANAGER_VIDEO: &str = "Event is completed but is missing manager video. \
     Upload the event manager's recording, or reassign the event manager to recover the footage, \
     to continue processing.";

/// Action prompt and banner copy for an event's current status.
///
/// `next_status`, when present, is what the action button submits; it is
/// always a member of the organization transition set for that status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusOverview {
    pub action_label: Option<&'static str>,
    pub next_status: Option<EventStatus>,
    pub message: Option<&'static str>,
}

impl StatusOverview {
    const EMPTY: StatusOverview = StatusOverview {
        action_label: None,
        next_status: None,
        message: None,
    };

    const fn banner(message: &'static str) -> StatusOverview {
        StatusOverview {
            action_label: None,
            next_status: None,
            message: Some(message),
        }
    }

    const fn action(
        label: &'static str,
        next: EventStatus,
        message: &'static str,
    ) -> StatusOverview {
        StatusOverview {
            action_label: Some(label),
            next_status: Some(next),
            message: Some(message),
        }
    }
}

/// Overview for `status`, matched case-insensitively.
///
/// `show_no_manager_video` selects the `Completed` banner variant: the
/// default copy promises processing, the flagged copy asks for the missing
/// manager video. Unrecognized statuses get an inert overview with no
/// button and no message.
pub fn status_overview(status: &str, show_no_manager_video: bool) -> StatusOverview {
    let Some(parsed) = EventStatus::from_insensitive(status) else {
        return StatusOverview::EMPTY;
    };

    match parsed {
        EventStatus::Created => StatusOverview::action(
            "List Event",
            EventStatus::Listed,
            "Update the event to Listed to start event setup on Camera screen",
        ),
        EventStatus::Listed => StatusOverview::banner(
            "Event has been created and is ready for recording. The event manager can now setup \
             the event on the Camera screen.",
        ),
        EventStatus::PreEvent => StatusOverview::banner(
            "Use this time to set up any additional cameras and mobile devices needed to capture \
             the event. Connect to the event by selecting the \"Select Event\" button on the top \
             center of the Camera screen.",
        ),
        EventStatus::InProgress => StatusOverview::banner("Event is currently in progress."),
        EventStatus::Completed => {
            if show_no_manager_video {
                StatusOverview::banner(COMPLETED_MISSING_MANAGER_VIDEO)
            } else {
                StatusOverview::banner(COMPLETED_PROCESSING_SOON)
            }
        }
        EventStatus::Processing => StatusOverview::banner(
            "Event is processing. You will be able to create Sequences soon.",
        ),
        EventStatus::PostProduction => StatusOverview::banner(
            "The event is ready to go. You can now upload pro audio, add extra camera sources, \
             and start creating Sequences for playback and download.",
        ),
        EventStatus::Published => {
            StatusOverview::banner("This event is published and ready to be viewed")
        }
        EventStatus::Canceled => StatusOverview::action(
            "Reschedule Event",
            EventStatus::Rescheduled,
            "Please reschedule or delete this event",
        ),
        EventStatus::Rescheduled => StatusOverview::action(
            "Re-List Event",
            EventStatus::Listed,
            "Please update the necessary event information to the reschedule date",
        ),
    }
}

#[cfg(test)]
#[path = "overview_tests.rs"]
mod tests;
