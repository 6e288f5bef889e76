//! Status overview specs
//!
//! Pin the banner/action table and the case-insensitive lookup that sets the
//! overview apart from the policy tables.

use encore_policy::{status_overview, EventStatus};
use yare::parameterized;

#[parameterized(
    created = {
        "Created",
        Some("List Event"),
        Some(EventStatus::Listed),
        "Update the event to Listed to start event setup on Camera screen"
    },
    listed = {
        "Listed",
        None,
        None,
        "Event has been created and is ready for recording. The event manager can now setup the \
         event on the Camera screen."
    },
    in_progress = { "In Progress", None, None, "Event is currently in progress." },
    completed = { "Completed", None, None, "Event is completed and will be begin processing soon." },
    processing = {
        "Processing",
        None,
        None,
        "Event is processing. You will be able to create Sequences soon."
    },
    post_production = {
        "Post Production",
        None,
        None,
        "The event is ready to go. You can now upload pro audio, add extra camera sources, and \
         start creating Sequences for playback and download."
    },
    published = { "Published", None, None, "This event is published and ready to be viewed" },
    canceled = {
        "Canceled",
        Some("Reschedule Event"),
        Some(EventStatus::Rescheduled),
        "Please reschedule or delete this event"
    },
    rescheduled = {
        "Rescheduled",
        Some("Re-List Event"),
        Some(EventStatus::Listed),
        "Please update the necessary event information to the reschedule date"
    },
)]
fn overview_table(
    status: &str,
    action_label: Option<&str>,
    next_status: Option<EventStatus>,
    message: &str,
) {
    let overview = status_overview(status, false);
    assert_eq!(overview.action_label, action_label);
    assert_eq!(overview.next_status, next_status);
    assert_eq!(overview.message, Some(message));
}

#[test]
fn pre_event_overview_walks_through_camera_setup() {
    let overview = status_overview("Pre-Event", false);
    assert_eq!(overview.action_label, None);
    assert_eq!(overview.next_status, None);
    let message = overview.message.unwrap();
    assert!(message.starts_with("Use this time to set up any additional cameras"));
    assert!(message.contains("\"Select Event\" button on the top center of the Camera screen"));
}

#[test]
fn completed_overview_branches_on_the_manager_video_flag() {
    let plain = status_overview("Completed", false).message.unwrap();
    assert!(plain.contains("will be begin processing soon"));

    let flagged = status_overview("Completed", true).message.unwrap();
    assert!(flagged.contains("missing manager video"));
}

#[parameterized(
    created = { "CREATED", "created" },
    pre_event = { "PRE-EVENT", "pre-event" },
    post_production = { "POST PRODUCTION", "post production" },
)]
fn overview_lookup_is_case_insensitive(upper: &str, lower: &str) {
    assert_eq!(status_overview(upper, false), status_overview(lower, false));
    assert_ne!(status_overview(upper, false).message, None);
}

#[test]
fn unrecognized_status_yields_an_inert_overview() {
    let overview = status_overview("Bogus", false);
    assert_eq!(overview.action_label, None);
    assert_eq!(overview.next_status, None);
    assert_eq!(overview.message, None);
}
