//! Follow-up action dispatch
//!
//! Maps a lead score to one of a small set of follow-up actions. This
//! module only decides; invoking the actual notification or email system is
//! the caller's job, with the decided action plus (contact_id, report_id).

use tracing::debug;

use crate::types::FollowUpAction;

/// Score at or above which the sales team is alerted immediately
pub const HIGH_PRIORITY_THRESHOLD: i32 = 100;

/// Score at or above which a follow-up email is scheduled
pub const FOLLOW_UP_THRESHOLD: i32 = 50;

/// Decide the follow-up action for a scored engagement.
///
/// Without a contact there is no identifiable lead to act on, so the
/// result is [`FollowUpAction::None`] regardless of score - a no-op
/// outcome, not an error.
pub fn dispatch(contact_id: Option<&str>, score: i32, report_id: &str) -> FollowUpAction {
    let Some(contact_id) = contact_id else {
        debug!(report_id, score, "anonymous engagement, no follow-up");
        return FollowUpAction::None;
    };

    let action = if score >= HIGH_PRIORITY_THRESHOLD {
        FollowUpAction::HighPriorityAlert
    } else if score >= FOLLOW_UP_THRESHOLD {
        FollowUpAction::ScheduleEmail
    } else {
        FollowUpAction::None
    };

    debug!(contact_id, report_id, score, action = action.as_str(), "follow-up decided");
    action
}
