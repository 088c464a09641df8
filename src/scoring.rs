//! Engagement scoring
//!
//! Maps one canonical event to an integer score delta using fixed rules.
//! The thresholds below are the authoritative contract: downstream sales
//! automation keys off these exact values, so any change here silently
//! changes follow-up behavior.
//!
//! The engine is an ordered list of independent rule evaluators whose
//! deltas accumulate additively. Current rules test disjoint event-type
//! sets, but new rule groups can stack without restructuring.

use crate::types::{EngagementEvent, EventType};

/// Delta for a high-value interaction (CTA click, contact, services, download)
pub const HIGH_VALUE_DELTA: i32 = 50;

/// Dwell under this many seconds counts as a quick bounce
pub const QUICK_BOUNCE_SECS: i64 = 30;

/// Dwell above this many seconds counts as engaged
pub const ENGAGED_SECS: i64 = 180;

/// Dwell above this many seconds counts as highly engaged
pub const HIGHLY_ENGAGED_SECS: i64 = 600;

type ScoreRule = fn(&EngagementEvent) -> i32;

/// Rule groups evaluated in order; deltas are summed
const RULES: [ScoreRule; 3] = [high_value_event, dwell_time, scroll_depth];

/// Compute the score delta for one event.
///
/// Pure and total: defined for every valid [`EngagementEvent`], and two
/// calls with identical input yield identical output.
pub fn score(event: &EngagementEvent) -> i32 {
    RULES.iter().map(|rule| rule(event)).sum()
}

/// +50 for event types that signal direct buying intent
fn high_value_event(event: &EngagementEvent) -> i32 {
    match event.event_type {
        EventType::CtaClick | EventType::Contact | EventType::Services | EventType::Download => {
            HIGH_VALUE_DELTA
        }
        _ => 0,
    }
}

/// Dwell-time rule for `time_spent` events.
///
/// `value` is seconds on the page; missing or unparseable values are
/// treated as zero rather than failing the event.
fn dwell_time(event: &EngagementEvent) -> i32 {
    if event.event_type != EventType::TimeSpent {
        return 0;
    }

    let seconds = event
        .value
        .as_deref()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0);

    if seconds > HIGHLY_ENGAGED_SECS {
        100
    } else if seconds > ENGAGED_SECS {
        50
    } else if seconds < QUICK_BOUNCE_SECS {
        -10
    } else {
        0
    }
}

/// Scroll-depth rule for `scroll` events.
///
/// `value` is a percentage string like `"80%"`; missing or unparseable
/// values contribute nothing.
fn scroll_depth(event: &EngagementEvent) -> i32 {
    if event.event_type != EventType::Scroll {
        return 0;
    }

    let Some(percent) = event
        .value
        .as_deref()
        .and_then(|v| v.trim().trim_end_matches('%').parse::<i64>().ok())
    else {
        return 0;
    };

    if percent >= 75 {
        30
    } else if percent >= 50 {
        15
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn make_event(event_type: EventType, value: Option<&str>) -> EngagementEvent {
        EngagementEvent {
            event_id: "evt-1".to_string(),
            event_type,
            report_id: "r1".to_string(),
            contact_id: Some("c1".to_string()),
            target: None,
            value: value.map(str::to_string),
            timestamp: Utc::now(),
            attribution: Default::default(),
            client: Default::default(),
        }
    }

    #[test]
    fn test_high_value_events_score_fifty() {
        for ty in [
            EventType::CtaClick,
            EventType::Contact,
            EventType::Services,
            EventType::Download,
        ] {
            assert_eq!(score(&make_event(ty, None)), 50);
        }
    }

    #[test]
    fn test_high_value_independent_of_value() {
        assert_eq!(score(&make_event(EventType::CtaClick, Some("anything"))), 50);
    }

    #[test]
    fn test_time_spent_thresholds() {
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("700"))), 100);
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("200"))), 50);
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("10"))), -10);
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("60"))), 0);
    }

    #[test]
    fn test_time_spent_boundaries() {
        // 30 and 180 sit inside the neutral band; 601 crosses into +100
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("30"))), 0);
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("180"))), 0);
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("181"))), 50);
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("600"))), 50);
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("601"))), 100);
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("29"))), -10);
    }

    #[test]
    fn test_time_spent_missing_value_counts_as_bounce() {
        assert_eq!(score(&make_event(EventType::TimeSpent, None)), -10);
        assert_eq!(score(&make_event(EventType::TimeSpent, Some("soon"))), -10);
    }

    #[test]
    fn test_scroll_thresholds() {
        assert_eq!(score(&make_event(EventType::Scroll, Some("80%"))), 30);
        assert_eq!(score(&make_event(EventType::Scroll, Some("75%"))), 30);
        assert_eq!(score(&make_event(EventType::Scroll, Some("60%"))), 15);
        assert_eq!(score(&make_event(EventType::Scroll, Some("50%"))), 15);
        assert_eq!(score(&make_event(EventType::Scroll, Some("10%"))), 0);
    }

    #[test]
    fn test_scroll_without_percent_suffix() {
        assert_eq!(score(&make_event(EventType::Scroll, Some("80"))), 30);
    }

    #[test]
    fn test_scroll_unparseable_scores_zero() {
        assert_eq!(score(&make_event(EventType::Scroll, None)), 0);
        assert_eq!(score(&make_event(EventType::Scroll, Some("deep"))), 0);
    }

    #[test]
    fn test_other_events_score_zero() {
        assert_eq!(
            score(&make_event(EventType::Other("page_view".to_string()), None)),
            0
        );
    }

    #[test]
    fn test_score_is_deterministic() {
        let event = make_event(EventType::TimeSpent, Some("700"));
        assert_eq!(score(&event), score(&event));
    }
}
