//! Pipeline orchestration
//!
//! Ties the engagement stages together: classify → score → dispatch.
//! Each invocation owns its inputs and outputs; there is no shared state,
//! so concurrent calls need no coordination. Cross-event score accumulation
//! per contact is the persistence layer's job, not this crate's.

use tracing::debug;

use crate::classifier::{self, RawEngagement};
use crate::dispatch::dispatch;
use crate::error::EngineError;
use crate::scoring::score;
use crate::types::EngagementOutcome;

/// Run one raw engagement event through the full pipeline.
///
/// Classification failure aborts before anything is scored; the caller
/// should surface it as a client error, not a crash.
pub fn process_engagement(raw_json: &str) -> Result<EngagementOutcome, EngineError> {
    let event = classifier::classify_json(raw_json)?;
    let delta = score(&event);
    let action = dispatch(event.contact_id.as_deref(), delta, &event.report_id);

    debug!(
        event_type = event.event_type.as_str(),
        report_id = %event.report_id,
        delta,
        action = action.as_str(),
        "engagement processed"
    );

    Ok(EngagementOutcome { event, delta, action })
}

/// Same pipeline over an already-deserialized raw event.
pub fn process_raw(raw: &RawEngagement) -> Result<EngagementOutcome, EngineError> {
    let event = classifier::classify(raw)?;
    let delta = score(&event);
    let action = dispatch(event.contact_id.as_deref(), delta, &event.report_id);
    Ok(EngagementOutcome { event, delta, action })
}

/// Entry point for hosting applications that want a value to hold.
///
/// Stateless today; exists so hosts can wire the engine in once and gain
/// future configuration without touching call sites.
#[derive(Debug, Default)]
pub struct EngagementProcessor;

impl EngagementProcessor {
    pub fn new() -> Self {
        Self
    }

    /// See [`process_engagement`].
    pub fn process(&self, raw_json: &str) -> Result<EngagementOutcome, EngineError> {
        process_engagement(raw_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventType, FollowUpAction};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_high_value_event_schedules_email() {
        let outcome = process_engagement(
            r#"{"event_type": "cta_click", "report_id": "r1", "contact_id": "c1"}"#,
        )
        .unwrap();

        assert_eq!(outcome.event.event_type, EventType::CtaClick);
        assert_eq!(outcome.delta, 50);
        assert_eq!(outcome.action, FollowUpAction::ScheduleEmail);
    }

    #[test]
    fn test_long_dwell_triggers_high_priority() {
        let outcome = process_engagement(
            r#"{"event_type": "time_spent", "report_id": "r1", "contact_id": "c1", "value": "700"}"#,
        )
        .unwrap();

        assert_eq!(outcome.delta, 100);
        assert_eq!(outcome.action, FollowUpAction::HighPriorityAlert);
    }

    #[test]
    fn test_anonymous_event_scores_but_never_acts() {
        let outcome = process_engagement(
            r#"{"event_type": "time_spent", "report_id": "r1", "value": "700"}"#,
        )
        .unwrap();

        assert_eq!(outcome.delta, 100);
        assert_eq!(outcome.action, FollowUpAction::None);
    }

    #[test]
    fn test_quick_bounce_scores_negative() {
        let outcome = process_engagement(
            r#"{"event_type": "time_spent", "report_id": "r1", "contact_id": "c1", "value": "10"}"#,
        )
        .unwrap();

        assert_eq!(outcome.delta, -10);
        assert_eq!(outcome.action, FollowUpAction::None);
    }

    #[test]
    fn test_missing_report_id_never_scores() {
        let result = process_engagement(r#"{"event_type": "cta_click"}"#);
        assert!(matches!(
            result,
            Err(EngineError::MissingField(fields)) if fields == "report_id"
        ));
    }

    #[test]
    fn test_unknown_event_flows_through_with_zero_delta() {
        let outcome = process_engagement(
            r#"{"event_type": "easter_egg", "report_id": "r1", "contact_id": "c1"}"#,
        )
        .unwrap();

        assert_eq!(
            outcome.event.event_type,
            EventType::Other("easter_egg".to_string())
        );
        assert_eq!(outcome.delta, 0);
        assert_eq!(outcome.action, FollowUpAction::None);
    }

    #[test]
    fn test_processor_wrapper() {
        let processor = EngagementProcessor::new();
        let outcome = processor
            .process(r#"{"event_type": "scroll", "report_id": "r1", "value": "80%"}"#)
            .unwrap();
        assert_eq!(outcome.delta, 30);
    }

    #[test]
    fn test_outcome_serializes_for_receiver_response() {
        let outcome = process_engagement(
            r#"{"event_type": "scroll", "report_id": "r1", "contact_id": "c1", "value": "80%"}"#,
        )
        .unwrap();

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["delta"], 30);
        assert_eq!(json["action"], "none");
        assert_eq!(json["event"]["event_type"], "scroll");
    }
}
