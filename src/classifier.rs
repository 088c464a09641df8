//! Engagement event classification
//!
//! Validates an inbound raw event and normalizes it into a canonical
//! [`EngagementEvent`]:
//! - presence checks for required fields (`event_type`, `report_id`)
//! - timestamp coercion from ISO-8601 strings
//! - unknown event types degrade to [`EventType::Other`], never a rejection

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::EngineError;
use crate::types::{Attribution, ClientMeta, EngagementEvent, EventType};

/// Raw engagement event as received from the tracking collector.
///
/// Every field is optional at this stage; validation happens in
/// [`classify`], not during deserialization, so a missing required field
/// produces a typed error rather than a serde failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEngagement {
    pub event_type: Option<String>,
    pub report_id: Option<String>,
    pub contact_id: Option<String>,
    pub target: Option<String>,
    /// Arrives as arbitrary JSON; numbers are stringified during
    /// classification, anything else non-string is dropped
    pub value: Option<serde_json::Value>,
    pub timestamp: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub referrer: Option<String>,
}

/// Validate and normalize a raw event into a canonical [`EngagementEvent`].
///
/// Missing required fields produce [`EngineError::MissingField`] naming every
/// absent key; a malformed timestamp produces
/// [`EngineError::MalformedTimestamp`]. An absent timestamp defaults to the
/// classification time, matching the collector's own fallback.
pub fn classify(raw: &RawEngagement) -> Result<EngagementEvent, EngineError> {
    let mut missing = Vec::new();
    if raw.event_type.is_none() {
        missing.push("event_type");
    }
    if raw.report_id.is_none() {
        missing.push("report_id");
    }
    if !missing.is_empty() {
        return Err(EngineError::MissingField(missing.join(", ")));
    }

    // Presence checked above
    let event_type = raw.event_type.as_deref().unwrap_or_default();
    let report_id = raw.report_id.clone().unwrap_or_default();

    let timestamp = match raw.timestamp.as_deref() {
        Some(text) => parse_timestamp(text)?,
        None => Utc::now(),
    };

    Ok(EngagementEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        event_type: EventType::from_raw(event_type),
        report_id,
        contact_id: raw.contact_id.clone(),
        target: raw.target.clone(),
        value: raw.value.as_ref().and_then(normalize_value),
        timestamp,
        attribution: Attribution {
            utm_source: raw.utm_source.clone(),
            utm_medium: raw.utm_medium.clone(),
            utm_campaign: raw.utm_campaign.clone(),
        },
        client: ClientMeta {
            user_agent: raw.user_agent.clone(),
            ip_address: raw.ip_address.clone(),
            referrer: raw.referrer.clone(),
        },
    })
}

/// Parse a raw JSON body and classify it in one step.
pub fn classify_json(raw_json: &str) -> Result<EngagementEvent, EngineError> {
    let raw: RawEngagement = serde_json::from_str(raw_json)?;
    classify(&raw)
}

/// Coerce an ISO-8601 timestamp into UTC.
///
/// Accepts both offset-carrying RFC 3339 strings and naive local-less
/// timestamps (`2024-01-15T10:00:00`), which are taken as UTC.
fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, EngineError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = text.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc());
    }
    Err(EngineError::MalformedTimestamp(text.to_string()))
}

fn normalize_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
