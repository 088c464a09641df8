//! Core types for the Leadpulse pipeline
//!
//! This module defines the data structures that flow through each stage:
//! the outbound report payload, the canonical engagement event, score deltas,
//! and follow-up action decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Engagement event type reported by the published report page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    CtaClick,
    Contact,
    Services,
    Download,
    TimeSpent,
    Scroll,
    /// Unrecognized event types are accepted and carried verbatim
    #[serde(untagged)]
    Other(String),
}

impl EventType {
    /// Map a raw `event_type` string to a variant.
    ///
    /// Unknown strings become [`EventType::Other`] so that unrecognized
    /// events never break ingestion, only decline to score highly.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "cta_click" => EventType::CtaClick,
            "contact" => EventType::Contact,
            "services" => EventType::Services,
            "download" => EventType::Download,
            "time_spent" => EventType::TimeSpent,
            "scroll" => EventType::Scroll,
            other => EventType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventType::CtaClick => "cta_click",
            EventType::Contact => "contact",
            EventType::Services => "services",
            EventType::Download => "download",
            EventType::TimeSpent => "time_spent",
            EventType::Scroll => "scroll",
            EventType::Other(name) => name.as_str(),
        }
    }
}

/// Report payload sent to the publishing endpoint.
///
/// Immutable once built; exists only for the duration of one publish call.
/// Optional fields serialize as explicit `null` so the canonical byte
/// sequence always carries the same key set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    /// Internal company identifier
    pub company_id: i64,
    /// Display name, also the basis for the report slug
    pub company_name: String,
    /// Company website URL, if known
    pub company_website: Option<String>,
    /// The generated report body (markdown)
    pub markdown_report: String,
    /// When the report was generated (UTC)
    pub generated_date: DateTime<Utc>,
    /// Contact to attribute engagement to, if tracked
    pub contact_id: Option<String>,
}

/// A canonical payload plus the signature computed over it.
///
/// Invariant: a verifying party with the same shared secret and the same
/// canonical bytes derives an identical signature.
#[derive(Debug, Clone)]
pub struct SignedEnvelope {
    /// Deterministically ordered serialization of the payload
    pub canonical_payload: Vec<u8>,
    /// `"sha256=<hex-digest>"` over the canonical payload
    pub signature: String,
}

/// Campaign attribution fields carried on an engagement event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
}

/// Client metadata captured by the tracking collector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

/// Canonical engagement event - the validated, normalized form of one
/// recorded visitor interaction with a published report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementEvent {
    /// Unique event identifier assigned at classification
    pub event_id: String,
    /// Normalized event type
    pub event_type: EventType,
    /// Report the interaction happened on
    pub report_id: String,
    /// Contact the interaction is attributed to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    /// Element or section the interaction targeted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Event value; meaning depends on `event_type` (seconds for
    /// `time_spent`, a percentage string for `scroll`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// When the interaction happened (UTC)
    pub timestamp: DateTime<Utc>,
    /// Campaign attribution
    #[serde(default)]
    pub attribution: Attribution,
    /// Client metadata
    #[serde(default)]
    pub client: ClientMeta,
}

/// Follow-up action decided from a lead score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpAction {
    /// Nothing to do (no contact, or score below every threshold)
    None,
    /// Schedule an automated follow-up email
    ScheduleEmail,
    /// Alert the sales team for immediate follow-up
    HighPriorityAlert,
}

impl FollowUpAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpAction::None => "none",
            FollowUpAction::ScheduleEmail => "schedule_email",
            FollowUpAction::HighPriorityAlert => "high_priority_alert",
        }
    }
}

/// Outcome of a successful publish call.
///
/// Both fields are optional: publishing succeeded even if the endpoint
/// omitted the auxiliary metadata from its response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishOutcome {
    /// Public URL of the published report
    pub published_url: Option<String>,
    /// Slug the endpoint assigned to the company
    pub report_slug: Option<String>,
}

/// Result of running one raw event through classify, score, and dispatch
#[derive(Debug, Clone, Serialize)]
pub struct EngagementOutcome {
    /// The classified event
    pub event: EngagementEvent,
    /// Score delta contributed by this event (may be negative)
    pub delta: i32,
    /// Decided follow-up action
    pub action: FollowUpAction,
}
