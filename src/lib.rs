//! Leadpulse - engagement scoring and signed report publishing engine
//!
//! Leadpulse converts visitor engagement on published sales reports into
//! lead-priority signals through a deterministic pipeline: classification →
//! scoring → follow-up dispatch. On the outbound side it publishes generated
//! reports over an HMAC-authenticated webhook.
//!
//! ## Modules
//!
//! - **Publisher**: sign and transmit a generated report to the publishing endpoint
//! - **Signer**: canonical-JSON HMAC-SHA256 signing and verification
//! - **Classifier / Scoring / Dispatch**: raw engagement events → score deltas → follow-up actions
//! - **Tracking / Slug**: deterministic attribution URLs for email campaigns
//!
//! The crate is an engine, not a service: HTTP routing, persistence, and
//! email rendering are collaborators that call into these functions.

pub mod classifier;
pub mod dispatch;
pub mod error;
pub mod pipeline;
pub mod publisher;
pub mod scoring;
pub mod signer;
pub mod slug;
pub mod tracking;
pub mod types;

pub use classifier::{classify, classify_json, RawEngagement};
pub use dispatch::dispatch;
pub use error::EngineError;
pub use pipeline::{process_engagement, EngagementProcessor};
pub use publisher::{Publisher, PublisherConfig, PublishTransport};
pub use scoring::score;
pub use signer::{canonical_json, sign, sign_payload, verify};
pub use slug::generate_slug;
pub use tracking::{build_campaign_url, build_url};
pub use types::{
    EngagementEvent, EngagementOutcome, EventType, FollowUpAction, PublishOutcome, ReportPayload,
    SignedEnvelope,
};

/// Leadpulse version reported to collaborators
pub const LEADPULSE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client identifier sent with every outbound publish call
pub const CLIENT_USER_AGENT: &str = "Salesbot/1.0";
