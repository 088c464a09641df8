//! Report publishing
//!
//! Builds the outbound payload for a generated report, signs it, transmits
//! it to the publishing endpoint, and interprets the response. The HTTP
//! call sits behind the [`PublishTransport`] trait so the publish logic is
//! testable without network access.
//!
//! No retries happen here: retry policy belongs to the caller, since a
//! rejection with a 4xx status is not retry-safe while a transport failure
//! may be.

use std::env;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::EngineError;
use crate::signer;
use crate::types::{PublishOutcome, ReportPayload};
use crate::CLIENT_USER_AGENT;

/// Default publishing endpoint
pub const DEFAULT_PUBLISH_ENDPOINT: &str =
    "https://possibleminds.in/.netlify/functions/publish-report";

/// The single recognized success status
const SUCCESS_STATUS: u16 = 200;

/// Default transmit timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the shared webhook secret
pub const SECRET_ENV_VAR: &str = "SALESBOT_WEBHOOK_SECRET";

/// Environment variable overriding the publish endpoint
pub const ENDPOINT_ENV_VAR: &str = "SALESBOT_PUBLISH_URL";

/// Publisher configuration, passed in explicitly at construction.
///
/// The engine never reads the environment implicitly at call time; use
/// [`PublisherConfig::from_env`] at startup if the host wants env-driven
/// configuration.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Publish endpoint URL
    pub endpoint: String,
    /// Shared secret for webhook signing
    pub secret: String,
    /// Transmit timeout in seconds
    pub timeout_secs: u64,
}

impl PublisherConfig {
    pub fn new(endpoint: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            secret: secret.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Build a config from `SALESBOT_WEBHOOK_SECRET` and (optionally)
    /// `SALESBOT_PUBLISH_URL`. A missing secret is an error.
    pub fn from_env() -> Result<Self, EngineError> {
        let secret =
            env::var(SECRET_ENV_VAR).map_err(|_| EngineError::Config(SECRET_ENV_VAR.to_string()))?;
        let endpoint =
            env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| DEFAULT_PUBLISH_ENDPOINT.to_string());
        Ok(Self::new(endpoint, secret))
    }
}

/// Response from one transport attempt
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for the outbound publish call.
///
/// Implementations attach `Content-Type: application/json`,
/// `X-Hub-Signature-256`, and the client identifier header, then POST the
/// canonical payload bytes.
pub trait PublishTransport {
    fn post(
        &self,
        endpoint: &str,
        body: &[u8],
        signature: &str,
    ) -> Result<TransportResponse, EngineError>;
}

/// Default transport backed by a blocking reqwest client
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, EngineError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(|e| EngineError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PublishTransport for HttpTransport {
    fn post(
        &self,
        endpoint: &str,
        body: &[u8],
        signature: &str,
    ) -> Result<TransportResponse, EngineError> {
        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .header("X-Hub-Signature-256", signature)
            .body(body.to_vec())
            .send()
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| EngineError::Transport(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}

/// Success response body from the publishing endpoint
#[derive(Debug, Default, Deserialize)]
struct PublishResponse {
    #[serde(default)]
    data: PublishData,
}

#[derive(Debug, Default, Deserialize)]
struct PublishData {
    #[serde(rename = "publishUrl")]
    publish_url: Option<String>,
    #[serde(rename = "companySlug")]
    company_slug: Option<String>,
}

/// Publishes signed reports to the configured endpoint
pub struct Publisher<T: PublishTransport = HttpTransport> {
    config: PublisherConfig,
    transport: T,
}

impl Publisher<HttpTransport> {
    /// Create a publisher with the default HTTP transport
    pub fn new(config: PublisherConfig) -> Result<Self, EngineError> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self { config, transport })
    }
}

impl<T: PublishTransport> Publisher<T> {
    /// Create a publisher over a caller-supplied transport
    pub fn with_transport(config: PublisherConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Publish one report.
    ///
    /// Fails with [`EngineError::NoReport`] before any transport activity
    /// when the report body is empty. A success response with missing
    /// `publishUrl`/`companySlug` metadata is still a success - the fields
    /// come back as `None`.
    pub fn publish(&self, report: &ReportPayload) -> Result<PublishOutcome, EngineError> {
        if report.markdown_report.is_empty() {
            return Err(EngineError::NoReport);
        }

        let envelope = signer::sign_payload(&self.config.secret, report)?;
        let response = self.transport.post(
            &self.config.endpoint,
            &envelope.canonical_payload,
            &envelope.signature,
        )?;

        if response.status != SUCCESS_STATUS {
            warn!(
                company = %report.company_name,
                status = response.status,
                "publish rejected by remote"
            );
            return Err(EngineError::RemoteRejected {
                status: response.status,
                body: response.body,
            });
        }

        // Publishing succeeded; auxiliary metadata is best-effort
        let parsed: PublishResponse = serde_json::from_str(&response.body).unwrap_or_default();
        let outcome = PublishOutcome {
            published_url: parsed.data.publish_url,
            report_slug: parsed.data.company_slug,
        };

        info!(
            company = %report.company_name,
            url = outcome.published_url.as_deref().unwrap_or("<none>"),
            "report published"
        );
        Ok(outcome)
    }
}
