//! reqwest-backed gateway

use super::types::{CreateMessageRequest, CreateMessageResponse, ErrorEnvelope, RequestMessage};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use switchboard_application::{CompletionRequest, GatewayError, LlmGateway};
use switchboard_domain::LlmResponse;
use switchboard_domain::util::truncate_str;
use tracing::debug;

/// Anthropic's "overloaded" status code
const STATUS_OVERLOADED: u16 = 529;

/// Connection settings for [`AnthropicGateway`]
#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl AnthropicSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

/// Gateway talking to the Anthropic Messages API
pub struct AnthropicGateway {
    http_client: reqwest::Client,
    url: String,
    headers: HeaderMap,
}

impl AnthropicGateway {
    /// Build the HTTP client and static headers.
    ///
    /// Fails when the key or version cannot be sent as a header value or
    /// the TLS backend cannot be initialised.
    pub fn new(settings: AnthropicSettings) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(&settings.api_version)
                .map_err(|e| GatewayError::Transport(format!("invalid api version: {e}")))?,
        );
        let mut key = HeaderValue::from_str(&settings.api_key)
            .map_err(|_| GatewayError::Authentication("API key is not a valid header value".into()))?;
        key.set_sensitive(true);
        headers.insert("x-api-key", key);

        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            url: settings.messages_url(),
            headers,
        })
    }
}

#[async_trait]
impl LlmGateway for AnthropicGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, GatewayError> {
        let body = CreateMessageRequest {
            model: request.model.as_str(),
            max_tokens: request.max_tokens,
            system: &request.system_prompt,
            messages: vec![RequestMessage {
                role: "user",
                content: &request.user_message,
            }],
        };

        let response = self
            .http_client
            .post(&self.url)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            debug!("Messages API returned {}: {}", status, truncate_str(&text, 200));
            return Err(map_error_response(status, &text));
        }

        decode_success(&text)
    }
}

/// Decode a 2xx body into a response.
pub(crate) fn decode_success(body: &str) -> Result<LlmResponse, GatewayError> {
    serde_json::from_str::<CreateMessageResponse>(body)
        .map(LlmResponse::from)
        .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

/// Map a non-2xx status and body to a gateway error.
///
/// The body's `error.type` takes precedence over the status code so an
/// `overloaded_error` is retryable whatever status carried it.
pub fn map_error_response(status: StatusCode, body: &str) -> GatewayError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let message = match &parsed {
        Some(envelope) if !envelope.error.message.is_empty() => envelope.error.message.clone(),
        _ if body.trim().is_empty() => status.to_string(),
        _ => truncate_str(body.trim(), 500).to_string(),
    };

    match parsed.as_ref().map(|e| e.error.kind.as_str()) {
        Some("overloaded_error") => return GatewayError::Overloaded(message),
        Some("authentication_error") => return GatewayError::Authentication(message),
        _ => {}
    }

    match status.as_u16() {
        STATUS_OVERLOADED => GatewayError::Overloaded(message),
        401 => GatewayError::Authentication(message),
        code => GatewayError::Api {
            status: code,
            message,
        },
    }
}
