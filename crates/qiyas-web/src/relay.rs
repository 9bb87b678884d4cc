//! Relay to the external answering backend.
//!
//! One inbound body in, one outbound POST, the backend's JSON back out
//! untouched. Every failure collapses into the same generic 500 payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use qiyas_common::{error::Result, ErrorBody};
use qiyas_config::BackendConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body accepted on the relay route. The field is carried as raw JSON so
/// the relay forwards whatever the caller sent without checking its type.
#[derive(Debug, Deserialize, Serialize)]
struct ForwardRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    question: Option<Value>,
}

/// What the relay answers with: a status and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayReply {
    pub status: StatusCode,
    pub body: Value,
}

impl RelayReply {
    pub fn failure() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: serde_json::to_value(ErrorBody::relay_failure())
                .unwrap_or(Value::Null),
        }
    }
}

impl IntoResponse for RelayReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Clone)]
pub struct Relay {
    client: Client,
    endpoint: String,
    propagate_status: bool,
}

impl Relay {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &BackendConfig) -> Self {
        Self {
            client,
            endpoint: config.url.clone(),
            propagate_status: config.propagate_status,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward a raw request body. Never fails: errors are logged and
    /// turned into [`RelayReply::failure`].
    pub async fn forward(&self, body: &[u8]) -> RelayReply {
        match self.try_forward(body).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Relay to {} failed: {}", self.endpoint, e);
                RelayReply::failure()
            }
        }
    }

    async fn try_forward(&self, body: &[u8]) -> Result<RelayReply> {
        let request: ForwardRequest = serde_json::from_slice(body)?;

        let resp = self.client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let backend_status = resp.status().as_u16();
        let data: Value = resp.json().await?;

        // The backend's own status is only honoured when configured to be.
        let status = if self.propagate_status {
            StatusCode::from_u16(backend_status).unwrap_or(StatusCode::BAD_GATEWAY)
        } else {
            StatusCode::OK
        };

        tracing::debug!(backend_status, relayed = status.as_u16(), "Relayed question");
        Ok(RelayReply { status, body: data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay_to(url: &str) -> Relay {
        let client = Client::builder().no_proxy().build().unwrap();
        Relay::with_client(client, &BackendConfig { url: url.to_string(), propagate_status: false })
    }

    #[test]
    fn test_failure_reply_is_generic_500() {
        let reply = RelayReply::failure();
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            reply.body,
            serde_json::json!({ "error": "An error occurred processing your request" })
        );
    }

    #[test]
    fn test_absent_question_is_forwarded_as_absent() {
        let req: ForwardRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(serde_json::to_string(&req).unwrap(), "{}");
    }

    #[test]
    fn test_question_is_forwarded_verbatim() {
        let req: ForwardRequest =
            serde_json::from_str(r#"{"question":"What about patience?","extra":1}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"question":"What about patience?"}"#
        );
    }

    #[tokio::test]
    async fn test_malformed_body_never_reaches_backend() {
        // Port 9 (discard) is never contacted: parsing fails first.
        let relay = relay_to("http://127.0.0.1:9/ask");
        let reply = relay.forward(b"{not json").await;
        assert_eq!(reply, RelayReply::failure());
    }
}
