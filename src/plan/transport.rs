//! @acp:module "Chat Transport"
//! @acp:summary "Chat-completion wire types and the HTTP transport"
//! @acp:domain cli
//! @acp:layer service
//!
//! [`ChatTransport`] is the seam between plan generation and the network. The HTTP
//! implementation is constructed with its credential; nothing here reads the process
//! environment.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GenerationConfig;
use crate::error::{Result, VitaplanError};

/// @acp:summary "Bearer credential for the generative service"
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Non-empty key, if any
    pub fn from_optional(key: Option<String>) -> Option<Self> {
        key.map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// @acp:summary "Chat-completion request body"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Chat-completion response body; only the fields plan generation reads
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatReply>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

/// @acp:summary "Sends one chat request and returns the raw response body"
///
/// Implementations make exactly one attempt. A non-success status must be reported as
/// [`VitaplanError::Status`], never as a body.
pub trait ChatTransport: Send + Sync {
    fn complete(&self, request: &ChatRequest) -> Result<String>;
}

/// @acp:summary "Blocking HTTPS transport for chat-completion endpoints"
pub struct HttpTransport {
    endpoint: String,
    credential: Option<ApiKey>,
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new(config: &GenerationConfig, credential: Option<ApiKey>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("vitaplan/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            endpoint: config.endpoint.clone(),
            credential,
            agent,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}

impl ChatTransport for HttpTransport {
    fn complete(&self, request: &ChatRequest) -> Result<String> {
        let credential = self
            .credential
            .as_ref()
            .ok_or(VitaplanError::MissingCredential)?;

        debug!(endpoint = %self.endpoint, model = %request.model, "sending chat request");

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", credential.expose()))
            .send_json(request);

        match response {
            Ok(response) => Ok(response.into_string()?),
            Err(ureq::Error::Status(status, response)) => Err(VitaplanError::Status {
                status,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(transport)) => {
                Err(VitaplanError::Transport(transport.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.expose(), "sk-secret");
    }

    #[test]
    fn test_api_key_from_optional_skips_blank() {
        assert!(ApiKey::from_optional(None).is_none());
        assert!(ApiKey::from_optional(Some("  ".to_string())).is_none());
        assert_eq!(
            ApiKey::from_optional(Some(" sk-1 ".to_string())),
            Some(ApiKey::new("sk-1"))
        );
    }

    #[test]
    fn test_request_serializes_chat_shape() {
        let request = ChatRequest {
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            temperature: 0.5,
            max_tokens: 2000,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(value["max_tokens"], 2000);
    }

    #[test]
    fn test_response_content_of_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"{}"}},{"message":{"content":"x"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.content(), Some("{}"));

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(empty.content(), None);
    }

    #[test]
    fn test_missing_credential_fails_without_network() {
        let transport = HttpTransport::new(&GenerationConfig::default(), None);
        assert!(!transport.has_credential());

        let request = ChatRequest {
            model: "gpt-4".to_string(),
            messages: vec![],
            temperature: 0.7,
            max_tokens: 10,
        };
        assert!(matches!(
            transport.complete(&request),
            Err(VitaplanError::MissingCredential)
        ));
    }
}
