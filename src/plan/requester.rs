//! @acp:module "Plan Requester"
//! @acp:summary "One generation attempt with strict decoding and a static fallback"
//! @acp:domain cli
//! @acp:layer service

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::answers::AnswerRecord;
use crate::config::GenerationConfig;
use crate::error::{Result, VitaplanError};
use crate::locale::Locale;

use super::fallback::fallback_plan;
use super::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use super::transport::{ChatMessage, ChatRequest, ChatResponse, ChatTransport};
use super::PersonalizedPlan;

/// Longest slice of a raw response echoed into debug logs
const LOG_EXCERPT: usize = 1000;

/// @acp:summary "Builds the request, calls the service once, validates the plan"
#[derive(Clone)]
pub struct PlanRequester {
    transport: Arc<dyn ChatTransport>,
    settings: GenerationConfig,
    locale: Locale,
}

impl PlanRequester {
    pub fn new(transport: Arc<dyn ChatTransport>, settings: GenerationConfig, locale: Locale) -> Self {
        Self {
            transport,
            settings,
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// @acp:summary "Always returns a usable plan"
    ///
    /// Any failure of [`try_generate`](Self::try_generate) is logged and replaced by the
    /// fallback plan.
    pub fn generate_plan(&self, record: &AnswerRecord) -> PersonalizedPlan {
        match self.try_generate(record) {
            Ok(plan) => {
                info!(
                    recommendations = plan.recommendations.len(),
                    "generated personalized plan"
                );
                plan
            }
            Err(e) => {
                warn!(
                    error = %e,
                    service = e.is_service_failure(),
                    "plan generation failed, using fallback plan"
                );
                fallback_plan(record)
            }
        }
    }

    /// @acp:summary "Single attempt; every failure is reported as an error"
    pub fn try_generate(&self, record: &AnswerRecord) -> Result<PersonalizedPlan> {
        let request = self.build_request(record)?;
        let body = self.transport.complete(&request)?;
        decode_plan(&body)
    }

    /// Chat request for the record, with the configured model and limits
    pub fn build_request(&self, record: &AnswerRecord) -> Result<ChatRequest> {
        let prompt = build_prompt(record, self.locale)?;
        Ok(ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(prompt)],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        })
    }
}

/// @acp:summary "Extract and validate the plan carried in a chat-completion body"
pub fn decode_plan(body: &str) -> Result<PersonalizedPlan> {
    debug!(response = excerpt(body), "raw service response");

    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| VitaplanError::MalformedResponse(format!("body is not a chat response: {}", e)))?;

    let content = response
        .content()
        .ok_or_else(|| VitaplanError::MalformedResponse("no message content".to_string()))?
        .trim();

    let plan: PersonalizedPlan = serde_json::from_str(content).map_err(|e| {
        debug!(content = excerpt(content), "content is not a plan");
        VitaplanError::MalformedResponse(format!("content is not a plan: {}", e))
    })?;

    plan.validate()?;
    Ok(plan)
}

fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(LOG_EXCERPT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(content: &str) -> String {
        serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        })
        .to_string()
    }

    #[test]
    fn test_decode_trims_content() {
        let content = r#"
            {"summary":"s","recommendations":[{"name":"Zinc","priority":"low"}],
             "lifestyle_tips":["t"],"timeline":"w"}
        "#;
        let plan = decode_plan(&wrap(content)).unwrap();
        assert_eq!(plan.recommendations[0].name, "Zinc");
    }

    #[test]
    fn test_decode_rejects_non_chat_body() {
        assert!(matches!(
            decode_plan("<html>bad gateway</html>"),
            Err(VitaplanError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_rejects_missing_content() {
        assert!(matches!(
            decode_plan(r#"{"choices":[{"message":{}}]}"#),
            Err(VitaplanError::MalformedResponse(_))
        ));
        assert!(matches!(
            decode_plan(r#"{"id":"x"}"#),
            Err(VitaplanError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_priority() {
        let content = r#"{"summary":"s","recommendations":[{"name":"Zinc","priority":"urgent"}],"lifestyle_tips":["t"],"timeline":"w"}"#;
        assert!(matches!(
            decode_plan(&wrap(content)),
            Err(VitaplanError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_rejects_incomplete_plan() {
        let content = r#"{"summary":"","recommendations":[],"lifestyle_tips":[],"timeline":""}"#;
        assert!(matches!(
            decode_plan(&wrap(content)),
            Err(VitaplanError::IncompletePlan("summary"))
        ));
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let long = "ж".repeat(LOG_EXCERPT + 10);
        assert_eq!(excerpt(&long).chars().count(), LOG_EXCERPT);
        assert_eq!(excerpt("short"), "short");
    }
}
