//! @acp:module "Plan Generation"
//! @acp:summary "Supplement plan model and the generative-service round trip"
//! @acp:domain cli
//! @acp:layer service
//!
//! # Plan Generation
//!
//! Turns a completed [`AnswerRecord`](crate::answers::AnswerRecord) into a
//! [`PersonalizedPlan`]:
//!
//! - [`prompt`]: renders the profile into the model prompt
//! - [`transport`]: the [`ChatTransport`] seam and its HTTP implementation
//! - [`requester`]: one attempt, strict decoding, fallback on any failure
//! - [`fallback`]: the static plan substituted when generation fails
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vitaplan::plan::{ApiKey, HttpTransport, PlanRequester};
//!
//! let transport = HttpTransport::new(&config.generation, Some(ApiKey::new(key)));
//! let requester = PlanRequester::new(Arc::new(transport), config.generation.clone(), locale);
//! let plan = requester.generate_plan(&record);
//! ```

pub mod fallback;
pub mod prompt;
pub mod requester;
pub mod transport;

pub use fallback::fallback_plan;
pub use prompt::{build_prompt, SYSTEM_INSTRUCTION};
pub use requester::PlanRequester;
pub use transport::{ApiKey, ChatMessage, ChatRequest, ChatResponse, ChatTransport, HttpTransport};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitaplanError};

/// @acp:summary "Recommendation urgency, also the display bucket"
///
/// Decoding rejects anything but the three lowercase tokens, which sends a response
/// carrying an unknown priority to the fallback plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Display order
    pub fn all() -> &'static [Priority] {
        &[Priority::High, Priority::Medium, Priority::Low]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// @acp:summary "One recommended supplement"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementRecommendation {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub timing: String,
    /// Purchase link
    #[serde(default)]
    pub link: String,
    pub priority: Priority,
}

/// @acp:summary "Generated or fallback supplement plan"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizedPlan {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<SupplementRecommendation>,
    #[serde(default)]
    pub lifestyle_tips: Vec<String>,
    #[serde(default)]
    pub timeline: String,
}

impl PersonalizedPlan {
    /// @acp:summary "Check that all four top-level fields carry content"
    pub fn validate(&self) -> Result<()> {
        if self.summary.trim().is_empty() {
            return Err(VitaplanError::IncompletePlan("summary"));
        }
        if self.recommendations.is_empty() {
            return Err(VitaplanError::IncompletePlan("recommendations"));
        }
        if self.lifestyle_tips.is_empty() {
            return Err(VitaplanError::IncompletePlan("lifestyle_tips"));
        }
        if self.timeline.trim().is_empty() {
            return Err(VitaplanError::IncompletePlan("timeline"));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(priority: Priority) -> SupplementRecommendation {
        SupplementRecommendation {
            name: "Zinc".to_string(),
            description: String::new(),
            benefits: vec![],
            dosage: String::new(),
            timing: String::new(),
            link: String::new(),
            priority,
        }
    }

    #[test]
    fn test_priority_serialization() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
        assert!(serde_json::from_str::<Priority>("\"urgent\"").is_err());
        assert!(serde_json::from_str::<Priority>("\"HIGH\"").is_err());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut plan = PersonalizedPlan {
            summary: "Focus on sleep".to_string(),
            recommendations: vec![recommendation(Priority::High)],
            lifestyle_tips: vec!["Walk daily".to_string()],
            timeline: String::new(),
        };
        assert!(matches!(
            plan.validate(),
            Err(VitaplanError::IncompletePlan("timeline"))
        ));

        plan.timeline = "Weeks 1-4".to_string();
        assert!(plan.is_complete());

        plan.summary = "   ".to_string();
        assert!(matches!(
            plan.validate(),
            Err(VitaplanError::IncompletePlan("summary"))
        ));
    }

    #[test]
    fn test_missing_top_level_fields_decode_as_empty() {
        let plan: PersonalizedPlan = serde_json::from_str(r#"{"summary":"x"}"#).unwrap();
        assert!(plan.recommendations.is_empty());
        assert!(!plan.is_complete());
    }

    #[test]
    fn test_recommendation_requires_priority() {
        let err = serde_json::from_str::<SupplementRecommendation>(r#"{"name":"Zinc"}"#);
        assert!(err.is_err());
    }
}
