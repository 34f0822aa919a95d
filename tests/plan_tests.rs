//! Plan generation integration tests
//!
//! The service is replaced by a scripted transport; nothing here touches the network
//! or the environment.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use vitaplan::plan::{ChatRequest, SYSTEM_INSTRUCTION};
use vitaplan::{
    fallback_plan, AnswerRecord, AnswerStore, ChatTransport, GenerationConfig, Locale,
    PersonalizedPlan, Phase, PlanRequester, Priority, ScalarField, Session, SetField,
    StatusConfig, Stepper, SupplementRecommendation, VitaplanError,
};

/// Transport returning one scripted outcome and recording every request
struct FakeTransport {
    outcome: Box<dyn Fn() -> vitaplan::Result<String> + Send + Sync>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl FakeTransport {
    fn new(outcome: impl Fn() -> vitaplan::Result<String> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            outcome: Box::new(outcome),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn replying(content: &str) -> Arc<Self> {
        let body = chat_body(content);
        Self::new(move || Ok(body.clone()))
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ChatTransport for FakeTransport {
    fn complete(&self, request: &ChatRequest) -> vitaplan::Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        (self.outcome)()
    }
}

fn chat_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

fn record() -> AnswerRecord {
    let mut answers = AnswerStore::new();
    answers.set_scalar(ScalarField::Name, "Elena");
    answers.set_scalar(ScalarField::Email, "elena@example.com");
    answers.set_scalar(ScalarField::Age, "46-55");
    answers.set_scalar(ScalarField::Gender, "female");
    answers.set_scalar(ScalarField::CurrentFeeling, "okay");
    answers.set_scalar(ScalarField::EnergyLevel, "low");
    answers.set_scalar(ScalarField::WorkoutFrequency, "occasional");
    answers.toggle_in_set(SetField::WorkoutType, "walking", true);
    answers.toggle_in_set(SetField::HealthGoals, "sleep", true);
    answers.toggle_in_set(SetField::HealthGoals, "stress", true);
    answers.set_scalar(ScalarField::DietType, "mediterranean");
    answers.set_scalar(ScalarField::SleepQuality, "poor");
    answers.set_scalar(ScalarField::StressLevel, "high");
    answers.set_scalar(ScalarField::Budget, "50-100");
    Stepper::replay(&answers, Locale::En).unwrap()
}

fn settings() -> GenerationConfig {
    GenerationConfig {
        model: "test-model".to_string(),
        temperature: 0.3,
        max_tokens: 512,
        ..GenerationConfig::default()
    }
}

fn requester(transport: Arc<FakeTransport>) -> PlanRequester {
    PlanRequester::new(transport, settings(), Locale::En)
}

fn generated_plan() -> PersonalizedPlan {
    PersonalizedPlan {
        summary: "Focus on sleep and stress.".to_string(),
        recommendations: vec![
            SupplementRecommendation {
                name: "Magnesium Glycinate".to_string(),
                description: "Calming mineral".to_string(),
                benefits: vec!["Sleep".to_string(), "Relaxation".to_string()],
                dosage: "300mg".to_string(),
                timing: "Evening".to_string(),
                link: "https://example.com/mg".to_string(),
                priority: Priority::High,
            },
            SupplementRecommendation {
                name: "L-Theanine".to_string(),
                description: "Amino acid".to_string(),
                benefits: vec!["Calm focus".to_string()],
                dosage: "200mg".to_string(),
                timing: "Afternoon".to_string(),
                link: "https://example.com/theanine".to_string(),
                priority: Priority::Medium,
            },
        ],
        lifestyle_tips: vec!["Keep a fixed bedtime".to_string()],
        timeline: "Expect better sleep within two weeks.".to_string(),
    }
}

// =============================================================================
// Request shape
// =============================================================================

mod request_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_carries_settings_and_profile() {
        let transport = FakeTransport::replying("not json");
        requester(transport.clone()).generate_plan(&record());

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, "test-model");
        assert_eq!(request.max_tokens, 512);
        assert!((request.temperature - 0.3).abs() < f32::EPSILON);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(request.messages[1].role, "user");
        assert!(request.messages[1].content.contains("Elena"));
        assert!(request.messages[1].content.contains("Improve sleep quality"));
    }
}

// =============================================================================
// Outcomes
// =============================================================================

mod outcome_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complete_plan_is_returned_unmodified() {
        let expected = generated_plan();
        let transport = FakeTransport::replying(&serde_json::to_string(&expected).unwrap());

        let plan = requester(transport.clone()).generate_plan(&record());
        assert_eq!(plan, expected);
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_transport_failure_yields_fallback() {
        let transport = FakeTransport::new(|| Err(VitaplanError::Transport("connection refused".into())));
        let record = record();
        assert_eq!(requester(transport.clone()).generate_plan(&record), fallback_plan(&record));
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_error_status_yields_fallback() {
        let transport = FakeTransport::new(|| {
            Err(VitaplanError::Status {
                status: 500,
                body: "upstream exploded".to_string(),
            })
        });
        let record = record();
        assert_eq!(requester(transport).generate_plan(&record), fallback_plan(&record));
    }

    #[test]
    fn test_missing_credential_yields_fallback() {
        let transport = FakeTransport::new(|| Err(VitaplanError::MissingCredential));
        let record = record();
        assert_eq!(requester(transport).generate_plan(&record), fallback_plan(&record));
    }

    #[test]
    fn test_non_json_content_yields_fallback() {
        let transport = FakeTransport::replying("Here is your plan: take vitamins!");
        let record = record();
        assert_eq!(requester(transport).generate_plan(&record), fallback_plan(&record));
    }

    #[test]
    fn test_non_chat_body_yields_fallback() {
        let transport = FakeTransport::new(|| Ok("<html>gateway timeout</html>".to_string()));
        let record = record();
        assert_eq!(requester(transport).generate_plan(&record), fallback_plan(&record));
    }

    #[test]
    fn test_empty_fields_yield_fallback() {
        let transport = FakeTransport::replying(
            r#"{"summary":"","recommendations":[],"lifestyle_tips":[],"timeline":""}"#,
        );
        let record = record();
        let requester = requester(transport);
        assert!(matches!(
            requester.try_generate(&record),
            Err(VitaplanError::IncompletePlan("summary"))
        ));
        assert_eq!(requester.generate_plan(&record), fallback_plan(&record));
    }

    #[test]
    fn test_unknown_priority_yields_fallback() {
        let content = serde_json::to_string(&generated_plan())
            .unwrap()
            .replace("\"medium\"", "\"urgent\"");
        let transport = FakeTransport::replying(&content);
        let record = record();
        let requester = requester(transport);
        assert!(matches!(
            requester.try_generate(&record),
            Err(VitaplanError::MalformedResponse(_))
        ));
        assert_eq!(requester.generate_plan(&record), fallback_plan(&record));
    }
}

// =============================================================================
// Fallback plan
// =============================================================================

mod fallback_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_names_first_goal() {
        let plan = fallback_plan(&record());
        assert!(plan.summary.contains("improve sleep quality goals"));
        assert!(plan.is_complete());
    }

    #[test]
    fn test_fallback_spans_every_priority() {
        let plan = fallback_plan(&record());
        for priority in Priority::all() {
            assert!(plan.recommendations.iter().any(|r| r.priority == *priority));
        }
        assert!((4..=7).contains(&plan.recommendations.len()));
    }
}

// =============================================================================
// Session lifecycle
// =============================================================================

mod session_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(transport: Arc<FakeTransport>) -> Session {
        Session::new(requester(transport), StatusConfig::default()).with_hidden_status()
    }

    #[tokio::test]
    async fn test_generate_moves_to_results() {
        let transport = FakeTransport::replying(&serde_json::to_string(&generated_plan()).unwrap());
        let mut session = session(transport.clone());
        session.submit(record());

        let plan = session.generate().await.unwrap();
        assert_eq!(plan, generated_plan());
        assert!(matches!(session.phase(), Phase::Results { .. }));
        assert_eq!(session.plan(), Some(&generated_plan()));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_service_failure_still_reaches_results() {
        let transport = FakeTransport::new(|| Err(VitaplanError::Transport("timeout".into())));
        let mut session = session(transport);
        let record = record();
        session.submit(record.clone());

        let plan = session.generate().await.unwrap();
        assert_eq!(plan, fallback_plan(&record));
        assert!(matches!(session.phase(), Phase::Results { .. }));
    }

    #[tokio::test]
    async fn test_aborted_attempt_can_be_retried() {
        let transport = FakeTransport::new(|| panic!("transport crashed"));
        let mut session = session(transport.clone());
        session.submit(record());

        assert!(matches!(
            session.generate().await,
            Err(VitaplanError::GenerationFailed(_))
        ));
        assert!(matches!(session.phase(), Phase::Failed(_)));
        assert!(session.record().is_some());

        assert!(session.retry());
        assert!(matches!(session.phase(), Phase::Generating(_)));
        assert!(session.generate().await.is_err());
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_restart_discards_everything() {
        let transport = FakeTransport::replying(&serde_json::to_string(&generated_plan()).unwrap());
        let mut session = session(transport);
        session.submit(record());
        session.generate().await.unwrap();

        session.restart();
        let stepper = session.stepper().unwrap();
        assert_eq!(stepper.step().number(), 1);
        assert_eq!(stepper.answers(), &AnswerStore::new());
        assert!(session.plan().is_none());
        assert!(!session.retry());
    }

    #[tokio::test]
    async fn test_generate_outside_generation_phase_fails() {
        let transport = FakeTransport::replying("{}");
        let mut session = session(transport.clone());
        assert!(session.generate().await.is_err());
        assert!(session.stepper().is_some());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_completing_questionnaire_submits() {
        let transport = FakeTransport::replying("{}");
        let mut session = session(transport);
        let answers: AnswerStore = (*record()).clone();

        loop {
            let step = session.stepper().unwrap().step();
            for field in step.fields() {
                let stepper = session.stepper_mut().unwrap();
                match field {
                    vitaplan::Field::Scalar(f) => {
                        if let Some(v) = answers.scalar(*f) {
                            stepper.answers_mut().set_scalar(*f, v);
                        }
                    }
                    vitaplan::Field::Set(f) => {
                        for v in answers.set(*f) {
                            stepper.answers_mut().toggle_in_set(*f, v, true);
                        }
                    }
                }
            }
            if matches!(session.advance(), Some(vitaplan::Advance::Completed(_))) {
                break;
            }
        }

        assert!(matches!(session.phase(), Phase::Generating(_)));
        assert!(session.advance().is_none());
    }
}
