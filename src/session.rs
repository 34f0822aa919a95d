//! @acp:module "Session"
//! @acp:summary "Questionnaire → generation → results lifecycle for one user"
//! @acp:domain cli
//! @acp:layer service
//!
//! A session is strictly sequential: the questionnaire is driven by discrete user
//! actions, then exactly one plan request runs on the blocking pool while the status
//! ticker rotates. Nothing is shared between sessions; [`Session::restart`] discards
//! the answers and the plan.

use tracing::{error, info, info_span};
use uuid::Uuid;

use crate::answers::AnswerRecord;
use crate::config::StatusConfig;
use crate::error::{Result, VitaplanError};
use crate::locale::Locale;
use crate::plan::{PersonalizedPlan, PlanRequester};
use crate::status::StatusTicker;
use crate::stepper::{Advance, Stepper};

/// @acp:summary "Where a session currently is"
#[derive(Debug, Clone)]
pub enum Phase {
    /// Collecting answers
    Questionnaire(Stepper),
    /// Answers frozen; waiting for [`Session::generate`]
    Generating(AnswerRecord),
    /// Plan available
    Results {
        record: AnswerRecord,
        plan: PersonalizedPlan,
    },
    /// The generation attempt itself failed; the user may retry or restart
    Failed(AnswerRecord),
}

/// @acp:summary "One user's pass through the questionnaire"
pub struct Session {
    id: Uuid,
    requester: PlanRequester,
    status: StatusConfig,
    show_status: bool,
    phase: Phase,
}

impl Session {
    pub fn new(requester: PlanRequester, status: StatusConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            requester,
            status,
            show_status: true,
            phase: Phase::Questionnaire(Stepper::new()),
        }
    }

    /// Keep the status ticker off screen (JSON output, tests)
    pub fn with_hidden_status(mut self) -> Self {
        self.show_status = false;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn locale(&self) -> Locale {
        self.requester.locale()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn stepper(&self) -> Option<&Stepper> {
        match &self.phase {
            Phase::Questionnaire(stepper) => Some(stepper),
            _ => None,
        }
    }

    pub fn stepper_mut(&mut self) -> Option<&mut Stepper> {
        match &mut self.phase {
            Phase::Questionnaire(stepper) => Some(stepper),
            _ => None,
        }
    }

    /// @acp:summary "Advance the questionnaire; completion moves the session to generation"
    ///
    /// Returns `None` outside the questionnaire phase.
    pub fn advance(&mut self) -> Option<Advance> {
        let outcome = self.stepper_mut()?.advance();
        if let Advance::Completed(record) = &outcome {
            self.submit(record.clone());
        }
        Some(outcome)
    }

    /// Hand a completed record straight to the generation phase
    pub fn submit(&mut self, record: AnswerRecord) {
        info!(session = %self.id, "answers submitted");
        self.phase = Phase::Generating(record);
    }

    /// @acp:summary "Run the single plan request for the submitted answers"
    ///
    /// Service failures never surface here; they already became the fallback plan. An
    /// error means the attempt itself broke down and the session moves to
    /// [`Phase::Failed`].
    pub async fn generate(&mut self) -> Result<PersonalizedPlan> {
        let record = match &self.phase {
            Phase::Generating(record) => record.clone(),
            _ => {
                return Err(VitaplanError::GenerationFailed(
                    "no submitted answers".to_string(),
                ))
            }
        };

        let messages = self.locale().texts().loading;
        let ticker = if self.show_status {
            StatusTicker::start(messages, self.status.interval())
        } else {
            StatusTicker::hidden(messages, self.status.interval())
        };

        let requester = self.requester.clone();
        let worker_record = record.clone();
        let span = info_span!("session", id = %self.id);
        let outcome = tokio::task::spawn_blocking(move || {
            let _guard = span.enter();
            requester.generate_plan(&worker_record)
        })
        .await;

        ticker.stop().await;

        match outcome {
            Ok(plan) => {
                self.phase = Phase::Results {
                    record,
                    plan: plan.clone(),
                };
                Ok(plan)
            }
            Err(e) => {
                error!(session = %self.id, error = %e, "plan generation aborted");
                self.phase = Phase::Failed(record);
                Err(VitaplanError::GenerationFailed(e.to_string()))
            }
        }
    }

    /// Back to generation after a failed attempt
    pub fn retry(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Questionnaire(Stepper::new())) {
            Phase::Failed(record) => {
                self.phase = Phase::Generating(record);
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    pub fn plan(&self) -> Option<&PersonalizedPlan> {
        match &self.phase {
            Phase::Results { plan, .. } => Some(plan),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&AnswerRecord> {
        match &self.phase {
            Phase::Generating(record) | Phase::Failed(record) => Some(record),
            Phase::Results { record, .. } => Some(record),
            Phase::Questionnaire(_) => None,
        }
    }

    /// @acp:summary "Discard answers and plan; back to step 1"
    pub fn restart(&mut self) {
        info!(session = %self.id, "session restarted");
        self.phase = Phase::Questionnaire(Stepper::new());
    }
}
