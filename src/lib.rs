#![forbid(unsafe_code)]

//! @acp:module "Vitaplan Library"
//! @acp:summary "Health questionnaire stepper and supplement plan generation"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability experimental
//!
//! # Vitaplan
//!
//! Collects health and lifestyle answers through a ten-step questionnaire and turns them
//! into a personalized supplement plan with a generative model.
//!
//! ## Features
//!
//! - **Validated Stepper**: each step gates advancement on its own predicate
//! - **Single Attempt**: one chat-completion call per session, no retries
//! - **Always a Plan**: any service or decoding failure yields a static fallback plan
//! - **Localized**: English and Macedonian text tables
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitaplan::{
//!     AnswerStore, ApiKey, Config, HttpTransport, PlanRequester, Stepper,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let answers = AnswerStore::from_file("answers.json")?;
//!     let record = Stepper::replay(&answers, config.locale)?;
//!
//!     let transport = HttpTransport::new(&config.generation, Some(ApiKey::new("sk-...")));
//!     let requester = PlanRequester::new(Arc::new(transport), config.generation, config.locale);
//!
//!     let plan = requester.generate_plan(&record);
//!     println!("{}", plan.summary);
//!     Ok(())
//! }
//! ```

pub mod answers;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod locale;
pub mod plan;
pub mod presenter;
pub mod session;
pub mod status;
pub mod stepper;
pub mod validator;

// Re-exports
pub use answers::{AnswerRecord, AnswerStore, Field, ScalarField, SetField};
pub use config::{Config, GenerationConfig, StatusConfig};
pub use error::{Result, VitaplanError};
pub use locale::Locale;
pub use plan::{
    fallback_plan, ApiKey, ChatTransport, HttpTransport, PersonalizedPlan, PlanRequester,
    Priority, SupplementRecommendation,
};
pub use presenter::{group_by_priority, PriorityBucket};
pub use session::{Phase, Session};
pub use status::StatusTicker;
pub use stepper::{Advance, Step, Stepper, TOTAL_STEPS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
