//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod init;
pub mod options;
pub mod output;
pub mod plan;
pub mod run;

pub use init::{execute_init, InitOptions};
pub use options::{execute_options, OptionsCommand};
pub use output::{render_json, render_plan};
pub use plan::{execute_plan, PlanOptions};
pub use run::{execute_run, RunOptions};

use std::sync::Arc;

use tracing::warn;

use crate::config::Config;
use crate::locale::Locale;
use crate::plan::{ApiKey, HttpTransport, PlanRequester};

/// Requester backed by the HTTP transport
///
/// A missing credential is not fatal: every request then fails locally and the user
/// receives the fallback plan.
pub fn build_requester(config: &Config, locale: Locale, credential: Option<ApiKey>) -> PlanRequester {
    if credential.is_none() {
        warn!("no API key configured; plans will use the fallback");
    }
    let transport = HttpTransport::new(&config.generation, credential);
    PlanRequester::new(Arc::new(transport), config.generation.clone(), locale)
}
