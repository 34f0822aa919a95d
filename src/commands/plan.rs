//! @acp:module "Plan Command"
//! @acp:summary "Generate a plan from an answers file"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `vitaplan plan`. The answers file is replayed through the stepper, so the
//! same per-step validation applies as in the interactive flow.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::answers::AnswerStore;
use crate::config::Config;
use crate::locale::Locale;
use crate::plan::ApiKey;
use crate::session::Session;
use crate::stepper::Stepper;

use super::build_requester;
use super::output::{render_json, render_plan};

/// Options for the plan command
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Answers file (.json, .yaml or .yml)
    pub answers: PathBuf,
    /// Display language
    pub locale: Locale,
    /// Print the plan as JSON
    pub json: bool,
    /// Also write the plan as JSON to this file
    pub output: Option<PathBuf>,
}

/// Execute the plan command
pub async fn execute_plan(options: PlanOptions, config: Config, credential: Option<ApiKey>) -> Result<()> {
    let store = AnswerStore::from_file(&options.answers)
        .with_context(|| format!("Failed to read answers from {}", options.answers.display()))?;
    let record = Stepper::replay(&store, options.locale)?;

    let requester = build_requester(&config, options.locale, credential);
    let mut session = Session::new(requester, config.status.clone());
    if options.json {
        session = session.with_hidden_status();
    }
    session.submit(record.clone());

    let plan = match session.generate().await {
        Ok(plan) => plan,
        Err(e) => {
            let texts = options.locale.texts();
            eprintln!("{} {}", style("✗").red(), style(texts.error_title).red().bold());
            eprintln!("  {}", texts.error_message);
            return Err(e.into());
        }
    };

    if let Some(path) = &options.output {
        std::fs::write(path, render_json(&plan)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("{} Wrote {}", style("✓").green(), path.display());
    }

    if options.json {
        println!("{}", render_json(&plan)?);
    } else {
        print!("{}", render_plan(&plan, &record, options.locale));
    }

    Ok(())
}
