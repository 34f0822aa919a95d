//! @acp:module "Options Command"
//! @acp:summary "List questionnaire fields and their accepted tokens"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `vitaplan options`, a reference for writing answers files.

use anyhow::Result;
use console::style;

use crate::answers::{Field, ScalarField, SetField};
use crate::catalog::options_for;
use crate::locale::Locale;
use crate::stepper::Step;

/// Options for the options command
#[derive(Debug, Clone, Default)]
pub struct OptionsCommand {
    /// Language for labels
    pub locale: Locale,
    /// Print as JSON
    pub json: bool,
}

/// Execute the options command
pub fn execute_options(options: OptionsCommand) -> Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(&field_table(options.locale))?);
        return Ok(());
    }

    for step in Step::all() {
        println!(
            "\n{}",
            style(format!("{}. {}", step.number(), step.title(options.locale))).bold()
        );
        for field in step.fields() {
            let (question, kind) = describe(*field, options.locale);
            println!("  {} {} {}", style(field.key()).cyan(), style(kind).dim(), question);
            for option in options_for(*field) {
                println!("      {:<22} {}", option.token, option.label(options.locale));
            }
        }
    }
    Ok(())
}

fn describe(field: Field, locale: Locale) -> (&'static str, &'static str) {
    match field {
        Field::Scalar(f) if options_for(field).is_empty() => (locale.scalar_label(f), "[text]"),
        Field::Scalar(f) => (locale.scalar_label(f), "[one of]"),
        Field::Set(f) => (locale.set_label(f), "[any of]"),
    }
}

/// Field key → accepted tokens; free-text fields map to `[]`
fn field_table(locale: Locale) -> serde_json::Value {
    let mut table = serde_json::Map::new();
    for step in Step::all() {
        for field in step.fields() {
            let tokens: Vec<serde_json::Value> = options_for(*field)
                .iter()
                .map(|o| serde_json::json!({ "token": o.token, "label": o.label(locale) }))
                .collect();
            table.insert(field.key().to_string(), serde_json::Value::Array(tokens));
        }
    }
    serde_json::Value::Object(table)
}
