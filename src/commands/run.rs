//! @acp:module "Run Command"
//! @acp:summary "Interactive questionnaire, plan generation and results"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `vitaplan run`. Each loop iteration handles exactly one session phase, so
//! every user action is a discrete transition.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

use crate::answers::{AnswerStore, Field, SetField};
use crate::catalog::{position, scalar_options, set_options};
use crate::config::Config;
use crate::locale::Locale;
use crate::plan::ApiKey;
use crate::session::{Phase, Session};
use crate::stepper::{Advance, Step, TOTAL_STEPS};

use super::build_requester;
use super::output::{render_json, render_plan};

/// Options for the run command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Display language
    pub locale: Locale,
    /// Print the plan as JSON instead of formatted text
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Forward,
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Questionnaire,
    Generating,
    Results,
    Failed,
}

fn stage(phase: &Phase) -> Stage {
    match phase {
        Phase::Questionnaire(_) => Stage::Questionnaire,
        Phase::Generating(_) => Stage::Generating,
        Phase::Results { .. } => Stage::Results,
        Phase::Failed(_) => Stage::Failed,
    }
}

/// Execute the run command
pub async fn execute_run(options: RunOptions, config: Config, credential: Option<ApiKey>) -> Result<()> {
    let requester = build_requester(&config, options.locale, credential);
    let mut session = Session::new(requester, config.status.clone());
    let theme = ColorfulTheme::default();

    tracing::debug!(session = %session.id(), locale = %options.locale, "session started");

    loop {
        let flow = match stage(session.phase()) {
            Stage::Questionnaire => questionnaire_step(&mut session, &theme)?,
            Stage::Generating => {
                // An aborted attempt leaves the session in `Phase::Failed`
                let _ = session.generate().await;
                Flow::Continue
            }
            Stage::Results => show_results(&mut session, &theme, options.json)?,
            Stage::Failed => show_failure(&mut session, &theme)?,
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

fn questionnaire_step(session: &mut Session, theme: &ColorfulTheme) -> Result<Flow> {
    let locale = session.locale();
    let texts = locale.texts();
    let Some(stepper) = session.stepper_mut() else {
        return Ok(Flow::Continue);
    };
    let step = stepper.step();

    println!(
        "\n{} {}",
        style(texts.progress(step.number(), TOTAL_STEPS)).dim(),
        style(step.title(locale)).bold()
    );
    if let Some(subtitle) = step.subtitle(locale) {
        println!("  {}", style(subtitle).dim());
    }

    for field in step.fields() {
        prompt_field(stepper.answers_mut(), *field, locale, theme)?;
    }

    let mut actions = vec![(
        if step.is_last() { texts.get_plan } else { texts.next },
        Nav::Forward,
    )];
    if step != Step::FIRST {
        actions.push((texts.previous, Nav::Back));
    }
    actions.push((texts.quit, Nav::Quit));

    let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();
    let choice = Select::with_theme(theme)
        .with_prompt(texts.choose_action)
        .items(&labels)
        .default(0)
        .interact()?;

    match actions[choice].1 {
        Nav::Forward => {
            if let Some(Advance::Blocked(_)) = session.advance() {
                println!("{} {}", style("⚠").yellow(), texts.step_incomplete);
            }
        }
        Nav::Back => {
            if let Some(stepper) = session.stepper_mut() {
                stepper.retreat();
            }
        }
        Nav::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn prompt_field(
    answers: &mut AnswerStore,
    field: Field,
    locale: Locale,
    theme: &ColorfulTheme,
) -> Result<()> {
    match field {
        Field::Scalar(scalar) => match scalar_options(scalar) {
            Some(options) => {
                let labels: Vec<&str> = options.iter().map(|o| o.label(locale)).collect();
                let current = answers
                    .scalar(scalar)
                    .and_then(|token| position(field, token))
                    .unwrap_or(0);
                let choice = Select::with_theme(theme)
                    .with_prompt(locale.scalar_label(scalar))
                    .items(&labels)
                    .default(current)
                    .interact()?;
                answers.set_scalar(scalar, options[choice].token);
            }
            None => {
                let value: String = Input::with_theme(theme)
                    .with_prompt(locale.scalar_label(scalar))
                    .with_initial_text(answers.scalar(scalar).unwrap_or_default())
                    .allow_empty(true)
                    .interact_text()?;
                answers.set_scalar(scalar, value.trim());
            }
        },
        Field::Set(set) => prompt_set(answers, set, locale, theme)?,
    }
    Ok(())
}

fn prompt_set(
    answers: &mut AnswerStore,
    field: SetField,
    locale: Locale,
    theme: &ColorfulTheme,
) -> Result<()> {
    let options = set_options(field);
    let labels: Vec<&str> = options.iter().map(|o| o.label(locale)).collect();
    let checked: Vec<bool> = options
        .iter()
        .map(|o| answers.contains(field, o.token))
        .collect();

    let chosen = MultiSelect::with_theme(theme)
        .with_prompt(format!(
            "{} ({})",
            locale.set_label(field),
            locale.texts().select_all_hint
        ))
        .items(&labels)
        .defaults(&checked)
        .interact()?;

    for (idx, option) in options.iter().enumerate() {
        answers.toggle_in_set(field, option.token, chosen.contains(&idx));
    }
    Ok(())
}

fn show_results(session: &mut Session, theme: &ColorfulTheme, json: bool) -> Result<Flow> {
    let texts = session.locale().texts();
    if let (Some(plan), Some(record)) = (session.plan(), session.record()) {
        if json {
            println!("{}", render_json(plan)?);
        } else {
            print!("{}", render_plan(plan, record, session.locale()));
        }
    }

    let actions = [texts.start_over, texts.quit];
    let choice = Select::with_theme(theme)
        .items(&actions)
        .default(1)
        .interact()?;

    if choice == 0 {
        session.restart();
        Ok(Flow::Continue)
    } else {
        Ok(Flow::Quit)
    }
}

fn show_failure(session: &mut Session, theme: &ColorfulTheme) -> Result<Flow> {
    let texts = session.locale().texts();
    eprintln!("\n{} {}", style("✗").red(), style(texts.error_title).red().bold());
    eprintln!("  {}", texts.error_message);

    let actions = [texts.retry, texts.start_over, texts.quit];
    let choice = Select::with_theme(theme)
        .with_prompt(texts.choose_action)
        .items(&actions)
        .default(0)
        .interact()?;

    match choice {
        0 => {
            session.retry();
        }
        1 => session.restart(),
        _ => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::Stepper;

    #[test]
    fn test_stage_follows_phase() {
        assert_eq!(stage(&Phase::Questionnaire(Stepper::new())), Stage::Questionnaire);
    }
}
