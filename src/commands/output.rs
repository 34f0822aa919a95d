//! @acp:module "Plan Output"
//! @acp:summary "Terminal and JSON rendering of a personalized plan"
//! @acp:domain cli
//! @acp:layer output

use std::fmt::Write as _;

use console::style;

use crate::answers::{AnswerRecord, Field, SetField};
use crate::catalog::display_label;
use crate::locale::Locale;
use crate::plan::{PersonalizedPlan, Priority};
use crate::presenter::group_by_priority;

/// @acp:summary "Human-readable plan, recommendations grouped by priority"
pub fn render_plan(plan: &PersonalizedPlan, record: &AnswerRecord, locale: Locale) -> String {
    let texts = locale.texts();
    let mut out = String::new();

    let _ = writeln!(out, "\n{}\n", style(texts.greeting(record.name())).bold());

    let _ = writeln!(out, "{}", style(texts.summary_title).bold().underlined());
    let _ = writeln!(out, "  {}", plan.summary);

    let goals: Vec<String> = record
        .set(SetField::HealthGoals)
        .iter()
        .map(|token| display_label(Field::Set(SetField::HealthGoals), token, locale))
        .collect();
    if !goals.is_empty() {
        let _ = writeln!(out, "  {}: {}", style(texts.goals_title).dim(), goals.join(", "));
    }

    for bucket in group_by_priority(plan) {
        let badge = texts.priority_label(bucket.priority);
        let header = match bucket.priority {
            Priority::High => style(badge).red().bold(),
            Priority::Medium => style(badge).yellow().bold(),
            Priority::Low => style(badge).green().bold(),
        };
        let _ = writeln!(out, "\n{} {}", style("●").dim(), header);

        for (position, (_, rec)) in bucket.entries.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", position + 1, style(&rec.name).cyan().bold());
            if !rec.description.is_empty() {
                let _ = writeln!(out, "     {}", rec.description);
            }
            if !rec.benefits.is_empty() {
                let _ = writeln!(out, "     {}: {}", texts.benefits, rec.benefits.join(" · "));
            }
            if !rec.dosage.is_empty() {
                let _ = writeln!(out, "     {}: {}", texts.dosage, rec.dosage);
            }
            if !rec.timing.is_empty() {
                let _ = writeln!(out, "     {}: {}", texts.timing, rec.timing);
            }
            if !rec.link.is_empty() {
                let _ = writeln!(out, "     {}: {}", texts.link, style(&rec.link).underlined());
            }
        }
    }

    let _ = writeln!(out, "\n{}", style(texts.lifestyle_title).bold().underlined());
    for tip in &plan.lifestyle_tips {
        let _ = writeln!(out, "  {} {}", style("✓").green(), tip);
    }

    let _ = writeln!(out, "\n{}", style(texts.timeline_title).bold().underlined());
    let _ = writeln!(out, "  {}", plan.timeline);

    out
}

/// Plan as pretty JSON, in the same shape the service returns
pub fn render_json(plan: &PersonalizedPlan) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}
