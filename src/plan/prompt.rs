//! @acp:module "Plan Prompt"
//! @acp:summary "Renders an answer record into the model prompt"
//! @acp:domain cli
//! @acp:layer service

use handlebars::Handlebars;
use serde_json::json;

use crate::answers::{AnswerRecord, Field, ScalarField, SetField};
use crate::catalog;
use crate::error::Result;
use crate::locale::Locale;

/// System message sent with every request
pub const SYSTEM_INSTRUCTION: &str =
    "You are a certified nutritionist and supplement expert. Always respond with valid JSON only.";

const PROMPT_TEMPLATE: &str = r#"You are a certified nutritionist and supplement expert. Create a personalized supplement plan for this person based on their health assessment.

User Profile:
{{#each profile}}- {{this.label}}: {{this.value}}
{{/each}}
Please provide a comprehensive response in the following JSON format:

{
  "summary": "A personalized 2-3 sentence summary of their health profile and main focus areas",
  "recommendations": [
    {
      "name": "Supplement Name",
      "description": "Brief description of what this supplement does",
      "benefits": ["Benefit 1", "Benefit 2", "Benefit 3"],
      "dosage": "Recommended dosage",
      "timing": "When to take it",
      "link": "https://example-supplement-store.com/product-name",
      "priority": "high|medium|low"
    }
  ],
  "lifestyle_tips": [
    "Lifestyle tip 1",
    "Lifestyle tip 2",
    "Lifestyle tip 3"
  ],
  "timeline": "A timeline for implementing this plan (e.g., start with high priority supplements for 2-4 weeks, then add medium priority, etc.)"
}

Guidelines:
- Recommend {{min_supplements}}-{{max_supplements}} supplements total
- Use exactly one of "high", "medium" or "low" for every priority
- Prioritize based on their specific goals and current state
- Consider their budget when making recommendations
- Include evidence-based supplements only
- Make links realistic (use placeholder supplement store URLs)
- Provide practical, actionable advice
- Consider any health concerns or contraindications
- Make the plan progressive and sustainable
- Write every text value in {{language}}; keep the JSON keys and priority values in English

Respond only with valid JSON."#;

/// Supplement count range requested from the model
pub const MIN_SUPPLEMENTS: u8 = 4;
pub const MAX_SUPPLEMENTS: u8 = 8;

/// Profile lines in prompt order
const PROFILE: &[(&str, Field)] = &[
    ("Name", Field::Scalar(ScalarField::Name)),
    ("Age", Field::Scalar(ScalarField::Age)),
    ("Gender", Field::Scalar(ScalarField::Gender)),
    ("Current feeling", Field::Scalar(ScalarField::CurrentFeeling)),
    ("Energy level", Field::Scalar(ScalarField::EnergyLevel)),
    ("Workout frequency", Field::Scalar(ScalarField::WorkoutFrequency)),
    ("Workout types", Field::Set(SetField::WorkoutType)),
    ("Health goals", Field::Set(SetField::HealthGoals)),
    ("Diet type", Field::Scalar(ScalarField::DietType)),
    ("Sleep quality", Field::Scalar(ScalarField::SleepQuality)),
    ("Stress level", Field::Scalar(ScalarField::StressLevel)),
    ("Health concerns", Field::Set(SetField::HealthConcerns)),
    ("Current supplements", Field::Scalar(ScalarField::CurrentSupplements)),
    ("Budget", Field::Scalar(ScalarField::Budget)),
];

/// @acp:summary "Build the user message describing the profile and the required JSON shape"
///
/// Choice tokens are expanded to their labels in `locale`; optional fields left blank
/// render as "none".
pub fn build_prompt(record: &AnswerRecord, locale: Locale) -> Result<String> {
    let profile: Vec<_> = PROFILE
        .iter()
        .map(|(label, field)| json!({ "label": label, "value": profile_value(record, *field, locale) }))
        .collect();

    let data = json!({
        "profile": profile,
        "min_supplements": MIN_SUPPLEMENTS,
        "max_supplements": MAX_SUPPLEMENTS,
        "language": locale.texts().language,
    });

    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    Ok(registry.render_template(PROMPT_TEMPLATE, &data)?)
}

fn profile_value(record: &AnswerRecord, field: Field, locale: Locale) -> String {
    let value = match field {
        Field::Scalar(f) => record
            .scalar(f)
            .filter(|v| !v.is_empty())
            .map(|v| catalog::display_label(field, v, locale))
            .unwrap_or_default(),
        Field::Set(f) => record
            .set(f)
            .iter()
            .map(|v| catalog::display_label(field, v, locale))
            .collect::<Vec<_>>()
            .join(", "),
    };

    if value.is_empty() {
        "none".to_string()
    } else {
        value
    }
}
