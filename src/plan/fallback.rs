//! @acp:module "Fallback Plan"
//! @acp:summary "Static plan used whenever generation fails"
//! @acp:domain cli
//! @acp:layer model

use crate::answers::{AnswerRecord, Field, SetField};
use crate::catalog;
use crate::locale::Locale;

use super::{PersonalizedPlan, Priority, SupplementRecommendation};

/// Goal phrase used when no health goal was recorded
pub const DEFAULT_GOAL_PHRASE: &str = "overall wellness";

/// @acp:summary "The fixed fallback plan, with the summary personalized by first goal"
pub fn fallback_plan(record: &AnswerRecord) -> PersonalizedPlan {
    PersonalizedPlan {
        summary: fallback_summary(record.first_health_goal()),
        recommendations: vec![
            entry(
                "High-Quality Multivitamin",
                "A comprehensive multivitamin to fill nutritional gaps in your diet",
                &[
                    "Supports overall health",
                    "Fills nutritional gaps",
                    "Boosts energy levels",
                ],
                "1 capsule daily",
                "With breakfast",
                "https://supplement-store.com/multivitamin",
                Priority::High,
            ),
            entry(
                "Omega-3 Fish Oil",
                "Essential fatty acids for heart, brain, and joint health",
                &[
                    "Supports heart health",
                    "Improves brain function",
                    "Reduces inflammation",
                ],
                "1000mg daily",
                "With meals",
                "https://supplement-store.com/omega-3",
                Priority::High,
            ),
            entry(
                "Vitamin D3",
                "Essential for bone health, immune function, and mood",
                &[
                    "Supports bone health",
                    "Boosts immune system",
                    "Improves mood",
                ],
                "2000 IU daily",
                "With breakfast",
                "https://supplement-store.com/vitamin-d3",
                Priority::Medium,
            ),
            entry(
                "Magnesium",
                "Important mineral for muscle function, sleep, and stress management",
                &[
                    "Improves sleep quality",
                    "Reduces stress",
                    "Supports muscle function",
                ],
                "400mg daily",
                "Before bedtime",
                "https://supplement-store.com/magnesium",
                Priority::Medium,
            ),
            entry(
                "Probiotic",
                "Beneficial bacteria that support gut health and digestion",
                &[
                    "Supports digestion",
                    "Promotes gut balance",
                    "Supports immune function",
                ],
                "10 billion CFU daily",
                "In the morning before breakfast",
                "https://supplement-store.com/probiotic",
                Priority::Low,
            ),
        ],
        lifestyle_tips: vec![
            "Maintain a consistent sleep schedule of 7-9 hours per night".to_string(),
            "Stay hydrated by drinking at least 8 glasses of water daily".to_string(),
            "Include a variety of colorful fruits and vegetables in your diet".to_string(),
            "Practice stress management techniques like meditation or deep breathing"
                .to_string(),
        ],
        timeline: "Start with the high-priority supplements (multivitamin and omega-3) for the \
                   first 2-3 weeks. Once your body adjusts, add the medium-priority supplements, \
                   then the probiotic. Monitor how you feel and adjust dosages as needed."
            .to_string(),
    }
}

fn fallback_summary(first_goal: Option<&str>) -> String {
    let goal = first_goal
        .filter(|g| !g.trim().is_empty())
        .map(|g| {
            catalog::display_label(Field::Set(SetField::HealthGoals), g, Locale::En).to_lowercase()
        })
        .unwrap_or_else(|| DEFAULT_GOAL_PHRASE.to_string());

    format!(
        "Based on your profile, we recommend focusing on foundational supplements to support \
         your {} goals and improve your overall energy levels.",
        goal
    )
}

fn entry(
    name: &str,
    description: &str,
    benefits: &[&str],
    dosage: &str,
    timing: &str,
    link: &str,
    priority: Priority,
) -> SupplementRecommendation {
    SupplementRecommendation {
        name: name.to_string(),
        description: description.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        dosage: dosage.to_string(),
        timing: timing.to_string(),
        link: link.to_string(),
        priority,
    }
}
