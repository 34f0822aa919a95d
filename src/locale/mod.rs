//! @acp:module "Locale"
//! @acp:summary "Display text lookup tables keyed by locale"
//! @acp:domain cli
//! @acp:layer model
//!
//! Every user-visible string of the questionnaire, loading screen and results lives here,
//! one table per locale. Option labels live next to their tokens in [`crate::catalog`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::answers::{ScalarField, SetField};
use crate::plan::Priority;

/// @acp:summary "Supported display languages"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Mk,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Mk]
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Mk => "mk",
        }
    }

    /// Text table for this locale
    pub fn texts(&self) -> &'static Texts {
        match self {
            Locale::En => &EN,
            Locale::Mk => &MK,
        }
    }

    /// Prompt label for a single-valued field
    pub fn scalar_label(&self, field: ScalarField) -> &'static str {
        use ScalarField::*;
        match (self, field) {
            (Locale::En, Name) => "What's your name?",
            (Locale::En, Email) => "Email address",
            (Locale::En, Age) => "What's your age?",
            (Locale::En, Gender) => "Gender",
            (Locale::En, CurrentFeeling) => "How are you feeling lately?",
            (Locale::En, EnergyLevel) => "What's your energy level like?",
            (Locale::En, WorkoutFrequency) => "How often do you work out?",
            (Locale::En, DietType) => "What's your diet like?",
            (Locale::En, SleepQuality) => "How's your sleep quality?",
            (Locale::En, StressLevel) => "What's your stress level?",
            (Locale::En, CurrentSupplements) => "Current supplements (if any)",
            (Locale::En, Budget) => "Monthly supplement budget",

            (Locale::Mk, Name) => "Како се викаш?",
            (Locale::Mk, Email) => "Е-пошта",
            (Locale::Mk, Age) => "Колку години имаш?",
            (Locale::Mk, Gender) => "Пол",
            (Locale::Mk, CurrentFeeling) => "Како се чувствуваш во последно време?",
            (Locale::Mk, EnergyLevel) => "Какво е твоето ниво на енергија?",
            (Locale::Mk, WorkoutFrequency) => "Колку често вежбаш?",
            (Locale::Mk, DietType) => "Каква е твојата исхрана?",
            (Locale::Mk, SleepQuality) => "Каков е квалитетот на твојот сон?",
            (Locale::Mk, StressLevel) => "Какво е твоето ниво на стрес?",
            (Locale::Mk, CurrentSupplements) => "Моментални суплементи (ако има)",
            (Locale::Mk, Budget) => "Месечен буџет за суплементи",
        }
    }

    /// Prompt label for a multi-select field
    pub fn set_label(&self, field: SetField) -> &'static str {
        use SetField::*;
        match (self, field) {
            (Locale::En, WorkoutType) => "What type of exercise do you do?",
            (Locale::En, HealthGoals) => "What are your health goals?",
            (Locale::En, HealthConcerns) => "Any specific health concerns? (Optional)",

            (Locale::Mk, WorkoutType) => "Каков тип на вежбање практикуваш?",
            (Locale::Mk, HealthGoals) => "Кои се твоите здравствени цели?",
            (Locale::Mk, HealthConcerns) => "Некои специфични здравствени проблеми? (Опционално)",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "mk" | "macedonian" => Ok(Locale::Mk),
            _ => Err(format!("Unknown locale: {}. Use 'en' or 'mk'", s)),
        }
    }
}

/// Heading shown above a questionnaire step
#[derive(Debug, Clone, Copy)]
pub struct StepText {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
}

/// @acp:summary "All user-visible strings for one locale"
#[derive(Debug)]
pub struct Texts {
    /// Language name used when instructing the model
    pub language: &'static str,
    pub steps: [StepText; 10],
    /// Contains `{current}` and `{total}` placeholders
    pub progress: &'static str,
    pub next: &'static str,
    pub previous: &'static str,
    pub get_plan: &'static str,
    pub start_over: &'static str,
    pub retry: &'static str,
    pub quit: &'static str,
    pub choose_action: &'static str,
    pub step_incomplete: &'static str,
    pub select_all_hint: &'static str,
    pub loading: &'static [&'static str],
    pub error_title: &'static str,
    pub error_message: &'static str,
    /// Contains a `{name}` placeholder
    pub greeting: &'static str,
    pub summary_title: &'static str,
    pub goals_title: &'static str,
    pub lifestyle_title: &'static str,
    pub timeline_title: &'static str,
    pub priority_high: &'static str,
    pub priority_medium: &'static str,
    pub priority_low: &'static str,
    pub benefits: &'static str,
    pub dosage: &'static str,
    pub timing: &'static str,
    pub link: &'static str,
}

impl Texts {
    pub fn progress(&self, current: u8, total: u8) -> String {
        self.progress
            .replace("{current}", &current.to_string())
            .replace("{total}", &total.to_string())
    }

    pub fn greeting(&self, name: &str) -> String {
        self.greeting.replace("{name}", name)
    }

    pub fn priority_label(&self, priority: Priority) -> &'static str {
        match priority {
            Priority::High => self.priority_high,
            Priority::Medium => self.priority_medium,
            Priority::Low => self.priority_low,
        }
    }
}

static EN: Texts = Texts {
    language: "English",
    steps: [
        StepText {
            title: "Let's get to know you",
            subtitle: Some("We'll create a personalized supplement plan just for you"),
        },
        StepText {
            title: "Tell us about yourself",
            subtitle: None,
        },
        StepText {
            title: "How are you feeling lately?",
            subtitle: Some("Be honest - this helps us understand your current state"),
        },
        StepText {
            title: "What's your energy level like?",
            subtitle: None,
        },
        StepText {
            title: "How often do you work out?",
            subtitle: None,
        },
        StepText {
            title: "What type of exercise do you do?",
            subtitle: Some("Select all that apply"),
        },
        StepText {
            title: "What are your health goals?",
            subtitle: Some("Select all that apply"),
        },
        StepText {
            title: "Lifestyle questions",
            subtitle: None,
        },
        StepText {
            title: "Final health questions",
            subtitle: None,
        },
        StepText {
            title: "What's your monthly supplement budget?",
            subtitle: None,
        },
    ],
    progress: "Step {current} of {total}",
    next: "Next",
    previous: "Previous",
    get_plan: "Get My Plan",
    start_over: "Start over",
    retry: "Try again",
    quit: "Quit",
    choose_action: "What next?",
    step_incomplete: "Please complete this step before continuing.",
    select_all_hint: "space to toggle, enter to confirm",
    loading: &[
        "Analyzing your health profile...",
        "Researching optimal supplements for your goals...",
        "Creating your personalized plan...",
        "Finalizing recommendations...",
    ],
    error_title: "Oops! Something went wrong",
    error_message: "We couldn't create your plan. Please try again.",
    greeting: "Hi {name}! Based on your answers, here is your personalized health optimization plan.",
    summary_title: "Your health summary and goals",
    goals_title: "Your goals",
    lifestyle_title: "Lifestyle tips",
    timeline_title: "Implementation timeline",
    priority_high: "High priority",
    priority_medium: "Medium priority",
    priority_low: "Low priority",
    benefits: "Benefits",
    dosage: "Dosage",
    timing: "Timing",
    link: "Where to buy",
};

static MK: Texts = Texts {
    language: "Macedonian",
    steps: [
        StepText {
            title: "Да се запознаеме",
            subtitle: Some("Ќе креираме персонализиран план за суплементи само за тебе"),
        },
        StepText {
            title: "Кажи ни нешто за себе",
            subtitle: None,
        },
        StepText {
            title: "Како се чувствуваш во последно време?",
            subtitle: Some("Биди искрен - ова ни помага да ја разбереме твојата моментална состојба"),
        },
        StepText {
            title: "Какво е твоето ниво на енергија?",
            subtitle: None,
        },
        StepText {
            title: "Колку често вежбаш?",
            subtitle: None,
        },
        StepText {
            title: "Каков тип на вежбање практикуваш?",
            subtitle: Some("Избери сè што важи"),
        },
        StepText {
            title: "Кои се твоите здравствени цели?",
            subtitle: Some("Избери сè што важи"),
        },
        StepText {
            title: "Прашања за животниот стил",
            subtitle: None,
        },
        StepText {
            title: "Последни здравствени прашања",
            subtitle: None,
        },
        StepText {
            title: "Колкав е твојот месечен буџет за суплементи?",
            subtitle: None,
        },
    ],
    progress: "Чекор {current} од {total}",
    next: "Следно",
    previous: "Претходно",
    get_plan: "Добиј го мојот план",
    start_over: "Започни одново",
    retry: "Обиди се повторно",
    quit: "Излез",
    choose_action: "Што понатаму?",
    step_incomplete: "Те молиме пополни го овој чекор пред да продолжиш.",
    select_all_hint: "празно место за избор, enter за потврда",
    loading: &[
        "Анализираме го твојот здравствен профил...",
        "Истражуваме оптимални суплементи за твоите цели...",
        "Креираме персонализиран план...",
        "Ги финализираме препораките...",
    ],
    error_title: "Упс! Нешто тргна наопаку",
    error_message: "Не успеавме да го креираме твојот план. Те молиме обиди се повторно.",
    greeting: "Здраво {name}! Врз основа на вашите одговори, еве го вашиот приспособен план за здравствена оптимизација.",
    summary_title: "Резиме на вашето здравје и цели",
    goals_title: "Вашите цели",
    lifestyle_title: "Совети за животниот стил",
    timeline_title: "Временска рамка за примена",
    priority_high: "Висок приоритет",
    priority_medium: "Среден приоритет",
    priority_low: "Низок приоритет",
    benefits: "Придобивки",
    dosage: "Доза",
    timing: "Време на земање",
    link: "Каде да купиш",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("MK".parse::<Locale>().unwrap(), Locale::Mk);
        assert_eq!("macedonian".parse::<Locale>().unwrap(), Locale::Mk);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serialization() {
        assert_eq!(serde_json::to_string(&Locale::Mk).unwrap(), "\"mk\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }

    #[test]
    fn test_progress_and_greeting_placeholders() {
        let texts = Locale::En.texts();
        assert_eq!(texts.progress(3, 10), "Step 3 of 10");
        assert!(texts.greeting("Ana").starts_with("Hi Ana!"));
        assert_eq!(Locale::Mk.texts().progress(1, 10), "Чекор 1 од 10");
    }

    #[test]
    fn test_both_locales_have_loading_messages() {
        for locale in Locale::all() {
            assert_eq!(locale.texts().loading.len(), 4);
        }
    }
}
