//! @acp:module "Option Catalog"
//! @acp:summary "Choice tokens per questionnaire field, in fixed display order"
//! @acp:domain cli
//! @acp:layer model
//!
//! Answers store stable tokens; labels are resolved per locale only for display and
//! for the prompt sent to the model.

use crate::answers::{Field, ScalarField, SetField};
use crate::locale::Locale;

/// @acp:summary "One selectable option with its localized labels"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub token: &'static str,
    en: &'static str,
    mk: &'static str,
}

impl ChoiceOption {
    const fn new(token: &'static str, en: &'static str, mk: &'static str) -> Self {
        Self { token, en, mk }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Mk => self.mk,
        }
    }
}

pub const AGE_BRACKETS: &[ChoiceOption] = &[
    ChoiceOption::new("18-25", "18-25", "18-25"),
    ChoiceOption::new("26-35", "26-35", "26-35"),
    ChoiceOption::new("36-45", "36-45", "36-45"),
    ChoiceOption::new("46-55", "46-55", "46-55"),
    ChoiceOption::new("56-65", "56-65", "56-65"),
    ChoiceOption::new("65+", "65+", "65+"),
];

pub const GENDERS: &[ChoiceOption] = &[
    ChoiceOption::new("male", "Male", "Машки"),
    ChoiceOption::new("female", "Female", "Женски"),
    ChoiceOption::new("non-binary", "Non-binary", "Небинарен"),
    ChoiceOption::new("undisclosed", "Prefer not to say", "Претпочитам да не кажам"),
];

pub const FEELINGS: &[ChoiceOption] = &[
    ChoiceOption::new("amazing", "Amazing - I feel great!", "Одлично - се чувствувам супер!"),
    ChoiceOption::new(
        "good",
        "Pretty good - just want to optimize",
        "Прилично добро - само сакам да се подобрам",
    ),
    ChoiceOption::new("okay", "Okay - could be better", "Во ред - може и подобро"),
    ChoiceOption::new(
        "struggling",
        "Not great - struggling with energy/mood",
        "Не баш - се борам со енергијата/расположението",
    ),
    ChoiceOption::new(
        "terrible",
        "Terrible - need serious help",
        "Ужасно - ми треба сериозна помош",
    ),
];

pub const ENERGY_LEVELS: &[ChoiceOption] = &[
    ChoiceOption::new("high", "High energy all day", "Висока енергија цел ден"),
    ChoiceOption::new(
        "good",
        "Good energy most of the time",
        "Добра енергија поголемиот дел од времето",
    ),
    ChoiceOption::new(
        "afternoon-crash",
        "Energy crashes in afternoon",
        "Пад на енергијата попладне",
    ),
    ChoiceOption::new(
        "low",
        "Low energy throughout the day",
        "Ниска енергија во текот на денот",
    ),
    ChoiceOption::new("exhausted", "Constantly exhausted", "Постојано исцрпен"),
];

pub const WORKOUT_FREQUENCIES: &[ChoiceOption] = &[
    ChoiceOption::new("daily", "Daily (6-7 times per week)", "Секојдневно (6-7 пати неделно)"),
    ChoiceOption::new(
        "very-active",
        "Very active (4-5 times per week)",
        "Многу активно (4-5 пати неделно)",
    ),
    ChoiceOption::new(
        "moderate",
        "Moderately active (2-3 times per week)",
        "Умерено активно (2-3 пати неделно)",
    ),
    ChoiceOption::new(
        "occasional",
        "Occasionally (1 time per week)",
        "Повремено (1 пат неделно)",
    ),
    ChoiceOption::new("rarely", "Rarely or never", "Ретко или никогаш"),
];

pub const WORKOUT_TYPES: &[ChoiceOption] = &[
    ChoiceOption::new(
        "strength",
        "Weight lifting/Strength training",
        "Кревање тегови/Тренинг за сила",
    ),
    ChoiceOption::new(
        "cardio",
        "Cardio (running, cycling, etc.)",
        "Кардио (трчање, велосипедизам итн.)",
    ),
    ChoiceOption::new("yoga", "Yoga/Pilates", "Јога/Пилатес"),
    ChoiceOption::new(
        "sports",
        "Sports (basketball, tennis, etc.)",
        "Спортови (кошарка, тенис итн.)",
    ),
    ChoiceOption::new("swimming", "Swimming", "Пливање"),
    ChoiceOption::new("walking", "Walking/Hiking", "Пешачење/Планинарење"),
    ChoiceOption::new("hiit", "CrossFit/HIIT", "CrossFit/HIIT"),
    ChoiceOption::new("dance", "Dance/Aerobics", "Танц/Аеробик"),
    ChoiceOption::new("martial-arts", "Martial arts", "Борилачки вештини"),
    ChoiceOption::new("other", "Other", "Друго"),
];

pub const HEALTH_GOALS: &[ChoiceOption] = &[
    ChoiceOption::new("lose-weight", "Lose weight", "Слабеење"),
    ChoiceOption::new("gain-muscle", "Gain muscle mass", "Зголемување на мускулна маса"),
    ChoiceOption::new("energy", "Increase energy", "Повеќе енергија"),
    ChoiceOption::new("sleep", "Improve sleep quality", "Подобар квалитет на сон"),
    ChoiceOption::new("stress", "Reduce stress/anxiety", "Помалку стрес/анксиозност"),
    ChoiceOption::new("digestion", "Better digestion", "Подобро варење"),
    ChoiceOption::new("immunity", "Stronger immune system", "Посилен имунитет"),
    ChoiceOption::new(
        "focus",
        "Improve mental clarity/focus",
        "Подобра ментална јасност/фокус",
    ),
    ChoiceOption::new("skin", "Better skin/hair/nails", "Подобра кожа/коса/нокти"),
    ChoiceOption::new("heart", "Heart health", "Здравје на срцето"),
    ChoiceOption::new("joints", "Joint health", "Здравје на зглобовите"),
    ChoiceOption::new("anti-aging", "Anti-aging", "Против стареење"),
];

pub const DIET_TYPES: &[ChoiceOption] = &[
    ChoiceOption::new("omnivore", "Standard/Omnivore", "Стандардна/Сештојад"),
    ChoiceOption::new("vegetarian", "Vegetarian", "Вегетаријанска"),
    ChoiceOption::new("vegan", "Vegan", "Веганска"),
    ChoiceOption::new("keto", "Keto/Low-carb", "Кето/Малку јаглехидрати"),
    ChoiceOption::new("paleo", "Paleo", "Палео"),
    ChoiceOption::new("mediterranean", "Mediterranean", "Медитеранска"),
    ChoiceOption::new(
        "intermittent-fasting",
        "Intermittent fasting",
        "Интермитентно постење",
    ),
    ChoiceOption::new("flexible", "Other/Flexible", "Друго/Флексибилна"),
];

pub const SLEEP_QUALITIES: &[ChoiceOption] = &[
    ChoiceOption::new(
        "excellent",
        "Excellent (7-9 hours, wake up refreshed)",
        "Одличен (7-9 часа, се будам одморен)",
    ),
    ChoiceOption::new("good", "Good (mostly restful sleep)", "Добар (главно одморен сон)"),
    ChoiceOption::new(
        "fair",
        "Fair (some nights good, some bad)",
        "Среден (некои ноќи добро, некои лошо)",
    ),
    ChoiceOption::new(
        "poor",
        "Poor (trouble falling/staying asleep)",
        "Лош (тешко заспивам или се будам)",
    ),
    ChoiceOption::new(
        "terrible",
        "Terrible (chronic insomnia)",
        "Ужасен (хронична несоница)",
    ),
];

pub const STRESS_LEVELS: &[ChoiceOption] = &[
    ChoiceOption::new(
        "very-low",
        "Very low - I feel calm and relaxed",
        "Многу ниско - мирен сум и опуштен",
    ),
    ChoiceOption::new("low", "Low - manageable stress", "Ниско - стрес што го контролирам"),
    ChoiceOption::new(
        "moderate",
        "Moderate - some stressful periods",
        "Умерено - повремени стресни периоди",
    ),
    ChoiceOption::new("high", "High - frequently stressed", "Високо - често сум под стрес"),
    ChoiceOption::new(
        "very-high",
        "Very high - constantly overwhelmed",
        "Многу високо - постојано сум преоптоварен",
    ),
];

pub const HEALTH_CONCERNS: &[ChoiceOption] = &[
    ChoiceOption::new("digestive", "Digestive issues", "Проблеми со варењето"),
    ChoiceOption::new(
        "joint-pain",
        "Joint pain/inflammation",
        "Болки/воспаление во зглобовите",
    ),
    ChoiceOption::new("hormonal", "Hormonal imbalances", "Хормонален дисбаланс"),
    ChoiceOption::new("anxiety", "Anxiety/Depression", "Анксиозност/Депресија"),
    ChoiceOption::new("blood-pressure", "High blood pressure", "Висок крвен притисок"),
    ChoiceOption::new("cholesterol", "High cholesterol", "Висок холестерол"),
    ChoiceOption::new(
        "blood-sugar",
        "Blood sugar issues",
        "Проблеми со шеќерот во крвта",
    ),
    ChoiceOption::new("autoimmune", "Autoimmune conditions", "Автоимуни состојби"),
];

pub const BUDGETS: &[ChoiceOption] = &[
    ChoiceOption::new("under-50", "Under $50", "Под $50"),
    ChoiceOption::new("50-100", "$50 - $100", "$50 - $100"),
    ChoiceOption::new("100-200", "$100 - $200", "$100 - $200"),
    ChoiceOption::new("200-300", "$200 - $300", "$200 - $300"),
    ChoiceOption::new("over-300", "Over $300", "Над $300"),
];

/// Options for a single-valued field; `None` for free-text fields
pub fn scalar_options(field: ScalarField) -> Option<&'static [ChoiceOption]> {
    match field {
        ScalarField::Name | ScalarField::Email | ScalarField::CurrentSupplements => None,
        ScalarField::Age => Some(AGE_BRACKETS),
        ScalarField::Gender => Some(GENDERS),
        ScalarField::CurrentFeeling => Some(FEELINGS),
        ScalarField::EnergyLevel => Some(ENERGY_LEVELS),
        ScalarField::WorkoutFrequency => Some(WORKOUT_FREQUENCIES),
        ScalarField::DietType => Some(DIET_TYPES),
        ScalarField::SleepQuality => Some(SLEEP_QUALITIES),
        ScalarField::StressLevel => Some(STRESS_LEVELS),
        ScalarField::Budget => Some(BUDGETS),
    }
}

/// Options for a multi-select field
pub fn set_options(field: SetField) -> &'static [ChoiceOption] {
    match field {
        SetField::WorkoutType => WORKOUT_TYPES,
        SetField::HealthGoals => HEALTH_GOALS,
        SetField::HealthConcerns => HEALTH_CONCERNS,
    }
}

/// Options offered for any field; empty for free-text fields
pub fn options_for(field: Field) -> &'static [ChoiceOption] {
    match field {
        Field::Scalar(f) => scalar_options(f).unwrap_or(&[]),
        Field::Set(f) => set_options(f),
    }
}

/// Localized label for a stored token, or the token itself when it is not in the catalog
pub fn display_label(field: Field, token: &str, locale: Locale) -> String {
    options_for(field)
        .iter()
        .find(|o| o.token == token)
        .map(|o| o.label(locale).to_string())
        .unwrap_or_else(|| token.to_string())
}

/// Position of a token in the field's display order
pub fn position(field: Field, token: &str) -> Option<usize> {
    options_for(field).iter().position(|o| o.token == token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_unique_per_field() {
        let fields = ScalarField::all()
            .iter()
            .map(|f| Field::Scalar(*f))
            .chain(SetField::all().iter().map(|f| Field::Set(*f)));

        for field in fields {
            let tokens: HashSet<_> = options_for(field).iter().map(|o| o.token).collect();
            assert_eq!(tokens.len(), options_for(field).len(), "{:?}", field);
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(AGE_BRACKETS.len(), 6);
        assert_eq!(GENDERS.len(), 4);
        assert_eq!(WORKOUT_TYPES.len(), 10);
        assert_eq!(HEALTH_GOALS.len(), 12);
        assert_eq!(DIET_TYPES.len(), 8);
        assert_eq!(HEALTH_CONCERNS.len(), 8);
        assert_eq!(BUDGETS.len(), 5);
    }

    #[test]
    fn test_free_text_fields_have_no_options() {
        assert!(scalar_options(ScalarField::Name).is_none());
        assert!(scalar_options(ScalarField::CurrentSupplements).is_none());
    }

    #[test]
    fn test_display_label_falls_back_to_token() {
        let goals = Field::Set(SetField::HealthGoals);
        assert_eq!(display_label(goals, "energy", Locale::En), "Increase energy");
        assert_eq!(display_label(goals, "energy", Locale::Mk), "Повеќе енергија");
        assert_eq!(display_label(goals, "levitation", Locale::En), "levitation");
    }

    #[test]
    fn test_position_follows_display_order() {
        let budget = Field::Scalar(ScalarField::Budget);
        assert_eq!(position(budget, "under-50"), Some(0));
        assert_eq!(position(budget, "over-300"), Some(4));
        assert_eq!(position(budget, "free"), None);
    }
}
