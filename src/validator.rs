//! @acp:module "Step Validator"
//! @acp:summary "Per-step predicate gating questionnaire advancement"
//! @acp:domain cli
//! @acp:layer service
//!
//! Pure function of the step and the current answers. Only required fields are checked;
//! health concerns and current supplements are always optional and no field is
//! validated for format (an email is accepted as long as it is non-empty).

use crate::answers::{AnswerStore, ScalarField, SetField};
use crate::stepper::Step;

/// @acp:summary "Whether the answers satisfy the given step"
pub fn can_advance(step: Step, answers: &AnswerStore) -> bool {
    use ScalarField::*;

    match step.number() {
        1 => answers.has_scalar(Name) && answers.has_scalar(Email),
        2 => answers.has_scalar(Age) && answers.has_scalar(Gender),
        3 => answers.has_scalar(CurrentFeeling),
        4 => answers.has_scalar(EnergyLevel),
        5 => answers.has_scalar(WorkoutFrequency),
        6 => !answers.set(SetField::WorkoutType).is_empty(),
        7 => !answers.set(SetField::HealthGoals).is_empty(),
        8 => answers.has_scalar(DietType) && answers.has_scalar(SleepQuality),
        9 => answers.has_scalar(StressLevel),
        10 => answers.has_scalar(Budget),
        _ => false,
    }
}

/// First step, in order, whose predicate fails
pub fn first_unsatisfied(answers: &AnswerStore) -> Option<Step> {
    Step::all().find(|step| !can_advance(*step, answers))
}
