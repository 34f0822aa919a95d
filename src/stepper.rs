//! @acp:module "Stepper"
//! @acp:summary "Questionnaire state machine with validated forward transitions"
//! @acp:domain cli
//! @acp:layer service
//!
//! The stepper owns the current step and the [`AnswerStore`]. Advancing is gated by
//! [`crate::validator::can_advance`]; retreating is always allowed above step 1 and
//! keeps every answer already entered. Advancing from the last step emits the frozen
//! [`AnswerRecord`]; what happens next belongs to the caller.

use std::fmt;

use tracing::debug;

use crate::answers::{AnswerRecord, AnswerStore, Field, ScalarField, SetField};
use crate::error::{Result, VitaplanError};
use crate::locale::Locale;
use crate::validator;

/// Number of questionnaire steps
pub const TOTAL_STEPS: u8 = 10;

/// @acp:summary "A questionnaire step, 1..=10"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step(u8);

impl Step {
    pub const FIRST: Step = Step(1);
    pub const LAST: Step = Step(TOTAL_STEPS);

    pub fn new(number: u8) -> Option<Self> {
        (1..=TOTAL_STEPS).contains(&number).then_some(Step(number))
    }

    pub fn all() -> impl Iterator<Item = Step> {
        (1..=TOTAL_STEPS).map(Step)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    /// Fields collected on this step, in prompt order
    pub fn fields(&self) -> &'static [Field] {
        use Field::{Scalar, Set};
        match self.0 {
            1 => &[Scalar(ScalarField::Name), Scalar(ScalarField::Email)],
            2 => &[Scalar(ScalarField::Age), Scalar(ScalarField::Gender)],
            3 => &[Scalar(ScalarField::CurrentFeeling)],
            4 => &[Scalar(ScalarField::EnergyLevel)],
            5 => &[Scalar(ScalarField::WorkoutFrequency)],
            6 => &[Set(SetField::WorkoutType)],
            7 => &[Set(SetField::HealthGoals)],
            8 => &[Scalar(ScalarField::DietType), Scalar(ScalarField::SleepQuality)],
            9 => &[
                Scalar(ScalarField::StressLevel),
                Set(SetField::HealthConcerns),
                Scalar(ScalarField::CurrentSupplements),
            ],
            _ => &[Scalar(ScalarField::Budget)],
        }
    }

    /// Localized step heading
    pub fn title(&self, locale: Locale) -> &'static str {
        locale.texts().steps[usize::from(self.0 - 1)].title
    }

    pub fn subtitle(&self, locale: Locale) -> Option<&'static str> {
        locale.texts().steps[usize::from(self.0 - 1)].subtitle
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of [`Stepper::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to this step
    Moved(Step),
    /// The current step is not satisfied; nothing changed
    Blocked(Step),
    /// The last step validated; the answers are frozen
    Completed(AnswerRecord),
}

/// @acp:summary "Owns the current step and the partial answers"
#[derive(Debug, Clone)]
pub struct Stepper {
    step: Step,
    answers: AnswerStore,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl Stepper {
    pub fn new() -> Self {
        Self {
            step: Step::FIRST,
            answers: AnswerStore::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Write access for the presentation layer; writes are never validated
    pub fn answers_mut(&mut self) -> &mut AnswerStore {
        &mut self.answers
    }

    pub fn can_advance(&self) -> bool {
        validator::can_advance(self.step, &self.answers)
    }

    /// Completed fraction, 0.0..=1.0
    pub fn progress(&self) -> f32 {
        f32::from(self.step.number()) / f32::from(TOTAL_STEPS)
    }

    /// @acp:summary "Move forward if the current step validates"
    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            debug!(step = self.step.number(), "advance blocked");
            return Advance::Blocked(self.step);
        }

        if self.step.is_last() {
            debug!("questionnaire completed");
            return Advance::Completed(AnswerRecord::freeze(&self.answers));
        }

        self.step = Step(self.step.0 + 1);
        Advance::Moved(self.step)
    }

    /// @acp:summary "Move back one step; no-op on step 1"
    pub fn retreat(&mut self) -> bool {
        if self.step == Step::FIRST {
            return false;
        }
        self.step = Step(self.step.0 - 1);
        true
    }

    /// @acp:summary "Drive a fresh stepper through every step with the given answers"
    ///
    /// Each step's fields are copied into the store through the normal write operations
    /// (so set fields are deduplicated) and the step is then advanced. Fails with the
    /// first step that does not validate.
    pub fn replay(source: &AnswerStore, locale: Locale) -> Result<AnswerRecord> {
        let mut stepper = Stepper::new();

        loop {
            for field in stepper.step.fields() {
                match *field {
                    Field::Scalar(f) => {
                        if let Some(value) = source.scalar(f) {
                            stepper.answers.set_scalar(f, value);
                        }
                    }
                    Field::Set(f) => {
                        for value in source.set(f) {
                            stepper.answers.toggle_in_set(f, value, true);
                        }
                    }
                }
            }

            match stepper.advance() {
                Advance::Moved(_) => continue,
                Advance::Completed(record) => return Ok(record),
                Advance::Blocked(step) => {
                    return Err(VitaplanError::IncompleteAnswers {
                        step: step.number(),
                        title: step.title(locale).to_string(),
                    })
                }
            }
        }
    }
}
