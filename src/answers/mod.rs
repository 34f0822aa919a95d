//! @acp:module "Answers"
//! @acp:summary "Partial questionnaire state and the frozen answer record"
//! @acp:domain cli
//! @acp:layer model
//!
//! [`AnswerStore`] is the mutable accumulation of answers while the questionnaire runs.
//! Writes are never validated; step validity is checked only when advancing.
//! [`AnswerRecord`] is the read-only snapshot handed to plan generation once every step
//! has been satisfied.

use std::fmt;
use std::ops::Deref;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitaplanError};

/// @acp:summary "Single-valued questionnaire fields"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Name,
    Email,
    Age,
    Gender,
    CurrentFeeling,
    EnergyLevel,
    WorkoutFrequency,
    DietType,
    SleepQuality,
    StressLevel,
    CurrentSupplements,
    Budget,
}

impl ScalarField {
    pub fn all() -> &'static [ScalarField] {
        &[
            ScalarField::Name,
            ScalarField::Email,
            ScalarField::Age,
            ScalarField::Gender,
            ScalarField::CurrentFeeling,
            ScalarField::EnergyLevel,
            ScalarField::WorkoutFrequency,
            ScalarField::DietType,
            ScalarField::SleepQuality,
            ScalarField::StressLevel,
            ScalarField::CurrentSupplements,
            ScalarField::Budget,
        ]
    }

    /// Key used in answers files
    pub fn key(&self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Email => "email",
            ScalarField::Age => "age",
            ScalarField::Gender => "gender",
            ScalarField::CurrentFeeling => "currentFeeling",
            ScalarField::EnergyLevel => "energyLevel",
            ScalarField::WorkoutFrequency => "workoutFrequency",
            ScalarField::DietType => "dietType",
            ScalarField::SleepQuality => "sleepQuality",
            ScalarField::StressLevel => "stressLevel",
            ScalarField::CurrentSupplements => "currentSupplements",
            ScalarField::Budget => "budget",
        }
    }
}

/// @acp:summary "Multi-select questionnaire fields"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetField {
    WorkoutType,
    HealthGoals,
    HealthConcerns,
}

impl SetField {
    pub fn all() -> &'static [SetField] {
        &[
            SetField::WorkoutType,
            SetField::HealthGoals,
            SetField::HealthConcerns,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            SetField::WorkoutType => "workoutType",
            SetField::HealthGoals => "healthGoals",
            SetField::HealthConcerns => "healthConcerns",
        }
    }
}

/// Any questionnaire field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Scalar(ScalarField),
    Set(SetField),
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Scalar(f) => f.key(),
            Field::Set(f) => f.key(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// @acp:summary "Mutable partial answers collected while the questionnaire runs"
/// @acp:lock normal
///
/// Also the on-disk shape of an answers file (camelCase keys, tokens as values).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_feeling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    energy_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    workout_frequency: Option<String>,
    #[serde(default)]
    workout_type: Vec<String>,
    #[serde(default)]
    health_goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_supplements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    diet_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sleep_quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stress_level: Option<String>,
    #[serde(default)]
    health_concerns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    budget: Option<String>,
}

impl AnswerStore {
    /// @acp:summary "Empty store: set fields empty, everything else unset"
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an answers file (`.json`, `.yaml` or `.yml`)
    ///
    /// Values are read as-is; set fields are not deduplicated here, so replay the result
    /// through the stepper to get a record.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(serde_json::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            other => Err(VitaplanError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Current value of a single-valued field
    pub fn scalar(&self, field: ScalarField) -> Option<&str> {
        self.scalar_slot(field).as_deref()
    }

    /// Whether a single-valued field holds a non-empty value
    pub fn has_scalar(&self, field: ScalarField) -> bool {
        self.scalar(field).is_some_and(|v| !v.is_empty())
    }

    /// Current members of a multi-select field, in selection order
    pub fn set(&self, field: SetField) -> &[String] {
        match field {
            SetField::WorkoutType => &self.workout_type,
            SetField::HealthGoals => &self.health_goals,
            SetField::HealthConcerns => &self.health_concerns,
        }
    }

    pub fn contains(&self, field: SetField, value: &str) -> bool {
        self.set(field).iter().any(|v| v == value)
    }

    /// @acp:summary "Replace a single-valued field unconditionally"
    pub fn set_scalar(&mut self, field: ScalarField, value: impl Into<String>) {
        *self.scalar_slot_mut(field) = Some(value.into());
    }

    /// @acp:summary "Add or remove one member of a multi-select field"
    ///
    /// Adding a present value or removing an absent one is a no-op, so the set never
    /// holds duplicates.
    pub fn toggle_in_set(&mut self, field: SetField, value: &str, present: bool) {
        let members = self.set_mut(field);
        let existing = members.iter().position(|v| v == value);
        match (present, existing) {
            (true, None) => members.push(value.to_string()),
            (false, Some(idx)) => {
                members.remove(idx);
            }
            _ => {}
        }
    }

    fn scalar_slot(&self, field: ScalarField) -> &Option<String> {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Email => &self.email,
            ScalarField::Age => &self.age,
            ScalarField::Gender => &self.gender,
            ScalarField::CurrentFeeling => &self.current_feeling,
            ScalarField::EnergyLevel => &self.energy_level,
            ScalarField::WorkoutFrequency => &self.workout_frequency,
            ScalarField::DietType => &self.diet_type,
            ScalarField::SleepQuality => &self.sleep_quality,
            ScalarField::StressLevel => &self.stress_level,
            ScalarField::CurrentSupplements => &self.current_supplements,
            ScalarField::Budget => &self.budget,
        }
    }

    fn scalar_slot_mut(&mut self, field: ScalarField) -> &mut Option<String> {
        match field {
            ScalarField::Name => &mut self.name,
            ScalarField::Email => &mut self.email,
            ScalarField::Age => &mut self.age,
            ScalarField::Gender => &mut self.gender,
            ScalarField::CurrentFeeling => &mut self.current_feeling,
            ScalarField::EnergyLevel => &mut self.energy_level,
            ScalarField::WorkoutFrequency => &mut self.workout_frequency,
            ScalarField::DietType => &mut self.diet_type,
            ScalarField::SleepQuality => &mut self.sleep_quality,
            ScalarField::StressLevel => &mut self.stress_level,
            ScalarField::CurrentSupplements => &mut self.current_supplements,
            ScalarField::Budget => &mut self.budget,
        }
    }

    fn set_mut(&mut self, field: SetField) -> &mut Vec<String> {
        match field {
            SetField::WorkoutType => &mut self.workout_type,
            SetField::HealthGoals => &mut self.health_goals,
            SetField::HealthConcerns => &mut self.health_concerns,
        }
    }
}

/// @acp:summary "Frozen, complete answers handed to plan generation"
/// @acp:lock strict
///
/// Only the stepper creates records, and only after the last step validated. Reads go
/// through `Deref` to the store's getters; there is no way to mutate a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerRecord(AnswerStore);

impl AnswerRecord {
    pub(crate) fn freeze(store: &AnswerStore) -> Self {
        Self(store.clone())
    }

    /// Display name, or an empty string
    pub fn name(&self) -> &str {
        self.0.scalar(ScalarField::Name).unwrap_or_default()
    }

    /// First health goal in selection order
    pub fn first_health_goal(&self) -> Option<&str> {
        self.0.set(SetField::HealthGoals).first().map(String::as_str)
    }
}

impl Deref for AnswerRecord {
    type Target = AnswerStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_store_is_empty() {
        let store = AnswerStore::new();
        for field in ScalarField::all() {
            assert_eq!(store.scalar(*field), None);
        }
        for field in SetField::all() {
            assert!(store.set(*field).is_empty());
        }
    }

    #[test]
    fn test_set_scalar_replaces_value() {
        let mut store = AnswerStore::new();
        store.set_scalar(ScalarField::Name, "Ana");
        store.set_scalar(ScalarField::Name, "Marko");
        assert_eq!(store.scalar(ScalarField::Name), Some("Marko"));
    }

    #[test]
    fn test_empty_scalar_is_not_chosen() {
        let mut store = AnswerStore::new();
        store.set_scalar(ScalarField::Email, "");
        assert_eq!(store.scalar(ScalarField::Email), Some(""));
        assert!(!store.has_scalar(ScalarField::Email));
    }

    #[test]
    fn test_toggle_round_trip_restores_set() {
        let mut store = AnswerStore::new();
        store.toggle_in_set(SetField::HealthGoals, "sleep", true);
        let before = store.set(SetField::HealthGoals).to_vec();

        store.toggle_in_set(SetField::HealthGoals, "energy", true);
        store.toggle_in_set(SetField::HealthGoals, "energy", false);

        assert_eq!(store.set(SetField::HealthGoals), before.as_slice());
    }

    #[test]
    fn test_toggle_on_twice_has_no_duplicate() {
        let mut store = AnswerStore::new();
        store.toggle_in_set(SetField::WorkoutType, "yoga", true);
        store.toggle_in_set(SetField::WorkoutType, "yoga", true);
        assert_eq!(store.set(SetField::WorkoutType), ["yoga".to_string()]);
    }

    #[test]
    fn test_removing_absent_value_is_noop() {
        let mut store = AnswerStore::new();
        store.toggle_in_set(SetField::HealthConcerns, "anxiety", false);
        assert!(store.set(SetField::HealthConcerns).is_empty());
    }

    #[test]
    fn test_from_file_reads_camel_case_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"name":"Ana","currentFeeling":"okay","healthGoals":["energy","sleep"]}}"#
        )
        .unwrap();

        let store = AnswerStore::from_file(file.path()).unwrap();
        assert_eq!(store.scalar(ScalarField::Name), Some("Ana"));
        assert_eq!(store.scalar(ScalarField::CurrentFeeling), Some("okay"));
        assert_eq!(store.set(SetField::HealthGoals).len(), 2);
        assert!(store.set(SetField::WorkoutType).is_empty());
    }

    #[test]
    fn test_from_file_reads_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "name: Ana\nbudget: under-50\nworkoutType:\n  - yoga").unwrap();

        let store = AnswerStore::from_file(file.path()).unwrap();
        assert_eq!(store.scalar(ScalarField::Budget), Some("under-50"));
        assert!(store.contains(SetField::WorkoutType, "yoga"));
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = AnswerStore::from_file(file.path()).unwrap_err();
        assert!(matches!(err, VitaplanError::UnsupportedFormat(ext) if ext == "toml"));
    }

    #[test]
    fn test_record_reads_through_store() {
        let mut store = AnswerStore::new();
        store.set_scalar(ScalarField::Name, "Ana");
        store.toggle_in_set(SetField::HealthGoals, "heart", true);
        store.toggle_in_set(SetField::HealthGoals, "sleep", true);

        let record = AnswerRecord::freeze(&store);
        assert_eq!(record.name(), "Ana");
        assert_eq!(record.first_health_goal(), Some("heart"));
        assert_eq!(record.set(SetField::HealthGoals).len(), 2);
    }
}
