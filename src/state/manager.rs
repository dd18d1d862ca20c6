use crate::error::{BurnError, Result};
use crate::estimator::constants::{ACTIVITIES, DEFAULT_WEIGHT_KG};
use crate::estimator::reference::{reference_range, ReferenceRange};
use crate::estimator::{clamp_minutes, coerce_number, compute_totals};
use crate::models::{Activity, ActivityLevel, Selection, Sex, Totals};

/// In-memory state of one calculator session.
///
/// Holds one selection per catalog activity, in catalog order, plus the
/// body profile. Totals are never stored; call [`SessionState::totals`]
/// after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    selections: Vec<(&'static str, Selection)>,
    weight_kg: f64,
    sex: Sex,
    level: ActivityLevel,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Create a session with every activity unchecked at the default minutes.
    pub fn new() -> Self {
        Self {
            selections: initial_selections(),
            weight_kg: DEFAULT_WEIGHT_KG,
            sex: Sex::default(),
            level: ActivityLevel::default(),
        }
    }

    /// Create a session with a given body profile.
    pub fn with_profile(weight_kg: f64, sex: Sex, level: ActivityLevel) -> Self {
        Self {
            weight_kg,
            sex,
            level,
            ..Self::new()
        }
    }

    /// The activity catalog this session selects from.
    pub fn catalog(&self) -> &'static [Activity] {
        &ACTIVITIES
    }

    /// Get the selection for an activity key.
    pub fn selection(&self, key: &str) -> Option<&Selection> {
        self.selections
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, s)| s)
    }

    fn selection_mut(&mut self, key: &str) -> Result<&mut Selection> {
        self.selections
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, s)| s)
            .ok_or_else(|| BurnError::UnknownActivity(key.to_string()))
    }

    /// All selections in catalog order.
    pub fn selections(&self) -> &[(&'static str, Selection)] {
        &self.selections
    }

    /// Flip the checked flag of an activity. Minutes are kept.
    pub fn toggle(&mut self, key: &str) -> Result<bool> {
        let selection = self.selection_mut(key)?;
        selection.checked = !selection.checked;
        let checked = selection.checked;
        log::debug!("Toggled {} -> checked={}", key, checked);
        Ok(checked)
    }

    /// Set minutes from raw input: non-numeric becomes 0, then clamped.
    ///
    /// The checked flag is left alone, so edits to unchecked activities are
    /// kept but do not count toward totals.
    pub fn set_minutes(&mut self, key: &str, raw: &str) -> Result<f64> {
        self.set_minutes_value(key, coerce_number(raw))
    }

    /// Set minutes from a number, clamped to the allowed range.
    pub fn set_minutes_value(&mut self, key: &str, minutes: f64) -> Result<f64> {
        let clamped = clamp_minutes(minutes);
        let selection = self.selection_mut(key)?;
        selection.minutes = clamped;
        log::debug!("Set minutes for {} -> {}", key, clamped);
        Ok(clamped)
    }

    /// Set body weight from raw input. Non-numeric becomes 0; never clamped.
    pub fn set_weight(&mut self, raw: &str) -> f64 {
        self.weight_kg = coerce_number(raw);
        log::debug!("Set weight -> {} kg", self.weight_kg);
        self.weight_kg
    }

    pub fn set_sex(&mut self, sex: Sex) {
        log::debug!("Set sex -> {}", sex);
        self.sex = sex;
    }

    pub fn set_level(&mut self, level: ActivityLevel) {
        log::debug!("Set activity level -> {}", level);
        self.level = level;
    }

    /// Restore every selection and the body profile to their defaults.
    pub fn reset_all(&mut self) {
        *self = Self::new();
        log::debug!("Session reset to defaults");
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn level(&self) -> ActivityLevel {
        self.level
    }

    /// Recompute totals from the current selections and weight.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.selections, self.weight_kg, self.catalog())
    }

    /// Reference range for the current sex and level.
    pub fn reference(&self) -> ReferenceRange {
        reference_range(self.sex, self.level)
    }

    /// Number of checked activities.
    pub fn checked_count(&self) -> usize {
        self.selections.iter().filter(|(_, s)| s.checked).count()
    }
}

fn initial_selections() -> Vec<(&'static str, Selection)> {
    ACTIVITIES
        .iter()
        .map(|a| (a.key, Selection::default()))
        .collect()
}
