use serde::Serialize;

/// Calories attributed to one checked activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityBurn {
    pub key: &'static str,
    pub label: &'static str,

    /// Estimated kcal, floored at zero.
    pub kcal: f64,
}

/// Derived totals for the current selections and weight.
///
/// `total_kcal` is the raw sum of contributions and is not floored, so it
/// can disagree with the sum of `per_activity` when a contribution is
/// negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub total_kcal: f64,
    pub per_activity: Vec<ActivityBurn>,
}

impl Totals {
    pub fn is_empty(&self) -> bool {
        self.per_activity.is_empty()
    }

    /// Sum of the reported (floored) per-activity figures.
    pub fn breakdown_sum(&self) -> f64 {
        self.per_activity.iter().map(|a| a.kcal).sum()
    }
}
