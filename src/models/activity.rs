use serde::Serialize;

/// Calories burned per hour at the three anchor body weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchors {
    #[serde(rename = "50")]
    pub at_50: f64,

    #[serde(rename = "60")]
    pub at_60: f64,

    #[serde(rename = "70")]
    pub at_70: f64,
}

impl Anchors {
    pub const fn new(at_50: f64, at_60: f64, at_70: f64) -> Self {
        Self {
            at_50,
            at_60,
            at_70,
        }
    }

    /// Per-kg slope of the 50-60 kg segment.
    #[inline]
    pub fn slope_low(&self) -> f64 {
        (self.at_60 - self.at_50) / 10.0
    }

    /// Per-kg slope of the 60-70 kg segment.
    #[inline]
    pub fn slope_high(&self) -> f64 {
        (self.at_70 - self.at_60) / 10.0
    }
}

/// A household or gardening task with known calorie cost.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Activity {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "kcal_by_weight")]
    pub anchors: Anchors,
}

impl Activity {
    pub const fn new(key: &'static str, label: &'static str, anchors: Anchors) -> Self {
        Self {
            key,
            label,
            anchors,
        }
    }
}

impl PartialEq for Activity {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Activity {}
