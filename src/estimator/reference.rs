use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::models::{ActivityLevel, Sex};

/// Broad daily and weekly energy-use band for a sex and activity level.
///
/// Bounds are `(low, high)` in kcal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRange {
    pub daily: (u32, u32),
    pub weekly: (u32, u32),
}

impl ReferenceRange {
    const fn new(daily: (u32, u32), weekly: (u32, u32)) -> Self {
        Self { daily, weekly }
    }
}

/// Map from (sex, level) to reference range.
pub static REFERENCE_RANGES: LazyLock<HashMap<(Sex, ActivityLevel), ReferenceRange>> =
    LazyLock::new(|| {
        use ActivityLevel::*;

        let mut m = HashMap::new();
        m.insert(
            (Sex::Women, Sedentary),
            ReferenceRange::new((1800, 2000), (12600, 14000)),
        );
        m.insert(
            (Sex::Women, Moderate),
            ReferenceRange::new((2000, 2200), (14000, 15400)),
        );
        m.insert(
            (Sex::Women, High),
            ReferenceRange::new((2400, 2600), (16800, 18200)),
        );
        m.insert(
            (Sex::Men, Sedentary),
            ReferenceRange::new((2000, 2200), (14000, 15400)),
        );
        m.insert(
            (Sex::Men, Moderate),
            ReferenceRange::new((2400, 2700), (16800, 18900)),
        );
        m.insert(
            (Sex::Men, High),
            ReferenceRange::new((2800, 3000), (19600, 21000)),
        );
        m
    });

/// Get the reference range for a sex and activity level.
pub fn reference_range(sex: Sex, level: ActivityLevel) -> ReferenceRange {
    // Every (sex, level) pair is present in the table.
    REFERENCE_RANGES[&(sex, level)]
}
