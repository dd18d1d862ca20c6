use crate::models::{Activity, Anchors};

/// Body weight used when a session starts or is reset (kg).
pub const DEFAULT_WEIGHT_KG: f64 = 60.0;

/// Minutes pre-filled for every activity.
pub const DEFAULT_MINUTES: f64 = 60.0;

/// Minutes are clamped to this range on every write.
pub const MIN_MINUTES: f64 = 0.0;
pub const MAX_MINUTES: f64 = 720.0;

/// Suggested body weight range shown in prompts. Not enforced.
pub const WEIGHT_HINT_MIN_KG: f64 = 30.0;
pub const WEIGHT_HINT_MAX_KG: f64 = 200.0;

/// Anchor body weights (kg) for which kcal/hour is tabulated.
pub const ANCHOR_WEIGHTS_KG: [f64; 3] = [50.0, 60.0, 70.0];

// ─────────────────────────────────────────────────────────────────────────────
// Activity catalog (kcal/hour at 50, 60 and 70 kg)
// ─────────────────────────────────────────────────────────────────────────────

pub static ACTIVITIES: [Activity; 12] = [
    Activity::new(
        "sweeping",
        "Sweeping / Mopping",
        Anchors::new(165.0, 198.0, 231.0),
    ),
    Activity::new("vacuuming", "Vacuuming", Anchors::new(175.0, 210.0, 245.0)),
    Activity::new(
        "wash_clothes",
        "Washing clothes by hand",
        Anchors::new(175.0, 210.0, 245.0),
    ),
    Activity::new(
        "wash_dishes",
        "Washing dishes",
        Anchors::new(115.0, 138.0, 161.0),
    ),
    Activity::new("ironing", "Ironing clothes", Anchors::new(90.0, 108.0, 126.0)),
    Activity::new(
        "cooking",
        "Cooking / food prep",
        Anchors::new(100.0, 120.0, 140.0),
    ),
    Activity::new(
        "groceries_upstairs",
        "Carrying groceries (upstairs)",
        Anchors::new(225.0, 270.0, 315.0),
    ),
    Activity::new(
        "making_beds",
        "Making beds / tidying rooms",
        Anchors::new(125.0, 150.0, 175.0),
    ),
    Activity::new(
        "childcare_light",
        "Childcare (bathing, feeding, light)",
        Anchors::new(125.0, 150.0, 175.0),
    ),
    Activity::new(
        "window_cleaning",
        "Window cleaning / heavy scrubbing",
        Anchors::new(175.0, 210.0, 245.0),
    ),
    Activity::new(
        "gardening_light",
        "Gardening (light)",
        Anchors::new(175.0, 210.0, 245.0),
    ),
    Activity::new(
        "gardening_vigorous",
        "Gardening (digging, vigorous)",
        Anchors::new(250.0, 300.0, 350.0),
    ),
];

/// Look up a catalog activity by its exact key.
pub fn find_activity(key: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_keys_unique() {
        let keys: HashSet<&str> = ACTIVITIES.iter().map(|a| a.key).collect();
        assert_eq!(keys.len(), ACTIVITIES.len());
    }

    #[test]
    fn test_find_activity() {
        let sweeping = find_activity("sweeping").unwrap();
        assert_eq!(sweeping.anchors, Anchors::new(165.0, 198.0, 231.0));
        assert!(find_activity("Sweeping").is_none());
        assert!(find_activity("juggling").is_none());
    }
}
