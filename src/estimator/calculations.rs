use crate::estimator::constants::{MAX_MINUTES, MIN_MINUTES};
use crate::models::{Activity, ActivityBurn, Anchors, Selection, Totals};

/// Coerce raw user input to a number.
///
/// Blank input becomes 0. Decimal and exponent forms parse as usual, and
/// `0x`/`0o`/`0b` prefixes are read as unsigned integers. The only spelled-out
/// infinity is `Infinity` (optionally signed); `inf`, `NaN` and anything else
/// non-numeric become 0. Surrounding whitespace is ignored.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match parse_numeric(trimmed) {
        Some(v) => v,
        None => {
            log::warn!("Non-numeric input '{}' treated as 0", raw);
            0.0
        }
    }
}

fn parse_numeric(text: &str) -> Option<f64> {
    if let Some(v) = parse_radix_literal(text) {
        return Some(v);
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // f64's parser also accepts "inf", "infinity" and "nan" in any case.
    let first = unsigned.chars().next()?;
    if !(first.is_ascii_digit() || first == '.') {
        return None;
    }

    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Unsigned `0x`, `0o` or `0b` integer literal.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Fold digit by digit so long literals lose precision instead of overflowing.
    Some(digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    }))
}

/// Clamp a minutes value to [MIN_MINUTES, MAX_MINUTES]. NaN becomes 0.
pub fn clamp_minutes(minutes: f64) -> f64 {
    if minutes.is_nan() {
        return MIN_MINUTES;
    }
    let clamped = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
    if clamped != minutes {
        log::warn!("Minutes {} clamped to {}", minutes, clamped);
    }
    clamped
}

/// Calories per hour at an arbitrary body weight.
///
/// Piecewise linear over the 50/60/70 kg anchors. Weights up to 60 kg use the
/// 50-60 slope (extrapolating below 50), heavier weights use the 60-70 slope
/// (extrapolating above 70). No validation: extreme weights can yield
/// negative values.
pub fn kcal_per_hour_for_weight(weight_kg: f64, anchors: &Anchors) -> f64 {
    if weight_kg <= 60.0 {
        anchors.at_50 + anchors.slope_low() * (weight_kg - 50.0)
    } else {
        anchors.at_60 + anchors.slope_high() * (weight_kg - 60.0)
    }
}

/// Calories burned doing an activity for `minutes` at `weight_kg`.
///
/// Not floored; may be negative for extreme weights.
pub fn activity_kcal(weight_kg: f64, anchors: &Anchors, minutes: f64) -> f64 {
    kcal_per_hour_for_weight(weight_kg, anchors) * minutes / 60.0
}

/// Sum checked activities into a total and a per-activity breakdown.
///
/// Activities are visited in catalog order. A catalog entry with no matching
/// selection counts as unchecked. The total accumulates raw contributions;
/// each reported per-activity figure is floored at 0.
pub fn compute_totals(
    selections: &[(&str, Selection)],
    weight_kg: f64,
    catalog: &'static [Activity],
) -> Totals {
    let mut totals = Totals::default();

    for activity in catalog {
        let selection = selections
            .iter()
            .find(|(key, _)| *key == activity.key)
            .map(|(_, s)| s);

        let Some(selection) = selection.filter(|s| s.checked) else {
            continue;
        };

        let kcal = activity_kcal(weight_kg, &activity.anchors, selection.minutes);
        totals.total_kcal += kcal;
        totals.per_activity.push(ActivityBurn {
            key: activity.key,
            label: activity.label,
            kcal: kcal.max(0.0),
        });
    }

    totals
}

/// Round half up, so -0.5 becomes 0 and 2.5 becomes 3.
pub fn round_for_display(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::constants::ACTIVITIES;

    fn sweeping() -> Anchors {
        Anchors::new(165.0, 198.0, 231.0)
    }

    #[test]
    fn test_kcal_at_anchors() {
        let a = sweeping();
        assert!((kcal_per_hour_for_weight(50.0, &a) - 165.0).abs() < 1e-9);
        assert!((kcal_per_hour_for_weight(60.0, &a) - 198.0).abs() < 1e-9);
        assert!((kcal_per_hour_for_weight(70.0, &a) - 231.0).abs() < 1e-9);
    }

    #[test]
    fn test_kcal_uses_segment_slopes() {
        // Lower segment is steeper than the upper one.
        let a = Anchors::new(100.0, 200.0, 210.0);
        assert!((kcal_per_hour_for_weight(40.0, &a) - 0.0).abs() < 1e-9);
        assert!((kcal_per_hour_for_weight(55.0, &a) - 150.0).abs() < 1e-9);
        assert!((kcal_per_hour_for_weight(65.0, &a) - 205.0).abs() < 1e-9);
        assert!((kcal_per_hour_for_weight(90.0, &a) - 230.0).abs() < 1e-9);
    }

    #[test]
    fn test_kcal_extrapolates_negative() {
        let a = sweeping();
        // 165 + 3.3 * (0 - 50) = 0
        assert!(kcal_per_hour_for_weight(0.0, &a).abs() < 1e-9);
        assert!(kcal_per_hour_for_weight(-10.0, &a) < 0.0);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("72.5"), 72.5);
        assert_eq!(coerce_number("  45 "), 45.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("-5"), -5.0);
        assert_eq!(coerce_number("1e2"), 100.0);
        assert_eq!(coerce_number(".5"), 0.5);
    }

    #[test]
    fn test_coerce_number_infinity_spellings() {
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("INF"), 0.0);
        assert_eq!(coerce_number("infinity"), 0.0);
        assert_eq!(coerce_number("-inf"), 0.0);
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("+Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_coerce_number_radix_literals() {
        assert_eq!(coerce_number("0x1e"), 30.0);
        assert_eq!(coerce_number("0X1E"), 30.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("-0x1e"), 0.0);
        assert_eq!(coerce_number("0x"), 0.0);
        assert_eq!(coerce_number("0xzz"), 0.0);
    }

    #[test]
    fn test_clamp_minutes() {
        assert_eq!(clamp_minutes(1000.0), MAX_MINUTES);
        assert_eq!(clamp_minutes(-5.0), MIN_MINUTES);
        assert_eq!(clamp_minutes(30.5), 30.5);
        assert_eq!(clamp_minutes(f64::NAN), 0.0);
        assert_eq!(clamp_minutes(f64::INFINITY), MAX_MINUTES);
    }

    #[test]
    fn test_compute_totals_skips_unchecked() {
        let selections = vec![
            ("sweeping", Selection::checked(60.0)),
            (
                "cooking",
                Selection {
                    checked: false,
                    minutes: 120.0,
                },
            ),
        ];
        let totals = compute_totals(&selections, 60.0, &ACTIVITIES);
        assert_eq!(totals.per_activity.len(), 1);
        assert_eq!(totals.per_activity[0].key, "sweeping");
        assert!((totals.total_kcal - 198.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_totals_catalog_order() {
        // Selections listed in reverse; breakdown still follows the catalog.
        let selections = vec![
            ("gardening_vigorous", Selection::checked(10.0)),
            ("ironing", Selection::checked(10.0)),
            ("sweeping", Selection::checked(10.0)),
        ];
        let totals = compute_totals(&selections, 60.0, &ACTIVITIES);
        let keys: Vec<&str> = totals.per_activity.iter().map(|a| a.key).collect();
        assert_eq!(keys, vec!["sweeping", "ironing", "gardening_vigorous"]);
    }

    #[test]
    fn test_negative_contribution_floored_but_total_is_not() {
        let selections = vec![("sweeping", Selection::checked(60.0))];
        // 165 + 3.3 * (-10 - 50) = -33
        let totals = compute_totals(&selections, -10.0, &ACTIVITIES);
        assert_eq!(totals.per_activity[0].kcal, 0.0);
        assert!((totals.total_kcal - -33.0).abs() < 1e-9);
        assert_eq!(totals.breakdown_sum(), 0.0);
    }

    #[test]
    fn test_round_for_display() {
        assert_eq!(round_for_display(90.75), 91.0);
        assert_eq!(round_for_display(2.5), 3.0);
        assert_eq!(round_for_display(-0.5), 0.0);
        assert_eq!(round_for_display(-33.0), -33.0);
    }
}
