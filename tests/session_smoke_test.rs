#[macro_use]
extern crate assert_float_eq;

use activity_burn_calc_rs::estimator::{ACTIVITIES, DEFAULT_MINUTES, MAX_MINUTES};
use activity_burn_calc_rs::models::{ActivityLevel, Sex};
use activity_burn_calc_rs::state::SessionState;

#[test]
fn test_set_minutes_clamps_and_coerces() {
    let mut state = SessionState::new();

    assert_eq!(state.set_minutes("sweeping", "1000").unwrap(), MAX_MINUTES);
    assert_eq!(state.selection("sweeping").unwrap().minutes, 720.0);

    assert_eq!(state.set_minutes("sweeping", "-5").unwrap(), 0.0);
    assert_eq!(state.selection("sweeping").unwrap().minutes, 0.0);

    assert_eq!(state.set_minutes("sweeping", "abc").unwrap(), 0.0);
    assert_eq!(state.selection("sweeping").unwrap().minutes, 0.0);

    assert_eq!(state.set_minutes("sweeping", "42.5").unwrap(), 42.5);
}

#[test]
fn test_spelled_out_inf_is_not_a_number() {
    let mut state = SessionState::new();
    state.toggle("sweeping").unwrap();

    assert_eq!(state.set_minutes("sweeping", "inf").unwrap(), 0.0);
    assert_eq!(state.selection("sweeping").unwrap().minutes, 0.0);

    state.set_minutes("sweeping", "60").unwrap();
    assert_eq!(state.set_weight("INF"), 0.0);
    assert!(state.totals().total_kcal.is_finite());

    // The one accepted spelling still clamps like any large value.
    assert_eq!(state.set_minutes("sweeping", "Infinity").unwrap(), MAX_MINUTES);
}

#[test]
fn test_set_minutes_leaves_checked_alone() {
    let mut state = SessionState::new();
    state.set_minutes("vacuuming", "30").unwrap();
    assert!(!state.selection("vacuuming").unwrap().checked);

    state.toggle("vacuuming").unwrap();
    state.set_minutes("vacuuming", "15").unwrap();
    assert!(state.selection("vacuuming").unwrap().checked);
}

#[test]
fn test_totals_follow_every_mutation() {
    let mut state = SessionState::new();
    assert!(state.totals().is_empty());

    state.toggle("sweeping").unwrap();
    assert_float_absolute_eq!(state.totals().total_kcal, 198.0, 1e-9);

    state.set_minutes("sweeping", "30").unwrap();
    assert_float_absolute_eq!(state.totals().total_kcal, 99.0, 1e-9);

    state.set_weight("55");
    assert_float_absolute_eq!(state.totals().total_kcal, 90.75, 1e-9);

    state.toggle("sweeping").unwrap();
    assert_eq!(state.totals().total_kcal, 0.0);
}

#[test]
fn test_sex_and_level_only_change_reference() {
    let mut state = SessionState::new();
    state.toggle("cooking").unwrap();
    let before = state.totals();

    state.set_sex(Sex::Men);
    state.set_level(ActivityLevel::High);

    assert_eq!(state.totals(), before);
    assert_eq!(state.reference().daily, (2800, 3000));
}

#[test]
fn test_reset_all_restores_defaults() {
    let mut state = SessionState::new();
    for activity in &ACTIVITIES {
        state.toggle(activity.key).unwrap();
        state.set_minutes(activity.key, "5").unwrap();
    }
    state.set_weight("92");
    state.set_sex(Sex::Men);
    state.set_level(ActivityLevel::Moderate);

    state.reset_all();

    for (_, selection) in state.selections() {
        assert!(!selection.checked);
        assert_eq!(selection.minutes, DEFAULT_MINUTES);
    }
    assert_eq!(state.weight_kg(), 60.0);
    assert_eq!(state.sex(), Sex::Women);
    assert_eq!(state.level(), ActivityLevel::Sedentary);
    assert_eq!(state, SessionState::new());
}

#[test]
fn test_negative_weight_keeps_total_unfloored() {
    let mut state = SessionState::with_profile(-10.0, Sex::Women, ActivityLevel::Sedentary);
    state.toggle("sweeping").unwrap();
    state.toggle("cooking").unwrap();

    let totals = state.totals();

    // Each reported figure is floored, the total is not.
    assert!(totals.per_activity.iter().all(|a| a.kcal == 0.0));
    assert!(totals.total_kcal < 0.0);
}
