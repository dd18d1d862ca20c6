use strsim::jaro_winkler;

use crate::error::{BurnError, Result};
use crate::estimator::constants::ACTIVITIES;
use crate::models::Activity;
use crate::state::SessionState;

/// Minimum similarity for a fuzzy candidate to be offered.
pub const FUZZY_CANDIDATE_THRESHOLD: f64 = 0.7;

/// Minimum similarity to accept a fuzzy match without asking.
pub const FUZZY_ACCEPT_THRESHOLD: f64 = 0.85;

/// Find an activity by exact key, or by key/label ignoring case.
pub fn exact_activity(input: &str) -> Option<&'static Activity> {
    let needle = input.trim().to_lowercase();
    ACTIVITIES
        .iter()
        .find(|a| a.key == needle || a.label.to_lowercase() == needle)
}

/// Rank catalog activities by similarity to `input`, best first.
///
/// Both the key and the label are scored; the better score wins.
pub fn fuzzy_candidates(input: &str) -> Vec<(&'static Activity, f64)> {
    let needle = input.trim().to_lowercase();

    let mut candidates: Vec<(&'static Activity, f64)> = ACTIVITIES
        .iter()
        .map(|a| {
            let by_key = jaro_winkler(a.key, &needle);
            let by_label = jaro_winkler(&a.label.to_lowercase(), &needle);
            (a, by_key.max(by_label))
        })
        .filter(|(_, score)| *score > FUZZY_CANDIDATE_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Resolve user input to a catalog activity without prompting.
///
/// Exact matches win. Otherwise the best fuzzy candidate is accepted if it
/// clears [`FUZZY_ACCEPT_THRESHOLD`].
pub fn resolve_activity(input: &str) -> Result<&'static Activity> {
    if let Some(activity) = exact_activity(input) {
        return Ok(activity);
    }

    match fuzzy_candidates(input).first() {
        Some((activity, score)) if *score >= FUZZY_ACCEPT_THRESHOLD => {
            log::info!(
                "Matched '{}' to '{}' (similarity {:.2})",
                input,
                activity.key,
                score
            );
            Ok(*activity)
        }
        _ => Err(BurnError::UnknownActivity(input.to_string())),
    }
}

/// Split an `KEY[=MINUTES]` argument into its parts.
///
/// Minutes are returned raw so the caller can coerce and clamp them.
pub fn split_activity_arg(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((key, minutes)) => (key.trim(), Some(minutes)),
        None => (arg.trim(), None),
    }
}

/// Tick every activity named in `KEY[=MINUTES]` arguments.
///
/// Minutes are optional and keep the activity's current value when absent.
/// Naming an activity twice updates its minutes and leaves it ticked.
pub fn apply_activity_args(state: &mut SessionState, args: &[String]) -> Result<()> {
    for arg in args {
        let (name, minutes) = split_activity_arg(arg);
        let activity = resolve_activity(name)?;

        if let Some(raw) = minutes {
            state.set_minutes(activity.key, raw)?;
        }

        let already_checked = state
            .selection(activity.key)
            .is_some_and(|s| s.checked);
        if !already_checked {
            state.toggle(activity.key)?;
        }
    }
    Ok(())
}
