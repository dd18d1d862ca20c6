use crate::estimator::constants::{ACTIVITIES, ANCHOR_WEIGHTS_KG};
use crate::estimator::reference::{ReferenceRange, REFERENCE_RANGES};
use crate::estimator::{kcal_per_hour_for_weight, round_for_display};
use crate::models::{ActivityLevel, Sex, Totals};
use crate::state::SessionState;

/// Display total kcal and the per-activity breakdown.
pub fn display_totals(totals: &Totals) {
    println!();
    println!("=== Your Results ===");
    println!();
    println!(
        "Total calories burned (today): {:.0} kcal",
        round_for_display(totals.total_kcal)
    );

    if totals.is_empty() {
        println!("No activities selected.");
        println!();
        return;
    }

    let max_label_len = totals
        .per_activity
        .iter()
        .map(|a| a.label.len())
        .max()
        .unwrap_or(10);

    println!();
    println!("--- Breakdown ---");
    for item in &totals.per_activity {
        println!(
            "  {:<width$}  {:>5.0} kcal",
            item.label,
            round_for_display(item.kcal),
            width = max_label_len
        );
    }
    println!();
}

/// Display the reference range for one sex and level.
pub fn display_reference(sex: Sex, level: ActivityLevel, range: &ReferenceRange) {
    println!("--- Reference daily burn ranges ---");
    println!("Selected: {} · {}", sex, level);
    println!("Daily:  {}–{} kcal", range.daily.0, range.daily.1);
    println!("Weekly: {}–{} kcal", range.weekly.0, range.weekly.1);
    println!(
        "These are general lifestyle energy-use bands, not tailored metabolism measurements."
    );
    println!();
}

/// Display the full reference table.
pub fn display_reference_table() {
    println!();
    println!("=== Reference burn ranges (sex × activity level) ===");
    println!();
    println!(
        "  {:<6} {:<10} {:>13} {:>15}",
        "Sex", "Level", "Daily kcal", "Weekly kcal"
    );
    for sex in Sex::ALL {
        for level in ActivityLevel::ALL {
            let range = REFERENCE_RANGES[&(sex, level)];
            println!(
                "  {:<6} {:<10} {:>13} {:>15}",
                sex.name(),
                level.name(),
                format!("{}–{}", range.daily.0, range.daily.1),
                format!("{}–{}", range.weekly.0, range.weekly.1)
            );
        }
    }
    println!();
}

/// Display the profile line and results for a session.
pub fn display_summary(state: &SessionState, totals: &Totals) {
    println!(
        "Body weight: {} kg | Sex: {} | Activity level: {}",
        state.weight_kg(),
        state.sex(),
        state.level()
    );
    display_totals(totals);
    display_reference(state.sex(), state.level(), &state.reference());
}

/// Display every activity with its checkbox, minutes and kcal/hour.
pub fn display_session(state: &SessionState) {
    println!();
    println!("=== Household & Gardening Activities ===");
    println!();

    let max_label_len = ACTIVITIES.iter().map(|a| a.label.len()).max().unwrap_or(10);

    for activity in state.catalog() {
        let Some(selection) = state.selection(activity.key) else {
            continue;
        };
        let mark = if selection.checked { "x" } else { " " };
        let kcal_hour = kcal_per_hour_for_weight(state.weight_kg(), &activity.anchors);

        println!(
            "  [{}] {:<width$}  {:>4.0} kcal/hr  {:>5} min",
            mark,
            activity.label,
            round_for_display(kcal_hour),
            selection.minutes,
            width = max_label_len
        );
    }

    println!();
    println!(
        "{} of {} activities ticked",
        state.checked_count(),
        state.catalog().len()
    );
}

/// Display the catalog with kcal/hour at the anchors and at `weight_kg`.
pub fn display_catalog(weight_kg: f64) {
    println!();
    println!("=== Activity catalog ===");
    println!();

    let max_key_len = ACTIVITIES.iter().map(|a| a.key.len()).max().unwrap_or(10);
    let max_label_len = ACTIVITIES.iter().map(|a| a.label.len()).max().unwrap_or(10);

    let anchor_header = ANCHOR_WEIGHTS_KG
        .iter()
        .map(|w| format!("{:>6}", format!("{}kg", w)))
        .collect::<Vec<_>>()
        .join(" ");

    println!(
        "  {:<kw$}  {:<lw$}  {}  {:>8}",
        "Key",
        "Activity",
        anchor_header,
        format!("@{}kg", weight_kg),
        kw = max_key_len,
        lw = max_label_len
    );

    for activity in &ACTIVITIES {
        let a = &activity.anchors;
        println!(
            "  {:<kw$}  {:<lw$}  {:>6.0} {:>6.0} {:>6.0}  {:>8.0}",
            activity.key,
            activity.label,
            a.at_50,
            a.at_60,
            a.at_70,
            round_for_display(kcal_per_hour_for_weight(weight_kg, a)),
            kw = max_key_len,
            lw = max_label_len
        );
    }

    println!();
    println!("Values are kcal per hour.");
    println!();
}

/// Short note on how the estimate is produced.
pub fn display_method_note() {
    println!(
        "Estimated from selected activities and minutes, scaled to your body weight via linear"
    );
    println!("interpolation of the 50/60/70 kg kcal/hr values.");
    println!();
}

/// Display the explanatory text, references and disclaimer.
pub fn display_about() {
    println!();
    println!("=== How this calculator works ===");
    println!();
    println!(
        "- For each activity you tick, the per-hour calories are scaled to your body weight"
    );
    println!("  using linear interpolation from the 50–60–70 kg anchors, then multiplied by");
    println!("  minutes/60.");
    println!(
        "- Totals are summed across all selected activities to estimate your additional daily"
    );
    println!("  calorie burn from household/gardening tasks.");
    println!("- This does not include resting metabolic rate or structured exercise unless listed.");
    println!();
    println!("=== References ===");
    println!();
    println!(
        "- Captain Calculator, Cleaning Calorie Calculator: https://captaincalculator.com/health/calorie/cleaning/"
    );
    println!(
        "- Ainsworth BE, Haskell WL, Herrmann SD, et al. (2011). Compendium of Physical Activities:"
    );
    println!("  2nd update of codes & MET values. Med Sci Sports Exerc 43(8):1575–1581.");
    println!(
        "- Brooks GA, Fahey TD, Baldwin KM. (2003). Exercise Physiology: Human Bioenergetics and"
    );
    println!("  Its Applications. 4th ed. McGraw-Hill.");
    println!(
        "- Sujatha K, Anuradha S, Anitha M. (2000). Energy expenditure pattern of rural women of"
    );
    println!("  reproductive age. Indian J Med Res 112:73–77.");
    println!(
        "- World Health Organization. (2004). Human energy requirements. FAO/WHO/UNU Expert Consultation."
    );
    println!();
    println!("This tool is for education only and not medical advice.");
    println!();
}
