use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::estimator::constants::{MAX_MINUTES, WEIGHT_HINT_MAX_KG, WEIGHT_HINT_MIN_KG};
use crate::interface::lookup::{exact_activity, fuzzy_candidates};
use crate::interface::render::{display_session, display_summary};
use crate::models::{Activity, ActivityLevel, Sex};
use crate::state::SessionState;

/// One entry of the interactive main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    SetMinutes,
    SetWeight,
    SetSex,
    SetLevel,
    Reset,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Toggle,
        MenuAction::SetMinutes,
        MenuAction::SetWeight,
        MenuAction::SetSex,
        MenuAction::SetLevel,
        MenuAction::Reset,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Toggle => "Tick / untick an activity",
            MenuAction::SetMinutes => "Set minutes for an activity",
            MenuAction::SetWeight => "Set body weight",
            MenuAction::SetSex => "Choose sex",
            MenuAction::SetLevel => "Choose general activity level",
            MenuAction::Reset => "Reset everything",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Prompt for an activity, accepting a list pick or typed text.
pub fn prompt_activity(state: &SessionState, prompt: &str) -> Result<Option<&'static Activity>> {
    let catalog = state.catalog();
    let mut items: Vec<String> = catalog
        .iter()
        .map(|a| {
            let checked = state.selection(a.key).map(|s| s.checked).unwrap_or(false);
            format!("[{}] {}", if checked { "x" } else { " " }, a.label)
        })
        .collect();
    items.push("Type a name...".to_string());
    items.push("Back".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    if selection < catalog.len() {
        return Ok(Some(&catalog[selection]));
    }
    if selection == catalog.len() {
        return prompt_activity_by_name();
    }
    Ok(None)
}

/// Prompt for an activity name with fuzzy matching.
pub fn prompt_activity_by_name() -> Result<Option<&'static Activity>> {
    let input: String = Input::new()
        .with_prompt("Activity name or key")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some(activity) = exact_activity(input) {
        return Ok(Some(activity));
    }

    let candidates = fuzzy_candidates(input);

    if candidates.is_empty() {
        println!("No matching activity found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let activity = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", activity.label))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(activity));
    }

    let options: Vec<&'static Activity> = candidates.iter().take(5).map(|(a, _)| *a).collect();
    let mut labels: Vec<String> = options.iter().map(|a| a.label.to_string()).collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).copied())
}

/// Prompt for minutes as raw text; coercion happens in the state.
pub fn prompt_minutes(activity: &Activity, current: f64) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Minutes of '{}' (0–{})",
            activity.label, MAX_MINUTES
        ))
        .default(current.to_string())
        .interact_text()?;
    Ok(input)
}

/// Prompt for body weight as raw text; coercion happens in the state.
pub fn prompt_weight(current: f64) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Body weight in kg (typically {}–{})",
            WEIGHT_HINT_MIN_KG, WEIGHT_HINT_MAX_KG
        ))
        .default(current.to_string())
        .interact_text()?;
    Ok(input)
}

pub fn prompt_sex(current: Sex) -> Result<Sex> {
    let names: Vec<&str> = Sex::ALL.iter().map(|s| s.name()).collect();
    let default = Sex::ALL.iter().position(|s| *s == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Sex")
        .items(&names)
        .default(default)
        .interact()?;

    Ok(Sex::ALL.get(selection).copied().unwrap_or_default())
}

pub fn prompt_level(current: ActivityLevel) -> Result<ActivityLevel> {
    let names: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.name()).collect();
    let default = ActivityLevel::ALL
        .iter()
        .position(|l| *l == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("General activity level")
        .items(&names)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL
        .get(selection)
        .copied()
        .unwrap_or_default())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Apply one menu action to the session. Returns false when the user quits.
fn apply_action(state: &mut SessionState, action: MenuAction) -> Result<bool> {
    match action {
        MenuAction::Toggle => {
            if let Some(activity) = prompt_activity(state, "Which activity?")? {
                state.toggle(activity.key)?;
            }
        }
        MenuAction::SetMinutes => {
            if let Some(activity) = prompt_activity(state, "Set minutes for which activity?")? {
                let current = state
                    .selection(activity.key)
                    .map(|s| s.minutes)
                    .unwrap_or_default();
                let raw = prompt_minutes(activity, current)?;
                let stored = state.set_minutes(activity.key, &raw)?;
                if !state.selection(activity.key).is_some_and(|s| s.checked) {
                    println!(
                        "Stored {} min; tick '{}' to count it.",
                        stored, activity.label
                    );
                }
            }
        }
        MenuAction::SetWeight => {
            let raw = prompt_weight(state.weight_kg())?;
            state.set_weight(&raw);
        }
        MenuAction::SetSex => {
            let sex = prompt_sex(state.sex())?;
            state.set_sex(sex);
        }
        MenuAction::SetLevel => {
            let level = prompt_level(state.level())?;
            state.set_level(level);
        }
        MenuAction::Reset => {
            if prompt_yes_no("Reset all selections and profile to defaults?", false)? {
                state.reset_all();
            }
        }
        MenuAction::Quit => return Ok(false),
    }
    Ok(true)
}

/// Run the interactive session until the user quits.
///
/// Totals are recomputed and redrawn after every action.
pub fn run_interactive(state: &mut SessionState) -> Result<()> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        display_session(state);
        display_summary(state, &state.totals());

        let selection = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = MenuAction::ALL
            .get(selection)
            .copied()
            .unwrap_or(MenuAction::Quit);

        if !apply_action(state, action)? {
            break;
        }
    }

    Ok(())
}
