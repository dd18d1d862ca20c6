use std::path::Path;

use clap::Parser;

use activity_burn_calc_rs::cli::{Cli, Command, OutputFormat, ProfileArgs};
use activity_burn_calc_rs::error::Result;
use activity_burn_calc_rs::estimator::{coerce_number, round_for_display};
use activity_burn_calc_rs::interface::{
    apply_activity_args, display_about, display_catalog, display_method_note, display_reference,
    display_reference_table, display_summary, report_json, run_interactive, write_breakdown_csv,
    write_csv, EstimateReport,
};
use activity_burn_calc_rs::state::SessionState;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let profile = cli.profile;

    match command {
        Command::Estimate { activities, format } => cmd_estimate(&profile, &activities, format),
        Command::Interactive => cmd_interactive(&profile),
        Command::List => cmd_list(&profile),
        Command::Ranges { all } => cmd_ranges(&profile, all),
        Command::Export { activities, output } => cmd_export(&profile, &activities, &output),
        Command::About => {
            display_about();
            Ok(())
        }
    }
}

/// Build a session from the profile flags and `KEY[=MINUTES]` arguments.
fn build_session(profile: &ProfileArgs, activities: &[String]) -> Result<SessionState> {
    let mut state = SessionState::new();
    state.set_weight(&profile.weight);
    state.set_sex(profile.sex);
    state.set_level(profile.level);

    apply_activity_args(&mut state, activities)?;

    Ok(state)
}

/// Estimate calories for the activities given on the command line.
fn cmd_estimate(profile: &ProfileArgs, activities: &[String], format: OutputFormat) -> Result<()> {
    let state = build_session(profile, activities)?;

    match format {
        OutputFormat::Text => {
            if activities.is_empty() {
                println!("No activities given. Use --activity KEY[=MINUTES]; see 'list' for keys.");
            }
            display_summary(&state, &state.totals());
            display_method_note();
        }
        OutputFormat::Json => {
            println!("{}", report_json(&EstimateReport::from_state(&state))?);
        }
        OutputFormat::Csv => {
            write_breakdown_csv(&state.totals(), std::io::stdout())?;
        }
    }

    Ok(())
}

/// Pick activities interactively, recomputing after every change.
fn cmd_interactive(profile: &ProfileArgs) -> Result<()> {
    let mut state = build_session(profile, &[])?;
    run_interactive(&mut state)?;

    println!("Final estimate:");
    display_summary(&state, &state.totals());
    Ok(())
}

/// List the activity catalog.
fn cmd_list(profile: &ProfileArgs) -> Result<()> {
    display_catalog(coerce_number(&profile.weight));
    Ok(())
}

/// Show reference ranges.
fn cmd_ranges(profile: &ProfileArgs, all: bool) -> Result<()> {
    if all {
        display_reference_table();
    } else {
        let state = build_session(profile, &[])?;
        println!();
        display_reference(state.sex(), state.level(), &state.reference());
    }
    Ok(())
}

/// Write the breakdown CSV for the given activities.
fn cmd_export(profile: &ProfileArgs, activities: &[String], output: &str) -> Result<()> {
    let state = build_session(profile, activities)?;
    let totals = state.totals();

    if totals.is_empty() {
        println!("No activities given; the report will only contain the total row.");
    }

    write_csv(&totals, Path::new(output))?;
    println!(
        "Wrote {} activities to {} (total {:.0} kcal)",
        totals.per_activity.len(),
        output,
        round_for_display(totals.total_kcal)
    );
    Ok(())
}
