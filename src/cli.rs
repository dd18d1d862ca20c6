use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::{ActivityLevel, Sex};

/// Activity Burn: estimate calories burned by household and gardening tasks.
#[derive(Parser, Debug)]
#[command(name = "activity-burn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Body profile shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Body weight in kg (typically 30–200). Non-numeric values count as 0.
    #[arg(short, long, global = true, env = "ACTIVITY_BURN_WEIGHT", default_value = "60")]
    pub weight: String,

    /// Sex used for the reference range.
    #[arg(short, long, global = true, env = "ACTIVITY_BURN_SEX", value_enum, default_value_t = Sex::Women)]
    pub sex: Sex,

    /// General activity level used for the reference range.
    #[arg(short, long, global = true, env = "ACTIVITY_BURN_LEVEL", value_enum, default_value_t = ActivityLevel::Sedentary)]
    pub level: ActivityLevel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate calories for the given activities.
    Estimate {
        /// Activity performed, as KEY or KEY=MINUTES (minutes default to 60).
        #[arg(short, long = "activity", value_name = "KEY[=MINUTES]")]
        activities: Vec<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Pick activities and minutes interactively.
    Interactive,

    /// List the activity catalog with kcal/hour at your weight.
    List,

    /// Show reference daily and weekly burn ranges.
    Ranges {
        /// Show the whole table instead of the selected sex and level.
        #[arg(long)]
        all: bool,
    },

    /// Write the per-activity breakdown of an estimate to a CSV file.
    Export {
        /// Activity performed, as KEY or KEY=MINUTES.
        #[arg(short, long = "activity", value_name = "KEY[=MINUTES]")]
        activities: Vec<String>,

        /// Output CSV path.
        #[arg(short, long, default_value = "activity_burn.csv")]
        output: String,
    },

    /// How the calculator works, references and disclaimer.
    About,
}

impl Default for Command {
    fn default() -> Self {
        Command::Estimate {
            activities: Vec::new(),
            format: OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate() {
        let cli = Cli::parse_from([
            "activity-burn",
            "estimate",
            "-a",
            "sweeping=30",
            "-a",
            "cooking",
            "--weight",
            "55",
            "--sex",
            "men",
            "--format",
            "json",
        ]);

        assert_eq!(cli.profile.weight, "55");
        assert_eq!(cli.profile.sex, Sex::Men);
        match cli.command {
            Some(Command::Estimate { activities, format }) => {
                assert_eq!(activities, vec!["sweeping=30", "cooking"]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ranges_defaults_to_selected_row() {
        let cli = Cli::parse_from(["activity-burn", "ranges", "--sex", "men"]);
        assert_eq!(cli.profile.sex, Sex::Men);
        assert_eq!(cli.profile.level, ActivityLevel::Sedentary);
        assert!(matches!(cli.command, Some(Command::Ranges { all: false })));

        let cli = Cli::parse_from(["activity-burn", "ranges", "--all"]);
        assert!(matches!(cli.command, Some(Command::Ranges { all: true })));
    }
}
