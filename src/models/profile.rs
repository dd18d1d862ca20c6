use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Sex used to pick a reference burn range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Sex {
    #[default]
    Women,
    Men,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Women, Sex::Men];

    pub fn name(&self) -> &'static str {
        match self {
            Sex::Women => "Women",
            Sex::Men => "Men",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// General lifestyle activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Moderate,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Sex::default(), Sex::Women);
        assert_eq!(ActivityLevel::default(), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_value_enum_parsing_is_case_insensitive() {
        assert_eq!(Sex::from_str("men", true).unwrap(), Sex::Men);
        assert_eq!(
            ActivityLevel::from_str("HIGH", true).unwrap(),
            ActivityLevel::High
        );
        assert!(ActivityLevel::from_str("extreme", true).is_err());
    }
}
