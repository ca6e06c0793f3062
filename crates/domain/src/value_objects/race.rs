//! Playable races

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The race a character is born with. Never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Orc,
    Hobbit,
}

impl Race {
    /// Every race, in declaration order.
    pub const ALL: [Race; 5] = [
        Race::Human,
        Race::Elf,
        Race::Dwarf,
        Race::Orc,
        Race::Hobbit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Elf => "Elf",
            Self::Dwarf => "Dwarf",
            Self::Orc => "Orc",
            Self::Hobbit => "Hobbit",
        }
    }
}

/// Describe the available races, one per line, headed by a title line.
pub fn describe_races() -> String {
    let mut out = String::from("The following races exist:");
    for race in Race::ALL {
        out.push('\n');
        out.push_str(race.name());
    }
    out
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "elf" => Ok(Self::Elf),
            "dwarf" => Ok(Self::Dwarf),
            "orc" => Ok(Self::Orc),
            "hobbit" => Ok(Self::Hobbit),
            _ => Err(DomainError::parse(format!("Unknown race: {}", s))),
        }
    }
}

/// Which side a character fights on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Allegiance {
    Ally,
    Enemy,
}

impl fmt::Display for Allegiance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ally => write!(f, "ally"),
            Self::Enemy => write!(f, "enemy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_all_races_in_order() {
        let text = describe_races();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "The following races exist:");
        assert_eq!(&lines[1..], &["Human", "Elf", "Dwarf", "Orc", "Hobbit"]);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("ELF".parse::<Race>().unwrap(), Race::Elf);
        assert_eq!(" dwarf ".parse::<Race>().unwrap(), Race::Dwarf);
    }

    #[test]
    fn parse_unknown_race_fails() {
        let err = "goblin".parse::<Race>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for race in Race::ALL {
            assert_eq!(race.to_string().parse::<Race>().unwrap(), race);
        }
    }
}
