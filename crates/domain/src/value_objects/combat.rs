//! Attack and damage value objects

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Highest damage a crafted weapon can deal
pub const MAX_DAMAGE: u8 = 100;

/// One way of attacking. A character attacks with exactly one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Attack {
    /// Raw energy, in joules
    Energy { joules: f32 },
    /// A named spell
    Spell { name: String },
    /// Physical force, in newtons
    Force { newtons: f32 },
}

impl Attack {
    /// Build an attack from optional parts, exactly one of which must be set.
    ///
    /// Zero amounts and blank spell names count as "not set".
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if none or more than one part is set.
    pub fn from_parts(
        energy: Option<f32>,
        spell: Option<&str>,
        force: Option<f32>,
    ) -> Result<Self, DomainError> {
        let energy = energy.filter(|j| *j != 0.0);
        let spell = spell.map(str::trim).filter(|s| !s.is_empty());
        let force = force.filter(|n| *n != 0.0);

        match (energy, spell, force) {
            (Some(joules), None, None) => Ok(Self::Energy { joules }),
            (None, Some(name), None) => Ok(Self::Spell {
                name: name.to_string(),
            }),
            (None, None, Some(newtons)) => Ok(Self::Force { newtons }),
            _ => Err(DomainError::constraint(
                "An attack uses exactly one of energy, spell or force",
            )),
        }
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Energy { joules } => write!(f, "{} joules of energy", joules),
            Self::Spell { name } => write!(f, "the spell {}", name),
            Self::Force { newtons } => write!(f, "{} newtons of force", newtons),
        }
    }
}

/// Weapon damage, 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Damage(u8);

impl Damage {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` exceeds [`MAX_DAMAGE`].
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > MAX_DAMAGE {
            return Err(DomainError::validation(format!(
                "Damage cannot exceed {}",
                MAX_DAMAGE
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Damage {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Damage> for u8 {
    fn from(value: Damage) -> Self {
        value.0
    }
}

impl fmt::Display for Damage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
