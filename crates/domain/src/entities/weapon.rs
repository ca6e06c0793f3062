//! Weapon entity - part of the character that crafted it
//!
//! A weapon cannot be built on its own: [`crate::aggregates::Character::craft_weapon`]
//! is the only constructor, and the weapon is dropped together with its owner.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::events::FireOutcome;
use crate::value_objects::Damage;
use crate::{CharacterId, WeaponName};

/// Rounds loaded into a freshly crafted ranged or magic weapon
pub const STARTING_AMMO: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeaponKind {
    Melee,
    Ranged,
    Magic,
}

impl WeaponKind {
    /// Melee weapons never run out; everything else starts with `STARTING_AMMO`.
    pub fn starting_ammo(&self) -> Option<u32> {
        match self {
            Self::Melee => None,
            Self::Ranged | Self::Magic => Some(STARTING_AMMO),
        }
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Melee => write!(f, "melee"),
            Self::Ranged => write!(f, "ranged"),
            Self::Magic => write!(f, "magic"),
        }
    }
}

// Serialize only: a weapon is never rebuilt from outside its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    name: WeaponName,
    kind: WeaponKind,
    damage: Damage,
    /// `None` = unlimited
    ammo: Option<u32>,
    owner: CharacterId,
}

impl Weapon {
    pub(crate) fn new(
        name: WeaponName,
        kind: WeaponKind,
        damage: Damage,
        owner: CharacterId,
    ) -> Self {
        Self {
            name,
            kind,
            damage,
            ammo: kind.starting_ammo(),
            owner,
        }
    }

    pub fn name(&self) -> &WeaponName {
        &self.name
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn damage(&self) -> Damage {
        self.damage
    }

    pub fn ammo(&self) -> Option<u32> {
        self.ammo
    }

    pub fn owner(&self) -> CharacterId {
        self.owner
    }

    /// Fire once, spending one round if the weapon uses ammunition.
    pub fn fire(&mut self) -> FireOutcome {
        let ammo_left = match self.ammo {
            Some(0) => return FireOutcome::OutOfAmmo,
            Some(n) => Some(n - 1),
            None => None,
        };
        self.ammo = ammo_left;
        FireOutcome::Fired {
            damage: self.damage.value(),
            ammo_left,
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} weapon, damage {})",
            self.name, self.kind, self.damage
        )
    }
}
