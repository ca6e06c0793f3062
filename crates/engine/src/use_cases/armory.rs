//! Armory use cases.
//!
//! Crafting a weapon rolls its damage; the domain only accepts the result.

use std::sync::Arc;

use realmgrid_domain::{Character, Damage, DomainError, Weapon, WeaponKind, WeaponName, MAX_DAMAGE};

use crate::infrastructure::ports::RandomPort;

#[derive(Debug, thiserror::Error)]
pub enum CraftWeaponError {
    #[error("Rolled damage {0} is out of range")]
    InvalidRoll(i32),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Craft a weapon with random damage in `0..=MAX_DAMAGE`.
pub struct CraftWeapon {
    random: Arc<dyn RandomPort>,
}

impl CraftWeapon {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Roll damage and give the resulting weapon to `character`.
    ///
    /// Returns a copy of the crafted weapon; the character owns the original.
    pub fn execute(
        &self,
        character: &mut Character,
        name: WeaponName,
        kind: WeaponKind,
    ) -> Result<Weapon, CraftWeaponError> {
        let roll = self.random.gen_range(0, i32::from(MAX_DAMAGE));
        let damage = u8::try_from(roll).map_err(|_| CraftWeaponError::InvalidRoll(roll))?;
        let damage = Damage::new(damage)?;

        let weapon = character.craft_weapon(name, kind, damage).clone();
        tracing::info!(
            character = %character.name(),
            weapon = %weapon,
            "Weapon crafted"
        );
        Ok(weapon)
    }
}
