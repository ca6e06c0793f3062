//! Character-related domain events
//!
//! These enums communicate what happened when character state was modified,
//! allowing callers to react appropriately.

use chrono::{DateTime, Utc};

use crate::{CharacterId, ElementId, MissionId, PetId};

/// Outcome of handing a coin to another character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinTransfer {
    /// One coin changed hands
    Transferred,
    /// The giver had no coins, nothing changed
    NoCoins,
}

impl CoinTransfer {
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Transferred)
    }
}

/// Outcome of befriending another character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendshipOutcome {
    /// Both characters now list each other as friends
    Befriended { a: CharacterId, b: CharacterId },
    /// They were already friends
    AlreadyFriends,
    /// A character cannot befriend itself
    SelfFriendship,
}

/// Outcome of adopting a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdoptOutcome {
    /// Owner and pet now point at each other
    Adopted { owner: CharacterId, pet: PetId },
    /// The pet already belongs to this character
    AlreadyOwned,
    /// The pet belongs to someone else
    OwnedByAnother { owner: CharacterId },
}

/// Outcome of releasing a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Both sides of the link were cleared
    Released { owner: CharacterId, pet: PetId },
    /// The pet is not owned by the character releasing it
    NotOwner,
}

/// Outcome of feeding a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// The pet was fed back to full energy
    Fed { energy: u8 },
    /// The pet still had energy and was left alone
    NotHungry,
    /// The pet is not owned by the character trying to feed it
    NotOwner,
}

/// Outcome of firing a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// Shot fired; `ammo_left` is `None` for weapons that need no ammo
    Fired { damage: u8, ammo_left: Option<u32> },
    /// The weapon has no ammunition left
    OutOfAmmo,
    /// The character has no weapon
    NoWeapon,
}

impl FireOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, Self::Fired { .. })
    }
}

/// Outcome of performing a mission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionOutcome {
    Completed {
        mission_id: MissionId,
        reward: u32,
        completed_at: DateTime<Utc>,
    },
    /// The character had already completed this mission; nothing is paid twice
    AlreadyCompleted { mission_id: MissionId },
}

/// Outcome of meeting another element on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    FirstMeeting { other: ElementId },
    MetAgain { other: ElementId, times: u32 },
}
