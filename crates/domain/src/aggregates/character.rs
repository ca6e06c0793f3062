//! Character aggregate - the people who walk the map
//!
//! # Relationships
//!
//! - Friends (association): both characters hold each other's id
//! - Pet (aggregation): the pet lives on its own; owner and pet hold each other's id
//! - Inventory (aggregation): items are moved in and keep their identity
//! - Weapon (composition): crafted by and dropped with the character
//! - Missions (usage): a character performs a mission and records the completion
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: coins in particular are never exposed, only `has_money`
//! - **Newtypes**: `CharacterName`, `WeaponName`, `Damage` are valid by construction
//! - **Domain events**: mutations return outcome enums (`CoinTransfer`, ...)

use chrono::{DateTime, Utc};
use std::fmt;

use crate::entities::{CompletedMission, Item, Mission, Pet, Weapon, WeaponKind};
use crate::events::{
    AdoptOutcome, CoinTransfer, EncounterOutcome, FeedOutcome, FireOutcome, FriendshipOutcome,
    MissionOutcome, ReleaseOutcome,
};
use crate::value_objects::{Allegiance, Attack, CharacterName, Damage, Position, Race, WeaponName};
use crate::{CharacterId, ElementId, PetId};

/// How many times this character has met a given element on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encounter {
    pub other: ElementId,
    pub times: u32,
}

/// A character in the game
///
/// # Example
///
/// ```
/// use realmgrid_domain::aggregates::Character;
/// use realmgrid_domain::value_objects::{CharacterName, Race};
///
/// let name = CharacterName::new("Aldric").unwrap();
/// let character = Character::new(name, Race::Human).with_team("Blue");
///
/// assert_eq!(character.to_string(), "Character Aldric of race Human (Blue)");
/// assert!(!character.has_money());
/// ```
#[derive(Debug, Clone)]
pub struct Character {
    // Identity
    id: CharacterId,
    name: CharacterName,
    race: Race,
    allegiance: Option<Allegiance>,
    team: Option<String>,

    // Purse (only reachable through the coin methods)
    coins: u32,

    // Relationships
    friends: Vec<CharacterId>,
    pet: Option<PetId>,
    inventory: Vec<Item>,
    weapon: Option<Weapon>,
    completed_missions: Vec<CompletedMission>,

    // Map state
    position: Position,
    encounters: Vec<Encounter>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(name: CharacterName, race: Race) -> Self {
        Self {
            id: CharacterId::new(),
            name,
            race,
            allegiance: None,
            team: None,
            coins: 0,
            friends: Vec::new(),
            pet: None,
            inventory: Vec::new(),
            weapon: None,
            completed_missions: Vec::new(),
            position: Position::ORIGIN,
            encounters: Vec::new(),
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_allegiance(mut self, allegiance: Allegiance) -> Self {
        self.allegiance = Some(allegiance);
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Start with a filled purse.
    pub fn with_coins(mut self, coins: u32) -> Self {
        self.coins = coins;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn race(&self) -> Race {
        self.race
    }

    #[inline]
    pub fn allegiance(&self) -> Option<Allegiance> {
        self.allegiance
    }

    #[inline]
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    #[inline]
    pub fn friends(&self) -> &[CharacterId] {
        &self.friends
    }

    #[inline]
    pub fn pet(&self) -> Option<PetId> {
        self.pet
    }

    #[inline]
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    #[inline]
    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    #[inline]
    pub fn completed_missions(&self) -> &[CompletedMission] {
        &self.completed_missions
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    // =========================================================================
    // Combat
    // =========================================================================

    /// Describe an attack by this character.
    pub fn attack(&self, attack: &Attack) -> String {
        format!("{} attacks with {}", self.name, attack)
    }

    /// Craft a weapon for this character, replacing any previous one.
    ///
    /// `damage` is decided by the caller (the engine rolls it).
    pub fn craft_weapon(&mut self, name: WeaponName, kind: WeaponKind, damage: Damage) -> &Weapon {
        let weapon = Weapon::new(name, kind, damage, self.id);
        self.weapon.insert(weapon)
    }

    /// Fire the character's weapon, if it has one.
    pub fn fire(&mut self) -> FireOutcome {
        match self.weapon.as_mut() {
            Some(weapon) => weapon.fire(),
            None => FireOutcome::NoWeapon,
        }
    }

    // =========================================================================
    // Money
    // =========================================================================

    /// Add a single coin. Coins only ever arrive one at a time.
    pub fn add_coin(&mut self) {
        self.coins = self.coins.saturating_add(1);
    }

    pub fn has_money(&self) -> bool {
        self.coins > 0
    }

    /// Give one coin to `other`.
    pub fn give_coin(&mut self, other: &mut Character) -> CoinTransfer {
        if !self.take_coin() {
            return CoinTransfer::NoCoins;
        }
        other.add_coin();
        CoinTransfer::Transferred
    }

    fn take_coin(&mut self) -> bool {
        if !self.has_money() {
            return false;
        }
        self.coins -= 1;
        true
    }

    #[cfg(test)]
    pub(crate) fn coins(&self) -> u32 {
        self.coins
    }

    // =========================================================================
    // Friends
    // =========================================================================

    /// Befriend `other`, recording the link on both sides.
    pub fn add_friend(&mut self, other: &mut Character) -> FriendshipOutcome {
        if self.id == other.id {
            return FriendshipOutcome::SelfFriendship;
        }
        if self.friends.contains(&other.id) {
            return FriendshipOutcome::AlreadyFriends;
        }
        self.friends.push(other.id);
        if !other.friends.contains(&self.id) {
            other.friends.push(self.id);
        }
        FriendshipOutcome::Befriended {
            a: self.id,
            b: other.id,
        }
    }

    pub fn is_friend_of(&self, other: CharacterId) -> bool {
        self.friends.contains(&other)
    }

    // =========================================================================
    // Pet
    // =========================================================================

    /// Adopt `pet`, recording the link on both sides.
    ///
    /// A character keeps a single pet; adopting a new one replaces the link on
    /// this side only. The previous pet still names this character as its
    /// owner until it is released with [`release_pet`](Self::release_pet) or
    /// adopted again, which restores the link.
    pub fn adopt_pet(&mut self, pet: &mut Pet) -> AdoptOutcome {
        match pet.owner() {
            Some(owner) if owner == self.id && self.pet == Some(pet.id()) => {
                return AdoptOutcome::AlreadyOwned
            }
            Some(owner) if owner != self.id => return AdoptOutcome::OwnedByAnother { owner },
            _ => {}
        }
        self.pet = Some(pet.id());
        pet.set_owner(self.id);
        AdoptOutcome::Adopted {
            owner: self.id,
            pet: pet.id(),
        }
    }

    /// Let go of `pet`, clearing both sides of the link.
    ///
    /// Works for a pet this character adopted earlier and then replaced.
    pub fn release_pet(&mut self, pet: &mut Pet) -> ReleaseOutcome {
        if pet.owner() != Some(self.id) {
            return ReleaseOutcome::NotOwner;
        }
        if self.pet == Some(pet.id()) {
            self.pet = None;
        }
        pet.clear_owner();
        ReleaseOutcome::Released {
            owner: self.id,
            pet: pet.id(),
        }
    }

    /// Feed the character's own pet if it has run out of energy.
    pub fn feed_pet(&self, pet: &mut Pet) -> FeedOutcome {
        if self.pet != Some(pet.id()) || pet.owner() != Some(self.id) {
            return FeedOutcome::NotOwner;
        }
        pet.feed()
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    pub fn pick_up(&mut self, item: Item) {
        self.inventory.push(item);
    }

    // =========================================================================
    // Missions
    // =========================================================================

    /// Carry out `mission`, paying its reward the first time only.
    pub fn perform_mission(&mut self, mission: &Mission, now: DateTime<Utc>) -> MissionOutcome {
        if self
            .completed_missions
            .iter()
            .any(|done| done.mission_id == mission.id)
        {
            return MissionOutcome::AlreadyCompleted {
                mission_id: mission.id,
            };
        }
        self.coins = self.coins.saturating_add(mission.reward);
        self.completed_missions.push(CompletedMission {
            mission_id: mission.id,
            title: mission.title.clone(),
            completed_at: now,
        });
        MissionOutcome::Completed {
            mission_id: mission.id,
            reward: mission.reward,
            completed_at: now,
        }
    }

    // =========================================================================
    // Map
    // =========================================================================

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Count a meeting with another element on the map.
    pub fn record_encounter(&mut self, other: ElementId) -> EncounterOutcome {
        match self.encounters.iter_mut().find(|e| e.other == other) {
            Some(encounter) => {
                encounter.times += 1;
                EncounterOutcome::MetAgain {
                    other,
                    times: encounter.times,
                }
            }
            None => {
                self.encounters.push(Encounter { other, times: 1 });
                EncounterOutcome::FirstMeeting { other }
            }
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Character {} of race {} ({})",
            self.name,
            self.race,
            self.team.as_deref().unwrap_or("no team")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{FULL_ENERGY, STARTING_AMMO};
    use crate::value_objects::{ItemName, PetName};
    use chrono::TimeZone;

    fn character(name: &str) -> Character {
        Character::new(CharacterName::new(name).unwrap(), Race::Elf)
    }

    mod money {
        use super::*;

        #[test]
        fn new_character_has_no_money() {
            assert!(!character("Ilya").has_money());
        }

        #[test]
        fn give_coin_moves_exactly_one() {
            let mut giver = character("Ilya").with_coins(2);
            let mut taker = character("Bram");

            assert_eq!(giver.give_coin(&mut taker), CoinTransfer::Transferred);
            assert_eq!(giver.coins(), 1);
            assert_eq!(taker.coins(), 1);
        }

        #[test]
        fn give_coin_without_money_changes_nothing() {
            let mut giver = character("Ilya");
            let mut taker = character("Bram");

            let outcome = giver.give_coin(&mut taker);
            assert_eq!(outcome, CoinTransfer::NoCoins);
            assert!(!outcome.succeeded());
            assert!(!taker.has_money());
        }

        #[test]
        fn add_coin_is_one_at_a_time() {
            let mut c = character("Ilya");
            c.add_coin();
            c.add_coin();
            assert_eq!(c.coins(), 2);
        }
    }

    mod friends {
        use super::*;

        #[test]
        fn friendship_is_bidirectional() {
            let mut a = character("Ilya");
            let mut b = character("Bram");

            let outcome = a.add_friend(&mut b);
            assert_eq!(
                outcome,
                FriendshipOutcome::Befriended {
                    a: a.id(),
                    b: b.id()
                }
            );
            assert!(a.is_friend_of(b.id()));
            assert!(b.is_friend_of(a.id()));
        }

        #[test]
        fn duplicate_friendship_rejected() {
            let mut a = character("Ilya");
            let mut b = character("Bram");
            a.add_friend(&mut b);

            assert_eq!(a.add_friend(&mut b), FriendshipOutcome::AlreadyFriends);
            assert_eq!(b.add_friend(&mut a), FriendshipOutcome::AlreadyFriends);
            assert_eq!(a.friends().len(), 1);
            assert_eq!(b.friends().len(), 1);
        }

        #[test]
        fn cannot_befriend_self() {
            let mut a = character("Ilya");
            let mut clone = a.clone();
            assert_eq!(a.add_friend(&mut clone), FriendshipOutcome::SelfFriendship);
            assert!(a.friends().is_empty());
        }
    }

    mod pets {
        use super::*;

        fn pet() -> Pet {
            Pet::new(PetName::new("Bolt").unwrap())
        }

        #[test]
        fn adoption_links_both_sides() {
            let mut owner = character("Ilya");
            let mut bolt = pet();

            let outcome = owner.adopt_pet(&mut bolt);
            assert_eq!(
                outcome,
                AdoptOutcome::Adopted {
                    owner: owner.id(),
                    pet: bolt.id()
                }
            );
            assert_eq!(owner.pet(), Some(bolt.id()));
            assert_eq!(bolt.owner(), Some(owner.id()));
            assert_eq!(owner.adopt_pet(&mut bolt), AdoptOutcome::AlreadyOwned);
        }

        #[test]
        fn cannot_adopt_someone_elses_pet() {
            let mut owner = character("Ilya");
            let mut thief = character("Bram");
            let mut bolt = pet();
            owner.adopt_pet(&mut bolt);

            assert_eq!(
                thief.adopt_pet(&mut bolt),
                AdoptOutcome::OwnedByAnother { owner: owner.id() }
            );
            assert!(thief.pet().is_none());
        }

        #[test]
        fn feed_only_own_exhausted_pet() {
            let mut owner = character("Ilya");
            let stranger = character("Bram");
            let mut bolt = pet().with_energy(0);

            assert_eq!(owner.feed_pet(&mut bolt), FeedOutcome::NotOwner);
            owner.adopt_pet(&mut bolt);
            assert_eq!(stranger.feed_pet(&mut bolt), FeedOutcome::NotOwner);
            assert_eq!(
                owner.feed_pet(&mut bolt),
                FeedOutcome::Fed {
                    energy: FULL_ENERGY
                }
            );
            assert_eq!(owner.feed_pet(&mut bolt), FeedOutcome::NotHungry);
        }

        #[test]
        fn readopting_a_replaced_pet_restores_the_link() {
            let mut owner = character("Ilya");
            let mut first = pet().with_energy(0);
            let mut second = Pet::new(PetName::new("Tuft").unwrap());

            owner.adopt_pet(&mut first);
            owner.adopt_pet(&mut second);
            assert_eq!(owner.pet(), Some(second.id()));
            assert_eq!(owner.feed_pet(&mut first), FeedOutcome::NotOwner);

            assert_eq!(
                owner.adopt_pet(&mut first),
                AdoptOutcome::Adopted {
                    owner: owner.id(),
                    pet: first.id()
                }
            );
            assert_eq!(owner.pet(), Some(first.id()));
            assert_eq!(first.owner(), Some(owner.id()));
            assert!(matches!(owner.feed_pet(&mut first), FeedOutcome::Fed { .. }));
        }

        #[test]
        fn released_pet_can_be_adopted_by_someone_else() {
            let mut owner = character("Ilya");
            let mut other = character("Bram");
            let mut first = pet();
            let mut second = Pet::new(PetName::new("Tuft").unwrap());

            owner.adopt_pet(&mut first);
            owner.adopt_pet(&mut second);
            assert_eq!(
                other.adopt_pet(&mut first),
                AdoptOutcome::OwnedByAnother { owner: owner.id() }
            );

            assert_eq!(
                owner.release_pet(&mut first),
                ReleaseOutcome::Released {
                    owner: owner.id(),
                    pet: first.id()
                }
            );
            assert_eq!(first.owner(), None);
            assert_eq!(owner.pet(), Some(second.id()));
            assert!(matches!(other.adopt_pet(&mut first), AdoptOutcome::Adopted { .. }));
        }

        #[test]
        fn release_clears_both_sides_and_rejects_strangers() {
            let mut owner = character("Ilya");
            let mut stranger = character("Bram");
            let mut bolt = pet();
            owner.adopt_pet(&mut bolt);

            assert_eq!(stranger.release_pet(&mut bolt), ReleaseOutcome::NotOwner);
            assert!(matches!(
                owner.release_pet(&mut bolt),
                ReleaseOutcome::Released { .. }
            ));
            assert_eq!(owner.pet(), None);
            assert_eq!(bolt.owner(), None);
            assert_eq!(owner.release_pet(&mut bolt), ReleaseOutcome::NotOwner);
        }
    }

    mod weapons {
        use super::*;

        #[test]
        fn fire_without_weapon() {
            assert_eq!(character("Ilya").fire(), FireOutcome::NoWeapon);
        }

        #[test]
        fn crafted_weapon_belongs_to_crafter() {
            let mut c = character("Ilya");
            let weapon = c.craft_weapon(
                WeaponName::new("Staff").unwrap(),
                WeaponKind::Magic,
                Damage::new(55).unwrap(),
            );
            assert_eq!(weapon.ammo(), Some(STARTING_AMMO));
            let owner = weapon.owner();
            assert_eq!(owner, c.id());

            assert_eq!(
                c.fire(),
                FireOutcome::Fired {
                    damage: 55,
                    ammo_left: Some(STARTING_AMMO - 1)
                }
            );
        }

        #[test]
        fn crafting_replaces_previous_weapon() {
            let mut c = character("Ilya");
            c.craft_weapon(
                WeaponName::new("Dagger").unwrap(),
                WeaponKind::Melee,
                Damage::new(5).unwrap(),
            );
            c.craft_weapon(
                WeaponName::new("Crossbow").unwrap(),
                WeaponKind::Ranged,
                Damage::new(40).unwrap(),
            );
            assert_eq!(c.weapon().map(|w| w.name().as_str()), Some("Crossbow"));
        }

        #[test]
        fn attack_description() {
            let c = character("Ilya");
            let attack = Attack::Spell {
                name: "Frost".to_string(),
            };
            assert_eq!(c.attack(&attack), "Ilya attacks with the spell Frost");
        }
    }

    mod missions {
        use super::*;

        #[test]
        fn reward_paid_once() {
            let mut c = character("Ilya");
            let mission = Mission::new("Clear the cellar").with_reward(3);
            let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

            let outcome = c.perform_mission(&mission, now);
            assert_eq!(
                outcome,
                MissionOutcome::Completed {
                    mission_id: mission.id,
                    reward: 3,
                    completed_at: now
                }
            );
            assert_eq!(c.coins(), 3);

            assert_eq!(
                c.perform_mission(&mission, now),
                MissionOutcome::AlreadyCompleted {
                    mission_id: mission.id
                }
            );
            assert_eq!(c.coins(), 3);
            assert_eq!(c.completed_missions().len(), 1);
            assert_eq!(c.completed_missions()[0].title, "Clear the cellar");
        }
    }

    #[test]
    fn inventory_keeps_item_identity() {
        let mut c = character("Ilya");
        let rope = Item::new(ItemName::new("Rope").unwrap());
        let rope_id = rope.id;
        c.pick_up(rope);
        assert_eq!(c.inventory().len(), 1);
        assert_eq!(c.inventory()[0].id, rope_id);
    }

    #[test]
    fn encounters_are_counted_per_element() {
        let mut c = character("Ilya");
        let other = ElementId::new();

        assert_eq!(
            c.record_encounter(other),
            EncounterOutcome::FirstMeeting { other }
        );
        assert_eq!(
            c.record_encounter(other),
            EncounterOutcome::MetAgain { other, times: 2 }
        );
        assert_eq!(c.encounters().len(), 1);
    }

    #[test]
    fn display_without_team() {
        assert_eq!(
            character("Ilya").to_string(),
            "Character Ilya of race Elf (no team)"
        );
    }
}
