//! Map scenarios with real characters and pets.

use realmgrid_domain::{Character, ElementId, EncounterOutcome, Position, Race};

use super::e2e_helpers::*;
use crate::map::{MoveOutcome, OccupancyPolicy, Placeable, SpatialRegistry};

#[test]
fn moving_onto_another_character_interacts_once() {
    let mut map: SpatialRegistry<Character> = SpatialRegistry::new();
    let a = map.add_element(character_at("Aldric", Race::Human, 0, 0));
    let b = map.add_element(character_at("Brenna", Race::Elf, 5, 5));

    let outcome = map.move_element(a, Position::new(5, 5));

    assert_eq!(
        outcome,
        MoveOutcome::Interacted {
            id: a,
            from: Position::new(0, 0),
            to: Position::new(5, 5),
            occupant: b
        }
    );
    let aldric = map.get(a).unwrap();
    assert_eq!(aldric.position(), Position::new(5, 5));
    assert_eq!(aldric.encounters().len(), 1);
    assert_eq!(aldric.encounters()[0].other, b);
    assert_eq!(aldric.encounters()[0].times, 1);

    // The occupant is left alone.
    let brenna = map.get(b).unwrap();
    assert_eq!(brenna.position(), Position::new(5, 5));
    assert!(brenna.encounters().is_empty());
}

#[test]
fn moving_a_character_that_was_never_added_changes_nothing() {
    let mut map: SpatialRegistry<Character> = SpatialRegistry::new();
    map.add_element(character_at("Aldric", Race::Human, 1, 1));
    let outsider = character_at("Cato", Race::Orc, 9, 9);
    let outsider_id: ElementId = outsider.id().into();

    let outcome = map.move_element(outsider_id, Position::new(1, 1));

    assert_eq!(outcome, MoveOutcome::NotAMember { id: outsider_id });
    assert_eq!(outsider.position(), Position::new(9, 9));
    assert!(outsider.encounters().is_empty());
    assert_eq!(map.len(), 1);
    assert!(map.iter().all(|c| c.encounters().is_empty()));
}

#[test]
fn move_always_lands_on_destination() {
    let mut map: SpatialRegistry<Character> = SpatialRegistry::new();
    let a = map.add_element(character_at("Aldric", Race::Human, 0, 0));
    map.add_element(character_at("Brenna", Race::Elf, 2, 2));

    for dest in [Position::new(2, 2), Position::new(-7, 3), Position::new(2, 2)] {
        assert!(map.move_element(a, dest).is_member());
        assert_eq!(map.get(a).map(|c| c.position()), Some(dest));
    }
    // Met Brenna twice, on the first and third move.
    let aldric = map.get(a).unwrap();
    assert_eq!(aldric.encounters()[0].times, 2);
}

#[test]
fn shared_cell_resolves_to_first_added() {
    let mut map: SpatialRegistry<Character> = SpatialRegistry::new();
    let first = map.add_element(character_at("Aldric", Race::Human, 2, 2));
    map.add_element(character_at("Brenna", Race::Elf, 2, 2));

    let found = map.find_occupant(Position::new(2, 2)).map(|c| Placeable::id(c));
    assert_eq!(found, Some(first));
}

#[test]
fn mixed_map_of_characters_and_pets() {
    let mut map: SpatialRegistry = SpatialRegistry::new();
    let bolt = map.add_element(Box::new(pet_at("Bolt", 0, 0)));
    let brenna = map.add_element(Box::new(character_at("Brenna", Race::Elf, 3, 0)));

    let outcome = map.move_element(bolt, Position::new(3, 0));
    assert_eq!(outcome.occupant(), Some(brenna));
    assert_eq!(map.get(bolt).map(|p| p.kind()), Some("Pet"));
    assert_eq!(map.get(brenna).map(|c| c.kind()), Some("Character"));

    map.draw_all();
}

#[test]
fn include_mover_policy_lets_a_character_meet_itself() {
    let mut map: SpatialRegistry<Character> =
        SpatialRegistry::with_policy(OccupancyPolicy::IncludeMover);
    let a = map.add_element(character_at("Aldric", Race::Human, 4, 4));

    assert_eq!(map.move_element(a, Position::new(4, 4)).occupant(), Some(a));
    let aldric = map.get_mut(a).unwrap();
    assert_eq!(
        aldric.record_encounter(a),
        EncounterOutcome::MetAgain { other: a, times: 2 }
    );
}

#[test]
fn exclude_mover_policy_ignores_a_redundant_move() {
    let mut map: SpatialRegistry<Character> = SpatialRegistry::new();
    let a = map.add_element(character_at("Aldric", Race::Human, 4, 4));

    assert!(matches!(
        map.move_element(a, Position::new(4, 4)),
        MoveOutcome::Moved { .. }
    ));
    assert!(map.get(a).unwrap().encounters().is_empty());
}
