//! realmgrid - Main entry point.
//!
//! Plays a short scripted scene on a fresh map and logs what happens.

use realmgrid_domain::{
    describe_races, Attack, Character, CharacterName, ElementId, Item, ItemName, Mission, Pet,
    PetName, Position, Race, WeaponKind, WeaponName,
};
use realmgrid_engine::{
    infrastructure::{config::EngineConfig, logging},
    map::{MoveOutcome, Placeable, SpatialRegistry},
    App,
};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    let config = EngineConfig::from_env()?;
    logging::init(&config.log_filter);

    tracing::info!(policy = %config.occupancy_policy, "Starting realmgrid");

    let app = App::new(config);
    for line in describe_races().lines() {
        tracing::info!("{line}");
    }

    // Characters and a pet
    let mut aldric = Character::new(CharacterName::new("Aldric")?, Race::Human)
        .with_team("Wardens")
        .with_position(Position::new(0, 0));
    let mut brenna = Character::new(CharacterName::new("Brenna")?, Race::Elf)
        .with_team("Wardens")
        .with_position(Position::new(5, 5));
    let grosh = Character::new(CharacterName::new("Grosh")?, Race::Orc)
        .with_position(Position::new(9, 9));
    let mut bolt = Pet::new(PetName::new("Bolt")?).with_position(Position::new(1, 0));

    tracing::info!(outcome = ?aldric.add_friend(&mut brenna), "Friendship");
    tracing::info!(outcome = ?aldric.adopt_pet(&mut bolt), "Adoption");

    // Collaborator features
    let ring = Mission::new("Recover the signet ring").with_reward(3);
    app.use_cases.perform_mission.execute(&mut aldric, &ring);
    tracing::info!(outcome = ?aldric.give_coin(&mut brenna), "Coin gift");

    app.use_cases
        .craft_weapon
        .execute(&mut brenna, WeaponName::new("Longbow")?, WeaponKind::Ranged)?;
    tracing::info!(outcome = ?brenna.fire(), "Brenna fires");
    tracing::info!("{}", brenna.attack(&Attack::from_parts(None, Some("Moonfire"), None)?));

    aldric.pick_up(Item::new(ItemName::new("Lantern")?).with_description("Dented but bright"));

    // The map
    let outsider: ElementId = grosh.id().into();
    let mut map: SpatialRegistry = app.new_map();
    let aldric = map.add_element(Box::new(aldric));
    map.add_element(Box::new(brenna));
    let bolt = map.add_element(Box::new(bolt));

    map.draw_all();

    report(map.move_element(bolt, Position::new(2, 0)));
    report(map.move_element(aldric, Position::new(5, 5)));
    report(map.move_element(outsider, Position::new(0, 0)));

    map.draw_all();
    let characters = map.iter().filter(|e| e.kind() == "Character").count();
    tracing::info!(characters, "Scene over");

    Ok(())
}

fn report(outcome: MoveOutcome) {
    match outcome {
        MoveOutcome::NotAMember { id } => tracing::info!(%id, "Move ignored"),
        MoveOutcome::Moved { id, from, to } => tracing::info!(%id, %from, %to, "Moved"),
        MoveOutcome::Interacted {
            id,
            to,
            occupant,
            ..
        } => tracing::info!(%id, %to, %occupant, "Moved into an occupied cell"),
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
