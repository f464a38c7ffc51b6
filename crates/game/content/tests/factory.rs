use std::fs;
use std::path::PathBuf;

use combat_content::ContentFactory;
use combat_core::{CombatCommand, CombatController, CombatPhase};

fn repo_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn shipped_data_builds_a_playable_combat() {
    let factory = ContentFactory::new(repo_data_dir());

    let setup = factory.load_setup(None).unwrap();
    assert_eq!(setup.enemy.name, "Slime");
    assert_eq!(setup.player.deck.len(), 5);

    let mut controller = CombatController::seeded(setup).unwrap();
    let outcome = controller.dispatch(CombatCommand::StartCombat).unwrap();
    assert_eq!(outcome.phase, CombatPhase::PlayerTurn);
    assert_eq!(controller.session().unwrap().player().hand().len(), 5);
}

#[test]
fn every_shipped_enemy_is_valid() {
    let factory = ContentFactory::new(repo_data_dir());

    let enemies = factory.load_enemies().unwrap();

    assert!(enemies.iter().any(|(id, _)| id == "crab"));
    for (_, template) in &enemies {
        assert!(template.validate().is_ok());
    }
}

#[test]
fn setup_from_temp_dir_picks_requested_enemy() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "hand_size = 3\nseed = 5\n").unwrap();
    fs::write(
        dir.path().join("cards.ron"),
        r#"[("jab", (name: "Jab", cost: 0, description: "Deal 1 damage.", effect: Attack, magnitude: 1))]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("player.ron"),
        r#"(max_health: 20, max_energy: 2, deck: [("jab", 4)])"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("enemies.ron"),
        r#"[
            ("rat", (name: "Rat", parts: [(name: "Body", max_health: 3, is_core: true)])),
            ("bat", (name: "Bat", parts: [(name: "Body", max_health: 2, is_core: true)])),
        ]"#,
    )
    .unwrap();
    let factory = ContentFactory::new(dir.path());

    let setup = factory.load_setup(Some("bat")).unwrap();

    assert_eq!(setup.config.hand_size, 3);
    assert_eq!(setup.config.seed, Some(5));
    assert_eq!(setup.player.max_energy, 2);
    assert_eq!(setup.enemy.name, "Bat");
    assert!(factory.load_setup(Some("wolf")).is_err());
}
