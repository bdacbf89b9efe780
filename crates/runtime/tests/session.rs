//! End-to-end session tests: party assembly, turn order, round flow, and
//! replay determinism through the public runtime surface.

use std::sync::Arc;

use valor_core::action::PassAction;
use valor_core::{
    GameConfig, HeroAction, HeroArchetype, HeroId, HeroTemplate, MonsterCategory, MonsterEvent,
    MonsterTemplate, RoundPhase,
};
use valor_runtime::{HeroCatalog, ItemCatalog, MonsterCatalog, OracleManager, RuntimeError,
    SessionBuilder};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();
}

fn hero(name: &str, archetype: HeroArchetype) -> HeroTemplate {
    HeroTemplate {
        name: name.into(),
        archetype,
        mana: 500,
        strength: 700,
        dexterity: 500,
        agility: 600,
        gold: 1000,
    }
}

fn oracles() -> OracleManager {
    // All-plain terrain keeps monster advancement unobstructed.
    let config = GameConfig {
        bush_percent: 0,
        cave_percent: 0,
        koulou_percent: 0,
        obstacle_percent: 0,
        ..GameConfig::new()
    };
    let heroes = vec![
        hero("Gaerdal Ironhand", HeroArchetype::Warrior),
        hero("Rillifane Rallathil", HeroArchetype::Sorcerer),
    ];
    let monsters = vec![MonsterTemplate {
        name: "Andrealphus".into(),
        level: 1,
        damage: 100,
        defense: 200,
        dodge: 0,
        category: MonsterCategory::Exoskeleton,
    }];
    OracleManager::new(
        config,
        Arc::new(HeroCatalog::new(heroes)),
        Arc::new(MonsterCatalog::new(monsters)),
        Arc::new(ItemCatalog::new(Vec::new())),
    )
}

fn two_hero_session(seed: u64) -> valor_runtime::Session {
    init_tracing();
    SessionBuilder::new()
        .seed(seed)
        .hero("Gaerdal Ironhand")
        .hero("Rillifane Rallathil")
        .build(oracles())
        .unwrap()
}

#[test]
fn builder_checks_party_size_and_names() {
    let err = SessionBuilder::new().build(oracles()).unwrap_err();
    assert!(matches!(err, RuntimeError::InvalidPartySize { got: 0, .. }));

    let err = SessionBuilder::new()
        .hero("Nobody In Particular")
        .build(oracles())
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownHero(_)));
}

#[test]
fn opening_wave_covers_every_lane() {
    let session = two_hero_session(7);
    let state = session.state();

    assert_eq!(state.monsters.len(), GameConfig::LANE_COUNT);
    for (lane, monster) in state.monsters.iter().enumerate() {
        assert_eq!(monster.position.row, state.board.monster_nexus_row());
        assert_eq!(monster.position.col, valor_core::BoardState::lane_anchor(lane));
    }
    assert_eq!(session.current_hero(), Some(HeroId(0)));
}

#[test]
fn actions_run_in_party_order() {
    let mut session = two_hero_session(11);

    let err = session
        .submit(HeroAction::Pass(PassAction::new(HeroId(1))))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Execute(_)));

    session
        .submit(HeroAction::Pass(PassAction::new(HeroId(0))))
        .unwrap();
    assert_eq!(session.current_hero(), Some(HeroId(1)));
    session
        .submit(HeroAction::Pass(PassAction::new(HeroId(1))))
        .unwrap();

    // Both heroes have acted; the round now belongs to the monsters.
    assert_eq!(session.state().turn.phase, RoundPhase::Monsters);
    assert_eq!(session.current_hero(), None);
}

#[test]
fn finishing_a_round_moves_every_monster() {
    let mut session = two_hero_session(13);
    session
        .submit(HeroAction::Pass(PassAction::new(HeroId(0))))
        .unwrap();
    session
        .submit(HeroAction::Pass(PassAction::new(HeroId(1))))
        .unwrap();

    let report = session.finish_round().unwrap();
    assert_eq!(report.round, 1);
    assert_eq!(report.events.len(), GameConfig::LANE_COUNT);
    for event in &report.events {
        assert!(matches!(event, MonsterEvent::Advanced { to, .. } if to.row == 1));
    }
    assert!(report.victory.is_none());

    assert_eq!(session.state().turn.round, 2);
    assert_eq!(session.state().turn.phase, RoundPhase::Heroes);
    assert_eq!(session.current_hero(), Some(HeroId(0)));
}

#[test]
fn boots_from_a_content_directory() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "spawn_interval = 4\n").unwrap();
    std::fs::write(
        dir.path().join("heroes.ron"),
        r#"(heroes: [
            (name: "Parzival", archetype: Paladin, mana: 300,
             strength: 750, dexterity: 700, agility: 650, gold: 2500),
        ])"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("monsters.ron"),
        r#"(monsters: [
            (name: "Casper", level: 1, damage: 100, defense: 200,
             dodge: 30, category: Spirit),
        ])"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("items.ron"), "(items: [])").unwrap();

    let factory = valor_content::ContentFactory::new(dir.path());
    let oracles = OracleManager::from_content(&factory).unwrap();
    assert_eq!(oracles.config().spawn_interval, 4);

    let mut session = SessionBuilder::new()
        .seed(1)
        .hero("Parzival")
        .build(oracles)
        .unwrap();
    session
        .submit(HeroAction::Pass(PassAction::new(HeroId(0))))
        .unwrap();
    session.finish_round().unwrap();
    assert_eq!(session.state().turn.round, 2);
}

#[test]
fn identical_seeds_replay_identically() {
    let play = |seed| {
        let mut session = two_hero_session(seed);
        for _ in 0..3 {
            session
                .submit(HeroAction::Pass(PassAction::new(HeroId(0))))
                .unwrap();
            session
                .submit(HeroAction::Pass(PassAction::new(HeroId(1))))
                .unwrap();
            session.finish_round().unwrap();
        }
        session
    };

    let first = play(99);
    let second = play(99);
    assert_eq!(first.state(), second.state());

    let other = play(100);
    assert_ne!(first.state().game_seed, other.state().game_seed);
}
