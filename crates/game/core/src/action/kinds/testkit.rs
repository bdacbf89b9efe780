//! Shared fixtures for action tests.

use crate::config::GameConfig;
use crate::env::{
    ArmorData, Env, GameEnv, HeroArchetype, HeroTemplate, ItemDefinition, ItemHandle, ItemKind,
    ItemOracle, MonsterCategory, MonsterTemplate, PcgRng, PotionData, PotionEffect, SpellData,
    SpellElement, WeaponData,
};
use crate::state::{BoardState, GameState, MonsterId, Position};

/// Fixed item catalog covering every item kind.
pub struct TestCatalog {
    items: Vec<ItemDefinition>,
}

impl TestCatalog {
    pub const SWORD: ItemHandle = ItemHandle(1);
    pub const GREATSWORD: ItemHandle = ItemHandle(2);
    pub const PLATE: ItemHandle = ItemHandle(3);
    pub const FIRE_SCROLL: ItemHandle = ItemHandle(10);
    pub const HEALTH_POTION: ItemHandle = ItemHandle(20);
    pub const STRENGTH_POTION: ItemHandle = ItemHandle(21);

    pub fn standard() -> Self {
        let items = vec![
            ItemDefinition {
                handle: Self::SWORD,
                name: "Sword".into(),
                price: 500,
                required_level: 1,
                kind: ItemKind::Weapon(WeaponData {
                    damage: 300,
                    hands: 1,
                }),
            },
            ItemDefinition {
                handle: Self::GREATSWORD,
                name: "Greatsword".into(),
                price: 1000,
                required_level: 5,
                kind: ItemKind::Weapon(WeaponData {
                    damage: 800,
                    hands: 2,
                }),
            },
            ItemDefinition {
                handle: Self::PLATE,
                name: "Platinum Shield".into(),
                price: 150,
                required_level: 1,
                kind: ItemKind::Armor(ArmorData { reduction: 45 }),
            },
            ItemDefinition {
                handle: Self::FIRE_SCROLL,
                name: "Flame Tornado".into(),
                price: 700,
                required_level: 1,
                kind: ItemKind::Spell(SpellData {
                    damage: 500,
                    mana_cost: 100,
                    element: SpellElement::Fire,
                }),
            },
            ItemDefinition {
                handle: Self::HEALTH_POTION,
                name: "Healing Potion".into(),
                price: 250,
                required_level: 1,
                kind: ItemKind::Potion(PotionData {
                    effect: PotionEffect::Health,
                    amount: 100,
                }),
            },
            ItemDefinition {
                handle: Self::STRENGTH_POTION,
                name: "Strength Potion".into(),
                price: 200,
                required_level: 1,
                kind: ItemKind::Potion(PotionData {
                    effect: PotionEffect::Strength,
                    amount: 75,
                }),
            },
        ];
        Self { items }
    }
}

impl ItemOracle for TestCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.handle == handle)
    }

    fn all(&self) -> &[ItemDefinition] {
        &self.items
    }
}

/// All-plain board with two heroes, one in lane 0 and one in lane 1.
pub fn state_with_party() -> GameState {
    let config = GameConfig {
        bush_percent: 0,
        cave_percent: 0,
        koulou_percent: 0,
        obstacle_percent: 0,
        ..GameConfig::default()
    };
    let board = BoardState::generate(&config, &PcgRng, 0);
    let mut state = GameState::new(0, board);

    let warrior = HeroTemplate {
        name: "Gaerdal".into(),
        archetype: HeroArchetype::Warrior,
        mana: 500,
        strength: 700,
        dexterity: 500,
        agility: 600,
        gold: 1000,
    };
    let sorcerer = HeroTemplate {
        name: "Rillifane".into(),
        archetype: HeroArchetype::Sorcerer,
        mana: 1300,
        strength: 750,
        dexterity: 450,
        agility: 500,
        gold: 2500,
    };
    state.add_hero(&warrior, 0).unwrap();
    state.add_hero(&sorcerer, 1).unwrap();
    state
}

/// Spawns a level-1 monster (defense 10, attack 5 after scaling).
pub fn spawn_monster_at(state: &mut GameState, position: Position) -> MonsterId {
    let template = MonsterTemplate {
        name: "Andrealphus".into(),
        level: 1,
        damage: 100,
        defense: 200,
        dodge: 30,
        category: MonsterCategory::Exoskeleton,
    };
    state.spawn_monster(&template, 1, position).unwrap()
}

pub fn env<'a>(config: &'a GameConfig, items: &'a TestCatalog) -> GameEnv<'a> {
    Env::new(config, None, None, Some(items), Some(&PcgRng))
}
