//! Traits describing read-only external data.
//!
//! Oracles expose hero/monster templates, item definitions, and the
//! deterministic random source. The [`Env`] aggregate bundles them with the
//! game configuration so the engine can reach everything it needs without
//! hard coupling to concrete implementations (and so tests can substitute
//! any piece).
mod error;
mod heroes;
mod items;
mod monsters;
mod rng;

pub use error::OracleError;
pub use heroes::{HeroArchetype, HeroOracle, HeroTemplate};
pub use items::{
    ArmorData, ItemDefinition, ItemHandle, ItemKind, ItemOracle, PotionData, PotionEffect,
    SpellData, SpellElement, WeaponData,
};
pub use monsters::{MonsterCategory, MonsterOracle, MonsterTemplate};
pub use rng::{PcgRng, ROLL_SCALE, RngOracle, compute_seed, context};

use crate::config::GameConfig;

/// Aggregates the read-only oracles required by the action pipeline and
/// round controller. The configuration is always present; oracles are
/// optional so narrow tests can construct a partial environment.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, H, M, I, R>
where
    H: HeroOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    config: &'a GameConfig,
    heroes: Option<&'a H>,
    monsters: Option<&'a M>,
    items: Option<&'a I>,
    rng: Option<&'a R>,
}

/// Trait-object environment used throughout the engine.
pub type GameEnv<'a> = Env<
    'a,
    dyn HeroOracle + 'a,
    dyn MonsterOracle + 'a,
    dyn ItemOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, H, M, I, R> Env<'a, H, M, I, R>
where
    H: HeroOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        config: &'a GameConfig,
        heroes: Option<&'a H>,
        monsters: Option<&'a M>,
        items: Option<&'a I>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            config,
            heroes,
            monsters,
            items,
            rng,
        }
    }

    pub fn with_all(
        config: &'a GameConfig,
        heroes: &'a H,
        monsters: &'a M,
        items: &'a I,
        rng: &'a R,
    ) -> Self {
        Self::new(config, Some(heroes), Some(monsters), Some(items), Some(rng))
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Returns the hero template oracle, or an error if not available.
    pub fn heroes(&self) -> Result<&'a H, OracleError> {
        self.heroes.ok_or(OracleError::HeroesNotAvailable)
    }

    /// Returns the monster template oracle, or an error if not available.
    pub fn monsters(&self) -> Result<&'a M, OracleError> {
        self.monsters.ok_or(OracleError::MonstersNotAvailable)
    }

    /// Returns the item definition oracle, or an error if not available.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the random oracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, H, M, I, R> Env<'a, H, M, I, R>
where
    H: HeroOracle + 'a,
    M: MonsterOracle + 'a,
    I: ItemOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based [`GameEnv`].
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let heroes: Option<&'a dyn HeroOracle> = self.heroes.map(|heroes| heroes as _);
        let monsters: Option<&'a dyn MonsterOracle> = self.monsters.map(|monsters| monsters as _);
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(self.config, heroes, monsters, items, rng)
    }
}
