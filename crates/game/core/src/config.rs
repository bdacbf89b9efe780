/// Game configuration constants and tunable parameters.
///
/// Compile-time `MAX_*` constants bound the fixed-capacity collections in
/// [`crate::state`]; the runtime-tunable fields can be loaded from
/// `config.toml` by `valor-content`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Rounds between monster spawn waves.
    pub spawn_interval: u32,

    /// Divisor for end-of-round recovery: heroes regain `max / divisor`
    /// health and mana each round.
    pub recovery_divisor: u32,

    /// Terrain distribution for generated lane tiles, in percent.
    /// The remainder up to 100 is plain ground.
    pub bush_percent: u32,
    pub cave_percent: u32,
    pub koulou_percent: u32,
    pub obstacle_percent: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum heroes in a party (one per lane).
    pub const MAX_PARTY: usize = 3;
    /// Maximum simultaneously active monsters.
    pub const MAX_MONSTERS: usize = 12;
    /// Inventory slots per hero.
    pub const MAX_INVENTORY_SLOTS: usize = 16;

    /// Number of lanes on the board.
    pub const LANE_COUNT: usize = 3;
    /// Walkable columns per lane.
    pub const LANE_WIDTH: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SPAWN_INTERVAL: u32 = 8;
    pub const DEFAULT_RECOVERY_DIVISOR: u32 = 10;

    pub fn new() -> Self {
        Self {
            spawn_interval: Self::DEFAULT_SPAWN_INTERVAL,
            recovery_divisor: Self::DEFAULT_RECOVERY_DIVISOR,
            bush_percent: 20,
            cave_percent: 20,
            koulou_percent: 20,
            obstacle_percent: 5,
        }
    }

    /// Board side length. Lanes are `LANE_WIDTH` walkable columns separated
    /// by single inaccessible wall columns, and the board is square.
    pub const fn board_size(&self) -> i32 {
        (Self::LANE_COUNT * (Self::LANE_WIDTH + 1) - 1) as i32
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
