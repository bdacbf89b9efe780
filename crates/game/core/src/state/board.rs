//! The lane-grid board: tiles, occupancy, and movement legality.
//!
//! The board is a square matrix partitioned into three lanes of two
//! walkable columns, separated by permanently inaccessible wall columns.
//! Row 0 is the monster nexus, the last row the hero nexus. All occupancy
//! changes go through [`BoardState`] methods; nothing else touches tiles.

use crate::config::GameConfig;
use crate::env::{RngOracle, compute_seed, context};
use crate::state::{Attribute, HeroId, MonsterId, Position};

/// Terrain classes for board tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Plain,
    Bush,
    Cave,
    Koulou,
    Nexus,
    /// Blocks movement until cleared; clearing turns the tile to Plain.
    Obstacle,
    Inaccessible,
    Market,
    Common,
}

impl TerrainKind {
    /// Whether actors can stand on this terrain. Obstacles block movement
    /// but are clearable, unlike walls.
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Inaccessible | Self::Obstacle)
    }

    /// The attribute this terrain buffs, if any.
    pub const fn buffed_attribute(self) -> Option<Attribute> {
        match self {
            Self::Bush => Some(Attribute::Dexterity),
            Self::Cave => Some(Attribute::Agility),
            Self::Koulou => Some(Attribute::Strength),
            _ => None,
        }
    }
}

/// One board cell: terrain plus at most one hero and one monster.
///
/// A hero and a monster may share a tile (that is how melee engagements
/// happen); two heroes or two monsters may not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    terrain: TerrainKind,
    hero: Option<HeroId>,
    monster: Option<MonsterId>,
}

impl Tile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self {
            terrain,
            hero: None,
            monster: None,
        }
    }

    pub const fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    pub const fn hero(&self) -> Option<HeroId> {
        self.hero
    }

    pub const fn monster(&self) -> Option<MonsterId> {
        self.monster
    }

    pub const fn is_accessible(&self) -> bool {
        self.terrain.is_passable()
    }
}

/// Why a hero move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveBlock {
    OutOfBounds,
    Inaccessible,
    HeroOccupied,
    /// An unengaged monster holds the hero's current row within the lane.
    LaneBlocked(MonsterId),
}

/// What a monster's advance attempt resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonsterAdvance {
    /// Step one row toward the hero nexus.
    Move(Position),
    /// Spend the turn clearing an obstacle on the next row.
    ClearObstacle(Position),
    /// Held in place by a hero in the lane or a monster ahead.
    Blocked,
}

/// Owned tile matrix plus lane geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    size: i32,
    tiles: Vec<Tile>,
}

impl BoardState {
    /// Generates a board from the configured terrain distribution.
    /// Deterministic for a given `game_seed`.
    pub fn generate<R>(config: &GameConfig, rng: &R, game_seed: u64) -> Self
    where
        R: RngOracle + ?Sized,
    {
        let size = config.board_size();
        let mut tiles = Vec::with_capacity((size * size) as usize);

        for row in 0..size {
            for col in 0..size {
                tiles.push(Tile::new(Self::terrain_for(
                    config, rng, game_seed, size, row, col,
                )));
            }
        }

        Self { size, tiles }
    }

    fn terrain_for<R>(
        config: &GameConfig,
        rng: &R,
        game_seed: u64,
        size: i32,
        row: i32,
        col: i32,
    ) -> TerrainKind
    where
        R: RngOracle + ?Sized,
    {
        if Self::is_wall_column(col) {
            return TerrainKind::Inaccessible;
        }
        if row == 0 || row == size - 1 {
            return TerrainKind::Nexus;
        }

        let index = (row * size + col) as u32;
        let roll = rng.roll_percent(compute_seed(game_seed, 0, index, context::TERRAIN));

        let bush = config.bush_percent;
        let cave = bush + config.cave_percent;
        let koulou = cave + config.koulou_percent;
        let obstacle = koulou + config.obstacle_percent;

        if roll < bush {
            TerrainKind::Bush
        } else if roll < cave {
            TerrainKind::Cave
        } else if roll < koulou {
            TerrainKind::Koulou
        } else if roll < obstacle {
            TerrainKind::Obstacle
        } else {
            TerrainKind::Plain
        }
    }

    pub const fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < self.size
            && position.col < self.size
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        if !self.contains(position) {
            return None;
        }
        self.tiles.get((position.row * self.size + position.col) as usize)
    }

    fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        if !self.contains(position) {
            return None;
        }
        self.tiles
            .get_mut((position.row * self.size + position.col) as usize)
    }

    // ===== lane geometry =====

    pub const fn is_wall_column(col: i32) -> bool {
        col % (GameConfig::LANE_WIDTH as i32 + 1) == GameConfig::LANE_WIDTH as i32
    }

    /// Lane index for a column, `None` for wall columns.
    pub fn lane_of(col: i32) -> Option<usize> {
        if Self::is_wall_column(col) {
            return None;
        }
        Some(col as usize / (GameConfig::LANE_WIDTH + 1))
    }

    /// The walkable columns of a lane.
    pub fn lane_columns(lane: usize) -> [i32; GameConfig::LANE_WIDTH] {
        let anchor = Self::lane_anchor(lane);
        [anchor, anchor + 1]
    }

    /// Leftmost walkable column of a lane; spawn tiles sit on anchors.
    pub const fn lane_anchor(lane: usize) -> i32 {
        (lane * (GameConfig::LANE_WIDTH + 1)) as i32
    }

    pub const fn monster_nexus_row(&self) -> i32 {
        0
    }

    pub const fn hero_nexus_row(&self) -> i32 {
        self.size - 1
    }

    // ===== occupant queries =====

    pub fn hero_at(&self, position: Position) -> Option<HeroId> {
        self.tile(position).and_then(Tile::hero)
    }

    pub fn monster_at(&self, position: Position) -> Option<MonsterId> {
        self.tile(position).and_then(Tile::monster)
    }

    /// First monster standing on `row` within `lane`, if any.
    pub fn lane_monster_on_row(&self, row: i32, lane: usize) -> Option<MonsterId> {
        Self::lane_columns(lane)
            .into_iter()
            .find_map(|col| self.monster_at(Position::new(row, col)))
    }

    /// First hero standing on `row` within `lane`, if any.
    pub fn lane_hero_on_row(&self, row: i32, lane: usize) -> Option<HeroId> {
        Self::lane_columns(lane)
            .into_iter()
            .find_map(|col| self.hero_at(Position::new(row, col)))
    }

    // ===== movement legality =====

    /// Validates a hero step from `from` to `to` without mutating anything.
    ///
    /// Moves toward the monster nexus (decreasing row) are rejected while
    /// any monster holds the hero's current row within the lane: the hero
    /// would be sidestepping past an unengaged enemy.
    pub fn validate_hero_move(&self, from: Position, to: Position) -> Result<(), MoveBlock> {
        if !self.contains(to) {
            return Err(MoveBlock::OutOfBounds);
        }
        let tile = self.tile(to).ok_or(MoveBlock::OutOfBounds)?;
        if !tile.is_accessible() {
            return Err(MoveBlock::Inaccessible);
        }
        if tile.hero().is_some() {
            return Err(MoveBlock::HeroOccupied);
        }

        if to.row < from.row {
            if let Some(lane) = Self::lane_of(from.col) {
                if let Some(monster) = self.lane_monster_on_row(from.row, lane) {
                    return Err(MoveBlock::LaneBlocked(monster));
                }
            }
        }

        Ok(())
    }

    /// Resolves what a monster at `from` does when trying to advance one
    /// row toward the hero nexus. Symmetric to the hero lane-block rule: a
    /// hero on the monster's current row within the lane pins it in place.
    pub fn validate_monster_advance(&self, from: Position) -> MonsterAdvance {
        let destination = from.stepped(1, 0);
        let Some(tile) = self.tile(destination) else {
            return MonsterAdvance::Blocked;
        };

        if tile.terrain() == TerrainKind::Obstacle {
            return MonsterAdvance::ClearObstacle(destination);
        }
        if !tile.is_accessible() || tile.monster().is_some() {
            return MonsterAdvance::Blocked;
        }

        if let Some(lane) = Self::lane_of(from.col) {
            if self.lane_hero_on_row(from.row, lane).is_some() {
                return MonsterAdvance::Blocked;
            }
        }

        MonsterAdvance::Move(destination)
    }

    // ===== occupancy mutation =====

    /// Places a hero. Returns false if the tile is missing, inaccessible,
    /// or already holds a hero; the board is unchanged in that case.
    pub fn place_hero(&mut self, id: HeroId, position: Position) -> bool {
        match self.tile_mut(position) {
            Some(tile) if tile.is_accessible() && tile.hero.is_none() => {
                tile.hero = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Removes the hero at `position` if it matches `id`.
    pub fn take_hero(&mut self, id: HeroId, position: Position) -> bool {
        match self.tile_mut(position) {
            Some(tile) if tile.hero == Some(id) => {
                tile.hero = None;
                true
            }
            _ => false,
        }
    }

    /// Places a monster. Returns false if the tile is missing, inaccessible,
    /// or already holds a monster.
    pub fn place_monster(&mut self, id: MonsterId, position: Position) -> bool {
        match self.tile_mut(position) {
            Some(tile) if tile.is_accessible() && tile.monster.is_none() => {
                tile.monster = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Removes the monster at `position` if it matches `id`.
    pub fn take_monster(&mut self, id: MonsterId, position: Position) -> bool {
        match self.tile_mut(position) {
            Some(tile) if tile.monster == Some(id) => {
                tile.monster = None;
                true
            }
            _ => false,
        }
    }

    /// Turns an obstacle tile into plain ground. Returns false if the tile
    /// is not an obstacle.
    pub fn clear_obstacle(&mut self, position: Position) -> bool {
        match self.tile_mut(position) {
            Some(tile) if tile.terrain == TerrainKind::Obstacle => {
                tile.terrain = TerrainKind::Plain;
                true
            }
            _ => false,
        }
    }

    /// Overrides a tile's terrain so tests can hand-craft layouts.
    #[cfg(test)]
    pub(crate) fn set_terrain_for_tests(&mut self, position: Position, terrain: TerrainKind) {
        self.tile_mut(position)
            .expect("test positions must be on the board")
            .terrain = terrain;
    }

    // ===== victory detection =====

    /// A hero standing on the monster nexus row's nexus tile, if any.
    pub fn hero_on_monster_nexus(&self) -> Option<HeroId> {
        self.nexus_occupant_hero(self.monster_nexus_row())
    }

    /// A monster standing on the hero nexus row's nexus tile, if any.
    pub fn monster_on_hero_nexus(&self) -> Option<MonsterId> {
        let row = self.hero_nexus_row();
        (0..self.size).find_map(|col| {
            let position = Position::new(row, col);
            let tile = self.tile(position)?;
            if tile.terrain() == TerrainKind::Nexus {
                tile.monster()
            } else {
                None
            }
        })
    }

    fn nexus_occupant_hero(&self, row: i32) -> Option<HeroId> {
        (0..self.size).find_map(|col| {
            let position = Position::new(row, col);
            let tile = self.tile(position)?;
            if tile.terrain() == TerrainKind::Nexus {
                tile.hero()
            } else {
                None
            }
        })
    }
}
