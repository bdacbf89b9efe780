use std::fmt;

/// Identifier of a hero, fixed at party assembly. Doubles as the display
/// id (`H1`..`H3`) and the party index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroId(pub u8);

impl HeroId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw encoding used when deriving rng seeds.
    pub const fn raw(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0 + 1)
    }
}

/// Identifier of a monster. Allocated monotonically, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId(pub u32);

impl MonsterId {
    /// Raw encoding used when deriving rng seeds. The high bit keeps
    /// monster seeds disjoint from hero seeds.
    pub const fn raw(self) -> u32 {
        self.0 | 0x8000_0000
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

/// Discrete grid position in tile coordinates. Row 0 is the monster nexus;
/// rows grow toward the hero nexus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn stepped(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Chebyshev distance: attack range is 1 (the eight surrounding tiles
    /// plus the tile itself).
    pub fn chebyshev(self, other: Self) -> u32 {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.col - other.col).unsigned_abs();
        dr.max(dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the three hero combat attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Strength,
    Dexterity,
    Agility,
}

/// The three attributes as one block, for base and effective values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeBlock {
    pub strength: u32,
    pub dexterity: u32,
    pub agility: u32,
}

impl AttributeBlock {
    pub const fn new(strength: u32, dexterity: u32, agility: u32) -> Self {
        Self {
            strength,
            dexterity,
            agility,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Agility => self.agility,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: u32) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Agility => self.agility = value,
        }
    }

    /// Applies `value * numerator / denominator` (floored) to one attribute.
    pub fn scale(&mut self, attribute: Attribute, numerator: u32, denominator: u32) {
        let scaled = self.get(attribute) as u64 * numerator as u64 / denominator as u64;
        self.set(attribute, scaled as u32);
    }
}

/// Integer resource meter (health, mana) clamped to `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    pub const fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: if current > maximum { maximum } else { current },
            maximum,
        }
    }

    pub const fn at_max(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Subtracts `amount`, saturating at zero.
    pub fn deplete(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Adds `amount`, clamping at the maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }

    /// Replaces the maximum and refills to it.
    pub fn reset_maximum(&mut self, maximum: u32) {
        self.maximum = maximum;
        self.current = maximum;
    }

    /// Sets current to exactly half of maximum (floored).
    pub fn set_to_half(&mut self) {
        self.current = self.maximum / 2;
    }
}
