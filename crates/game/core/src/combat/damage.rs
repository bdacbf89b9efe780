//! Integer damage formulas.
//!
//! All combat math is integer-only in fixed ratios so identical inputs
//! always produce identical state. Divisions floor.

use crate::env::ROLL_SCALE;

/// Divisor turning raw offensive stats into per-hit damage.
const STRIKE_DIVISOR: u32 = 20;

/// Floor on any connecting physical hit. A hit that connects always hurts.
const MINIMUM_DAMAGE: u32 = 1;

/// Physical strike: `(offense + weapon) / 20`, reduced by the defender's
/// flat reduction, never below 1.
pub fn physical(offense: u32, weapon_damage: u32, reduction: u32) -> u32 {
    let raw = (offense + weapon_damage) / STRIKE_DIVISOR;
    raw.saturating_sub(reduction).max(MINIMUM_DAMAGE)
}

/// Spell damage: base scaled by the caster's dexterity,
/// `base * (10000 + dexterity) / 10000`. Widened to u64 so large
/// attribute values cannot overflow the intermediate product.
pub fn spell(base: u32, dexterity: u32) -> u32 {
    (base as u64 * (ROLL_SCALE as u64 + dexterity as u64) / ROLL_SCALE as u64) as u32
}
