//! Monster template definitions and oracle interface.

/// Cosmetic grouping for monsters. Has no mechanical effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterCategory {
    Dragon,
    Exoskeleton,
    Spirit,
}

/// Raw monster sheet as loaded from the catalog.
///
/// `dodge` is a raw percentage (0-100) straight from the data files; the
/// factory in [`crate::state::MonsterState`] converts it to basis points
/// and scales `defense` into a flat damage reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub level: u32,
    pub damage: u32,
    pub defense: u32,
    pub dodge: u32,
    pub category: MonsterCategory,
}

/// Read-only access to the monster template catalog.
pub trait MonsterOracle: Send + Sync {
    fn all(&self) -> &[MonsterTemplate];

    /// Selects a template from an rng roll. Deterministic given the roll.
    fn pick(&self, roll: u32) -> Option<&MonsterTemplate> {
        let all = self.all();
        if all.is_empty() {
            return None;
        }
        all.get(roll as usize % all.len())
    }
}
