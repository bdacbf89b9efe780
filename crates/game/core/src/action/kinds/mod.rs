pub mod board;
pub mod combat;
pub mod inventory;
pub mod movement;
pub mod recall;

#[cfg(test)]
pub(crate) mod testkit;
