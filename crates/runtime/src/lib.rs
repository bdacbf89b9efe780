//! Hosting layer for the valor rules engine.
//!
//! `valor-runtime` wires loaded content into the oracle traits expected by
//! `valor-core` and drives a game through [`Session`]. The core stays pure
//! and replayable; this crate owns I/O concerns such as content loading and
//! tracing.
pub mod error;
pub mod oracle;
pub mod session;

pub use error::{Result, RuntimeError};
pub use oracle::{HeroCatalog, ItemCatalog, MonsterCatalog, OracleManager};
pub use session::{Session, SessionBuilder};
