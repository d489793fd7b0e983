//! Mutable battle state: actors, the roster, and per-actor status ledgers.

pub mod actor;
pub mod roster;
pub mod status;

pub use actor::{Actor, ActorId, Faction, Row};
pub use roster::Roster;
pub use status::{AbilityKind, StatusClass, StatusEntry, StatusKind, StatusLedger};
