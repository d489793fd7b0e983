//! Deterministic turn-based combat rules shared across clients.
//!
//! `battle-core` defines the canonical combat model: the skill/effect
//! catalog types, per-actor status ledgers, targeting resolution, and effect
//! execution. Resolution is single-threaded and turn-sequential; random
//! rolls and target selections are inputs, so a battle replays identically
//! from the same inputs. All combat state mutation flows through
//! [`session::BattleSession`].
pub mod catalog;
pub mod combat;
pub mod config;
pub mod session;
pub mod state;
pub mod targeting;

pub use catalog::{
    Area, CatalogError, EffectSpec, RowConstraint, Skill, SkillCatalog, SkillId, SkillOwner,
    TargetFaction,
};
pub use combat::{EffectKind, EffectResult, apply_effect};
pub use config::{BattleConfig, CombatTables, DamageParams, HitParams};
pub use session::{BattleSession, CastOutcome};
pub use state::{
    AbilityKind, Actor, ActorId, Faction, Roster, Row, StatusClass, StatusEntry, StatusKind,
    StatusLedger,
};
pub use targeting::{can_use, resolve_targets};
