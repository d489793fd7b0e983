//! Combat resolution.
//!
//! Pure, deterministic functions plus the effect executor. Random rolls are
//! caller-supplied inputs; nothing here draws randomness or performs I/O.

pub mod damage;
pub mod executor;
pub mod hit;
pub mod result;

pub use damage::{apply_damage, apply_heal, mitigate_damage, mitigate_periodic};
pub use executor::apply_effect;
pub use hit::{calculate_hit_chance, check_hit};
pub use result::{EffectKind, EffectResult};
