//! Data-driven combat content and loaders.
//!
//! This crate houses the static skill tables (RON data files embedded at
//! compile time) and the loaders that turn them into the read-only
//! [`battle_core::SkillCatalog`]. Content is consumed by the battle
//! orchestration layer and never appears in mutable combat state.

pub mod loaders;

pub use loaders::{LoadResult, SkillLoader};
