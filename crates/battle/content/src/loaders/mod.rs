//! Content loaders for reading combat data from files.
//!
//! Loaders convert RON data files into the read-only catalog structures in
//! `battle-core`. Load failures are configuration errors: fatal at startup,
//! never deferred into combat.

pub mod skills;

pub use skills::SkillLoader;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;
