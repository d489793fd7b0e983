//! Presentation-facing records of what an effect did.

use crate::state::{ActorId, StatusKind};

/// What kind of consequence a result records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Damage,
    Heal,
    /// A status was applied or refreshed.
    Status(StatusKind),
    /// Periodic damage dealt by an active DOT at end of turn.
    DotTick(StatusKind),
    /// Conditional bonus damage against a marked target.
    SignDamage,
    /// A debuff was cleansed.
    Cleanse(StatusKind),
    /// The cast missed this target.
    Miss,
}

/// Result of applying one effect to one target.
///
/// Consumed by presentation layers (floating text, animation triggers);
/// never read back by the resolver itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectResult {
    pub target: ActorId,
    pub kind: EffectKind,
    /// Health delta actually applied after mitigation and clamping
    /// (damage and heals both reported as positive magnitudes; the kind
    /// distinguishes direction).
    pub delta: u32,
    /// Whether a status entry was inserted or refreshed.
    pub status_applied: bool,
}

impl EffectResult {
    pub(crate) fn numeric(target: ActorId, kind: EffectKind, delta: u32) -> Self {
        Self {
            target,
            kind,
            delta,
            status_applied: false,
        }
    }

    pub(crate) fn status(target: ActorId, kind: EffectKind, applied: bool) -> Self {
        Self {
            target,
            kind,
            delta: 0,
            status_applied: applied,
        }
    }
}
