//! Status effect ledger for actors.
//!
//! Every buff and debuff on an actor lives in the [`StatusLedger`]: two
//! ordered, bounded collections (one per [`StatusClass`]) mapping a
//! [`StatusKind`] to its remaining duration in turns, plus an optional
//! magnitude for kinds that carry one (damage-over-time amounts, ability
//! stat deltas).
//!
//! # Turn-based Duration
//!
//! Durations are remaining-turn counters. [`StatusLedger::tick`] is the only
//! operation that decrements them; it runs once per actor at that actor's
//! end of turn. Effect application never decrements.
//!
//! # Stacking
//!
//! Re-applying an active kind refreshes to the longest duration: the new
//! duration replaces the old only when strictly greater, so a weak
//! re-application can never shorten a strong effect already in place.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// Stat dimensions that ability buffs/debuffs can modify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityKind {
    Defense,
    Resistance,
    Speed,
    Hit,
    /// Outgoing damage scaling (percent delta; 0 = unchanged).
    DamageScale,
    /// Outgoing heal scaling (percent delta; 0 = unchanged).
    HealScale,
}

/// Types of status effects.
///
/// The enumeration is closed: every kind has a fixed [`StatusClass`] and the
/// classification match below is exhaustive, so an unclassified kind cannot
/// exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    // ========================================================================
    // Damage over time (always debuffs; magnitude = per-turn damage)
    // ========================================================================
    /// HP loss each turn.
    Poison,
    /// HP loss each turn.
    Bleed,
    /// HP loss each turn.
    Burn,

    // ========================================================================
    // Crowd control (always debuffs)
    // ========================================================================
    /// Holder skips their turns.
    Faint,
    /// Single-target enemy skills redirect to the holder.
    Taunt,

    // ========================================================================
    // Mark (always a debuff)
    // ========================================================================
    /// Marks the holder for conditional bonus damage.
    Sign,

    // ========================================================================
    // Ability modifiers (magnitude = stat delta)
    // ========================================================================
    /// Beneficial stat delta (magnitude stored positive).
    AbilityUp(AbilityKind),
    /// Harmful stat delta (magnitude stored negative).
    AbilityDown(AbilityKind),
}

/// Which of the two per-actor maps a kind lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    Buff,
    Debuff,
}

impl StatusKind {
    /// Fixed classification of this kind.
    ///
    /// Classification alone decides which map an application touches; the
    /// caller never picks a map.
    pub fn class(self) -> StatusClass {
        match self {
            StatusKind::AbilityUp(_) => StatusClass::Buff,
            StatusKind::Poison
            | StatusKind::Bleed
            | StatusKind::Burn
            | StatusKind::Faint
            | StatusKind::Taunt
            | StatusKind::Sign
            | StatusKind::AbilityDown(_) => StatusClass::Debuff,
        }
    }

    /// True for the damage-over-time kinds swept at end of turn.
    pub fn is_damage_over_time(self) -> bool {
        matches!(self, StatusKind::Poison | StatusKind::Bleed | StatusKind::Burn)
    }
}

/// A single active status entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEntry {
    pub kind: StatusKind,
    /// Remaining duration in turns. Invariant: always >= 1 while the entry
    /// exists; reaching 0 removes it.
    pub turns: u32,
    /// Per-turn damage for DOT kinds, stat delta for ability kinds,
    /// 0 for everything else.
    pub magnitude: i32,
}

/// Active buffs and debuffs on one actor.
///
/// Owned exclusively by the actor; external code goes through the operations
/// here and never touches the maps directly, which preserves the
/// refresh-to-longest and classification invariants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusLedger {
    buffs: ArrayVec<StatusEntry, { BattleConfig::MAX_STATUS_EFFECTS }>,
    debuffs: ArrayVec<StatusEntry, { BattleConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusLedger {
    /// Creates an empty ledger.
    pub fn empty() -> Self {
        Self::default()
    }

    fn map(&self, class: StatusClass) -> &ArrayVec<StatusEntry, { BattleConfig::MAX_STATUS_EFFECTS }> {
        match class {
            StatusClass::Buff => &self.buffs,
            StatusClass::Debuff => &self.debuffs,
        }
    }

    fn map_mut(
        &mut self,
        class: StatusClass,
    ) -> &mut ArrayVec<StatusEntry, { BattleConfig::MAX_STATUS_EFFECTS }> {
        match class {
            StatusClass::Buff => &mut self.buffs,
            StatusClass::Debuff => &mut self.debuffs,
        }
    }

    /// Applies a status effect.
    ///
    /// A non-positive duration is clamped to 1, never dropped; an effect
    /// author omitting the duration still produces a one-turn application.
    /// If the kind is already active, the longer duration wins and the
    /// magnitude follows the winning application. A full map drops the
    /// application silently.
    ///
    /// Returns true if an entry was inserted or refreshed.
    pub fn apply(&mut self, kind: StatusKind, turns: i32, magnitude: i32) -> bool {
        let turns = turns.max(1) as u32;
        let map = self.map_mut(kind.class());

        if let Some(existing) = map.iter_mut().find(|e| e.kind == kind) {
            // Refresh-to-longest: strictly greater replaces, equal or
            // shorter leaves the stronger application in place.
            if turns > existing.turns {
                existing.turns = turns;
                existing.magnitude = magnitude;
            }
            return true;
        }

        if map.is_full() {
            return false;
        }
        map.push(StatusEntry {
            kind,
            turns,
            magnitude,
        });
        true
    }

    /// Checks whether a kind is currently active.
    pub fn has(&self, kind: StatusKind) -> bool {
        self.map(kind.class()).iter().any(|e| e.kind == kind)
    }

    /// Remaining duration of a kind, if active.
    pub fn remaining(&self, kind: StatusKind) -> Option<u32> {
        self.map(kind.class())
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.turns)
    }

    /// Stored magnitude of a kind, if active.
    pub fn magnitude(&self, kind: StatusKind) -> Option<i32> {
        self.map(kind.class())
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.magnitude)
    }

    /// Net stat delta for an ability dimension: active `AbilityUp` plus
    /// active `AbilityDown` magnitudes (the latter stored negative).
    pub fn ability_delta(&self, ability: AbilityKind) -> i32 {
        let up = self
            .magnitude(StatusKind::AbilityUp(ability))
            .unwrap_or(0);
        let down = self
            .magnitude(StatusKind::AbilityDown(ability))
            .unwrap_or(0);
        up + down
    }

    /// Decrements every duration in both maps by one turn and removes
    /// entries that reach zero.
    ///
    /// The single place durations decrease; called once per actor at that
    /// actor's end of turn.
    pub fn tick(&mut self) {
        for map in [&mut self.buffs, &mut self.debuffs] {
            for entry in map.iter_mut() {
                entry.turns -= 1;
            }
            map.retain(|e| e.turns > 0);
        }
    }

    /// Explicit cleanse: removes a kind from the debuff map.
    ///
    /// Removing an absent kind is a no-op, not an error. Buffs cannot be
    /// cleansed through this path. Returns true if an entry was removed.
    pub fn remove_debuff(&mut self, kind: StatusKind) -> bool {
        let before = self.debuffs.len();
        self.debuffs.retain(|e| e.kind != kind);
        self.debuffs.len() != before
    }

    /// Iterates active damage-over-time entries, in application order.
    pub fn damage_over_time(&self) -> impl Iterator<Item = &StatusEntry> {
        self.debuffs.iter().filter(|e| e.kind.is_damage_over_time())
    }

    /// Returns true if no statuses are active at all.
    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty() && self.debuffs.is_empty()
    }
}
