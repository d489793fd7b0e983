//! Compile-time limits and balance parameter tables.

/// Static configuration limits for combat state.
pub struct BattleConfig;

impl BattleConfig {
    /// Maximum concurrent status effects per map (buffs and debuffs each).
    pub const MAX_STATUS_EFFECTS: usize = 8;

    /// Maximum actors per faction.
    pub const MAX_PARTY_SIZE: usize = 6;
}

// ============================================================================
// Balance Parameters
// ============================================================================

/// Damage calculation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageParams {
    /// Floor for mitigated damage. Defense can reduce damage to this
    /// value but never below it.
    pub minimum: i32,
}

impl Default for DamageParams {
    fn default() -> Self {
        Self { minimum: 0 }
    }
}

/// Hit chance calculation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitParams {
    /// Base hit chance before stat corrections (percent).
    pub base: i32,
    /// Lower clamp for the final chance.
    pub min: i32,
    /// Upper clamp for the final chance.
    pub max: i32,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            base: 85,
            min: 5,
            max: 100,
        }
    }
}

/// Balance parameters consulted by combat resolution.
///
/// Constructed once at battle start and passed by reference into the
/// pure combat functions. Never mutated during a battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatTables {
    pub damage: DamageParams,
    pub hit: HitParams,
}
