//! Damage mitigation and health mutation.

use crate::config::DamageParams;

/// Mitigates raw skill damage against a defense rating.
///
/// # Formula
///
/// ```text
/// scaled = raw * damage_scale / 100
/// final  = max(scaled - defense, minimum)
/// ```
///
/// Negative raw amounts clamp to zero before scaling, and negative defense
/// counts as zero, so the result is monotonic: higher defense strictly
/// reduces or holds damage, never increases it.
pub fn mitigate_damage(raw: i32, damage_scale: i32, defense: i32, params: &DamageParams) -> u32 {
    let scaled = raw.max(0).saturating_mul(damage_scale.max(0)) / 100;
    scaled.saturating_sub(defense.max(0)).max(params.minimum).max(0) as u32
}

/// Mitigates periodic (damage-over-time) damage against a resistance rating.
///
/// Direct hits are mitigated by defense; the per-turn DOT sweep is mitigated
/// by resistance instead:
///
/// ```text
/// final = max(stored_amount - resistance, minimum)
/// ```
///
/// Negative resistance counts as zero, so the result is monotonic in
/// resistance just as [`mitigate_damage`] is in defense.
pub fn mitigate_periodic(raw: i32, resistance: i32, params: &DamageParams) -> u32 {
    raw.max(0)
        .saturating_sub(resistance.max(0))
        .max(params.minimum)
        .max(0) as u32
}

/// Applies damage to current HP, floored at 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Applies a heal to current HP, capped at max HP.
///
/// Negative heal inputs clamp to zero; a heal never reduces health.
pub fn apply_heal(current_hp: u32, max_hp: u32, heal: i32) -> u32 {
    current_hp.saturating_add(heal.max(0) as u32).min(max_hp)
}
