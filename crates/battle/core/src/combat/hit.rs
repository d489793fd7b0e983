//! Hit chance and accuracy calculations.

use crate::config::HitParams;

/// Calculates the chance (percent) for a skill to land.
///
/// # Formula
///
/// ```text
/// chance = base + caster_hit + skill_accuracy - target_speed
/// clamped to [min, max]
/// ```
pub fn calculate_hit_chance(
    caster_hit: i32,
    skill_accuracy: i32,
    target_speed: i32,
    params: &HitParams,
) -> i32 {
    (params.base + caster_hit + skill_accuracy - target_speed).clamp(params.min, params.max)
}

/// Checks whether an attack lands given a caller-supplied roll in 1..=100.
///
/// The roll is an input so resolution stays deterministic and replayable.
pub fn check_hit(
    caster_hit: i32,
    skill_accuracy: i32,
    target_speed: i32,
    roll: u32,
    params: &HitParams,
) -> bool {
    roll as i32 <= calculate_hit_chance(caster_hit, skill_accuracy, target_speed, params)
}
