//! The skill catalog: immutable, owner-keyed skill definitions.
//!
//! The catalog is process-wide read-only reference data. It is built once at
//! startup (by content loaders), validated fatally at construction, and then
//! passed by reference into combat; nothing mutates it during a battle.

use std::collections::HashMap;

use crate::state::{AbilityKind, Row, StatusClass, StatusKind};

/// Stable identifier for a skill definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u32);

/// Who a skill belongs to. Exactly one owner id is meaningful per skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillOwner {
    Hero(u32),
    Monster(u32),
}

/// Faction a skill targets, relative to its caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetFaction {
    /// The caster's opposing faction.
    Enemy,
    /// The caster's own faction.
    Ally,
    /// The caster alone.
    Caster,
}

/// Row the caster must occupy to use the skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowConstraint {
    Front,
    Back,
    Any,
}

impl RowConstraint {
    /// True if a caster standing in `row` satisfies the constraint.
    pub fn allows(self, row: Row) -> bool {
        match self {
            RowConstraint::Front => row == Row::Front,
            RowConstraint::Back => row == Row::Back,
            RowConstraint::Any => true,
        }
    }
}

/// How far a resolved target expands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Area {
    /// Exactly one target.
    Single,
    /// Every eligible candidate in the selected target's row.
    Row,
    /// The whole target faction, ignoring rows.
    Entire,
}

// ============================================================================
// Effect Specifications
// ============================================================================

/// One atomic consequence of a skill, applied to one target.
///
/// A closed tagged variant per effect kind; each case carries everything
/// needed to apply it without consulting any other effect in the skill, and
/// the executor matches exhaustively so a new kind is a compile-time-checked
/// change everywhere it must be handled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectSpec {
    /// Flat damage, mitigated by the target's defense.
    Damage { amount: i32 },
    /// Flat heal, capped at the target's max health.
    Heal { amount: i32 },
    /// Damage-over-time debuffs; `amount` is dealt at each of the target's
    /// turn ends for `turns` turns.
    Poison { amount: i32, turns: i32 },
    Bleed { amount: i32, turns: i32 },
    Burn { amount: i32, turns: i32 },
    /// Forces the enemy faction's single-target attacks onto the target.
    Taunt { turns: i32 },
    /// Target skips its turns.
    Faint { turns: i32 },
    /// Marks the target for later conditional damage.
    Sign { turns: i32 },
    /// Bonus damage, applied only while the target is marked; a strict
    /// no-op on unmarked targets.
    SignDamage { amount: i32 },
    /// Timed stat increase. `amount` is the (positive) stat delta.
    AbilityBuff {
        ability: AbilityKind,
        amount: i32,
        turns: i32,
    },
    /// Timed stat decrease. `amount` is declared positive and applied
    /// negated.
    AbilityDebuff {
        ability: AbilityKind,
        amount: i32,
        turns: i32,
    },
    /// Explicit cleanse of one debuff kind from the target.
    RemoveDebuff { kind: StatusKind },
}

// ============================================================================
// Skill
// ============================================================================

/// Immutable skill definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    /// Display name (presentation only; the core never renders it).
    pub name: String,
    pub owner: SkillOwner,
    pub target: TargetFaction,
    /// Row the caster must stand in to use the skill.
    pub usage_row: RowConstraint,
    pub area: Area,
    /// Row the skill prefers to hit, if any. An empty preferred row falls
    /// back to the other row at resolve time.
    pub target_row: Option<Row>,
    /// Ordered effect list; application order is declaration order.
    pub effects: Vec<EffectSpec>,
    /// Accuracy correction added to the caster's hit rating.
    pub accuracy: i32,
}

// ============================================================================
// Catalog
// ============================================================================

/// Fatal catalog construction errors.
///
/// Malformed effect data is rejected here, at load time, and never deferred
/// into combat.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate skill id {0:?}")]
    DuplicateSkill(SkillId),
    #[error("skill {0:?} has an empty display name")]
    EmptyName(SkillId),
    #[error("skill {0:?} has an empty effect list")]
    NoEffects(SkillId),
    #[error("skill {skill:?} effect #{index} has a non-positive amount")]
    InvalidAmount { skill: SkillId, index: usize },
    #[error("skill {skill:?} cleanses {kind}, which is not a debuff kind")]
    NotADebuff { skill: SkillId, kind: StatusKind },
}

/// Read-only library of skills keyed by owner.
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    by_owner: HashMap<SkillOwner, Vec<Skill>>,
    count: usize,
}

impl SkillCatalog {
    /// Builds and validates a catalog from an ordered skill list.
    ///
    /// Per-owner order follows the input order. All validation failures are
    /// fatal; a catalog that constructs successfully never produces a
    /// configuration error during combat.
    pub fn new(skills: Vec<Skill>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for skill in &skills {
            if !seen.insert(skill.id) {
                return Err(CatalogError::DuplicateSkill(skill.id));
            }
            Self::validate(skill)?;
        }

        let count = skills.len();
        let mut by_owner: HashMap<SkillOwner, Vec<Skill>> = HashMap::new();
        for skill in skills {
            by_owner.entry(skill.owner).or_default().push(skill);
        }
        Ok(Self { by_owner, count })
    }

    fn validate(skill: &Skill) -> Result<(), CatalogError> {
        if skill.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(skill.id));
        }
        if skill.effects.is_empty() {
            return Err(CatalogError::NoEffects(skill.id));
        }
        for (index, effect) in skill.effects.iter().enumerate() {
            let amount = match effect {
                EffectSpec::Damage { amount }
                | EffectSpec::Heal { amount }
                | EffectSpec::Poison { amount, .. }
                | EffectSpec::Bleed { amount, .. }
                | EffectSpec::Burn { amount, .. }
                | EffectSpec::SignDamage { amount }
                | EffectSpec::AbilityBuff { amount, .. }
                | EffectSpec::AbilityDebuff { amount, .. } => Some(*amount),
                EffectSpec::Taunt { .. }
                | EffectSpec::Faint { .. }
                | EffectSpec::Sign { .. } => None,
                EffectSpec::RemoveDebuff { kind } => {
                    if kind.class() != StatusClass::Debuff {
                        return Err(CatalogError::NotADebuff {
                            skill: skill.id,
                            kind: *kind,
                        });
                    }
                    None
                }
            };
            if matches!(amount, Some(a) if a <= 0) {
                return Err(CatalogError::InvalidAmount {
                    skill: skill.id,
                    index,
                });
            }
        }
        Ok(())
    }

    /// Ordered skill list for an owner.
    ///
    /// An unknown owner id yields an empty slice, not an error; "this
    /// monster has no skills yet" is a supported content state.
    pub fn skills_for(&self, owner: SkillOwner) -> &[Skill] {
        self.by_owner.get(&owner).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Looks up one skill by owner and id.
    pub fn skill(&self, owner: SkillOwner, id: SkillId) -> Option<&Skill> {
        self.skills_for(owner).iter().find(|s| s.id == id)
    }

    /// Total number of skills across all owners.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strike(id: u32) -> Skill {
        Skill {
            id: SkillId(id),
            name: "Strike".into(),
            owner: SkillOwner::Hero(1),
            target: TargetFaction::Enemy,
            usage_row: RowConstraint::Any,
            area: Area::Single,
            target_row: None,
            effects: vec![EffectSpec::Damage { amount: 8 }],
            accuracy: 0,
        }
    }

    #[test]
    fn unknown_owner_resolves_to_empty_list() {
        let catalog = SkillCatalog::new(vec![strike(1)]).unwrap();
        assert!(catalog.skills_for(SkillOwner::Monster(9999)).is_empty());
        assert_eq!(catalog.skills_for(SkillOwner::Hero(1)).len(), 1);
    }

    #[test]
    fn duplicate_ids_are_fatal() {
        let err = SkillCatalog::new(vec![strike(1), strike(1)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSkill(SkillId(1)));
    }

    #[test]
    fn malformed_effect_data_is_fatal() {
        let mut skill = strike(1);
        skill.effects = vec![EffectSpec::Damage { amount: 0 }];
        assert_eq!(
            SkillCatalog::new(vec![skill]).unwrap_err(),
            CatalogError::InvalidAmount {
                skill: SkillId(1),
                index: 0
            }
        );

        let mut skill = strike(2);
        skill.effects.clear();
        assert_eq!(
            SkillCatalog::new(vec![skill]).unwrap_err(),
            CatalogError::NoEffects(SkillId(2))
        );

        let mut skill = strike(3);
        skill.effects = vec![EffectSpec::RemoveDebuff {
            kind: StatusKind::AbilityUp(crate::state::AbilityKind::Speed),
        }];
        assert!(matches!(
            SkillCatalog::new(vec![skill]).unwrap_err(),
            CatalogError::NotADebuff { .. }
        ));
    }
}
