//! The effect executor: applies one resolved effect to one target.

use crate::catalog::EffectSpec;
use crate::config::CombatTables;
use crate::state::{ActorId, Roster, StatusKind};

use super::damage::{apply_damage, apply_heal, mitigate_damage};
use super::result::{EffectKind, EffectResult};

/// Applies one effect from `source` to `target`, mutating health and the
/// target's status ledger as the variant demands.
///
/// Returns `None` when nothing happened at all: the target reference was
/// stale or dead, or a conditional effect's condition failed (Sign-Damage on
/// an unmarked target). Stale references are a normal consequence of
/// multi-target resolution where an earlier target died; they are no-ops,
/// never errors.
pub fn apply_effect(
    roster: &mut Roster,
    tables: &CombatTables,
    source: ActorId,
    target: ActorId,
    effect: &EffectSpec,
) -> Option<EffectResult> {
    // Outgoing scaling is read from the source before the mutable target
    // borrow. A vanished source (stale reference) scales at 100%.
    let (damage_scale, heal_scale) = roster
        .actor(source)
        .map(|a| (a.damage_scale(), a.heal_scale()))
        .unwrap_or((100, 100));

    let actor = roster.actor_mut(target)?;
    if !actor.is_alive() {
        return None;
    }

    let result = match *effect {
        EffectSpec::Damage { amount } => {
            let dealt = mitigate_damage(
                amount,
                damage_scale,
                actor.effective_defense(),
                &tables.damage,
            )
            .min(actor.hp); // report health actually lost
            actor.hp = apply_damage(actor.hp, dealt);
            EffectResult::numeric(target, EffectKind::Damage, dealt)
        }
        EffectSpec::Heal { amount } => {
            let scaled = amount.max(0).saturating_mul(heal_scale) / 100;
            let before = actor.hp;
            actor.hp = apply_heal(actor.hp, actor.max_hp, scaled);
            EffectResult::numeric(target, EffectKind::Heal, actor.hp - before)
        }
        EffectSpec::Poison { amount, turns } => {
            let applied = actor.statuses.apply(StatusKind::Poison, turns, amount);
            EffectResult::status(target, EffectKind::Status(StatusKind::Poison), applied)
        }
        EffectSpec::Bleed { amount, turns } => {
            let applied = actor.statuses.apply(StatusKind::Bleed, turns, amount);
            EffectResult::status(target, EffectKind::Status(StatusKind::Bleed), applied)
        }
        EffectSpec::Burn { amount, turns } => {
            let applied = actor.statuses.apply(StatusKind::Burn, turns, amount);
            EffectResult::status(target, EffectKind::Status(StatusKind::Burn), applied)
        }
        EffectSpec::Taunt { turns } => {
            let applied = actor.statuses.apply(StatusKind::Taunt, turns, 0);
            EffectResult::status(target, EffectKind::Status(StatusKind::Taunt), applied)
        }
        EffectSpec::Faint { turns } => {
            let applied = actor.statuses.apply(StatusKind::Faint, turns, 0);
            EffectResult::status(target, EffectKind::Status(StatusKind::Faint), applied)
        }
        EffectSpec::Sign { turns } => {
            let applied = actor.statuses.apply(StatusKind::Sign, turns, 0);
            EffectResult::status(target, EffectKind::Status(StatusKind::Sign), applied)
        }
        EffectSpec::SignDamage { amount } => {
            // Conditional contract: unmarked targets take nothing.
            if !actor.is_marked() {
                return None;
            }
            let dealt = mitigate_damage(
                amount,
                damage_scale,
                actor.effective_defense(),
                &tables.damage,
            )
            .min(actor.hp);
            actor.hp = apply_damage(actor.hp, dealt);
            EffectResult::numeric(target, EffectKind::SignDamage, dealt)
        }
        EffectSpec::AbilityBuff {
            ability,
            amount,
            turns,
        } => {
            let kind = StatusKind::AbilityUp(ability);
            let applied = actor.statuses.apply(kind, turns, amount.max(0));
            EffectResult::status(target, EffectKind::Status(kind), applied)
        }
        EffectSpec::AbilityDebuff {
            ability,
            amount,
            turns,
        } => {
            // Declared positive in data, stored negated.
            let kind = StatusKind::AbilityDown(ability);
            let applied = actor.statuses.apply(kind, turns, -amount.max(0));
            EffectResult::status(target, EffectKind::Status(kind), applied)
        }
        EffectSpec::RemoveDebuff { kind } => {
            let removed = actor.statuses.remove_debuff(kind);
            EffectResult::status(target, EffectKind::Cleanse(kind), removed)
        }
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Actor, Faction, Row};

    fn duel() -> Roster {
        Roster::new(vec![
            Actor::new(ActorId(1), Faction::Heroes, Row::Front, 30, 5, 2, 8, 6),
            Actor::new(ActorId(2), Faction::Monsters, Row::Front, 30, 5, 2, 8, 6),
        ])
    }

    #[test]
    fn damage_is_mitigated_by_defense() {
        let mut roster = duel();
        let tables = CombatTables::default();
        let result = apply_effect(
            &mut roster,
            &tables,
            ActorId(1),
            ActorId(2),
            &EffectSpec::Damage { amount: 12 },
        )
        .unwrap();

        assert_eq!(result.kind, EffectKind::Damage);
        assert_eq!(result.delta, 7); // 12 - 5 defense
        assert_eq!(roster.actor(ActorId(2)).unwrap().hp, 23);
    }

    #[test]
    fn heal_caps_at_max_hp() {
        let mut roster = duel();
        let tables = CombatTables::default();
        roster.actor_mut(ActorId(2)).unwrap().hp = 27;

        let result = apply_effect(
            &mut roster,
            &tables,
            ActorId(1),
            ActorId(2),
            &EffectSpec::Heal { amount: 10 },
        )
        .unwrap();

        assert_eq!(result.delta, 3);
        assert_eq!(roster.actor(ActorId(2)).unwrap().hp, 30);
    }

    #[test]
    fn dot_applies_status_without_immediate_damage() {
        let mut roster = duel();
        let tables = CombatTables::default();
        let result = apply_effect(
            &mut roster,
            &tables,
            ActorId(1),
            ActorId(2),
            &EffectSpec::Poison { amount: 4, turns: 3 },
        )
        .unwrap();

        assert!(result.status_applied);
        let target = roster.actor(ActorId(2)).unwrap();
        assert_eq!(target.hp, 30);
        assert_eq!(target.statuses.remaining(StatusKind::Poison), Some(3));
        assert_eq!(target.statuses.magnitude(StatusKind::Poison), Some(4));
    }

    #[test]
    fn sign_damage_noop_on_unmarked_target() {
        let mut roster = duel();
        let tables = CombatTables::default();
        let result = apply_effect(
            &mut roster,
            &tables,
            ActorId(1),
            ActorId(2),
            &EffectSpec::SignDamage { amount: 15 },
        );

        assert!(result.is_none());
        assert_eq!(roster.actor(ActorId(2)).unwrap().hp, 30);
    }

    #[test]
    fn sign_then_sign_damage_combos_in_order() {
        let mut roster = duel();
        let tables = CombatTables::default();

        apply_effect(
            &mut roster,
            &tables,
            ActorId(1),
            ActorId(2),
            &EffectSpec::Sign { turns: 2 },
        )
        .unwrap();
        let result = apply_effect(
            &mut roster,
            &tables,
            ActorId(1),
            ActorId(2),
            &EffectSpec::SignDamage { amount: 15 },
        )
        .unwrap();

        assert_eq!(result.kind, EffectKind::SignDamage);
        assert_eq!(result.delta, 10); // 15 - 5 defense
    }

    #[test]
    fn dead_target_is_a_noop() {
        let mut roster = duel();
        let tables = CombatTables::default();
        roster.actor_mut(ActorId(2)).unwrap().hp = 0;

        let result = apply_effect(
            &mut roster,
            &tables,
            ActorId(1),
            ActorId(2),
            &EffectSpec::Damage { amount: 5 },
        );
        assert!(result.is_none());

        // Stale id (actor no longer in roster) is equally harmless.
        roster.remove(ActorId(2));
        let result = apply_effect(
            &mut roster,
            &tables,
            ActorId(1),
            ActorId(2),
            &EffectSpec::Heal { amount: 5 },
        );
        assert!(result.is_none());
    }

    #[test]
    fn ability_debuff_is_stored_negated() {
        let mut roster = duel();
        let tables = CombatTables::default();
        apply_effect(
            &mut roster,
            &tables,
            ActorId(1),
            ActorId(2),
            &EffectSpec::AbilityDebuff {
                ability: crate::state::AbilityKind::Defense,
                amount: 3,
                turns: 2,
            },
        )
        .unwrap();

        assert_eq!(roster.actor(ActorId(2)).unwrap().effective_defense(), 2);
    }

    #[test]
    fn cleanse_reports_whether_anything_was_removed() {
        let mut roster = duel();
        let tables = CombatTables::default();
        roster
            .actor_mut(ActorId(2))
            .unwrap()
            .statuses
            .apply(StatusKind::Burn, 3, 2);

        let cleanse = EffectSpec::RemoveDebuff {
            kind: StatusKind::Burn,
        };
        let result =
            apply_effect(&mut roster, &tables, ActorId(1), ActorId(2), &cleanse).unwrap();
        assert!(result.status_applied);

        let result =
            apply_effect(&mut roster, &tables, ActorId(1), ActorId(2), &cleanse).unwrap();
        assert!(!result.status_applied);
    }
}
