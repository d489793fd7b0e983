//! Targeting resolution.
//!
//! Turns a skill's declared faction, row preference, and area into the
//! concrete ordered list of targets, honoring taunt redirection. An empty
//! result means the cast fizzles; it is a valid outcome, not an error.

use crate::catalog::{Area, Skill, TargetFaction};
use crate::state::{Actor, ActorId, Roster, Row, StatusKind};

/// True if the caster's row placement permits using this skill.
pub fn can_use(caster: &Actor, skill: &Skill) -> bool {
    skill.usage_row.allows(caster.row)
}

/// Resolves the concrete targets of one cast.
///
/// `chosen` is the explicit target selection supplied for player-driven
/// casts; AI casts pass `None` and get the deterministic fallback (lowest
/// actor id among the filtered candidates).
///
/// Resolution order:
/// 1. candidate faction from the skill, relative to the caster
/// 2. eligibility (present and alive), then taunt collapse for
///    single-target attacks
/// 3. row preference, falling back to the other row when the preferred one
///    is empty
/// 4. area expansion
pub fn resolve_targets(
    roster: &Roster,
    caster: ActorId,
    skill: &Skill,
    chosen: Option<ActorId>,
) -> Vec<ActorId> {
    let Some(caster_actor) = roster.actor(caster) else {
        return Vec::new();
    };
    if !caster_actor.is_alive() || !can_use(caster_actor, skill) {
        return Vec::new();
    }

    let faction = match skill.target {
        TargetFaction::Caster => return vec![caster],
        TargetFaction::Ally => caster_actor.faction,
        TargetFaction::Enemy => caster_actor.faction.opponent(),
    };

    let eligible: Vec<&Actor> = roster.living(faction).collect();
    if eligible.is_empty() {
        return Vec::new();
    }

    // Taunt only redirects attacks: it is consulted solely when a
    // single-target skill aims at the taunt holder's enemy. With several
    // simultaneous taunters, the first in roster order wins (fixed
    // tie-break).
    if skill.area == Area::Single && skill.target == TargetFaction::Enemy {
        if let Some(taunter) = eligible.iter().find(|a| a.statuses.has(StatusKind::Taunt)) {
            return vec![taunter.id];
        }
    }

    let filtered: Vec<&Actor> = match skill.target_row {
        Some(row) => {
            let in_row: Vec<&Actor> = eligible.iter().copied().filter(|a| a.row == row).collect();
            // A wiped preferred row falls back to the other one so the
            // skill never becomes permanently unusable.
            if in_row.is_empty() { eligible.clone() } else { in_row }
        }
        None => eligible.clone(),
    };

    match skill.area {
        Area::Single => select(&filtered, chosen).map_or_else(Vec::new, |id| vec![id]),
        Area::Row => {
            let Some(pick) = select(&filtered, chosen) else {
                return Vec::new();
            };
            let row = filtered
                .iter()
                .find(|a| a.id == pick)
                .map(|a| a.row)
                .unwrap_or(Row::Front);
            filtered
                .iter()
                .filter(|a| a.row == row)
                .map(|a| a.id)
                .collect()
        }
        // Entire faction ignores the row preference entirely.
        Area::Entire => eligible.iter().map(|a| a.id).collect(),
    }
}

/// Picks one candidate: the explicit choice when it is among the candidates,
/// otherwise the lowest actor id (deterministic AI selection rule).
fn select(candidates: &[&Actor], chosen: Option<ActorId>) -> Option<ActorId> {
    match chosen {
        Some(id) if candidates.iter().any(|a| a.id == id) => Some(id),
        _ => candidates.iter().map(|a| a.id).min(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EffectSpec, RowConstraint, SkillId, SkillOwner};
    use crate::state::Faction;

    fn actor(id: u32, faction: Faction, row: Row) -> Actor {
        Actor::new(ActorId(id), faction, row, 20, 2, 1, 8, 5)
    }

    fn roster() -> Roster {
        Roster::new(vec![
            actor(1, Faction::Heroes, Row::Front),
            actor(2, Faction::Heroes, Row::Back),
            actor(10, Faction::Monsters, Row::Front),
            actor(11, Faction::Monsters, Row::Front),
            actor(12, Faction::Monsters, Row::Back),
        ])
    }

    fn skill(target: TargetFaction, area: Area, target_row: Option<Row>) -> Skill {
        Skill {
            id: SkillId(1),
            name: "test".into(),
            owner: SkillOwner::Hero(1),
            target,
            usage_row: RowConstraint::Any,
            area,
            target_row,
            effects: vec![EffectSpec::Damage { amount: 5 }],
            accuracy: 0,
        }
    }

    #[test]
    fn explicit_choice_wins_for_single_target() {
        let roster = roster();
        let skill = skill(TargetFaction::Enemy, Area::Single, None);
        let targets = resolve_targets(&roster, ActorId(1), &skill, Some(ActorId(11)));
        assert_eq!(targets, vec![ActorId(11)]);
    }

    #[test]
    fn ai_fallback_picks_lowest_id() {
        let roster = roster();
        let skill = skill(TargetFaction::Enemy, Area::Single, None);
        let targets = resolve_targets(&roster, ActorId(1), &skill, None);
        assert_eq!(targets, vec![ActorId(10)]);
    }

    #[test]
    fn taunt_overrides_explicit_choice() {
        let mut roster = roster();
        roster
            .actor_mut(ActorId(12))
            .unwrap()
            .statuses
            .apply(StatusKind::Taunt, 2, 0);

        let skill = skill(TargetFaction::Enemy, Area::Single, None);
        let targets = resolve_targets(&roster, ActorId(1), &skill, Some(ActorId(10)));
        assert_eq!(targets, vec![ActorId(12)]);
    }

    #[test]
    fn first_taunter_in_roster_order_wins() {
        let mut roster = roster();
        for id in [11, 12] {
            roster
                .actor_mut(ActorId(id))
                .unwrap()
                .statuses
                .apply(StatusKind::Taunt, 2, 0);
        }
        let skill = skill(TargetFaction::Enemy, Area::Single, None);
        let targets = resolve_targets(&roster, ActorId(1), &skill, None);
        assert_eq!(targets, vec![ActorId(11)]);
    }

    #[test]
    fn taunt_never_redirects_heals() {
        let mut roster = roster();
        roster
            .actor_mut(ActorId(2))
            .unwrap()
            .statuses
            .apply(StatusKind::Taunt, 2, 0);

        let skill = skill(TargetFaction::Ally, Area::Single, None);
        let targets = resolve_targets(&roster, ActorId(1), &skill, Some(ActorId(1)));
        assert_eq!(targets, vec![ActorId(1)]);
    }

    #[test]
    fn taunt_does_not_collapse_area_skills() {
        let mut roster = roster();
        roster
            .actor_mut(ActorId(12))
            .unwrap()
            .statuses
            .apply(StatusKind::Taunt, 2, 0);

        let skill = skill(TargetFaction::Enemy, Area::Entire, None);
        let targets = resolve_targets(&roster, ActorId(1), &skill, None);
        assert_eq!(targets, vec![ActorId(10), ActorId(11), ActorId(12)]);
    }

    #[test]
    fn empty_preferred_row_falls_back_to_other_row() {
        let mut roster = roster();
        roster.actor_mut(ActorId(12)).unwrap().hp = 0;

        let skill = skill(TargetFaction::Enemy, Area::Single, Some(Row::Back));
        let targets = resolve_targets(&roster, ActorId(1), &skill, None);
        assert_eq!(targets, vec![ActorId(10)]);
    }

    #[test]
    fn row_area_hits_everyone_in_the_picked_row() {
        let roster = roster();
        let skill = skill(TargetFaction::Enemy, Area::Row, None);
        let targets = resolve_targets(&roster, ActorId(1), &skill, Some(ActorId(11)));
        assert_eq!(targets, vec![ActorId(10), ActorId(11)]);
    }

    #[test]
    fn defeated_faction_fizzles() {
        let mut roster = roster();
        for id in [10, 11, 12] {
            roster.actor_mut(ActorId(id)).unwrap().hp = 0;
        }
        let skill = skill(TargetFaction::Enemy, Area::Entire, None);
        assert!(resolve_targets(&roster, ActorId(1), &skill, None).is_empty());
    }

    #[test]
    fn usage_row_gates_the_caster() {
        let roster = roster();
        let mut skill = skill(TargetFaction::Enemy, Area::Single, None);
        skill.usage_row = RowConstraint::Back;
        // Caster 1 stands in the front row.
        assert!(resolve_targets(&roster, ActorId(1), &skill, None).is_empty());
        // Caster 2 stands in the back row.
        assert_eq!(
            resolve_targets(&roster, ActorId(2), &skill, None),
            vec![ActorId(10)]
        );
    }
}
