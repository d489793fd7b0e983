//! Battle session: the entry-point surface the turn coordinator drives.
//!
//! The coordinator owns turn order and skill/target selection; the session
//! owns the roster and resolves one cast or one turn boundary at a time,
//! synchronously. All outputs flow back as [`EffectResult`] records.

use crate::catalog::{Skill, TargetFaction};
use crate::combat::{EffectKind, EffectResult, apply_effect, check_hit, mitigate_periodic};
use crate::config::CombatTables;
use crate::state::{ActorId, Roster, StatusKind};
use crate::targeting::resolve_targets;

/// Outcome of one skill cast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastOutcome {
    /// Resolved targets, in resolution order. Empty means the cast fizzled
    /// (no legal target), which is a valid outcome.
    pub targets: Vec<ActorId>,
    /// Presentation records, in application order.
    pub results: Vec<EffectResult>,
}

impl CastOutcome {
    /// True when targeting produced no legal target.
    pub fn fizzled(&self) -> bool {
        self.targets.is_empty()
    }
}

/// One running battle: the roster plus the balance tables.
///
/// Exclusively owned and mutated by the single combat thread; external
/// systems read snapshots through [`Self::roster`] or call the entry points
/// here.
pub struct BattleSession {
    roster: Roster,
    tables: CombatTables,
}

impl BattleSession {
    pub fn new(roster: Roster, tables: CombatTables) -> Self {
        Self { roster, tables }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Whether an actor may take a turn: alive, flagged able to act, and
    /// not fainted.
    pub fn can_act(&self, id: ActorId) -> bool {
        self.roster
            .actor(id)
            .is_some_and(|a| a.is_alive() && a.can_act && !a.statuses.has(StatusKind::Faint))
    }

    /// Resolves and applies one skill cast.
    ///
    /// `chosen` is the player's explicit target (or `None` for AI casts);
    /// `roll` supplies hit rolls in 1..=100, one per enemy target. Effects
    /// apply in declaration order per target; a target dying mid-list has
    /// its remaining effects skipped while other targets continue.
    pub fn cast(
        &mut self,
        caster: ActorId,
        skill: &Skill,
        chosen: Option<ActorId>,
        mut roll: impl FnMut() -> u32,
    ) -> CastOutcome {
        if !self.can_act(caster) {
            return CastOutcome::default();
        }

        let targets = resolve_targets(&self.roster, caster, skill, chosen);
        let mut results = Vec::new();

        for &target in &targets {
            // Only attacks can miss; ally and self casts always land.
            if skill.target == TargetFaction::Enemy && !self.roll_hit(caster, skill, target, &mut roll)
            {
                results.push(EffectResult::numeric(target, EffectKind::Miss, 0));
                continue;
            }

            for effect in &skill.effects {
                // A target dying partway through the effect list absorbs
                // nothing further; the check runs before every effect.
                if !self.roster.actor(target).is_some_and(|a| a.is_alive()) {
                    break;
                }
                if let Some(result) =
                    apply_effect(&mut self.roster, &self.tables, caster, target, effect)
                {
                    results.push(result);
                }
            }
        }

        CastOutcome { targets, results }
    }

    fn roll_hit(
        &self,
        caster: ActorId,
        skill: &Skill,
        target: ActorId,
        roll: &mut impl FnMut() -> u32,
    ) -> bool {
        let (Some(caster_actor), Some(target_actor)) =
            (self.roster.actor(caster), self.roster.actor(target))
        else {
            return false;
        };
        check_hit(
            caster_actor.effective_hit(),
            skill.accuracy,
            target_actor.effective_speed(),
            roll(),
            &self.tables.hit,
        )
    }

    /// Processes one actor's end of turn: the DOT sweep followed by the
    /// status tick, atomically.
    ///
    /// Every active damage-over-time status deals its stored amount less the
    /// holder's effective resistance, then every duration in both maps
    /// decrements by one. The next actor's targeting never observes a
    /// half-expired status. Calling this for a dead or absent actor is a
    /// no-op.
    pub fn end_of_turn(&mut self, id: ActorId) -> Vec<EffectResult> {
        let Some(actor) = self.roster.actor_mut(id) else {
            return Vec::new();
        };
        if !actor.is_alive() {
            return Vec::new();
        }

        let mut results = Vec::new();
        // Resistance is constant across the sweep; entries only change at
        // the tick below.
        let resistance = actor.effective_resistance();
        let dots: Vec<(StatusKind, i32)> = actor
            .statuses
            .damage_over_time()
            .map(|e| (e.kind, e.magnitude))
            .collect();
        for (kind, magnitude) in dots {
            let dealt = mitigate_periodic(magnitude, resistance, &self.tables.damage).min(actor.hp);
            actor.hp -= dealt;
            results.push(EffectResult::numeric(id, EffectKind::DotTick(kind), dealt));
        }

        actor.statuses.tick();
        results
    }
}
