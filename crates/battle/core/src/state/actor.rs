//! Combat actors and their mutable battle state.

use super::status::{AbilityKind, StatusKind, StatusLedger};

/// Stable identifier for an actor within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl core::fmt::Display for ActorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Roster partition an actor belongs to.
///
/// Targeting always speaks of Enemy/Ally relative to a caster; this is the
/// absolute side used to resolve that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    Heroes,
    Monsters,
}

impl Faction {
    /// The opposing faction.
    pub fn opponent(self) -> Self {
        match self {
            Faction::Heroes => Faction::Monsters,
            Faction::Monsters => Faction::Heroes,
        }
    }
}

/// Party-row placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Row {
    Front,
    Back,
}

impl Row {
    /// The other row.
    pub fn other(self) -> Self {
        match self {
            Row::Front => Row::Back,
            Row::Back => Row::Front,
        }
    }
}

/// One participant in combat.
///
/// Base stats are fixed at battle start; temporary stat changes live in the
/// status ledger and are folded in by the `effective_*` accessors. Health and
/// the eligibility flag are the only directly mutable numeric state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    pub faction: Faction,
    pub row: Row,

    pub hp: u32,
    pub max_hp: u32,
    pub defense: i32,
    pub resistance: i32,
    pub speed: i32,
    pub hit: i32,

    /// Eligibility to take turns; orchestration can clear this independently
    /// of crowd control (e.g. scripted sequences).
    pub can_act: bool,

    /// Active buffs and debuffs. Mutated only through ledger operations.
    pub statuses: StatusLedger,
}

impl Actor {
    /// Creates an actor at full health with an empty ledger.
    pub fn new(
        id: ActorId,
        faction: Faction,
        row: Row,
        max_hp: u32,
        defense: i32,
        resistance: i32,
        speed: i32,
        hit: i32,
    ) -> Self {
        Self {
            id,
            faction,
            row,
            hp: max_hp,
            max_hp,
            defense,
            resistance,
            speed,
            hit,
            can_act: true,
            statuses: StatusLedger::empty(),
        }
    }

    /// True while health is above zero.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// True if the actor holds the mark consumed by conditional damage.
    pub fn is_marked(&self) -> bool {
        self.statuses.has(StatusKind::Sign)
    }

    // ========================================================================
    // Effective stats (base + active ability statuses)
    // ========================================================================

    pub fn effective_defense(&self) -> i32 {
        self.defense + self.statuses.ability_delta(AbilityKind::Defense)
    }

    pub fn effective_resistance(&self) -> i32 {
        self.resistance + self.statuses.ability_delta(AbilityKind::Resistance)
    }

    pub fn effective_speed(&self) -> i32 {
        self.speed + self.statuses.ability_delta(AbilityKind::Speed)
    }

    pub fn effective_hit(&self) -> i32 {
        self.hit + self.statuses.ability_delta(AbilityKind::Hit)
    }

    /// Outgoing damage multiplier in percent (100 = unchanged), floored at 0.
    pub fn damage_scale(&self) -> i32 {
        (100 + self.statuses.ability_delta(AbilityKind::DamageScale)).max(0)
    }

    /// Outgoing heal multiplier in percent (100 = unchanged), floored at 0.
    pub fn heal_scale(&self) -> i32 {
        (100 + self.statuses.ability_delta(AbilityKind::HealScale)).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> Actor {
        Actor::new(ActorId(1), Faction::Heroes, Row::Front, 30, 5, 3, 10, 7)
    }

    #[test]
    fn effective_stats_fold_in_statuses() {
        let mut a = actor();
        assert_eq!(a.effective_defense(), 5);

        a.statuses
            .apply(StatusKind::AbilityUp(AbilityKind::Defense), 2, 4);
        a.statuses
            .apply(StatusKind::AbilityDown(AbilityKind::Defense), 2, -2);
        assert_eq!(a.effective_defense(), 7);

        a.statuses.tick();
        a.statuses.tick();
        assert_eq!(a.effective_defense(), 5);
    }

    #[test]
    fn damage_scale_never_negative() {
        let mut a = actor();
        a.statuses
            .apply(StatusKind::AbilityDown(AbilityKind::DamageScale), 3, -250);
        assert_eq!(a.damage_scale(), 0);
    }
}
