//! The battle roster: every actor on both sides, in a stable order.

use super::actor::{Actor, ActorId, Faction};

/// Ordered, faction-partitioned collection of actors.
///
/// Order is insertion order and fixes every "first in roster order"
/// tie-break in targeting. Dead actors stay in the roster with hp 0 and are
/// excluded by eligibility filters; physically removing them between turns
/// is the orchestration layer's job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    actors: Vec<Actor>,
}

impl Roster {
    /// Builds a roster from an ordered actor list.
    pub fn new(actors: Vec<Actor>) -> Self {
        Self { actors }
    }

    /// Looks up an actor by id. Stale ids resolve to `None`, never panic.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Mutable lookup by id.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    /// All actors in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    /// Actors of one faction, in roster order.
    pub fn faction(&self, faction: Faction) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(move |a| a.faction == faction)
    }

    /// Living actors of one faction, in roster order.
    pub fn living(&self, faction: Faction) -> impl Iterator<Item = &Actor> {
        self.faction(faction).filter(|a| a.is_alive())
    }

    /// True when every actor of the faction is dead or absent.
    pub fn is_defeated(&self, faction: Faction) -> bool {
        self.living(faction).next().is_none()
    }

    /// Removes an actor entirely (orchestration cleanup between turns).
    /// Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: ActorId) {
        self.actors.retain(|a| a.id != id);
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
