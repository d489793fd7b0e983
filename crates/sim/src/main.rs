//! Scripted battle driver.
//!
//! Stands in for the orchestration layer: owns turn order, picks skills and
//! rolls, and consumes the `EffectResult` stream as a presentation sink
//! (here: structured logs). The combat core itself stays deterministic;
//! every roll it sees comes from the seeded RNG below.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use battle_content::SkillLoader;
use battle_core::{
    Actor, ActorId, BattleSession, CombatTables, Faction, Roster, Row, SkillCatalog, SkillOwner,
};

/// Driver configuration, read from the environment.
struct SimConfig {
    seed: u64,
    max_rounds: u32,
}

impl SimConfig {
    fn from_env() -> Self {
        let parse = |key: &str, default| {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };
        Self {
            seed: parse("SIM_SEED", 7),
            max_rounds: parse("SIM_MAX_ROUNDS", 20) as u32,
        }
    }
}

/// One roster slot: the combat actor plus the catalog owner its skills
/// belong to.
struct Combatant {
    id: ActorId,
    owner: SkillOwner,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    let catalog = SkillLoader::load()?;
    info!(skills = catalog.len(), "skill catalog loaded");

    run_battle(&catalog, &config);
    Ok(())
}

fn run_battle(catalog: &SkillCatalog, config: &SimConfig) {
    let roster = Roster::new(vec![
        // Heroes: vanguard up front, cleric and ranger behind.
        Actor::new(ActorId(1), Faction::Heroes, Row::Front, 42, 6, 3, 9, 12),
        Actor::new(ActorId(2), Faction::Heroes, Row::Back, 26, 2, 5, 8, 10),
        Actor::new(ActorId(3), Faction::Heroes, Row::Back, 30, 3, 2, 11, 15),
        // Monsters: two grunts and the marking boss.
        Actor::new(ActorId(11), Faction::Monsters, Row::Front, 28, 3, 1, 7, 8),
        Actor::new(ActorId(12), Faction::Monsters, Row::Front, 34, 4, 2, 10, 10),
        Actor::new(ActorId(13), Faction::Monsters, Row::Back, 55, 5, 4, 8, 14),
    ]);
    let combatants = [
        Combatant { id: ActorId(1), owner: SkillOwner::Hero(1) },
        Combatant { id: ActorId(2), owner: SkillOwner::Hero(2) },
        Combatant { id: ActorId(3), owner: SkillOwner::Hero(3) },
        Combatant { id: ActorId(11), owner: SkillOwner::Monster(1001) },
        Combatant { id: ActorId(12), owner: SkillOwner::Monster(1004) },
        Combatant { id: ActorId(13), owner: SkillOwner::Monster(1008) },
    ];

    let mut session = BattleSession::new(roster, CombatTables::default());
    let mut rng = StdRng::seed_from_u64(config.seed);

    for round in 1..=config.max_rounds {
        info!(round, "round start");

        for combatant in &combatants {
            if session.roster().is_defeated(Faction::Heroes)
                || session.roster().is_defeated(Faction::Monsters)
            {
                break;
            }

            if !session.can_act(combatant.id) {
                if session
                    .roster()
                    .actor(combatant.id)
                    .is_some_and(Actor::is_alive)
                {
                    info!(actor = %combatant.id, "turn skipped");
                    log_results(&session.end_of_turn(combatant.id));
                }
                continue;
            }

            let skills = catalog.skills_for(combatant.owner);
            if skills.is_empty() {
                // "No skills yet" is a supported content state.
                info!(actor = %combatant.id, "no skills, waiting");
                log_results(&session.end_of_turn(combatant.id));
                continue;
            }
            let skill = &skills[rng.random_range(0..skills.len())];

            // AI cast: no explicit target, the resolver picks.
            let outcome = session.cast(combatant.id, skill, None, || rng.random_range(1..=100));
            if outcome.fizzled() {
                info!(actor = %combatant.id, skill = %skill.name, "cast fizzled");
            } else {
                info!(
                    actor = %combatant.id,
                    skill = %skill.name,
                    targets = outcome.targets.len(),
                    "cast resolved"
                );
                log_results(&outcome.results);
            }

            log_results(&session.end_of_turn(combatant.id));
        }

        for faction in [Faction::Heroes, Faction::Monsters] {
            if session.roster().is_defeated(faction) {
                info!(winner = %faction.opponent(), rounds = round, "battle over");
                return;
            }
        }
    }

    info!(rounds = config.max_rounds, "battle hit the round limit, calling it a draw");
}

fn log_results(results: &[battle_core::EffectResult]) {
    for result in results {
        info!(
            target = %result.target,
            kind = ?result.kind,
            delta = result.delta,
            status = result.status_applied,
            "effect"
        );
    }
}
