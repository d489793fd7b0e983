//! End-to-end scenario over the shipped content: monster 1008's mark combo.

use battle_content::SkillLoader;
use battle_core::{
    Actor, ActorId, BattleSession, CombatTables, EffectKind, Faction, Roster, Row, SkillOwner,
};

#[test]
fn gaze_then_sweep_hits_only_the_marked_target() {
    let catalog = SkillLoader::load().expect("catalog should load");
    let skills = catalog.skills_for(SkillOwner::Monster(1008));
    let gaze = skills.iter().find(|s| s.name == "노려보기").unwrap();
    let sweep = skills.iter().find(|s| s.name == "광역 공격").unwrap();

    let roster = Roster::new(vec![
        Actor::new(ActorId(50), Faction::Monsters, Row::Front, 60, 5, 3, 6, 10),
        // X and Y share the front row.
        Actor::new(ActorId(1), Faction::Heroes, Row::Front, 30, 2, 1, 8, 5),
        Actor::new(ActorId(2), Faction::Heroes, Row::Front, 30, 2, 1, 8, 5),
    ]);
    let mut session = BattleSession::new(roster, CombatTables::default());

    // Turn 1: 노려보기 marks X for 2 turns.
    let outcome = session.cast(ActorId(50), gaze, Some(ActorId(1)), || 1);
    assert!(outcome.results.iter().any(|r| r.status_applied));
    session.end_of_turn(ActorId(50));
    assert!(session.roster().actor(ActorId(1)).unwrap().is_marked());

    // Turn 2: 광역 공격 sweeps the row while the mark is still live.
    let outcome = session.cast(ActorId(50), sweep, Some(ActorId(1)), || 1);
    assert_eq!(outcome.targets, vec![ActorId(1), ActorId(2)]);

    // X takes the conditional damage (12 - 2 defense), Y takes nothing.
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].target, ActorId(1));
    assert_eq!(outcome.results[0].kind, EffectKind::SignDamage);
    assert_eq!(outcome.results[0].delta, 10);
    assert_eq!(session.roster().actor(ActorId(1)).unwrap().hp, 20);
    assert_eq!(session.roster().actor(ActorId(2)).unwrap().hp, 30);
}
