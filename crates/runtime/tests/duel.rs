use std::time::Duration;

use encounter_content::{ConfigLoader, Preset};
use encounter_core::{BossConfig, DefenseOutcome, EncounterEvent, NavigationOracle, Phase};
use runtime::{Arena, DuelOutcome, DuelScenario, FrameLoop, PlayerSpec, Simulation, Topic};

fn scenario(seed: u64) -> DuelScenario {
    DuelScenario {
        time_limit: 60.0,
        ..DuelScenario::default()
    }
    .with_seed(seed)
}

/// A player who cannot lose and kills the boss quickly.
fn overwhelming(seed: u64) -> DuelScenario {
    DuelScenario {
        player: PlayerSpec {
            max_health: 1.0e6,
            shot_damage: 200.0,
            fire_interval: 0.2,
            ..PlayerSpec::default()
        },
        ..scenario(seed)
    }
}

fn build(scenario: &DuelScenario) -> Simulation {
    scenario.build(BossConfig::default()).unwrap()
}

#[test]
fn same_seed_replays_identically() {
    let mut a = build(&scenario(7));
    let mut b = build(&scenario(7));

    for _ in 0..1200 {
        assert_eq!(a.step(), b.step());
    }
    assert_eq!(a.summary(), b.summary());
}

#[test]
fn different_seeds_diverge() {
    let mut a = build(&scenario(1));
    let mut b = build(&scenario(2));
    let a_events: Vec<_> = (0..1200).flat_map(|_| a.step()).collect();
    let b_events: Vec<_> = (0..1200).flat_map(|_| b.step()).collect();
    assert_ne!(a_events, b_events);
}

#[test]
fn phase_and_health_invariants_hold_every_frame() {
    let mut sim = build(&scenario(11));
    let max_health = sim.boss().state().max_health;
    let mut phase = Phase::One;

    while !sim.is_finished() {
        sim.step();
        let boss = sim.boss();
        assert!(boss.phase() >= phase, "phase regressed at {}", sim.clock());
        phase = boss.phase();
        assert!((0.0..=max_health).contains(&boss.health()));
    }
}

#[test]
fn boss_never_leaves_the_arena_floor() {
    let small = DuelScenario {
        arena: Arena::new(encounter_core::Vec3::ZERO, 8.0),
        player: PlayerSpec {
            orbit_radius: 6.0,
            ..PlayerSpec::default()
        },
        ..scenario(5)
    };
    let mut sim = build(&small);
    let arena = sim.oracles().navigator.arena();

    while !sim.is_finished() {
        for record in sim.step() {
            if let EncounterEvent::Teleported { to, .. } = record.event {
                assert!(arena.contains(to), "teleported off the floor to {to}");
            }
        }
        let position = sim.oracles().navigator.position();
        assert!(arena.contains(position), "boss at {position}");
    }
}

#[test]
fn lethal_strikes_resolve_once() {
    let mut config = BossConfig::default();
    config.phase1.dodge_chance = 0.0;
    let mut sim = scenario(3).build(config).unwrap();
    sim.step();

    assert_eq!(sim.strike(5000.0), DefenseOutcome::Killed);
    assert_eq!(sim.strike(5000.0), DefenseOutcome::Ignored);
    assert_eq!(sim.boss().health(), 0.0);
    assert_eq!(sim.oracles().director.encounters_ended(), 1);
    assert!(sim.oracles().navigator.is_disabled());
}

#[test]
fn defeated_boss_requests_the_next_scene() {
    let summary = build(&overwhelming(21)).run_to_end();

    assert_eq!(summary.outcome, DuelOutcome::BossDefeated);
    assert_eq!(summary.boss_health, 0.0);
    assert_eq!(summary.next_scene.as_deref(), Some("MainMenu"));
    assert_eq!(summary.count("died"), 1);
    assert_eq!(summary.count("despawned"), 1);
    assert_eq!(summary.count("scene_transition"), 1);
    assert!(summary.count("phase_changed") >= 1);
}

#[test]
fn nightmare_preset_reaches_phase_three() {
    let config = ConfigLoader::preset(Preset::Nightmare).unwrap();
    let scenario = DuelScenario {
        time_limit: 120.0,
        ..overwhelming(13)
    };
    let summary = scenario.build(config).unwrap().run_to_end();

    assert_eq!(summary.outcome, DuelOutcome::BossDefeated);
    assert_eq!(summary.final_phase, Phase::Three);
    assert_eq!(summary.count("phase_changed"), 2);
}

#[test]
fn summary_serializes_to_json() {
    let summary = build(&overwhelming(4)).run_to_end();
    let json = summary.to_json().unwrap();
    assert!(json.contains("\"outcome\": \"boss_defeated\""));
    assert!(json.contains("\"final_phase\""));
}

#[tokio::test]
async fn lifecycle_topic_sees_the_death_sequence_in_order() {
    let frame_loop = FrameLoop::new(build(&overwhelming(8)));
    let mut lifecycle = frame_loop.bus().subscribe(Topic::Lifecycle);

    let summary = frame_loop.run().await;
    assert_eq!(summary.outcome, DuelOutcome::BossDefeated);

    let mut names = Vec::new();
    while let Ok(event) = lifecycle.try_recv() {
        names.push(event.record.event.name());
    }
    assert_eq!(names, vec!["died", "despawned", "scene_transition"]);
}

#[tokio::test(start_paused = true)]
async fn paced_loop_runs_until_the_time_limit() {
    let short = DuelScenario {
        time_limit: 1.0,
        ..scenario(2)
    };
    let summary = FrameLoop::new(build(&short))
        .paced(Duration::from_millis(16))
        .run()
        .await;

    assert_eq!(summary.outcome, DuelOutcome::TimedOut);
    assert!((60..=61).contains(&summary.frames), "{}", summary.frames);
}

#[tokio::test]
async fn stop_handle_ends_the_loop_early() {
    let frame_loop = FrameLoop::new(build(&scenario(2)));
    frame_loop.stop_handle().stop();

    let summary = frame_loop.run().await;
    assert_eq!(summary.frames, 0);
}
