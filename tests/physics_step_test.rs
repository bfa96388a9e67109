//! Physics integration tests: Euler consistency, clock guards, bounds.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyward::constants::*;
use skyward::game::{logic, GamePhase, GameSession};

fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn active_session(rng: &mut ChaCha8Rng) -> GameSession {
    let mut session = GameSession::new(rng);
    session.start();
    session
}

#[test]
fn half_steps_approximate_a_full_step() {
    // Splitting dt in two halves lands within g·dt²/2 of the single step,
    // always undershooting it (velocity-first Euler accumulates less travel
    // with finer steps).
    for &dt in &[0.002, 0.01, 0.02, 0.05, 0.1] {
        for &v0 in &[-400.0, -100.0, 0.0, 150.0] {
            let mut rng = seeded_rng();
            let mut full = active_session(&mut rng);
            full.bird_vel = v0;
            let mut split = full.clone();

            logic::tick(&mut full, dt, &mut rng);
            logic::tick(&mut split, dt / 2.0, &mut rng);
            logic::tick(&mut split, dt / 2.0, &mut rng);

            // Same end velocity either way
            assert!((full.bird_vel - split.bird_vel).abs() < 1e-9);

            let diff = full.bird_y - split.bird_y;
            assert!(diff >= 0.0, "dt={} v0={}: split overshot", dt, v0);
            assert!(
                diff <= GRAVITY_ACCEL * dt * dt / 2.0 + 1e-9,
                "dt={} v0={}: diff {} too large",
                dt,
                v0,
                diff
            );
        }
    }
}

#[test]
fn trajectory_is_deterministic_for_a_seed() {
    let mut rng_a = seeded_rng();
    let mut rng_b = seeded_rng();
    let mut a = active_session(&mut rng_a);
    let mut b = active_session(&mut rng_b);

    for _ in 0..500 {
        logic::tick(&mut a, 0.01, &mut rng_a);
        logic::tick(&mut b, 0.01, &mut rng_b);
    }

    assert_eq!(a.bird_y, b.bird_y);
    assert_eq!(a.bird_vel, b.bird_vel);
    assert_eq!(a.pipe_offset, b.pipe_offset);
    assert_eq!(a.top_pipe_height, b.top_pipe_height);
    assert_eq!(a.phase, b.phase);
}

#[test]
fn a_stall_cannot_teleport_the_bird() {
    let mut rng = seeded_rng();
    let mut clamped = active_session(&mut rng);
    let mut stalled = clamped.clone();

    let mut rng2 = seeded_rng();
    logic::tick(&mut clamped, MAX_TICK_SECONDS, &mut rng);
    logic::tick(&mut stalled, 3600.0, &mut rng2);

    assert_eq!(clamped.bird_y, stalled.bird_y);
    assert_eq!(clamped.bird_vel, stalled.bird_vel);
    assert_eq!(clamped.pipe_offset, stalled.pipe_offset);
}

#[test]
fn bad_clock_samples_are_ignored() {
    let mut rng = seeded_rng();
    let mut session = active_session(&mut rng);
    let before = session.clone();

    logic::tick(&mut session, 0.0, &mut rng);
    logic::tick(&mut session, -1.0, &mut rng);
    logic::tick(&mut session, f64::NAN, &mut rng);

    assert_eq!(session.bird_y, before.bird_y);
    assert_eq!(session.bird_vel, before.bird_vel);
    assert_eq!(session.pipe_offset, before.pipe_offset);
    assert_eq!(session.phase, GamePhase::Active);
}

#[test]
fn overshooting_the_floor_clamps_to_the_floor_band() {
    let mut rng = seeded_rng();
    let mut session = active_session(&mut rng);
    // Well past the floor band (world height minus margin = 550)
    session.bird_y = 650.0;
    logic::tick(&mut session, 0.001, &mut rng);

    assert_eq!(session.phase, GamePhase::Stopped);
    assert_eq!(session.bird_y, WORLD_HEIGHT - FLOOR_MARGIN);
    assert_eq!(session.bird_vel, 0.0);
}

#[test]
fn shooting_past_the_ceiling_clamps_to_zero() {
    let mut rng = seeded_rng();
    let mut session = active_session(&mut rng);
    session.bird_y = 5.0;
    session.bird_vel = -400.0;
    logic::tick(&mut session, 0.05, &mut rng);

    assert_eq!(session.phase, GamePhase::Stopped);
    assert_eq!(session.bird_y, 0.0);
    assert_eq!(session.bird_vel, 0.0);
}
