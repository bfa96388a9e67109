//! Game logic: physics integration, pipe scrolling, collision detection,
//! scoring.

use super::types::{random_top_height, GamePhase, GameSession};
use crate::constants::*;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap (Space, Up or Enter). Doubles as the start action from Ready.
    Flap,
    /// Reset (R). Only honored after a run has ended.
    Reset,
    /// Any other key.
    Other,
}

/// Process player input. Takes effect immediately, between ticks.
pub fn process_input<R: Rng>(session: &mut GameSession, input: GameInput, rng: &mut R) {
    match input {
        GameInput::Flap => match session.phase {
            GamePhase::Ready => {
                session.start();
                session.flap();
            }
            GamePhase::Active => session.flap(),
            GamePhase::Stopped => {}
        },
        GameInput::Reset => session.reset(rng),
        GameInput::Other => {}
    }
}

/// Advance the simulation by `dt` seconds of wall-clock time.
///
/// One synchronous pass: integrate → bounds → pipe scroll/recycle →
/// collision → score. The pass runs to completion even when a terminal
/// condition fires partway through, so the scorer sees the same tick the
/// bounds check did.
pub fn tick<R: Rng>(session: &mut GameSession, dt: f64, rng: &mut R) {
    if session.phase != GamePhase::Active {
        return;
    }
    // A stalled or misbehaving clock must not blow up the integration
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }
    let dt = dt.min(MAX_TICK_SECONDS);

    // 1. Gravity, then position (semi-implicit Euler)
    session.bird_vel += GRAVITY_ACCEL * dt;
    session.bird_y += session.bird_vel * dt;

    // 2. Floor and ceiling end the run; both clamp and kill velocity
    check_bounds(session);

    // 3. Scroll the pipe pair; recycle once it fully clears the left edge
    session.pipe_offset -= PIPE_SCROLL_SPEED * dt;
    if session.pipe_offset <= -(WORLD_WIDTH + PIPE_WIDTH) {
        session.pipe_offset = 0.0;
        session.top_pipe_height = random_top_height(rng);
    }

    // 4. Pipe collision
    if check_collision(session) {
        session.phase = GamePhase::Stopped;
    }

    // 5. Scoring
    update_score(session);

    // 6. Flap animation countdown
    session.flap_timer = session.flap_timer.saturating_sub(1);
}

/// Clamp the bird to the floor band and the ceiling. Either bound stops the
/// run and zeroes velocity.
fn check_bounds(session: &mut GameSession) {
    let floor_y = WORLD_HEIGHT - FLOOR_MARGIN;
    if session.bird_y > floor_y {
        session.bird_y = floor_y;
        session.bird_vel = 0.0;
        session.phase = GamePhase::Stopped;
    }
    if session.bird_y <= 0.0 {
        session.bird_y = 0.0;
        session.bird_vel = 0.0;
        session.phase = GamePhase::Stopped;
    }
}

/// True if the bird's collision box intersects either pipe segment.
pub fn check_collision(session: &GameSession) -> bool {
    let bird = session.bird_box();
    bird.intersects(&session.top_pipe_box()) || bird.intersects(&session.bottom_pipe_box())
}

/// Score each pipe exactly once, as its trailing edge crosses the bird's
/// fixed column. The flag re-arms when a pipe's leading edge is ahead of the
/// bird again (i.e. the recycled pipe has respawned at the right edge).
fn update_score(session: &mut GameSession) {
    if session.pipe_x() + PIPE_WIDTH < BIRD_X && !session.passed_pipe {
        session.score += 1;
        session.passed_pipe = true;
        if session.score > session.high_score {
            session.high_score = session.score;
        }
    } else if session.pipe_x() > BIRD_X {
        session.passed_pipe = false;
    }
}
