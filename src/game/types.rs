//! Session data structures.
//!
//! A real-time action game where the player flaps a bird through pipe gaps.
//! All coordinates are world units (see `constants`); the UI scales them to
//! terminal cells.

use crate::constants::*;
use rand::Rng;

/// Current phase of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the player to start. Physics paused.
    Ready,
    /// Simulation running.
    Active,
    /// Run ended (pipe hit or out of bounds). Awaiting reset.
    Stopped,
}

/// Axis-aligned bounding box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    /// Closed-interval overlap test: boxes that merely touch intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x <= other.x + other.width
            && other.x <= self.x + self.width
            && self.y <= other.y + other.height
            && other.y <= self.y + self.height
    }
}

/// Draw a fresh top-pipe height for a spawn or recycle.
pub fn random_top_height<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(TOP_PIPE_MIN_HEIGHT..TOP_PIPE_MAX_HEIGHT)
}

/// Main session state. Mutated only by `logic::tick` and the explicit
/// start/reset/flap actions below.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub phase: GamePhase,

    // Bird state
    /// Vertical position in world units. 0 = ceiling, increases downward.
    pub bird_y: f64,
    /// Vertical velocity in units/s (positive = downward).
    pub bird_vel: f64,
    /// Ticks remaining to show the flap animation. Render-only.
    pub flap_timer: u32,

    // Pipe state
    /// Horizontal offset of the pipe pair from its spawn point at the right
    /// world edge. Decreases as the pipe scrolls left; one pair in flight.
    pub pipe_offset: f64,
    /// Height of the top pipe segment.
    pub top_pipe_height: f64,
    /// One-shot flag: set once the current pipe has been scored.
    pub passed_pipe: bool,

    // Scoring
    pub score: u32,
    /// Best score of this process lifetime. Survives resets.
    pub high_score: u32,
}

impl GameSession {
    /// Create a session waiting in Ready with a randomized pipe.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            phase: GamePhase::Ready,
            bird_y: BIRD_START_Y,
            bird_vel: 0.0,
            flap_timer: 0,
            pipe_offset: 0.0,
            top_pipe_height: random_top_height(rng),
            passed_pipe: false,
            score: 0,
            high_score: 0,
        }
    }

    /// Begin the run. No-op unless waiting in Ready.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Active;
        }
    }

    /// Return to Ready for another run, with a fresh pipe. Preserves the
    /// high score. No-op unless the previous run has ended.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        if self.phase != GamePhase::Stopped {
            return;
        }
        self.phase = GamePhase::Ready;
        self.bird_y = BIRD_START_Y;
        self.bird_vel = 0.0;
        self.flap_timer = 0;
        self.pipe_offset = 0.0;
        self.top_pipe_height = random_top_height(rng);
        self.passed_pipe = false;
        self.score = 0;
    }

    /// Overwrite vertical velocity with the flap impulse. Takes effect
    /// immediately, without waiting for a tick boundary.
    pub fn flap(&mut self) {
        self.bird_vel = FLAP_VELOCITY;
        self.flap_timer = FLAP_ANIM_TICKS;
    }

    /// World-space x of the pipe pair's leading (left) edge.
    pub fn pipe_x(&self) -> f64 {
        WORLD_WIDTH + self.pipe_offset
    }

    /// Collision box for the bird, centered on its position. Smaller than
    /// the visible sprite.
    pub fn bird_box(&self) -> Aabb {
        Aabb {
            x: BIRD_X - BIRD_HITBOX / 2.0,
            y: self.bird_y - BIRD_HITBOX / 2.0,
            width: BIRD_HITBOX,
            height: BIRD_HITBOX,
        }
    }

    /// Collision box for the top pipe segment.
    pub fn top_pipe_box(&self) -> Aabb {
        Aabb {
            x: self.pipe_x(),
            y: 0.0,
            width: PIPE_WIDTH,
            height: self.top_pipe_height,
        }
    }

    /// Collision box for the bottom pipe segment. It fills the space below
    /// the gap; the height clamps to zero when the gap bottom falls past the
    /// world edge.
    pub fn bottom_pipe_box(&self) -> Aabb {
        let gap_bottom = self.top_pipe_height + PIPE_GAP;
        Aabb {
            x: self.pipe_x(),
            y: gap_bottom,
            width: PIPE_WIDTH,
            height: (WORLD_HEIGHT - gap_bottom).max(0.0),
        }
    }
}
