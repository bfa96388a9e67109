// World geometry (simulation units; the UI scales these to terminal cells)
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;
pub const FLOOR_MARGIN: f64 = 50.0;

// Bird
pub const BIRD_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = 300.0;
// The visible sprite is deliberately larger than the collision box
// (forgiving hitbox)
pub const BIRD_SIZE: f64 = 80.0;
pub const BIRD_HITBOX: f64 = 30.0;

// Physics
pub const GRAVITY_ACCEL: f64 = 1000.0; // units/s²
pub const FLAP_VELOCITY: f64 = -400.0; // velocity override, negative = upward

// Pipes
pub const PIPE_WIDTH: f64 = 100.0;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_SCROLL_SPEED: f64 = 300.0; // units/s
pub const TOP_PIPE_MIN_HEIGHT: f64 = 100.0;
pub const TOP_PIPE_MAX_HEIGHT: f64 = 500.0;

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 10; // 100 Hz nominal
// Clamp dt to 100ms max to prevent physics explosion after pause/lag
pub const MAX_TICK_SECONDS: f64 = 0.1;

// Flap animation duration in ticks (render-only)
pub const FLAP_ANIM_TICKS: u32 = 10;
