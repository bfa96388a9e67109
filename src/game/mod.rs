//! Flight game: session state, physics, collision detection, scoring.

pub mod logic;
pub mod types;

// Re-exports form the library's public API; some are unused by the binary
// target, which shares this module source, so the deny-level unused_imports
// lint would otherwise reject the bin build.
#[allow(unused_imports)]
pub use logic::{process_input, tick, GameInput};
#[allow(unused_imports)]
pub use types::{Aabb, GamePhase, GameSession};
