//! Terminal UI scenes.

pub mod game_common;
pub mod game_scene;

pub use game_scene::render_game;
