//! Skyward - Terminal Flappy Bird
//!
//! This module exposes the simulation for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod game;
