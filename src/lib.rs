//! Snake - a grid arcade game
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, food, collision rules
//! - Frame loop assembly (app module) and tick pacing (ticker module)
//! - Window rendering (render module) and sound effects (audio module)
//! - Keyboard input mapping (input module)
//! - Session score tracking (metrics module)

pub mod app;
pub mod audio;
pub mod config;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
pub mod ticker;
