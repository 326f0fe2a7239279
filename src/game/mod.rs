//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. The grid geometry, the snake, the food and the collision
//! rules live here; the window, audio and input collaborators do not.

pub mod direction;
pub mod food;
pub mod grid;
pub mod rules;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use direction::Direction;
pub use food::Food;
pub use grid::{cell_origin, Position, CELL_COUNT, CELL_SIZE, GRID_OFFSET, WINDOW_SIDE};
pub use snake::Snake;
pub use state::{Collision, GameState, TickOutcome};
