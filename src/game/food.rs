use std::collections::VecDeque;

use rand::Rng;

use super::grid::{Position, CELL_COUNT};

/// The food pellet on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Place food at an explicit cell
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawn food on a random cell not occupied by the snake
    pub fn spawn(rng: &mut impl Rng, occupied: &VecDeque<Position>) -> Self {
        Self {
            position: random_free_cell(rng, occupied),
        }
    }

    /// Move the food to a random cell not occupied by the snake
    pub fn respawn(&mut self, rng: &mut impl Rng, occupied: &VecDeque<Position>) {
        self.position = random_free_cell(rng, occupied);
    }
}

/// Sample uniformly random cells until one misses `occupied`.
///
/// Needs at least one free cell to terminate; the body can never cover
/// the whole grid at practical play lengths.
fn random_free_cell(rng: &mut impl Rng, occupied: &VecDeque<Position>) -> Position {
    loop {
        let x = rng.gen_range(0..CELL_COUNT);
        let y = rng.gen_range(0..CELL_COUNT);
        let cell = Position::new(x, y);

        if !occupied.contains(&cell) {
            return cell;
        }
    }
}
