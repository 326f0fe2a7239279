use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::Position;

/// Body cells the snake starts with, head first.
pub const START_BODY: [Position; 3] = [
    Position { x: 6, y: 9 },
    Position { x: 5, y: 9 },
    Position { x: 4, y: 9 },
];

/// Heading the snake starts with.
pub const START_DIRECTION: Direction = Direction::Right;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with the head at the front
    body: VecDeque<Position>,
    direction: Direction,
    pending_growth: bool,
}

impl Snake {
    /// Create a snake in the canonical starting position
    pub fn new() -> Self {
        Self {
            body: VecDeque::from(START_BODY),
            direction: START_DIRECTION,
            pending_growth: false,
        }
    }

    /// Create a snake from explicit body segments (front is head)
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_growth: false,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Current direction of movement
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Read-only view of the body cells
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Set the direction of movement.
    ///
    /// The caller must reject a direction opposite to the current one
    /// before calling this; the snake itself does not check.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Queue growth; takes effect on the next advance, not immediately
    pub fn request_growth(&mut self) {
        self.pending_growth = true;
    }

    /// Move one cell in the current direction.
    ///
    /// Prepends the new head. Keeps the tail and clears the growth flag
    /// if growth was requested, otherwise removes the tail so the body
    /// translates by one cell.
    pub fn advance(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.push_front(new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Put the snake back in the canonical starting position
    pub fn reset(&mut self) {
        self.body = VecDeque::from(START_BODY);
        self.direction = START_DIRECTION;
        self.pending_growth = false;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
