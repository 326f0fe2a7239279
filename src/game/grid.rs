use super::direction::Direction;

/// Number of cells along each side of the square playfield.
pub const CELL_COUNT: i32 = 25;

/// Side length of one cell in pixels.
pub const CELL_SIZE: i32 = 25;

/// Pixel margin between the window edge and the playfield.
pub const GRID_OFFSET: i32 = 75;

/// Window side length in pixels (margin on both sides of the playfield).
pub const WINDOW_SIDE: i32 = 2 * GRID_OFFSET + CELL_SIZE * CELL_COUNT;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Top-left pixel corner of a grid cell.
pub fn cell_origin(pos: Position) -> (f32, f32) {
    (
        (GRID_OFFSET + pos.x * CELL_SIZE) as f32,
        (GRID_OFFSET + pos.y * CELL_SIZE) as f32,
    )
}
