use std::collections::VecDeque;

use super::grid::Position;

/// True when the head sits exactly on the food cell
pub fn head_hits_food(head: Position, food: Position) -> bool {
    head == food
}

/// True when either head coordinate sits one cell outside the grid.
///
/// Cells 0 and cell_count - 1 are legal on each axis; exactly -1 and
/// cell_count count as a wall hit. The two axes are checked independently.
pub fn head_hits_edge(head: Position, cell_count: i32) -> bool {
    head.x == cell_count || head.x == -1 || head.y == cell_count || head.y == -1
}

/// True when the head equals any body cell behind it.
///
/// Compares the front cell against the rest of the body, skipping the
/// head itself.
pub fn head_hits_tail(body: &VecDeque<Position>) -> bool {
    let head = body[0];
    body.iter().skip(1).any(|&segment| segment == head)
}
