use crate::data::{Dir, Pos};
use crate::puzzle::Puzzle;

/// Is a box at `pos` wedged into a wall corner it can never leave?
///
/// A box on a goal is never a deadlock. Otherwise the box is dead if two
/// perpendicular neighbors are walls (an L shape) - no push can ever move
/// it again.
///
/// This test is local, cheap and sound but incomplete: frozen pairs of
/// boxes, wall-line deadlocks and other compound deadlocks pass undetected
/// and the search explores them. Known limitation, kept intentionally.
pub fn is_deadlock(pos: Pos, puzzle: &Puzzle) -> bool {
    if puzzle.is_goal(pos) {
        return false;
    }

    let left = puzzle.is_wall(pos + Dir::Left);
    let right = puzzle.is_wall(pos + Dir::Right);
    let up = puzzle.is_wall(pos + Dir::Up);
    let down = puzzle.is_wall(pos + Dir::Down);

    (left && up) || (left && down) || (right && up) || (right && down)
}
