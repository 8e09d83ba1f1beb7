use crate::data::DIRECTIONS;
use crate::deadlock::is_deadlock;
use crate::moves::Move;
use crate::puzzle::Puzzle;
use crate::state::GridState;

/// All legal successor states of `state` with the move that produced each.
///
/// Directions are tried in the fixed [`DIRECTIONS`] order and the result
/// keeps that order - it decides tie-breaking in both searches, so
/// statistics stay reproducible.
///
/// A push whose destination is a corner deadlock is pruned here, at
/// generation time, so dead states never reach a frontier.
pub fn generate_successors(puzzle: &Puzzle, state: &GridState) -> Vec<(GridState, Move)> {
    let mut successors = Vec::new();

    for &dir in &DIRECTIONS {
        let new_player_pos = state.player + dir;
        if puzzle.is_wall(new_player_pos) {
            continue;
        }

        if state.has_box(new_player_pos) {
            let push_dest = new_player_pos + dir;
            if puzzle.is_wall(push_dest) || state.has_box(push_dest) {
                continue;
            }
            if is_deadlock(push_dest, puzzle) {
                continue;
            }
            let pushed = state.push_box(new_player_pos, push_dest);
            successors.push((pushed, Move::new(dir, true)));
        } else {
            successors.push((state.walk(new_player_pos), Move::new(dir, false)));
        }
    }

    successors
}
