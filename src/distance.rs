use std::collections::VecDeque;

use fnv::{FnvHashMap, FnvHashSet};

use crate::data::{Pos, DIRECTIONS};
use crate::puzzle::Puzzle;

/// Shortest hop distance from every tile to its nearest goal, computed by a
/// breadth-first expansion seeded from all goals at once (distance 0).
///
/// Walls and out-of-bounds tiles are never entered. Tiles unreachable from
/// any goal are absent from the map - callers treat absence as infinite
/// cost, not zero.
pub fn goal_distances(puzzle: &Puzzle) -> FnvHashMap<Pos, u32> {
    let mut distances = FnvHashMap::default();
    let mut visited = FnvHashSet::default();
    let mut frontier = VecDeque::new();

    for &goal in &puzzle.goals {
        distances.insert(goal, 0);
        visited.insert(goal);
        frontier.push_back((goal, 0));
    }

    while let Some((pos, dist)) = frontier.pop_front() {
        for &dir in &DIRECTIONS {
            let next = pos + dir;
            if puzzle.in_bounds(next) && !puzzle.is_wall(next) && !visited.contains(&next) {
                // first touch is final - BFS guarantees it's minimal
                visited.insert(next);
                distances.insert(next, dist + 1);
                frontier.push_back((next, dist + 1));
            }
        }
    }

    distances
}
