use fnv::FnvHashSet;

use log::debug;

use crate::puzzle::Puzzle;
use crate::state::GridState;
use crate::successor::generate_successors;
use crate::solver::Stats;

/// Exhaustive depth-first search with visited-set cycle avoidance.
///
/// The first solution reached in depth-first order wins - not necessarily
/// the shortest. Successors are pushed in direction-enumeration order, so
/// the whole exploration (and the statistics) is deterministic.
pub(crate) fn search(puzzle: &Puzzle, initial: &GridState) -> (Option<Vec<GridState>>, Stats) {
    let mut stats = Stats::new();

    let mut to_visit = vec![(initial.clone(), vec![initial.clone()])];
    let mut visited = FnvHashSet::default();
    visited.insert(initial.clone());
    stats.nodes_generated = 1;

    while let Some((state, path)) = to_visit.pop() {
        stats.nodes_explored += 1;

        if puzzle.solved(&state) {
            debug!("dfs solved at depth {}", path.len() - 1);
            return (Some(path), stats);
        }

        let successors = generate_successors(puzzle, &state);
        stats.nodes_expanded += 1;

        for (next_state, _) in successors {
            if !visited.contains(&next_state) {
                visited.insert(next_state.clone());
                stats.nodes_generated += 1;
                let mut next_path = path.clone();
                next_path.push(next_state.clone());
                to_visit.push((next_state, next_path));
            }
        }
    }

    debug!("dfs exhausted the frontier");
    (None, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;
    use fnv::FnvHashSet;

    // vertical corridor: player above a box above a goal
    fn corridor() -> (Puzzle, GridState) {
        let mut walls = FnvHashSet::default();
        for y in 0..5 {
            walls.insert(Pos::new(0, y));
            walls.insert(Pos::new(2, y));
        }
        walls.insert(Pos::new(1, 0));
        walls.insert(Pos::new(1, 4));
        let goals = [Pos::new(1, 3)].iter().cloned().collect();
        let puzzle = Puzzle::new(walls, goals, 3, 5);
        let initial = GridState::new(Pos::new(1, 1), vec![Pos::new(1, 2)]);
        (puzzle, initial)
    }

    #[test]
    fn single_push_corridor() {
        let (puzzle, initial) = corridor();
        let (path, stats) = search(&puzzle, &initial);

        let path = path.unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], initial);
        assert!(puzzle.solved(&path[1]));

        // one pop for the start, one for the goal; one expansion; the
        // initial node plus the single successor
        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.nodes_expanded, 1);
        assert_eq!(stats.nodes_generated, 2);
    }

    #[test]
    fn already_solved() {
        let (puzzle, _) = corridor();
        let solved = GridState::new(Pos::new(1, 1), vec![Pos::new(1, 3)]);
        let (path, stats) = search(&puzzle, &solved);

        assert_eq!(path.unwrap(), vec![solved]);
        assert_eq!(stats.nodes_explored, 1);
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.nodes_generated, 1);
    }

    #[test]
    fn unsolvable_reports_none() {
        // malformed on purpose: the goal tile is also a wall, so no push
        // can ever solve it - the search must exhaust and report None
        let mut walls: FnvHashSet<Pos> = FnvHashSet::default();
        for y in 0..5 {
            walls.insert(Pos::new(0, y));
            walls.insert(Pos::new(2, y));
        }
        walls.insert(Pos::new(1, 0));
        walls.insert(Pos::new(1, 4));
        walls.insert(Pos::new(1, 3)); // seals the goal room away
        let goals = [Pos::new(1, 3)].iter().cloned().collect();
        let puzzle = Puzzle::new(walls, goals, 3, 5);
        let initial = GridState::new(Pos::new(1, 1), vec![Pos::new(1, 2)]);

        let (path, stats) = search(&puzzle, &initial);
        assert!(path.is_none());
        assert!(stats.nodes_explored >= 1);
    }

    #[test]
    fn deterministic_stats() {
        let (puzzle, initial) = corridor();
        let (path_a, stats_a) = search(&puzzle, &initial);
        let (path_b, stats_b) = search(&puzzle, &initial);
        assert_eq!(path_a, path_b);
        assert_eq!(stats_a, stats_b);
    }
}
