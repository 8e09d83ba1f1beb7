use fnv::FnvHashMap;

use crate::data::Pos;
use crate::distance::goal_distances;
use crate::puzzle::Puzzle;
use crate::state::GridState;

/// Interchangeable cost estimators for A*. The variant is picked once at
/// solve setup; the search only ever calls [`estimate`](Heuristic::estimate).
///
/// Estimates are `f64` so the unreachable-box sentinel can be
/// `f64::INFINITY` and still order correctly against finite f-scores.
#[derive(Debug, Clone)]
pub enum Heuristic {
    /// Sum over boxes of the minimum Manhattan distance to any goal.
    /// Ignores walls, so it's only truly admissible on obstacle-free grids,
    /// but it's cheap and needs no precomputation.
    Manhattan,
    /// Sum over boxes of the precomputed shortest goal distance. A box with
    /// no entry in the map can never reach a goal - the whole branch is
    /// dead and the estimate is infinite.
    StaticRelaxation(FnvHashMap<Pos, u32>),
    /// The static relaxation scaled by a depth-decaying weight
    /// `1 + (1 - depth / max_depth)` while `depth < max_depth`, 0 after.
    /// The weight is above 1 early on, which overestimates and voids A*'s
    /// optimality guarantee - solutions under this variant are approximate.
    DynamicRelaxation {
        distances: FnvHashMap<Pos, u32>,
        max_depth: u32,
    },
}

impl Heuristic {
    pub fn manhattan() -> Heuristic {
        Heuristic::Manhattan
    }

    pub fn static_relaxation(puzzle: &Puzzle) -> Heuristic {
        Heuristic::StaticRelaxation(goal_distances(puzzle))
    }

    pub fn dynamic_relaxation(puzzle: &Puzzle, max_depth: u32) -> Heuristic {
        Heuristic::DynamicRelaxation {
            distances: goal_distances(puzzle),
            max_depth,
        }
    }

    /// Estimated remaining cost of `state` at search depth `depth`.
    /// Non-negative; `f64::INFINITY` marks an unsolvable branch.
    pub fn estimate(&self, puzzle: &Puzzle, state: &GridState, depth: u32) -> f64 {
        match *self {
            Heuristic::Manhattan => manhattan_sum(puzzle, state),
            Heuristic::StaticRelaxation(ref distances) => relaxation_sum(distances, state),
            Heuristic::DynamicRelaxation {
                ref distances,
                max_depth,
            } => {
                if depth < max_depth {
                    let weight = 1.0 - f64::from(depth) / f64::from(max_depth);
                    (1.0 + weight) * relaxation_sum(distances, state)
                } else {
                    0.0
                }
            }
        }
    }
}

fn manhattan_sum(puzzle: &Puzzle, state: &GridState) -> f64 {
    if state.boxes().is_empty() || puzzle.goals.is_empty() {
        return 0.0;
    }

    let mut sum = 0;
    for &box_pos in state.boxes() {
        let mut min = i32::max_value();
        for &goal in &puzzle.goals {
            let dist = box_pos.dist(goal);
            if dist < min {
                min = dist;
            }
        }
        sum += min;
    }
    f64::from(sum)
}

fn relaxation_sum(distances: &FnvHashMap<Pos, u32>, state: &GridState) -> f64 {
    let mut sum = 0;
    for box_pos in state.boxes() {
        match distances.get(box_pos) {
            Some(&dist) => sum += dist,
            // no path from this box to any goal - dead branch
            None => return f64::INFINITY,
        }
    }
    f64::from(sum)
}
