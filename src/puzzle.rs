use fnv::FnvHashSet;

use crate::data::Pos;
use crate::state::GridState;

/// The static part of a puzzle instance. Immutable for the duration of a
/// solve call and shared by reference across all generated states.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub walls: FnvHashSet<Pos>,
    pub goals: FnvHashSet<Pos>,
    pub width: i32,
    pub height: i32,
}

impl Puzzle {
    pub fn new(
        walls: FnvHashSet<Pos>,
        goals: FnvHashSet<Pos>,
        width: i32,
        height: i32,
    ) -> Puzzle {
        Puzzle {
            walls,
            goals,
            width,
            height,
        }
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.walls.contains(&pos)
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.goals.contains(&pos)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// The goal predicate: every box is on a goal. Tests all boxes instead
    /// of all goals so puzzles with more goals than boxes still terminate.
    pub fn solved(&self, state: &GridState) -> bool {
        state.boxes().iter().all(|b| self.is_goal(*b))
    }
}
