use crate::data::Pos;

/// Immutable snapshot of the dynamic part of a puzzle: the player and the
/// boxes. Everything else (walls, goals) lives in [`Puzzle`](crate::Puzzle).
///
/// Boxes are sorted on construction to detect equal states when pushes
/// reorder them, so the state is its own canonical key for visited sets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridState {
    pub player: Pos,
    boxes: Vec<Pos>,
}

impl GridState {
    pub fn new(player: Pos, mut boxes: Vec<Pos>) -> GridState {
        boxes.sort();
        GridState { player, boxes }
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// New state with the box at `from` pushed to `to` and the player
    /// standing where the box was.
    pub(crate) fn push_box(&self, from: Pos, to: Pos) -> GridState {
        let mut boxes = self.boxes.clone();
        let i = self.boxes.binary_search(&from).unwrap();
        boxes[i] = to;
        GridState::new(from, boxes)
    }

    /// New state with only the player moved.
    pub(crate) fn walk(&self, to: Pos) -> GridState {
        GridState {
            player: to,
            boxes: self.boxes.clone(),
        }
    }
}
