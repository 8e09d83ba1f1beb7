use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::state::GridState;

/// One player action - a walk or a push in some direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())?;
        } else {
            write!(f, "{}", self.dir)?;
        }
        Ok(())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// An ordered action sequence. Formats as `urdlURDL` - lowercase walks,
/// uppercase pushes.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    #[cfg(test)]
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    /// Derive the action labels from a state path by diffing consecutive
    /// states - the player moves by one tile per step and a step is a push
    /// iff the box set changed.
    ///
    /// Panics if consecutive states are not one legal move apart; paths
    /// returned by the searches always are.
    pub fn from_path(path: &[GridState]) -> Self {
        let mut moves = Vec::new();
        for pair in path.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let dx = next.player.x - prev.player.x;
            let dy = next.player.y - prev.player.y;
            let dir = Dir::from_offset(dx, dy)
                .unwrap_or_else(|| panic!("path states not adjacent: {:?} -> {:?}", prev, next));
            let is_push = prev.boxes() != next.boxes();
            moves.push(Move::new(dir, is_push));
        }
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![
            Move::new(Dir::Up, false),
            Move::new(Dir::Right, false),
            Move::new(Dir::Down, false),
            Move::new(Dir::Left, false),
            Move::new(Dir::Up, true),
            Move::new(Dir::Right, true),
            Move::new(Dir::Down, true),
            Move::new(Dir::Left, true),
        ]);
        assert_eq!(moves.to_string(), "urdlURDL");
    }

    #[test]
    fn counting() {
        let moves = Moves::new(vec![
            Move::new(Dir::Up, true),
            Move::new(Dir::Right, false),
            Move::new(Dir::Down, true),
        ]);
        assert_eq!(moves.move_cnt(), 3);
        assert_eq!(moves.push_cnt(), 2);
    }

    #[test]
    fn from_path_diffs_states() {
        let s0 = GridState::new(Pos::new(1, 1), vec![Pos::new(1, 3)]);
        let s1 = GridState::new(Pos::new(1, 2), vec![Pos::new(1, 3)]); // walk down
        let s2 = GridState::new(Pos::new(1, 3), vec![Pos::new(1, 4)]); // push down
        let moves = Moves::from_path(&[s0, s1, s2]);
        assert_eq!(moves.to_string(), "dD");
        assert_eq!(moves.push_cnt(), 1);
    }

    #[test]
    fn iterating() {
        let v = vec![Move::new(Dir::Up, false), Move::new(Dir::Down, true)];
        let moves = Moves::new(v.clone());

        let mut collected = Vec::new();
        for &m in &moves {
            collected.push(m);
        }
        for m in moves {
            collected.push(m);
        }
        assert_eq!(collected.len(), 4);
        for chunk in collected.chunks(2) {
            assert_eq!(chunk, &v[..]);
        }
    }
}
