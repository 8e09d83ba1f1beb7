use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// A grid coordinate. `x` grows rightward, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    /// Manhattan distance.
    pub fn dist(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Enumeration order determines successor ordering and therefore search
/// tie-breaking - don't reorder.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub(crate) fn from_offset(dx: i32, dy: i32) -> Option<Dir> {
        match (dx, dy) {
            (0, -1) => Some(Dir::Up),
            (0, 1) => Some(Dir::Down),
            (-1, 0) => Some(Dir::Left),
            (1, 0) => Some(Dir::Right),
            _ => None,
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.offset();
        Pos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_offsets() {
        let pos = Pos::new(3, 4);
        assert_eq!(pos + Dir::Up, Pos::new(3, 3));
        assert_eq!(pos + Dir::Down, Pos::new(3, 5));
        assert_eq!(pos + Dir::Left, Pos::new(2, 4));
        assert_eq!(pos + Dir::Right, Pos::new(4, 4));
    }

    #[test]
    fn manhattan_dist() {
        assert_eq!(Pos::new(0, 0).dist(Pos::new(3, 4)), 7);
        assert_eq!(Pos::new(3, 4).dist(Pos::new(0, 0)), 7);
        assert_eq!(Pos::new(-1, 2).dist(Pos::new(1, -2)), 6);
    }

    #[test]
    fn offset_roundtrip() {
        for &dir in &DIRECTIONS {
            let (dx, dy) = dir.offset();
            assert_eq!(Dir::from_offset(dx, dy), Some(dir));
        }
        assert_eq!(Dir::from_offset(1, 1), None);
        assert_eq!(Dir::from_offset(0, 0), None);
    }
}
