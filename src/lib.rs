//! A Sokoban state-space search engine: immutable grid states, a legal-move
//! generator with corner-deadlock pruning, multi-source goal distances, and
//! DFS / A* searches with three interchangeable heuristics.
//!
//! The caller builds a [`Puzzle`] (walls, goals, dimensions) and an initial
//! [`GridState`], picks a [`Method`], and gets back an optional start-to-goal
//! path plus [`Stats`]. Level-file parsing, rendering and solution-file
//! output are collaborators, not part of this crate.

// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod data;
pub mod deadlock;
pub mod distance;
pub mod heuristic;
pub mod moves;
pub mod puzzle;
pub mod solver;
pub mod state;
pub mod successor;

pub use crate::data::{Dir, Pos, DIRECTIONS};
pub use crate::heuristic::Heuristic;
pub use crate::moves::{Move, Moves};
pub use crate::puzzle::Puzzle;
pub use crate::solver::{solve, HeuristicKind, Method, SolverOk, SolverOptions, Stats};
pub use crate::state::GridState;
