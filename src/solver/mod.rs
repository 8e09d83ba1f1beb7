mod a_star;
mod dfs;

use std::fmt::{self, Debug, Display, Formatter};

use log::debug;
use separator::Separatable;

use crate::heuristic::Heuristic;
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::state::GridState;

/// Search algorithm selector. A* additionally picks one of the three
/// heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Dfs,
    AStar(HeuristicKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    Manhattan,
    StaticRelaxation,
    DynamicRelaxation,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Dfs => write!(f, "dfs"),
            Method::AStar(HeuristicKind::Manhattan) => write!(f, "a-star-manhattan"),
            Method::AStar(HeuristicKind::StaticRelaxation) => {
                write!(f, "a-star-static-relaxation")
            }
            Method::AStar(HeuristicKind::DynamicRelaxation) => {
                write!(f, "a-star-dynamic-relaxation")
            }
        }
    }
}

/// Per-run knobs for A* (DFS ignores both).
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Nodes at this g-score are not expanded further - defends against
    /// runaway searches on large or unsolvable instances. Also the horizon
    /// of the dynamic-relaxation heuristic.
    pub max_depth: u32,
    /// Multiplier on successor h-scores. 1.0 is standard A*; larger values
    /// weight the heuristic more heavily, trading optimality for speed
    /// (weighted A*).
    pub epsilon: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            max_depth: 500,
            epsilon: 1.0,
        }
    }
}

/// Node counts reported with every solve, solved or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Incremented once per frontier pop.
    pub nodes_explored: u64,
    /// Incremented once per successor-generation call.
    pub nodes_expanded: u64,
    /// Starts at 1 (the initial state), incremented per newly created node.
    pub nodes_generated: u64,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Nodes explored: {}",
            self.nodes_explored.separated_string()
        )?;
        writeln!(
            f,
            "Nodes expanded: {}",
            self.nodes_expanded.separated_string()
        )?;
        writeln!(
            f,
            "Nodes generated: {}",
            self.nodes_generated.separated_string()
        )
    }
}

/// Result of one solve call. "No solution" is a value, not an error -
/// callers branch on `path_states`.
pub struct SolverOk {
    /// Start-to-goal states inclusive, or `None` when the frontier was
    /// exhausted (or the depth cap killed every branch).
    pub path_states: Option<Vec<GridState>>,
    /// Action labels matching `path_states`, for writers and animators.
    pub moves: Option<Moves>,
    pub stats: Stats,
    method: Method,
}

impl SolverOk {
    fn new(path_states: Option<Vec<GridState>>, stats: Stats, method: Method) -> Self {
        let moves = path_states.as_ref().map(|path| Moves::from_path(path));
        Self {
            path_states,
            moves,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path_states {
            None => writeln!(f, "No solution")?,
            Some(ref states) => writeln!(f, "{}: {} steps", self.method, states.len() - 1)?,
        }
        write!(f, "{}", self.stats)
    }
}

/// Run the selected search on one puzzle instance.
///
/// The call is synchronous and runs to completion; it owns all its working
/// sets, so concurrent calls on different instances don't interact. Callers
/// wanting responsiveness run it off the interactive thread.
pub fn solve(
    puzzle: &Puzzle,
    initial: &GridState,
    method: Method,
    options: SolverOptions,
) -> SolverOk {
    debug!("solving with {}", method);
    let (path, stats) = match method {
        Method::Dfs => dfs::search(puzzle, initial),
        Method::AStar(kind) => {
            let heuristic = match kind {
                HeuristicKind::Manhattan => Heuristic::manhattan(),
                HeuristicKind::StaticRelaxation => Heuristic::static_relaxation(puzzle),
                HeuristicKind::DynamicRelaxation => {
                    Heuristic::dynamic_relaxation(puzzle, options.max_depth)
                }
            };
            a_star::search(puzzle, initial, &heuristic, options)
        }
    };
    SolverOk::new(path, stats, method)
}
