use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use fnv::FnvHashSet;
use log::debug;
use typed_arena::Arena;

use crate::heuristic::Heuristic;
use crate::moves::Move;
use crate::puzzle::Puzzle;
use crate::state::GridState;
use crate::successor::generate_successors;
use crate::solver::{SolverOptions, Stats};

/// One node of the search tree. The arena owns every node; parent links are
/// plain references used only for path reconstruction, never for search
/// logic, and form a tree rooted at the initial node.
///
/// `g` and `h` are fixed at creation - nodes are never re-opened with a
/// cheaper g, so optimality holds only for consistent heuristics.
struct SearchNode<'a> {
    state: GridState,
    g: u32,
    h: f64,
    parent: Option<&'a SearchNode<'a>>,
    action: Option<Move>,
}

impl SearchNode<'_> {
    fn f(&self) -> f64 {
        f64::from(self.g) + self.h
    }
}

/// Priority-queue key: lowest f first, then lowest insertion sequence.
///
/// The sequence is strictly increasing, so among equal f-scores the
/// earlier-generated node is expanded first - stable, deterministic
/// ordering for reproducible traces. `total_cmp` keeps infinite h-scores
/// (dead branches) comparable without special cases.
struct HeapEntry<'a> {
    f: f64,
    seq: u64,
    node: &'a SearchNode<'a>,
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

pub(crate) fn search(
    puzzle: &Puzzle,
    initial: &GridState,
    heuristic: &Heuristic,
    options: SolverOptions,
) -> (Option<Vec<GridState>>, Stats) {
    let arena = Arena::new();
    run(&arena, puzzle, initial, heuristic, options)
}

fn run<'a>(
    arena: &'a Arena<SearchNode<'a>>,
    puzzle: &Puzzle,
    initial: &GridState,
    heuristic: &Heuristic,
    options: SolverOptions,
) -> (Option<Vec<GridState>>, Stats) {
    let mut stats = Stats::new();

    let mut to_visit = BinaryHeap::new();
    let mut visited: FnvHashSet<GridState> = FnvHashSet::default();
    let mut seq = 0;

    let start: &SearchNode<'_> = arena.alloc(SearchNode {
        state: initial.clone(),
        g: 0,
        h: heuristic.estimate(puzzle, initial, 0),
        parent: None,
        action: None,
    });
    stats.nodes_generated = 1;
    to_visit.push(Reverse(HeapEntry {
        f: start.f(),
        seq,
        node: start,
    }));

    let mut deepest = 0;
    while let Some(Reverse(entry)) = to_visit.pop() {
        let cur_node = entry.node;
        stats.nodes_explored += 1;

        if puzzle.solved(&cur_node.state) {
            debug!("a* solved at depth {}", cur_node.g);
            let path = reconstruct_path(puzzle, initial, cur_node);
            return (Some(path), stats);
        }

        // insert on pop and then skip duplicates - the first pop of a state
        // is its cheapest, later copies are stale
        if visited.contains(&cur_node.state) {
            continue;
        }
        visited.insert(cur_node.state.clone());
        stats.nodes_expanded += 1;

        if cur_node.g > deepest {
            deepest = cur_node.g;
            debug!("visited new depth: {}", deepest);
        }

        // depth cap - dead branch, don't expand
        if cur_node.g >= options.max_depth {
            continue;
        }

        for (next_state, action) in generate_successors(puzzle, &cur_node.state) {
            if visited.contains(&next_state) {
                continue;
            }
            let g = cur_node.g + 1;
            let h = options.epsilon * heuristic.estimate(puzzle, &next_state, g);
            let next: &SearchNode<'_> = arena.alloc(SearchNode {
                state: next_state,
                g,
                h,
                parent: Some(cur_node),
                action: Some(action),
            });
            seq += 1;
            stats.nodes_generated += 1;
            to_visit.push(Reverse(HeapEntry {
                f: next.f(),
                seq,
                node: next,
            }));
        }
    }

    debug!("a* exhausted the frontier");
    (None, stats)
}

/// Walk parent links back to the root collecting actions, then replay them
/// through the successor generator. The returned state sequence is derived
/// from the puzzle alone, so it's exactly reproducible.
fn reconstruct_path(
    puzzle: &Puzzle,
    initial: &GridState,
    goal_node: &SearchNode<'_>,
) -> Vec<GridState> {
    let mut actions = Vec::new();
    let mut cur = goal_node;
    while let Some(parent) = cur.parent {
        // the root is the only node without an action
        if let Some(action) = cur.action {
            actions.push(action);
        }
        cur = parent;
    }
    actions.reverse();

    let mut path = vec![initial.clone()];
    for action in actions {
        let prev = path.last().unwrap().clone();
        let (next, _) = generate_successors(puzzle, &prev)
            .into_iter()
            .find(|&(_, m)| m == action)
            .unwrap();
        path.push(next);
    }
    path
}
