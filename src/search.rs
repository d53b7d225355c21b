//! A* search from a board to the goal.
//!
//! The frontier is a min-heap ordered by `f = g + h`. Ties go to the entry
//! with the smaller `h` (the one that looks closer to the goal), then to the
//! one pushed first. A state is expanded at most once: it joins the visited
//! set when it is extracted, and later frontier entries for it are dropped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fnv::FnvHashSet;

use crate::board::{Board, Move};
use crate::heuristic::Heuristic;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and expanded.
    pub expanded: usize,
    /// Entries pushed onto the frontier, the start included.
    pub generated: usize,
    /// Largest frontier size seen.
    pub max_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Moves from the start to the goal, or `None` if the goal is unreachable.
    pub moves: Option<Vec<Move>>,
    pub stats: SearchStats,
}

/// A node in the search arena. The path is recovered through `parent`.
struct SearchNode {
    board: Board,
    parent: Option<usize>,
    via: Option<Move>,
    depth: u32,
}

/// Frontier entry. Field order gives the tie-break: `f`, then `h`, then
/// arena index, which grows with insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ScoredNode {
    f: u32,
    h: u32,
    node_index: usize,
}

fn extract_moves(arena: &[SearchNode], terminal: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut current = Some(terminal);
    while let Some(idx) = current {
        if let Some(m) = arena[idx].via {
            moves.push(m);
        }
        current = arena[idx].parent;
    }
    moves.reverse();
    moves
}

/// Shortest move sequence from `start` to the goal.
///
/// Returns an empty sequence when `start` is already solved, and `None` once
/// every state reachable from `start` has been expanded without meeting the
/// goal, which happens exactly for unsolvable boards.
pub fn solve(start: &Board, heuristic: &dyn Heuristic) -> Option<Vec<Move>> {
    solve_with_stats(start, heuristic).moves
}

pub fn solve_with_stats(start: &Board, heuristic: &dyn Heuristic) -> SearchOutcome {
    let mut stats = SearchStats::default();
    let mut visited: FnvHashSet<Board> = FnvHashSet::default();
    let mut arena: Vec<SearchNode> = Vec::new();
    let mut frontier: BinaryHeap<Reverse<ScoredNode>> = BinaryHeap::new();

    let h = heuristic.estimate(start);
    arena.push(SearchNode {
        board: *start,
        parent: None,
        via: None,
        depth: 0,
    });
    frontier.push(Reverse(ScoredNode {
        f: h,
        h,
        node_index: 0,
    }));
    stats.generated = 1;
    stats.max_frontier = 1;

    while let Some(Reverse(scored)) = frontier.pop() {
        let index = scored.node_index;
        let board = arena[index].board;

        if board.is_goal() {
            let moves = extract_moves(&arena, index);
            tracing::debug!(
                heuristic = heuristic.name(),
                expanded = stats.expanded,
                generated = stats.generated,
                length = moves.len(),
                "solution found"
            );
            return SearchOutcome {
                moves: Some(moves),
                stats,
            };
        }

        if !visited.insert(board) {
            continue;
        }
        stats.expanded += 1;

        let depth = arena[index].depth + 1;
        for (m, next) in board.successors() {
            if visited.contains(&next) {
                continue;
            }
            let h = heuristic.estimate(&next);
            let node_index = arena.len();
            arena.push(SearchNode {
                board: next,
                parent: Some(index),
                via: Some(m),
                depth,
            });
            frontier.push(Reverse(ScoredNode {
                f: depth + h,
                h,
                node_index,
            }));
            stats.generated += 1;
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    tracing::debug!(
        heuristic = heuristic.name(),
        expanded = stats.expanded,
        "frontier exhausted without reaching the goal"
    );
    SearchOutcome { moves: None, stats }
}
