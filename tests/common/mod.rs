use std::collections::VecDeque;
use std::sync::OnceLock;

use fnv::FnvHashMap;

use eight_puzzle::Board;

/// Exact distance to the goal for every board that can reach it, found by
/// breadth-first search outward from the goal. Moves are reversible, so
/// distance from the goal equals distance to it.
pub fn goal_distances() -> &'static FnvHashMap<Board, u32> {
    static TABLE: OnceLock<FnvHashMap<Board, u32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut dist = FnvHashMap::default();
        let mut queue = VecDeque::new();
        dist.insert(Board::GOAL, 0);
        queue.push_back(Board::GOAL);

        while let Some(board) = queue.pop_front() {
            let d = dist[&board];
            for (_, next) in board.successors() {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    })
}
