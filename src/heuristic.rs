//! Estimates of the number of moves left before a board reaches the goal.
//!
//! Every estimator here is admissible: it never reports more moves than the
//! shortest solution actually needs, so A* stays optimal with any of them.

use std::fmt;

use crate::board::{Board, SIDE};

/// Remaining-cost estimate used as `h(n)` by the search.
pub trait Heuristic {
    fn estimate(&self, board: &Board) -> u32;

    fn name(&self) -> &'static str;
}

/// Goal (row, col) of a non-blank tile.
fn goal_cell(tile: u8) -> (usize, usize) {
    let index = tile as usize - 1;
    (index / SIDE, index % SIDE)
}

/// Sum over tiles of the row and column distance to their goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board) -> u32 {
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, &tile)| {
                let (row, col) = (i / SIDE, i % SIDE);
                let (goal_row, goal_col) = goal_cell(tile);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// Number of tiles not on their goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

impl Heuristic for MisplacedTiles {
    fn estimate(&self, board: &Board) -> u32 {
        board
            .tiles()
            .iter()
            .zip(Board::GOAL.tiles())
            .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
            .count() as u32
    }

    fn name(&self) -> &'static str {
        "misplaced"
    }
}

/// Manhattan distance plus two moves for each tile that has to step out of
/// its goal row or column so the others in that line can pass it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearConflict;

impl LinearConflict {
    /// Tiles that must leave a line, given the goal offsets (along the line)
    /// of the tiles already in their goal line, in board order.
    fn removals(offsets: &[usize]) -> u32 {
        if offsets.is_empty() {
            return 0;
        }
        // Longest increasing run can stay; everyone else moves out.
        let mut longest = vec![1usize; offsets.len()];
        for i in 1..offsets.len() {
            for j in 0..i {
                if offsets[j] < offsets[i] {
                    longest[i] = longest[i].max(longest[j] + 1);
                }
            }
        }
        let keep = longest.iter().copied().max().unwrap_or(0);
        (offsets.len() - keep) as u32
    }

    fn conflicts(board: &Board) -> u32 {
        let tiles = board.tiles();
        let mut total = 0;

        for line in 0..SIDE {
            let row_offsets: Vec<usize> = (0..SIDE)
                .map(|col| tiles[line * SIDE + col])
                .filter(|&t| t != 0 && goal_cell(t).0 == line)
                .map(|t| goal_cell(t).1)
                .collect();
            let col_offsets: Vec<usize> = (0..SIDE)
                .map(|row| tiles[row * SIDE + line])
                .filter(|&t| t != 0 && goal_cell(t).1 == line)
                .map(|t| goal_cell(t).0)
                .collect();
            total += Self::removals(&row_offsets) + Self::removals(&col_offsets);
        }

        total
    }
}

impl Heuristic for LinearConflict {
    fn estimate(&self, board: &Board) -> u32 {
        Manhattan.estimate(board) + 2 * Self::conflicts(board)
    }

    fn name(&self) -> &'static str {
        "linear-conflict"
    }
}

/// Run-time choice between the estimators above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    MisplacedTiles,
    LinearConflict,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Manhattan,
        HeuristicKind::MisplacedTiles,
        HeuristicKind::LinearConflict,
    ];
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, board: &Board) -> u32 {
        match self {
            HeuristicKind::Manhattan => Manhattan.estimate(board),
            HeuristicKind::MisplacedTiles => MisplacedTiles.estimate(board),
            HeuristicKind::LinearConflict => LinearConflict.estimate(board),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => Manhattan.name(),
            HeuristicKind::MisplacedTiles => MisplacedTiles.name(),
            HeuristicKind::LinearConflict => LinearConflict.name(),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
