use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

/// Width and height of the board.
pub const SIDE: usize = 3;
/// Number of cells, blank included.
pub const CELLS: usize = SIDE * SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order used by the search.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Displacement of the blank's linear index.
    pub fn as_offset(&self) -> isize {
        match self {
            Move::Up => -(SIDE as isize),
            Move::Down => SIDE as isize,
            Move::Left => -1,
            Move::Right => 1,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An arrangement of the tiles 0-8, 0 being the blank.
///
/// Boards are values: a move yields a new board, and two boards compare
/// and hash equal whenever their tiles match, regardless of how they were
/// reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    // Always the index of the 0 tile, so derived Eq/Hash stay structural.
    blank: u8,
}

impl Board {
    pub const GOAL: Board = Board {
        tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        blank: 8,
    };

    /// Builds a board, rejecting anything that is not a permutation of 0-8.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, PuzzleError> {
        let values: Vec<u32> = tiles.iter().map(|&t| t as u32).collect();
        Self::from_values(&values)
    }

    fn from_values(values: &[u32]) -> Result<Self, PuzzleError> {
        if values.len() != CELLS {
            return Err(PuzzleError::WrongLength { len: values.len() });
        }

        let mut tiles = [0u8; CELLS];
        let mut seen = [false; CELLS];
        let mut blank = 0;

        for (i, &value) in values.iter().enumerate() {
            if value as usize >= CELLS {
                return Err(PuzzleError::OutOfRange { value });
            }
            let tile = value as u8;
            if seen[tile as usize] {
                return Err(PuzzleError::Duplicate { value: tile });
            }
            seen[tile as usize] = true;
            tiles[i] = tile;
            if tile == 0 {
                blank = i as u8;
            }
        }

        Ok(Self { tiles, blank })
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Linear index of the blank.
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    /// Slides the blank one cell, or returns `None` if that would leave the
    /// board or wrap around a row edge.
    pub fn apply(&self, movement: Move) -> Option<Board> {
        let blank = self.blank();
        let col = blank % SIDE;

        match movement {
            Move::Left if col == 0 => return None,
            Move::Right if col == SIDE - 1 => return None,
            _ => {}
        }

        let target = blank as isize + movement.as_offset();
        if target < 0 || target >= CELLS as isize {
            return None;
        }

        let mut tiles = self.tiles;
        tiles.swap(blank, target as usize);
        Some(Board {
            tiles,
            blank: target as u8,
        })
    }

    /// Like [`Board::apply`], but an illegal move leaves the board unchanged.
    pub fn apply_move(&self, movement: Move) -> Board {
        self.apply(movement).unwrap_or(*self)
    }

    /// Legal successors in `Move::ALL` order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |m| self.apply(m).map(|next| (m, next)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::GOAL
    }
}

/// Plays `moves` from `board` one step at a time, skipping illegal ones.
pub fn replay(board: &Board, moves: &[Move]) -> Board {
    moves.iter().fold(*board, |b, &m| b.apply_move(m))
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Accepts nine tiles separated by commas and/or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<u32>().map_err(|_| PuzzleError::InvalidToken {
                    token: tok.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_values(&values)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(SIDE) {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
