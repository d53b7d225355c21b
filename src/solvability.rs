use crate::board::Board;

/// Number of tile pairs (blank excluded) that appear in the opposite order
/// to the goal.
pub fn count_inversions(board: &Board) -> usize {
    let tiles = board.tiles();
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// On a board of odd width every move keeps inversion parity, and the goal
/// has none, so only even-parity boards can reach it.
pub fn is_solvable(board: &Board) -> bool {
    count_inversions(board) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_has_no_inversions() {
        assert_eq!(count_inversions(&Board::GOAL), 0);
        assert!(is_solvable(&Board::GOAL));
    }

    #[test]
    fn swapped_pair_is_unsolvable() {
        let b = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert_eq!(count_inversions(&b), 1);
        assert!(!is_solvable(&b));
    }

    #[test]
    fn blank_is_ignored() {
        let b = Board::new([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        assert_eq!(count_inversions(&b), 0);
        assert!(is_solvable(&b));
    }

    #[test]
    fn reversed_tiles() {
        // 8 7 6 5 4 3 2 1: every pair inverted, 28 in total.
        let b = Board::new([8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        assert_eq!(count_inversions(&b), 28);
        assert!(is_solvable(&b));
    }
}
