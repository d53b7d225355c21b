use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::board::{Board, CELLS};
use crate::solvability::is_solvable;

/// Reproducible random source for a given seed.
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Shuffles the tiles uniformly until the arrangement is solvable.
///
/// Half of all permutations qualify, so this takes two draws on average.
pub fn generate_solvable_puzzle<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut tiles: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    let mut attempts = 0u32;

    loop {
        tiles.shuffle(rng);
        attempts += 1;

        // A shuffle of 0-8 is always a valid board.
        if let Ok(board) = Board::new(tiles) {
            if is_solvable(&board) {
                tracing::trace!(attempts, "generated solvable board");
                return board;
            }
        }
    }
}
