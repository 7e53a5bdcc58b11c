use ndarray::Array2;
use ndarray_rand::rand_distr::WeightedIndex;
use ndarray_rand::RandomExt;
use rand::Rng;

use super::Board;
use crate::error::{Result, WordSearchError};

/// Tile faces paired with their relative frequency (per mille) in English text.
/// Q never shows up alone since almost every English Q is followed by a U.
const TILE_WEIGHTS: [(&str, u32); 26] = [
    ("A", 82), ("B", 15), ("C", 28), ("D", 43), ("E", 127), ("F", 22),
    ("G", 20), ("H", 61), ("I", 70), ("J", 2), ("K", 8), ("L", 40),
    ("M", 24), ("N", 67), ("O", 75), ("P", 19), ("QU", 1), ("R", 60),
    ("S", 63), ("T", 91), ("U", 28), ("V", 10), ("W", 24), ("X", 2),
    ("Y", 20), ("Z", 1),
];

/// Builds a `size` x `size` board with tiles drawn by letter frequency
pub fn random_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Board> {
    if size == 0 {
        return Err(WordSearchError::invalid("board size must be at least 1"));
    }
    let dist = WeightedIndex::new(TILE_WEIGHTS.iter().map(|(_, w)| *w))
        .map_err(|e| WordSearchError::invalid(e.to_string()))?;
    let faces: Array2<usize> = Array2::random_using((size, size), dist, rng);
    Board::from_tiles(faces.iter().map(|&i| TILE_WEIGHTS[i].0))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_random_board_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = random_board(5, &mut rng).unwrap();
        assert_eq!(board.size(), 5);
        for pos in board.positions() {
            let tile = board.tile(pos);
            assert!(TILE_WEIGHTS.iter().any(|(face, _)| *face == tile));
        }
    }

    #[test]
    fn test_seeded_boards_repeat() {
        let a = random_board(4, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_board(4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_board(0, &mut rng).is_err());
    }
}
