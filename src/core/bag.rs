//! Bag module - 7-bag piece generation.
//!
//! Every run of 7 consecutive pieces is a shuffled permutation of the seven
//! tetromino types. Two bags are kept alive at all times so the 6-piece
//! preview never runs dry: when the primary bag empties, the secondary
//! becomes primary and a freshly shuffled bag takes its place.

use crate::core::rng::Mt64;
use crate::types::{TetrominoType, BAG_PIECE_TYPES, NUM_PREVIEW_PIECES};

/// One shuffled permutation of the seven piece types, consumed front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bag {
    pieces: [TetrominoType; 7],
    index: usize,
}

impl Bag {
    /// Create a shuffled bag, advancing the RNG deterministically.
    ///
    /// Fisher-Yates, ascending: swap index `i` with a uniform `j in [0, i]`.
    pub fn shuffled(rng: &mut Mt64) -> Self {
        let mut pieces = BAG_PIECE_TYPES;
        for i in 1..pieces.len() {
            let j = rng.next_range(i as u64 + 1) as usize;
            pieces.swap(i, j);
        }
        Self { pieces, index: 0 }
    }

    fn remaining(&self) -> &[TetrominoType] {
        &self.pieces[self.index..]
    }

    fn is_empty(&self) -> bool {
        self.index >= self.pieces.len()
    }

    fn take_next(&mut self) -> TetrominoType {
        let piece = self.pieces[self.index];
        self.index += 1;
        piece
    }
}

/// The pair of bags owned by a tetrion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BagQueue {
    bags: [Bag; 2],
}

impl BagQueue {
    /// Create two independently shuffled bags from the given RNG.
    pub fn new(rng: &mut Mt64) -> Self {
        Self {
            bags: [Bag::shuffled(rng), Bag::shuffled(rng)],
        }
    }

    /// Pop the next piece. Refills with a new shuffled bag when the primary
    /// bag has been consumed, keeping two bags alive at all times.
    pub fn next(&mut self, rng: &mut Mt64) -> TetrominoType {
        let piece = self.bags[0].take_next();
        if self.bags[0].is_empty() {
            self.bags[0] = self.bags[1];
            self.bags[1] = Bag::shuffled(rng);
        }
        piece
    }

    /// The upcoming pieces, in draw order. Two bags always hold at least
    /// eight undrawn pieces, so the preview is never short.
    pub fn preview(&self) -> [TetrominoType; NUM_PREVIEW_PIECES] {
        let mut preview = [TetrominoType::I; NUM_PREVIEW_PIECES];
        let upcoming = self.bags[0]
            .remaining()
            .iter()
            .chain(self.bags[1].remaining().iter());
        for (slot, &piece) in preview.iter_mut().zip(upcoming) {
            *slot = piece;
        }
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(pieces: &[TetrominoType]) -> bool {
        pieces.len() == 7 && BAG_PIECE_TYPES.iter().all(|kind| pieces.contains(kind))
    }

    #[test]
    fn test_shuffled_bag_is_permutation() {
        let mut rng = Mt64::new(42);
        for _ in 0..20 {
            let bag = Bag::shuffled(&mut rng);
            assert!(is_permutation(&bag.pieces));
        }
    }

    #[test]
    fn test_every_seven_draws_form_a_permutation() {
        let mut rng = Mt64::new(99);
        let mut queue = BagQueue::new(&mut rng);

        for _ in 0..10 {
            let mut drawn = Vec::with_capacity(7);
            for _ in 0..7 {
                drawn.push(queue.next(&mut rng));
            }
            assert!(is_permutation(&drawn));
        }
    }

    #[test]
    fn test_preview_matches_draw_order() {
        let mut rng = Mt64::new(7);
        let mut queue = BagQueue::new(&mut rng);

        for _ in 0..30 {
            let preview = queue.preview();
            let first = queue.next(&mut rng);
            assert_eq!(preview[0], first);
        }
    }

    #[test]
    fn test_preview_spans_bag_boundary() {
        let mut rng = Mt64::new(1234);
        let mut queue = BagQueue::new(&mut rng);

        // Drain six pieces so only one remains in the primary bag.
        for _ in 0..6 {
            queue.next(&mut rng);
        }
        let preview = queue.preview();
        let mut drawn = Vec::with_capacity(NUM_PREVIEW_PIECES);
        for _ in 0..NUM_PREVIEW_PIECES {
            drawn.push(queue.next(&mut rng));
        }
        assert_eq!(preview.to_vec(), drawn);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = Mt64::new(555);
        let mut rng2 = Mt64::new(555);
        let mut queue1 = BagQueue::new(&mut rng1);
        let mut queue2 = BagQueue::new(&mut rng2);

        for _ in 0..50 {
            assert_eq!(queue1.next(&mut rng1), queue2.next(&mut rng2));
        }
    }
}
