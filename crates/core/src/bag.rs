//! Bag module - shuffled, refillable piece sequence
//!
//! The bag holds an ordered list of upcoming pieces and a cursor. When the
//! cursor reaches the last two entries, those two are kept and a freshly
//! shuffled full set is appended behind them, so each refill cycle contains
//! every piece family exactly once and the bag never runs dry.
//!
//! Also provides a simple LCG so a seed fully determines the sequence.

use crate::types::{PieceKind, BAG_CARRY_OVER};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice in place (Fisher-Yates, last index down to 1)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Bag randomizer
#[derive(Debug, Clone)]
pub struct Bag {
    pieces: Vec<PieceKind>,
    cursor: usize,
    /// Set of pieces appended (shuffled) on every refill.
    set: Vec<PieceKind>,
    rng: SimpleRng,
    refills: u32,
}

impl Bag {
    /// Create a bag over all seven families
    pub fn new(seed: u32) -> Self {
        Self::with_set(seed, PieceKind::ALL.to_vec())
    }

    /// Create a bag over a custom set (e.g. forced shapes for testing).
    ///
    /// An empty set falls back to all seven families.
    pub fn with_set(seed: u32, set: Vec<PieceKind>) -> Self {
        let set = if set.is_empty() {
            PieceKind::ALL.to_vec()
        } else {
            set
        };
        let mut rng = SimpleRng::new(seed);
        let mut pieces = set.clone();
        rng.shuffle(&mut pieces);
        Self {
            pieces,
            cursor: 0,
            set,
            rng,
            refills: 0,
        }
    }

    /// Whether the next draw will refill first.
    pub fn needs_refill(&self) -> bool {
        self.cursor + BAG_CARRY_OVER >= self.pieces.len()
    }

    /// Keep the undrawn tail (the last two entries) and append a shuffled set.
    fn refill(&mut self) {
        let mut fresh = self.set.clone();
        self.rng.shuffle(&mut fresh);

        self.pieces.drain(..self.cursor);
        self.pieces.extend_from_slice(&fresh);
        self.cursor = 0;
        self.refills += 1;
        log::debug!("bag refilled: {:?}", self.pieces);
    }

    /// Draw the next piece, refilling first when only two remain.
    pub fn next(&mut self) -> PieceKind {
        if self.needs_refill() {
            self.refill();
        }
        let piece = self.pieces[self.cursor];
        self.cursor += 1;
        piece
    }

    /// Peek at the next piece without drawing it
    pub fn peek(&self) -> PieceKind {
        // `next` always leaves at least one undrawn entry behind the cursor.
        self.pieces[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pieces(&self) -> &[PieceKind] {
        &self.pieces
    }

    /// Pieces not drawn yet, in order.
    pub fn upcoming(&self) -> &[PieceKind] {
        &self.pieces[self.cursor..]
    }

    pub fn refills(&self) -> u32 {
        self.refills
    }

    /// Current RNG state (for restarting with a continued sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut kinds: Vec<PieceKind>) -> Vec<PieceKind> {
        kinds.sort_by_key(|k| k.as_str());
        kinds
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);
        let mut back = items.clone();
        back.sort();
        assert_eq!(back, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_initial_bag_is_full_set() {
        let bag = Bag::new(1);
        assert_eq!(bag.cursor(), 0);
        assert_eq!(sorted(bag.pieces().to_vec()), sorted(PieceKind::ALL.to_vec()));
    }

    #[test]
    fn test_refill_keeps_last_two() {
        let mut bag = Bag::new(3);
        for _ in 0..5 {
            bag.next();
        }
        assert_eq!(bag.cursor(), 5);
        assert!(bag.needs_refill());
        let tail = bag.upcoming().to_vec();
        assert_eq!(tail.len(), 2);

        let drawn = bag.next();
        assert_eq!(drawn, tail[0]);
        assert_eq!(bag.refills(), 1);
        assert_eq!(&bag.pieces()[..2], tail.as_slice());
        assert_eq!(bag.pieces().len(), 9);
        assert_eq!(bag.cursor(), 1);
    }

    #[test]
    fn test_peek_matches_next() {
        let mut bag = Bag::new(42);
        for _ in 0..30 {
            let peeked = bag.peek();
            assert_eq!(bag.next(), peeked);
        }
    }

    #[test]
    fn test_single_piece_set_never_runs_dry() {
        let mut bag = Bag::with_set(5, vec![PieceKind::O]);
        for _ in 0..20 {
            assert_eq!(bag.next(), PieceKind::O);
        }
    }
}
