//! Position sets packed into machine words
//!
//! Cell `i` (row-major, see [`Pos::to_index`]) lives at bit `i % 64` of word
//! `i / 64`. The padding bits above the last cell are always zero, so word
//! popcounts are cell counts.

use std::ops::BitOr;

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = TOTAL_CELLS.div_ceil(64);

/// Bits of the last word that map to real cells
const LAST_WORD_MASK: u64 = (1u64 << (TOTAL_CELLS % 64)) - 1;

#[inline]
fn locate(pos: Pos) -> (usize, u64) {
    let idx = pos.to_index();
    (idx / 64, 1u64 << (idx % 64))
}

/// A set of board positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    words: [u64; WORDS],
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    /// Add `pos`; returns `false` if it was already present
    #[inline]
    pub fn insert(&mut self, pos: Pos) -> bool {
        let (word, bit) = locate(pos);
        let fresh = self.words[word] & bit == 0;
        self.words[word] |= bit;
        fresh
    }

    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        let (word, bit) = locate(pos);
        self.words[word] &= !bit;
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        let (word, bit) = locate(pos);
        self.words[word] & bit != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == [0; WORDS]
    }

    /// Every cell not in the set
    pub fn complement(&self) -> Self {
        let mut words = self.words.map(|w| !w);
        words[WORDS - 1] &= LAST_WORD_MASK;
        Self { words }
    }

    /// Positions in the set, row-major
    pub fn iter(self) -> impl Iterator<Item = Pos> {
        self.words.into_iter().enumerate().flat_map(|(w, word)| {
            SetBits(word).map(move |bit| Pos::from_index(w * 64 + bit))
        })
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        let mut words = self.words;
        for (lhs, rhs) in words.iter_mut().zip(rhs.words) {
            *lhs |= rhs;
        }
        Self { words }
    }
}

/// Low-to-high bit offsets of one word
struct SetBits(u64);

impl Iterator for SetBits {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(bit)
    }
}
