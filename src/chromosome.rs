//! Fixed-capacity bit-vector encoding of a subset selection.

use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;

/// Number of 64-bit words in a [`Chromosome`].
pub const CHROMOSOME_WORDS: usize = 16;

/// Largest number of subsets a [`Chromosome`] can encode.
pub const CHROMOSOME_WIDTH: usize = CHROMOSOME_WORDS * 64;

/// The bit-vector used by the genetic driver.
pub type Chromosome = BitVector<CHROMOSOME_WORDS>;

/// A bit-vector with `WORDS * 64` bits of capacity and a runtime active width.
///
/// Bit `i` set means subset `i` is selected. Bits at index `>= width` always
/// read as zero; every bulk operation masks them off before returning.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector<const WORDS: usize> {
    words: [u64; WORDS],
    width: usize,
}

impl<const WORDS: usize> BitVector<WORDS> {
    /// Total number of bits the type can hold.
    pub const CAPACITY: usize = WORDS * 64;

    /// Create an all-zero vector with the given active width.
    ///
    /// # Panics
    /// If `width` exceeds [`Self::CAPACITY`]; callers validate the instance first.
    pub fn new(width: usize) -> Self {
        assert!(
            width <= Self::CAPACITY,
            "width {} exceeds capacity {}",
            width,
            Self::CAPACITY
        );
        BitVector {
            words: [0; WORDS],
            width,
        }
    }

    /// Encode a set of subset ids. Ids at or beyond `width` are dropped.
    pub fn from_subsets(subset_ids: &BTreeSet<usize>, width: usize) -> Self {
        let mut bits = Self::new(width);
        for &id in subset_ids.range(..width) {
            bits.set(id);
        }
        bits
    }

    /// Every bit in the active width drawn true with probability `probability`.
    pub fn random<R: Rng>(width: usize, probability: f64, rng: &mut R) -> Self {
        let mut bits = Self::new(width);
        bits.random_fill(probability, rng);
        bits
    }

    /// Decode back to the set of selected subset ids.
    pub fn to_subsets(&self) -> BTreeSet<usize> {
        self.ones().collect()
    }

    /// Active width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Read bit `index`. Bits outside the active width read as zero.
    pub fn get(&self, index: usize) -> bool {
        index < self.width && self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Set bit `index`; ignored outside the active width.
    pub fn set(&mut self, index: usize) {
        if index < self.width {
            self.words[index / 64] |= 1u64 << (index % 64);
        }
    }

    /// Clear bit `index`.
    pub fn clear(&mut self, index: usize) {
        if index < self.width {
            self.words[index / 64] &= !(1u64 << (index % 64));
        }
    }

    /// Flip bit `index`; ignored outside the active width.
    pub fn flip(&mut self, index: usize) {
        if index < self.width {
            self.words[index / 64] ^= 1u64 << (index % 64);
        }
    }

    /// Assign bit `index`.
    pub fn assign(&mut self, index: usize, value: bool) {
        if value {
            self.set(index);
        } else {
            self.clear(index);
        }
    }

    /// Flip every bit, then re-mask the truncated region.
    pub fn flip_all(&mut self) {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
        self.truncate();
    }

    /// Replace the active bits with Bernoulli draws.
    pub fn random_fill<R: Rng>(&mut self, probability: f64, rng: &mut R) {
        if probability == 0.5 {
            for word in self.words.iter_mut() {
                *word = rng.gen();
            }
        } else {
            for i in 0..self.width {
                self.assign(i, rng.gen_bool(probability));
            }
        }
        self.truncate();
    }

    /// Zero every bit at index `>= width`.
    pub fn truncate(&mut self) {
        let full_words = self.width / 64;
        let rest = self.width % 64;

        if full_words < WORDS {
            self.words[full_words] &= if rest == 0 { 0 } else { (1u64 << rest) - 1 };
            for word in self.words[full_words + 1..].iter_mut() {
                *word = 0;
            }
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Bitwise xor of two vectors of the same width.
    pub fn xor(&self, other: &Self) -> Self {
        let mut words = [0; WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            *word = self.words[i] ^ other.words[i];
        }
        let mut result = BitVector {
            words,
            width: self.width.min(other.width),
        };
        result.truncate();
        result
    }

    /// Number of differing bit positions.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a ^ b).count_ones() as usize)
            .sum()
    }

    /// Indices of the set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(w, &word)| {
                let mut bits = word;
                std::iter::from_fn(move || {
                    if bits == 0 {
                        return None;
                    }
                    let offset = bits.trailing_zeros() as usize;
                    bits &= bits - 1;
                    Some(w * 64 + offset)
                })
            })
    }
}

impl<const WORDS: usize> fmt::Debug for BitVector<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = (0..self.width)
            .map(|i| if self.get(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVector[{}]({})", self.width, bits)
    }
}
