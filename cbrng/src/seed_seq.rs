//! Seed sequences: expanding a small amount of entropy into key material.

use alloc::vec::Vec;

/// A source of 32-bit seed words.
pub trait SeedSequence {
    /// Fills a prefix of `dest` with seed words and returns how many were
    /// written.
    fn generate(&self, dest: &mut [u32]) -> usize;
}

/// Copies as many words as the slice holds.
impl SeedSequence for [u32] {
    fn generate(&self, dest: &mut [u32]) -> usize {
        let n = self.len().min(dest.len());
        dest[..n].copy_from_slice(&self[..n]);
        n
    }
}

impl<const N: usize> SeedSequence for [u32; N] {
    fn generate(&self, dest: &mut [u32]) -> usize {
        self.as_slice().generate(dest)
    }
}

/// Entropy expander with the mixing schedule of the standard `seed_seq`.
///
/// Any number of entropy words is spread over any number of output words;
/// every output word depends on every input word.
///
/// ```
/// use cbrng::{SeedSeq, SeedSequence};
///
/// let seq = SeedSeq::new([1, 2, 3, 4, 5]);
/// let mut out = [0u32; 10];
/// assert_eq!(seq.generate(&mut out), 10);
/// assert_eq!(out[0], 4204997637);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedSeq {
    entropy: Vec<u32>,
}

const INITIAL_FILL: u32 = 0x8b8b_8b8b;
const MULT_FIRST: u32 = 1_664_525;
const MULT_SECOND: u32 = 1_566_083_941;

#[inline(always)]
fn tempering(x: u32) -> u32 {
    x ^ (x >> 27)
}

impl SeedSeq {
    /// Creates a sequence over the given entropy words.
    #[must_use]
    pub fn new<I: IntoIterator<Item = u32>>(entropy: I) -> Self {
        Self {
            entropy: entropy.into_iter().collect(),
        }
    }

    /// Number of stored entropy words.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entropy.len()
    }

    /// Stored entropy words.
    #[must_use]
    pub fn param(&self) -> &[u32] {
        &self.entropy
    }
}

impl SeedSequence for SeedSeq {
    // entropy length and indices enter the mix modulo 2^32
    #[allow(clippy::cast_possible_truncation)]
    fn generate(&self, dest: &mut [u32]) -> usize {
        let n = dest.len();
        if n == 0 {
            return 0;
        }
        dest.fill(INITIAL_FILL);

        let s = self.entropy.len();
        let t = match n {
            623.. => 11,
            68.. => 7,
            39.. => 5,
            7.. => 3,
            _ => (n - 1) / 2,
        };
        let p = (n - t) / 2;
        let q = p + t;
        let m = (s + 1).max(n);

        for k in 0..m {
            let (a, b, c) = (k % n, (k + p) % n, (k + q) % n);
            let last = dest[(k + n - 1) % n];
            let r1 = MULT_FIRST.wrapping_mul(tempering(dest[a] ^ dest[b] ^ last));
            let r2 = match k {
                0 => r1.wrapping_add(s as u32),
                _ if k <= s => r1.wrapping_add(a as u32).wrapping_add(self.entropy[k - 1]),
                _ => r1.wrapping_add(a as u32),
            };
            dest[b] = dest[b].wrapping_add(r1);
            dest[c] = dest[c].wrapping_add(r2);
            dest[a] = r2;
        }

        for k in m..m + n {
            let (a, b, c) = (k % n, (k + p) % n, (k + q) % n);
            let last = dest[(k + n - 1) % n];
            let sum = dest[a].wrapping_add(dest[b]).wrapping_add(last);
            let r3 = MULT_SECOND.wrapping_mul(tempering(sum));
            let r4 = r3.wrapping_sub(a as u32);
            dest[b] ^= r3;
            dest[c] ^= r4;
            dest[a] = r4;
        }
        n
    }
}
