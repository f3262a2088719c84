//! Fixed-width unsigned limbs.

use core::{fmt::Debug, hash::Hash};

use crate::digest::Digest160;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// A fixed-width unsigned integer used as one limb of a counter, key or
/// output block.
///
/// Implemented for `u32` and `u64` only.
pub trait Word:
    sealed::Sealed + Copy + Default + Eq + Ord + Hash + Debug + Send + Sync + 'static
{
    /// Width of the limb in bits.
    const BITS: u32;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Smallest value a generator can emit.
    const MIN: Self;
    /// Largest value a generator can emit.
    const MAX: Self;

    /// Wrapping (modular) addition.
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Keeps the low `BITS` bits of `value`.
    #[must_use]
    fn truncate(value: u128) -> Self;

    /// Number of set bits.
    #[must_use]
    fn count_ones(self) -> u32;

    /// Assembles a limb from `BITS / 32` words, least significant first.
    ///
    /// # Panics
    ///
    /// Panics if `words` holds fewer than `BITS / 32` words.
    #[must_use]
    fn from_u32s(words: &[u32]) -> Self;

    /// Builds a limb from the leading digest words, most significant first.
    #[must_use]
    fn from_digest(words: &[u32; 5]) -> Self;

    /// Feeds the limb into `digest` as big-endian bytes.
    fn absorb_into<D: Digest160>(self, digest: &mut D);

    /// Low 32 bits of the limb.
    #[must_use]
    fn low_u32(self) -> u32;

    /// Zero-extends the limb to 64 bits.
    #[must_use]
    fn to_u64(self) -> u64;

    /// Draws 64 bits from a stream of limbs.
    #[must_use]
    fn draw_u64<F: FnMut() -> Self>(next: F) -> u64;

    /// Draws one limb from a `rand_core` generator, using the generator's
    /// own word of matching width.
    #[cfg(feature = "rng")]
    #[must_use]
    fn next_from<R: rand_core::RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Overwrites the limb with zero in a way the optimizer keeps.
    #[cfg(feature = "zeroize")]
    fn wipe(&mut self);
}

impl Word for u32 {
    const BITS: u32 = u32::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = u32::MIN;
    const MAX: Self = u32::MAX;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    fn truncate(value: u128) -> Self {
        value as u32
    }

    #[inline(always)]
    fn count_ones(self) -> u32 {
        u32::count_ones(self)
    }

    #[inline]
    fn from_u32s(words: &[u32]) -> Self {
        words[0]
    }

    #[inline]
    fn from_digest(words: &[u32; 5]) -> Self {
        words[0]
    }

    #[inline]
    fn absorb_into<D: Digest160>(self, digest: &mut D) {
        digest.absorb(&self.to_be_bytes());
    }

    #[inline(always)]
    fn low_u32(self) -> u32 {
        self
    }

    #[inline(always)]
    fn to_u64(self) -> u64 {
        u64::from(self)
    }

    #[cfg(feature = "rng")]
    #[inline]
    fn next_from<R: rand_core::RngCore + ?Sized>(rng: &mut R) -> Self {
        rng.next_u32()
    }

    #[cfg(feature = "zeroize")]
    fn wipe(&mut self) {
        zeroize::Zeroize::zeroize(self);
    }

    #[inline]
    fn draw_u64<F: FnMut() -> Self>(mut next: F) -> u64 {
        let lo = u64::from(next());
        let hi = u64::from(next());
        (hi << 32) | lo
    }
}

impl Word for u64 {
    const BITS: u32 = u64::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = u64::MIN;
    const MAX: Self = u64::MAX;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    fn truncate(value: u128) -> Self {
        value as u64
    }

    #[inline(always)]
    fn count_ones(self) -> u32 {
        u64::count_ones(self)
    }

    #[inline]
    fn from_u32s(words: &[u32]) -> Self {
        u64::from(words[0]) | (u64::from(words[1]) << 32)
    }

    #[inline]
    fn from_digest(words: &[u32; 5]) -> Self {
        (u64::from(words[0]) << 32) | u64::from(words[1])
    }

    #[inline]
    fn absorb_into<D: Digest160>(self, digest: &mut D) {
        digest.absorb(&self.to_be_bytes());
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    fn low_u32(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self
    }

    #[cfg(feature = "rng")]
    #[inline]
    fn next_from<R: rand_core::RngCore + ?Sized>(rng: &mut R) -> Self {
        rng.next_u64()
    }

    #[inline]
    fn draw_u64<F: FnMut() -> Self>(mut next: F) -> u64 {
        next()
    }

    #[cfg(feature = "zeroize")]
    fn wipe(&mut self) {
        zeroize::Zeroize::zeroize(self);
    }
}

/// Number of 32-bit seed words needed to fill one limb of type `W`.
#[inline(always)]
pub(crate) const fn seed_words_per_limb<W: Word>() -> usize {
    (W::BITS / 32) as usize
}
