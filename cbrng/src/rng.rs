//! `rand_core` interoperability.

use core::fmt;

use rand_core::{Error, RngCore, SeedableRng, impls};

use crate::{
    BlockTransform, CounterEngine, Engine, EngineMapper, Rounds, Threefry2x64, Threefry4x64, Word,
};

impl<T: BlockTransform> RngCore for CounterEngine<T> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.generate().low_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        T::Word::draw_u64(|| self.generate())
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<W: Word> RngCore for EngineMapper<W> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.generate().low_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        W::draw_u64(|| self.generate())
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Adapts a `rand_core` generator into an [`Engine`] so that an
/// [`EngineMapper`] can own it.
///
/// Seeding goes through [`SeedableRng::seed_from_u64`] and the seed is
/// recorded for hash-based derivation; the default seed is zero. Words come
/// from the generator's `next_u32` or `next_u64`, whichever matches `W`.
///
/// ```
/// use cbrng::{
///     EngineMapper, SeedableEngine, Threefry2x64Engine,
///     rand_core::{RngCore, SeedableRng},
/// };
///
/// let engine = SeedableEngine::<Threefry2x64Engine>::new(5489);
/// let mut mapped = EngineMapper::new(engine);
/// let mut direct = Threefry2x64Engine::seed_from_u64(5489);
/// assert_eq!(mapped.generate(), direct.next_u32());
/// ```
#[derive(Clone)]
pub struct SeedableEngine<R, W: Word = u32> {
    rng: R,
    seed: W,
}

impl<R: SeedableRng, W: Word> SeedableEngine<R, W> {
    /// Creates a generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: W) -> Self {
        Self {
            rng: R::seed_from_u64(seed.to_u64()),
            seed,
        }
    }

    /// The wrapped generator.
    #[must_use]
    pub fn inner(&self) -> &R {
        &self.rng
    }

    /// Unwraps the generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R, W: Word> fmt::Debug for SeedableEngine<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SeedableEngine { .. }")
    }
}

impl<R, W> Engine for SeedableEngine<R, W>
where
    R: RngCore + SeedableRng + Clone + Send + 'static,
    W: Word,
{
    type Word = W;

    fn reset_seed(&mut self) {
        *self = Self::new(W::ZERO);
    }

    fn seed_with(&mut self, value: W) {
        *self = Self::new(value);
    }

    #[inline]
    fn next_word(&mut self) -> W {
        W::next_from(&mut self.rng)
    }

    fn seed_value(&self) -> W {
        self.seed
    }
}

fn key_from_le_bytes<const N: usize>(seed: &[u8]) -> [u64; N] {
    let mut key = [0u64; N];
    for (limb, chunk) in key.iter_mut().zip(seed.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(bytes);
    }
    key
}

/// The seed is the key, as little-endian 64-bit limbs.
impl<R: Rounds> SeedableRng for CounterEngine<Threefry4x64<R>> {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(key_from_le_bytes(&seed))
    }
}

/// The seed is the key, as little-endian 64-bit limbs.
impl<R: Rounds> SeedableRng for CounterEngine<Threefry2x64<R>> {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(key_from_le_bytes(&seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{R20, Threefry4x64Engine};
    use alloc::format;

    #[test]
    fn next_u64_is_one_word() {
        let mut a = Threefry4x64Engine::from_word(1234);
        let mut b = a.clone();
        assert_eq!(a.next_u64(), b.generate());
        assert_eq!(a.next_u32(), b.generate().low_u32());
    }

    #[test]
    fn fill_bytes_little_endian_words() {
        let mut a = Threefry4x64Engine::from_word(9);
        let mut b = a.clone();
        let mut buf = [0u8; 12];
        a.fill_bytes(&mut buf);
        assert_eq!(buf[..8], b.generate().to_le_bytes());
        assert_eq!(buf[8..], b.generate().to_le_bytes()[..4]);
    }

    #[test]
    fn seedable_engine_records_seed() {
        let mut engine = SeedableEngine::<Threefry4x64Engine, u64>::new(7);
        let mut direct = Threefry4x64Engine::seed_from_u64(7);
        assert_eq!(engine.seed_value(), 7);
        assert_eq!(engine.next_word(), direct.next_u64());

        engine.reset_seed();
        assert_eq!(engine.seed_value(), 0);
        let fresh = Threefry4x64Engine::seed_from_u64(0);
        assert_eq!(engine.inner(), &fresh);
    }

    #[test]
    fn seedable_engine_debug_is_redacted() {
        let engine = SeedableEngine::<Threefry4x64Engine>::new(1);
        assert_eq!(format!("{engine:?}"), "SeedableEngine { .. }");
    }

    #[test]
    fn from_seed_sets_key() {
        let mut seed = [0u8; 32];
        seed[0] = 1;
        seed[8] = 2;
        let rng = CounterEngine::<Threefry4x64<R20>>::from_seed(seed);
        assert_eq!(rng.key(), &[1, 2, 0, 0]);
    }
}
