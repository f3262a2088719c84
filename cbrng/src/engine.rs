//! Counter-mode engine over a [`BlockTransform`].

use alloc::vec;
use core::fmt;

use crate::{BlockTransform, Error, Limbs, SeedSequence, Word, counter, word::seed_words_per_limb};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A seekable, derivable pseudorandom word stream built from a keyed block
/// transform.
///
/// The engine keeps a key, a counter, the last generated block and a
/// cursor counting the buffered words not yet emitted. When the buffer is
/// exhausted the counter is incremented and the block transform evaluated
/// once; the words of a block are then handed out starting from the last
/// limb. Exactly one counter increment happens per block length of words.
///
/// # Example
///
/// ```
/// use cbrng::Threefry4x64Engine;
///
/// let mut rng = Threefry4x64Engine::from_word(1234);
/// let first = rng.generate();
///
/// let mut skipped = Threefry4x64Engine::from_word(1234);
/// skipped.discard(10);
///
/// let mut stepped = Threefry4x64Engine::from_word(1234);
/// for _ in 0..10 {
///     stepped.generate();
/// }
/// assert_eq!(skipped.generate(), stepped.generate());
/// assert_ne!(first, 0);
///
/// // child streams for workers
/// let worker = rng.derivate_with(3);
/// assert_ne!(worker, rng);
/// ```
pub struct CounterEngine<T: BlockTransform> {
    key: T::Key,
    counter: T::Counter,
    buffer: T::Counter,
    cursor: usize,
}

impl<T: BlockTransform> CounterEngine<T> {
    /// Creates an engine with an explicit key; the counter starts at zero.
    #[must_use]
    pub fn new(key: T::Key) -> Self {
        Self {
            key,
            counter: T::Counter::default(),
            buffer: T::Counter::default(),
            cursor: 0,
        }
    }

    /// Creates an engine whose key has `value` in every limb.
    #[must_use]
    pub fn from_word(value: T::Word) -> Self {
        Self::new(broadcast(value))
    }

    /// Creates an engine keyed from a seed sequence.
    ///
    /// Each limb takes `Word::BITS / 32` consecutive seed words, least
    /// significant first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShortSeedSequence`] if the sequence writes fewer
    /// words than the key needs.
    pub fn from_seed_seq<S: SeedSequence + ?Sized>(seq: &S) -> Result<Self, Error> {
        let mut key = T::Key::default();
        let limbs = key.as_mut();
        let per_limb = seed_words_per_limb::<T::Word>();
        let required = limbs.len() * per_limb;

        let mut words = vec![0u32; required];
        let produced = seq.generate(&mut words);
        if produced < required {
            #[cfg(feature = "log")]
            log::debug!("short seed sequence ({produced} of {required} words)");
            return Err(Error::ShortSeedSequence { required, produced });
        }

        for (limb, chunk) in limbs.iter_mut().zip(words.chunks_exact(per_limb)) {
            *limb = T::Word::from_u32s(chunk);
        }
        Ok(Self::new(key))
    }

    /// Number of words in one block.
    #[inline]
    #[must_use]
    pub fn block_len() -> usize {
        T::Counter::default().as_ref().len()
    }

    /// Rewinds the stream: counter to zero, buffer emptied, key kept.
    pub fn seed(&mut self) {
        *self = Self::new(self.key);
    }

    /// Re-keys with `value` broadcast into every limb and rewinds.
    pub fn seed_with(&mut self, value: T::Word) {
        *self = Self::from_word(value);
    }

    /// Re-keys with an explicit key and rewinds.
    pub fn seed_key(&mut self, key: T::Key) {
        *self = Self::new(key);
    }

    /// Re-keys from a seed sequence and rewinds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShortSeedSequence`] if the sequence writes fewer
    /// words than the key needs; the engine is left unchanged.
    pub fn seed_seq<S: SeedSequence + ?Sized>(&mut self, seq: &S) -> Result<(), Error> {
        *self = Self::from_seed_seq(seq)?;
        Ok(())
    }

    /// Returns the next word of the stream.
    #[inline]
    pub fn generate(&mut self) -> T::Word {
        if self.cursor == 0 {
            self.refill();
        }
        self.cursor -= 1;
        self.buffer.as_ref()[self.cursor]
    }

    /// Drops any buffered words and returns the next whole block.
    ///
    /// The block is returned in transform layout, i.e. reversed with
    /// respect to the order [`generate`](Self::generate) emits it in.
    pub fn generate_block(&mut self) -> T::Counter {
        self.cursor = 0;
        counter::increment(self.counter.as_mut());
        T::transform(&self.key, &self.counter)
    }

    /// Advances the stream by `n` words.
    ///
    /// Equivalent to calling [`generate`](Self::generate) `n` times, but the
    /// whole-block part of the skip is a single multi-limb addition on the
    /// counter, so the cost does not depend on `n`.
    pub fn discard(&mut self, mut n: u128) {
        let buffered = self.cursor.min(usize::try_from(n).unwrap_or(usize::MAX));
        self.cursor -= buffered;
        n -= buffered as u128;

        let len = Self::block_len() as u128;
        counter::add(self.counter.as_mut(), n / len);
        for _ in 0..n % len {
            self.generate();
        }
    }

    /// Creates an independent engine from this one and `key`.
    ///
    /// The child depends on the whole parent state (key, counter and
    /// cursor) and on `key`: a copy of the parent is stepped once, its
    /// buffered block rotated left by the parent cursor and run through the
    /// transform under `key`; the result becomes the child key. The child
    /// starts from a zero counter. `self` is not modified.
    #[must_use]
    pub fn derivate(&self, key: &T::Key) -> Self {
        let mut child = self.clone();
        child.generate();
        child.key = *key;
        child.buffer.as_mut().rotate_left(self.cursor);

        let block = T::transform(&child.key, &child.buffer);

        #[cfg(feature = "log")]
        log::debug!(
            "derived counter engine (block_len {}, parent cursor {})",
            Self::block_len(),
            self.cursor
        );

        Self::new(key_from_block::<T>(&block))
    }

    /// [`derivate`](Self::derivate) with `value` broadcast into a key.
    #[must_use]
    pub fn derivate_with(&self, value: T::Word) -> Self {
        self.derivate(&broadcast(value))
    }

    /// Evaluates the block transform at `counter` under this engine's key,
    /// without touching the stream.
    #[must_use]
    pub fn block_at(&self, counter: &T::Counter) -> T::Counter {
        T::transform(&self.key, counter)
    }

    /// Current key.
    #[must_use]
    pub fn key(&self) -> &T::Key {
        &self.key
    }

    /// Counter of the most recently generated block.
    #[must_use]
    pub fn counter(&self) -> &T::Counter {
        &self.counter
    }

    /// Words still buffered from the most recent block.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Positions the stream at `counter` with an empty buffer; the next
    /// word comes from the block at `counter + 1`.
    pub fn set_counter(&mut self, counter: T::Counter) {
        self.counter = counter;
        self.cursor = 0;
    }

    #[inline]
    fn refill(&mut self) {
        counter::increment(self.counter.as_mut());
        self.buffer = T::transform(&self.key, &self.counter);
        self.cursor = self.buffer.as_ref().len();
    }
}

fn broadcast<W: Word, L: Limbs<W>>(value: W) -> L {
    let mut limbs = L::default();
    limbs.as_mut().fill(value);
    limbs
}

fn key_from_block<T: BlockTransform>(block: &T::Counter) -> T::Key {
    let mut key = T::Key::default();
    for (limb, word) in key.as_mut().iter_mut().zip(block.as_ref().iter().cycle()) {
        *limb = *word;
    }
    key
}

impl<T: BlockTransform> Default for CounterEngine<T> {
    fn default() -> Self {
        Self::new(T::Key::default())
    }
}

impl<T: BlockTransform> Clone for CounterEngine<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            counter: self.counter,
            buffer: self.buffer,
            cursor: self.cursor,
        }
    }
}

impl<T: BlockTransform> PartialEq for CounterEngine<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.counter == rhs.counter && self.cursor == rhs.cursor && self.key == rhs.key
    }
}

impl<T: BlockTransform> Eq for CounterEngine<T> {}

// Custom Debug implementation that does not expose the internal state
impl<T: BlockTransform> fmt::Debug for CounterEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CounterEngine { .. }")
    }
}

#[cfg(feature = "zeroize")]
impl<T: BlockTransform> Drop for CounterEngine<T> {
    fn drop(&mut self) {
        let limbs = self.key.as_mut().iter_mut();
        limbs.for_each(<T::Word as Word>::wipe);
        let limbs = self.counter.as_mut().iter_mut();
        limbs.for_each(<T::Word as Word>::wipe);
        let limbs = self.buffer.as_mut().iter_mut();
        limbs.for_each(<T::Word as Word>::wipe);
        self.cursor.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<T: BlockTransform> ZeroizeOnDrop for CounterEngine<T> {}
