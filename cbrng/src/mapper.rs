//! Runtime polymorphism over random engines.

use alloc::boxed::Box;
use core::fmt;

use crate::{BlockTransform, CounterEngine, Word, derivation};

/// A word-generating engine that can be wrapped in an [`EngineMapper`].
///
/// Only seeding and single-word generation are required. Generators
/// implementing `rand_core`'s `RngCore + SeedableRng` can be adapted with
/// `SeedableEngine` (feature `rng`).
/// [`derive_stream`](Engine::derive_stream) defaults to the salted-hash
/// protocol in [`derivation`]; engines with a native derivation override
/// it.
pub trait Engine: Clone + Send + 'static {
    /// Output word.
    type Word: Word;

    /// Resets to the engine's default seed.
    fn reset_seed(&mut self);

    /// Reseeds with `value`.
    fn seed_with(&mut self, value: Self::Word);

    /// Produces the next word.
    fn next_word(&mut self) -> Self::Word;

    /// The seed the engine was last seeded with.
    fn seed_value(&self) -> Self::Word;

    /// Creates an independent engine from this one and `key`.
    #[must_use]
    fn derive_stream(&self, key: Self::Word) -> Self {
        derivation::derivate_engine(self, key)
    }
}

/// Counter engines derive natively: see [`CounterEngine::derivate`].
impl<T: BlockTransform + 'static> Engine for CounterEngine<T> {
    type Word = T::Word;

    /// Rewinds the stream, keeping the key.
    fn reset_seed(&mut self) {
        self.seed();
    }

    fn seed_with(&mut self, value: T::Word) {
        CounterEngine::seed_with(self, value);
    }

    #[inline]
    fn next_word(&mut self) -> T::Word {
        self.generate()
    }

    /// First limb of the key.
    fn seed_value(&self) -> T::Word {
        let key = self.key().as_ref();
        key.first().copied().unwrap_or(T::Word::ZERO)
    }

    fn derive_stream(&self, key: T::Word) -> Self {
        self.derivate_with(key)
    }
}

// Object-safe view of an `Engine`; the vtable behind `EngineMapper`.
trait ErasedEngine<W: Word>: Send {
    fn reset_seed(&mut self);
    fn seed_with(&mut self, value: W);
    fn next_word(&mut self) -> W;
    fn seed_value(&self) -> W;
    fn clone_box(&self) -> Box<dyn ErasedEngine<W>>;
    fn derive_box(&self, key: W) -> Box<dyn ErasedEngine<W>>;
}

impl<E: Engine> ErasedEngine<E::Word> for E {
    fn reset_seed(&mut self) {
        Engine::reset_seed(self);
    }

    fn seed_with(&mut self, value: E::Word) {
        Engine::seed_with(self, value);
    }

    #[inline]
    fn next_word(&mut self) -> E::Word {
        Engine::next_word(self)
    }

    fn seed_value(&self) -> E::Word {
        Engine::seed_value(self)
    }

    fn clone_box(&self) -> Box<dyn ErasedEngine<E::Word>> {
        Box::new(self.clone())
    }

    fn derive_box(&self, key: E::Word) -> Box<dyn ErasedEngine<E::Word>> {
        Box::new(Engine::derive_stream(self, key))
    }
}

/// Type-erased owner of any [`Engine`] producing `W` words.
///
/// A mapper always holds an engine: there is no empty state to guard
/// against. Cloning deep-copies the wrapped engine.
///
/// # Example
///
/// ```
/// use cbrng::{EngineMapper, Threefry4x64Engine};
///
/// let mut parent = EngineMapper::new(Threefry4x64Engine::from_word(1234));
/// let mut workers: Vec<EngineMapper<u64>> = (0..4).map(|i| parent.derivate(i)).collect();
///
/// let a = workers[0].generate();
/// let b = workers[1].generate();
/// assert_ne!(a, b);
/// parent.generate();
/// ```
pub struct EngineMapper<W: Word = u32> {
    engine: Box<dyn ErasedEngine<W>>,
}

impl<W: Word> EngineMapper<W> {
    /// Takes ownership of `engine`.
    #[must_use]
    pub fn new<E: Engine<Word = W>>(engine: E) -> Self {
        Self {
            engine: Box::new(engine),
        }
    }

    /// Resets the wrapped engine to its default seed.
    pub fn seed(&mut self) {
        self.engine.reset_seed();
    }

    /// Reseeds the wrapped engine with `value`.
    pub fn seed_with(&mut self, value: W) {
        self.engine.seed_with(value);
    }

    /// Next word of the wrapped engine.
    #[inline]
    pub fn generate(&mut self) -> W {
        self.engine.next_word()
    }

    /// Seed the wrapped engine was last seeded with.
    #[must_use]
    pub fn seed_value(&self) -> W {
        self.engine.seed_value()
    }

    /// Creates a mapper over an independent engine derived from the wrapped
    /// one and `key`.
    ///
    /// Deterministic in the wrapped engine's state and `key`; `self` is
    /// not modified.
    #[must_use]
    pub fn derivate(&self, key: W) -> Self {
        Self {
            engine: self.engine.derive_box(key),
        }
    }

    /// Smallest value [`generate`](Self::generate) can return.
    #[must_use]
    pub fn min() -> W {
        W::MIN
    }

    /// Largest value [`generate`](Self::generate) can return.
    #[must_use]
    pub fn max() -> W {
        W::MAX
    }
}

impl<W: Word> Clone for EngineMapper<W> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone_box(),
        }
    }
}

impl<W: Word> fmt::Debug for EngineMapper<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EngineMapper { .. }")
    }
}

/// Mappers nest: wrapping a mapper forwards to the inner engine.
impl<W: Word> Engine for EngineMapper<W> {
    type Word = W;

    fn reset_seed(&mut self) {
        self.seed();
    }

    fn seed_with(&mut self, value: W) {
        EngineMapper::seed_with(self, value);
    }

    #[inline]
    fn next_word(&mut self) -> W {
        self.generate()
    }

    fn seed_value(&self) -> W {
        EngineMapper::seed_value(self)
    }

    fn derive_stream(&self, key: W) -> Self {
        self.derivate(key)
    }
}
