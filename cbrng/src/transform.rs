//! Keyed block transforms driving a [`CounterEngine`](crate::CounterEngine).

use core::fmt::Debug;

use crate::Word;

/// Fixed-length array of limbs used for counters, keys and output blocks.
///
/// Blanket-implemented for every suitable array type.
pub trait Limbs<W: Word>:
    AsRef<[W]> + AsMut<[W]> + Copy + Default + Eq + Debug + Send + Sync
{
}

impl<W: Word, T> Limbs<W> for T where
    T: AsRef<[W]> + AsMut<[W]> + Copy + Default + Eq + Debug + Send + Sync
{
}

/// A keyed, stateless function from a counter block to a pseudorandom
/// block of the same shape.
///
/// Implementations must be pure: the same `(key, counter)` pair always
/// produces the same block.
pub trait BlockTransform {
    /// Limb type of keys, counters and blocks.
    type Word: Word;
    /// Counter (and output block) layout.
    type Counter: Limbs<Self::Word>;
    /// Key layout.
    type Key: Limbs<Self::Word>;

    /// Evaluates the transform.
    fn transform(key: &Self::Key, counter: &Self::Counter) -> Self::Counter;
}

/// Number of rounds a block transform runs.
pub trait Rounds: Copy + Debug + 'static {
    /// Round count.
    const COUNT: usize;
}

/// 13 rounds.
#[derive(Copy, Clone, Debug)]
pub struct R13;

impl Rounds for R13 {
    const COUNT: usize = 13;
}

/// 20 rounds.
#[derive(Copy, Clone, Debug)]
pub struct R20;

impl Rounds for R20 {
    const COUNT: usize = 20;
}
