//! Salted-hash stream derivation for engines without a native one.
//!
//! A child seed is the leading bits of
//! `H(DERIVATION_SALT || key || parent_seed)`, with key and seed absorbed as
//! big-endian fixed-width integers. After reseeding, the child is advanced
//! by the total population count of the digest words, so that engines
//! whose seeding spreads entropy poorly still start from a well-mixed
//! state.

use sha1::Sha1;

use crate::{Digest160, Engine, Word};

/// Salt absorbed ahead of every derivation input.
pub const DERIVATION_SALT: [u8; 16] = *b"cbrng-derivation";

/// Digest words for deriving a child of an engine seeded with `seed`.
#[must_use]
pub fn derivate_digest<W: Word, D: Digest160 + Default>(seed: W, key: W) -> [u32; 5] {
    let mut state = D::default();
    state.absorb(&DERIVATION_SALT);
    key.absorb_into(&mut state);
    seed.absorb_into(&mut state);
    state.digest_words()
}

/// Derives a child engine through SHA-1.
#[must_use]
pub fn derivate_engine<E: Engine>(engine: &E, key: E::Word) -> E {
    derivate_engine_with::<E, Sha1>(engine, key)
}

/// Derives a child engine through the digest `D`.
///
/// `engine` itself is not modified; the child is a reseeded clone.
#[must_use]
pub fn derivate_engine_with<E: Engine, D: Digest160 + Default>(engine: &E, key: E::Word) -> E {
    let digest = derivate_digest::<E::Word, D>(engine.seed_value(), key);

    let mut child = engine.clone();
    child.seed_with(E::Word::from_digest(&digest));

    let steps: u32 = digest.iter().map(|word| word.count_ones()).sum();
    for _ in 0..steps {
        child.next_word();
    }

    #[cfg(feature = "log")]
    log::debug!("derived engine through digest ({steps} mixing draws)");

    child
}
