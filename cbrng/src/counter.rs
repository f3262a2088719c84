//! Multi-limb counter arithmetic.
//!
//! Counters are little-endian: limb 0 is the least significant. Both
//! operations wrap modulo `2^(BITS * limbs.len())`.

use crate::Word;

/// Adds one to the counter, propagating the carry.
#[inline]
pub(crate) fn increment<W: Word>(limbs: &mut [W]) {
    for limb in limbs.iter_mut() {
        *limb = limb.wrapping_add(W::ONE);
        if *limb != W::ZERO {
            break;
        }
    }
}

/// Adds `amount` to the counter in at most `limbs.len()` steps.
///
/// Each step adds the low `BITS` bits of the remaining amount into one
/// limb; the carry-out is detected by the sum wrapping below its previous
/// value and is folded into the amount for the next limb.
#[inline]
pub(crate) fn add<W: Word>(limbs: &mut [W], mut amount: u128) {
    for limb in limbs.iter_mut() {
        if amount == 0 {
            break;
        }
        let before = *limb;
        *limb = limb.wrapping_add(W::truncate(amount));
        let carry = u128::from(*limb < before);
        amount = (amount >> W::BITS) + carry;
    }
}
