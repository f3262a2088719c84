//! Threefry block transforms.
//!
//! Threefry is the Threefish ARX permutation with the tweak removed and a
//! reduced round count, as described in "Parallel random numbers: as easy
//! as 1, 2, 3" (Salmon, Moraes, Dror, Shaw, SC'11). The counter is the
//! plaintext and the key is the cipher key; the output is one block of
//! the same width as the counter.

use core::marker::PhantomData;

use crate::{BlockTransform, R20, Rounds};

/// Threefish key schedule parity constant.
const SKEIN_KS_PARITY: u64 = 0x1BD1_1BDA_A9FC_1A22;

const ROTATIONS_4X64: [[u32; 2]; 8] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5, 37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];

const ROTATIONS_2X64: [u32; 8] = [16, 42, 12, 31, 16, 32, 24, 21];

/// Threefry over four 64-bit words.
#[derive(Copy, Clone, Debug)]
pub struct Threefry4x64<R: Rounds = R20>(PhantomData<R>);

/// Threefry over two 64-bit words.
#[derive(Copy, Clone, Debug)]
pub struct Threefry2x64<R: Rounds = R20>(PhantomData<R>);

#[inline(always)]
fn mix(x: &mut [u64], a: usize, b: usize, rot: u32) {
    x[a] = x[a].wrapping_add(x[b]);
    x[b] = x[b].rotate_left(rot) ^ x[a];
}

impl<R: Rounds> BlockTransform for Threefry4x64<R> {
    type Word = u64;
    type Counter = [u64; 4];
    type Key = [u64; 4];

    #[inline]
    fn transform(key: &[u64; 4], counter: &[u64; 4]) -> [u64; 4] {
        let mut ks = [0u64; 5];
        ks[..4].copy_from_slice(key);
        ks[4] = key.iter().fold(SKEIN_KS_PARITY, |acc, k| acc ^ k);

        let mut x = [0u64; 4];
        for i in 0..4 {
            x[i] = counter[i].wrapping_add(ks[i]);
        }

        for round in 0..R::COUNT {
            let [r0, r1] = ROTATIONS_4X64[round % 8];
            if round % 2 == 0 {
                mix(&mut x, 0, 1, r0);
                mix(&mut x, 2, 3, r1);
            } else {
                mix(&mut x, 0, 3, r0);
                mix(&mut x, 2, 1, r1);
            }

            // key injection every fourth round
            if round % 4 == 3 {
                let s = (round + 1) / 4;
                for i in 0..4 {
                    x[i] = x[i].wrapping_add(ks[(s + i) % 5]);
                }
                x[3] = x[3].wrapping_add(s as u64);
            }
        }
        x
    }
}

impl<R: Rounds> BlockTransform for Threefry2x64<R> {
    type Word = u64;
    type Counter = [u64; 2];
    type Key = [u64; 2];

    #[inline]
    fn transform(key: &[u64; 2], counter: &[u64; 2]) -> [u64; 2] {
        let ks = [key[0], key[1], SKEIN_KS_PARITY ^ key[0] ^ key[1]];
        let mut x = [
            counter[0].wrapping_add(ks[0]),
            counter[1].wrapping_add(ks[1]),
        ];

        for round in 0..R::COUNT {
            mix(&mut x, 0, 1, ROTATIONS_2X64[round % 8]);

            if round % 4 == 3 {
                let s = (round + 1) / 4;
                x[0] = x[0].wrapping_add(ks[s % 3]);
                x[1] = x[1].wrapping_add(ks[(s + 1) % 3]).wrapping_add(s as u64);
            }
        }
        x
    }
}
