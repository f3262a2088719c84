//! Stream properties of the counter engine.

use std::collections::HashSet;

use cbrng::{CounterEngine, R13, Threefry2x64Engine, Threefry4x64, Threefry4x64Engine};

fn step_then_draw(rng: &Threefry4x64Engine, n: u128) -> u64 {
    let mut stepped = rng.clone();
    for _ in 0..n {
        stepped.generate();
    }
    stepped.generate()
}

fn discard_then_draw(rng: &Threefry4x64Engine, n: u128) -> u64 {
    let mut skipped = rng.clone();
    skipped.discard(n);
    skipped.generate()
}

#[test]
fn discard_matches_stepping() {
    let block = Threefry4x64Engine::block_len() as u128;
    let amounts = [0, 1, block - 1, block, block + 1, 2 * block, 1009];

    for offset in 0..block {
        let mut rng = Threefry4x64Engine::from_word(77);
        rng.discard(offset);
        for &n in &amounts {
            assert_eq!(
                discard_then_draw(&rng, n),
                step_then_draw(&rng, n),
                "offset {offset}, n {n}"
            );
        }
    }
}

#[test]
fn discard_across_limb_carry() {
    let mut rng = Threefry4x64Engine::from_word(5);
    rng.set_counter([u64::MAX - 3, 0, 0, 0]);
    rng.generate();

    for n in [10, 17, 33] {
        assert_eq!(discard_then_draw(&rng, n), step_then_draw(&rng, n));
    }

    let mut skipped = rng.clone();
    skipped.discard(31);
    assert_eq!(skipped.counter(), &[4, 1, 0, 0]);
}

#[test]
fn discard_composes() {
    let big = (1u128 << 90) + 12_345;
    let small = 6_789;

    let mut once = Threefry4x64Engine::from_word(3);
    once.generate();
    let mut twice = once.clone();

    once.discard(big + small);
    twice.discard(big);
    twice.discard(small);
    assert_eq!(once, twice);
    assert_eq!(once.generate(), twice.generate());
}

#[test]
fn discard_full_limb_period() {
    let mut rng = Threefry4x64Engine::from_word(3);
    let block = Threefry4x64Engine::block_len() as u128;
    rng.discard(block << 64);
    assert_eq!(rng.counter(), &[0, 1, 0, 0]);
    assert_eq!(rng.cursor(), 0);
}

#[test]
fn block_matches_reversed_words() {
    let mut words = Threefry4x64Engine::from_word(2024);
    let mut blocks = words.clone();

    for _ in 0..8 {
        let mut drawn = [0u64; 4];
        for w in drawn.iter_mut() {
            *w = words.generate();
        }
        drawn.reverse();
        assert_eq!(drawn, blocks.generate_block());
    }
}

#[test]
fn seeding_round_trip() {
    let mut a = Threefry4x64Engine::default();
    let mut b = Threefry4x64Engine::default();
    a.generate();
    a.seed_with(42);
    b.seed_with(42);
    assert_eq!(a.generate(), b.generate());

    let mut c = Threefry2x64Engine::from_word(42);
    let mut d = Threefry2x64Engine::from_word(42);
    for _ in 0..100 {
        assert_eq!(c.generate(), d.generate());
    }
}

#[test]
fn derivation_is_deterministic() {
    let mut parent = Threefry4x64Engine::from_word(1234);
    parent.discard(7);
    let copy = parent.clone();

    let mut a = parent.derivate_with(99);
    let mut b = copy.derivate_with(99);
    for _ in 0..1000 {
        assert_eq!(a.generate(), b.generate());
    }
}

#[test]
fn derivation_keys_are_independent() {
    let parent = Threefry4x64Engine::from_word(1234);
    let mut a = parent.derivate_with(1);
    let mut b = parent.derivate_with(2);

    let first: HashSet<u64> = (0..1000).map(|_| a.generate()).collect();
    let collisions = (0..1000).filter(|_| first.contains(&b.generate())).count();
    assert_eq!(first.len(), 1000);
    assert_eq!(collisions, 0);
}

#[test]
fn derivation_leaves_parent_sequence() {
    let mut parent = Threefry4x64Engine::from_word(1234);
    let mut reference = parent.clone();
    parent.generate();
    reference.generate();

    let _child = parent.derivate_with(5);
    let _other = parent.derivate(&[1, 2, 3, 4]);

    for _ in 0..20 {
        assert_eq!(parent.generate(), reference.generate());
    }
}

#[test]
fn child_differs_from_parent() {
    let parent = Threefry4x64Engine::from_word(1234);
    let mut child = parent.derivate_with(1234);
    let mut parent = parent;

    let from_parent: HashSet<u64> = (0..256).map(|_| parent.generate()).collect();
    assert!((0..256).all(|_| !from_parent.contains(&child.generate())));
}

#[test]
fn reduced_rounds_differ() {
    let mut r13 = CounterEngine::<Threefry4x64<R13>>::from_word(1234);
    let mut r20 = Threefry4x64Engine::from_word(1234);
    assert_ne!(r13.generate(), r20.generate());
}
