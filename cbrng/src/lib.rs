//! Counter-based pseudorandom number generation.
//!
//! A [`CounterEngine`] turns a keyed, stateless [`BlockTransform`] into a
//! stream of words: the counter is incremented once per block, the block
//! transform is evaluated under the key, and the block's words are handed
//! out one at a time. Because each block is a pure function of
//! `(key, counter)`, the stream can be skipped forward in constant time
//! ([`CounterEngine::discard`]) and split into independent child streams
//! ([`CounterEngine::derivate`]).
//!
//! [`EngineMapper`] erases the concrete engine type behind a single owned
//! trait object so heterogeneous engines can be stored and passed around
//! uniformly. Its derivation works for any [`Engine`]: engines without a
//! native derivation are reseeded from a salted SHA-1 digest of their seed
//! and the derivation key (see [`derivation`]).
//!
//! The Threefry family from Salmon et al., "Parallel random numbers: as easy
//! as 1, 2, 3" (SC'11) is provided as the block transform.
//!
//! # Usage
//!
//! ```
//! use cbrng::{EngineMapper, Threefry4x64Engine};
//!
//! let mut rng = Threefry4x64Engine::from_word(1234);
//! assert_eq!(rng.generate(), 0x238a_8ae6_e91d_6b64);
//!
//! // skip far ahead without generating the intermediate blocks
//! rng.discard(1 << 100);
//!
//! // hand each worker its own stream
//! let parent = EngineMapper::new(rng);
//! let mut worker_0 = parent.derivate(0);
//! let mut worker_1 = parent.derivate(1);
//! assert_ne!(worker_0.generate(), worker_1.generate());
//! ```
//!
//! # Concurrency
//!
//! Engines are plain values with no interior synchronisation. Give every
//! thread its own stream by deriving one child per thread from a parent
//! held by the coordinating thread.
//!
//! # Features
//!
//! - `rng` (default): [`rand_core::RngCore`] for engines and mappers,
//!   `SeedableRng` for the Threefry engines, and `SeedableEngine` to put
//!   any `rand_core` generator behind an [`EngineMapper`].
//! - `zeroize`: wipe key, counter and buffered block when an engine drops.
//! - `log`: debug records on derivation and seeding failures.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

#[cfg(feature = "rng")]
pub use rand_core;
pub use sha1;

mod counter;
pub mod derivation;
mod digest;
mod engine;
mod error;
mod mapper;
#[cfg(feature = "rng")]
mod rng;
mod seed_seq;
mod threefry;
mod transform;
mod word;

pub use crate::{
    digest::Digest160,
    engine::CounterEngine,
    error::Error,
    mapper::{Engine, EngineMapper},
    seed_seq::{SeedSeq, SeedSequence},
    threefry::{Threefry2x64, Threefry4x64},
    transform::{BlockTransform, Limbs, R13, R20, Rounds},
    word::Word,
};

#[cfg(feature = "rng")]
pub use crate::rng::SeedableEngine;

/// Counter engine over Threefry-4x64 with 20 rounds.
pub type Threefry4x64Engine = CounterEngine<Threefry4x64<R20>>;

/// Counter engine over Threefry-2x64 with 20 rounds.
pub type Threefry2x64Engine = CounterEngine<Threefry2x64<R20>>;
