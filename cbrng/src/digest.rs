//! 160-bit digest capability used by hash-based stream derivation.

/// Streaming hash with a 160-bit output.
///
/// Absorbing a byte sequence in one call or in many chunks yields the
/// same digest.
pub trait Digest160 {
    /// Feeds `bytes` into the hash state.
    fn absorb(&mut self, bytes: &[u8]);

    /// Consumes the hash state and returns the digest.
    #[must_use]
    fn digest(self) -> [u8; 20];

    /// Digest as five big-endian 32-bit words.
    #[must_use]
    fn digest_words(self) -> [u32; 5]
    where
        Self: Sized,
    {
        let bytes = self.digest();
        let mut words = [0u32; 5];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// One-shot digest of `bytes`.
    #[must_use]
    fn hash(bytes: &[u8]) -> [u8; 20]
    where
        Self: Default + Sized,
    {
        let mut state = Self::default();
        state.absorb(bytes);
        state.digest()
    }
}

/// SHA-1 from the RustCrypto `sha1` crate.
impl Digest160 for sha1::Sha1 {
    #[inline]
    fn absorb(&mut self, bytes: &[u8]) {
        sha1::Digest::update(self, bytes);
    }

    #[inline]
    fn digest(self) -> [u8; 20] {
        let out = sha1::Digest::finalize(self);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&out);
        bytes
    }
}
