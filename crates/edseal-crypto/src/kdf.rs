//! Seal key derivation from a Diffie-Hellman shared secret

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use edseal_core::KEY_SIZE;

use crate::montgomery::SharedSecret;

/// Default HKDF info label; separates seal keys from other uses of the same secret
pub const DEFAULT_SEAL_INFO: &[u8] = b"edseal/v1/xchacha20poly1305";

/// Symmetric key for one (sender, receiver, config) combination, cleared on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SealKey([u8; KEY_SIZE]);

impl SealKey {
    /// Derive with HKDF-SHA256: ikm = shared secret, no salt, info = `info`
    pub fn derive(shared: &SharedSecret, info: &[u8]) -> Self {
        let hkdf = Hkdf::<Sha256>::new(None, shared.as_bytes());
        let mut key = [0u8; KEY_SIZE];
        // 32 bytes is far below HKDF-SHA256's 8160-byte output limit.
        let _ = hkdf.expand(info, &mut key);
        SealKey(key)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for SealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealKey").finish_non_exhaustive()
    }
}
