//! AEAD encryption using XChaCha20-Poly1305

use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    Key, XChaCha20Poly1305, XNonce,
};
use rand::{rngs::OsRng, RngCore};

use edseal_core::{SealError, SealResult, KEY_SIZE, NONCE_SIZE};

use crate::kdf::SealKey;

/// AEAD cipher wrapper
pub struct AeadCipher {
    cipher: XChaCha20Poly1305,
}

impl AeadCipher {
    /// Create a new cipher from key bytes
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        AeadCipher {
            cipher: XChaCha20Poly1305::new(Key::from_slice(key)),
        }
    }

    /// Create a cipher keyed by a derived seal key
    pub fn from_seal_key(key: &SealKey) -> Self {
        Self::new(key.as_bytes())
    }

    /// Encrypt plaintext with associated data
    /// Returns ciphertext with appended auth tag
    pub fn encrypt(&self, nonce: &[u8; NONCE_SIZE], aad: &[u8], plaintext: &[u8]) -> SealResult<Vec<u8>> {
        let nonce = XNonce::from_slice(nonce);

        // Only fails for plaintexts beyond the cipher's 256 GiB limit.
        self.cipher
            .encrypt(nonce, Payload { msg: plaintext, aad })
            .map_err(|_| SealError::PayloadTooLarge(plaintext.len()))
    }

    /// Decrypt ciphertext with associated data
    /// Ciphertext should include the auth tag at the end; nothing is
    /// returned unless the tag verifies
    pub fn decrypt(&self, nonce: &[u8; NONCE_SIZE], aad: &[u8], ciphertext: &[u8]) -> SealResult<Vec<u8>> {
        let nonce = XNonce::from_slice(nonce);

        self.cipher
            .decrypt(nonce, Payload { msg: ciphertext, aad })
            .map_err(|_| SealError::AuthenticationFailed)
    }
}

/// Draw a fresh random nonce from the OS
pub fn generate_nonce() -> SealResult<[u8; NONCE_SIZE]> {
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|_| SealError::EntropyUnavailable)?;
    Ok(nonce)
}
