//! Sizes of keys and of the sealed-message layout
//!
//! A sealed message is laid out as `nonce ‖ ciphertext ‖ tag`, where the
//! ciphertext is exactly as long as the plaintext.

use crate::{SealError, SealResult};

/// Size of every key handled by the engine (Ed25519 seed and public key,
/// X25519 scalar and u-coordinate, shared secret, derived seal key)
pub const KEY_SIZE: usize = 32;

/// Nonce size for XChaCha20-Poly1305
pub const NONCE_SIZE: usize = 24;

/// Tag size for XChaCha20-Poly1305
pub const TAG_SIZE: usize = 16;

/// Bytes a sealed message carries on top of its plaintext
pub const SEAL_OVERHEAD: usize = NONCE_SIZE + TAG_SIZE;

/// Length of the sealed message for a plaintext of `plaintext_len` bytes
#[inline]
pub const fn sealed_len(plaintext_len: usize) -> usize {
    plaintext_len + SEAL_OVERHEAD
}

/// Length of the plaintext inside a sealed message of `sealed_len` bytes,
/// or `None` if the message is too short to carry a nonce and a tag
#[inline]
pub const fn plaintext_len(sealed_len: usize) -> Option<usize> {
    sealed_len.checked_sub(SEAL_OVERHEAD)
}

/// Copy a key out of a caller-supplied buffer, rejecting anything that is
/// not exactly [`KEY_SIZE`] bytes
pub fn key_from_slice(bytes: &[u8]) -> SealResult<[u8; KEY_SIZE]> {
    bytes
        .try_into()
        .map_err(|_| SealError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })
}
