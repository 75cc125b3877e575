//! Sealed messages between Ed25519 key holders
//!
//! This module binds the key conversion and exchange with the AEAD:
//! - Both Ed25519 keys are converted to X25519 and combined into a shared secret
//! - The shared secret is run through HKDF to key XChaCha20-Poly1305
//! - A fresh random nonce is prepended, the tag appended
//!
//! Layout: `nonce (24) ‖ ciphertext (n) ‖ tag (16)`.

use edseal_core::{
    key_from_slice, SealError, SealResult, KEY_SIZE, NONCE_SIZE, SEAL_OVERHEAD, TAG_SIZE,
};
use zeroize::Zeroize;

use crate::aead::{generate_nonce, AeadCipher};
use crate::convert::{ed25519_public_to_x25519, ed25519_seed_to_x25519_secret};
use crate::kdf::{SealKey, DEFAULT_SEAL_INFO};

/// Sealing configuration. Sender and receiver must agree on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealConfig {
    /// HKDF info label used to derive the seal key
    pub info: Vec<u8>,
    /// Authenticate both parties' X25519 public keys as associated data
    pub bind_participants: bool,
}

impl Default for SealConfig {
    fn default() -> Self {
        SealConfig {
            info: DEFAULT_SEAL_INFO.to_vec(),
            bind_participants: true,
        }
    }
}

impl SealConfig {
    pub fn with_info(mut self, info: impl Into<Vec<u8>>) -> Self {
        self.info = info.into();
        self
    }

    pub fn with_participant_binding(mut self, bind: bool) -> Self {
        self.bind_participants = bind;
        self
    }
}

/// Borrowed view of a sealed message split into its parts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SealedMessage<'a> {
    nonce: &'a [u8; NONCE_SIZE],
    body: &'a [u8],
}

impl<'a> SealedMessage<'a> {
    /// Split a sealed buffer; fails if it cannot hold a nonce and a tag
    pub fn parse(data: &'a [u8]) -> SealResult<Self> {
        if data.len() < SEAL_OVERHEAD {
            return Err(SealError::MalformedInput {
                minimum: SEAL_OVERHEAD,
                actual: data.len(),
            });
        }

        let (nonce, body) = data.split_at(NONCE_SIZE);
        let nonce = nonce.try_into().map_err(|_| SealError::MalformedInput {
            minimum: SEAL_OVERHEAD,
            actual: data.len(),
        })?;

        Ok(SealedMessage { nonce, body })
    }

    pub fn nonce(&self) -> &'a [u8; NONCE_SIZE] {
        self.nonce
    }

    /// Ciphertext without the tag
    pub fn ciphertext(&self) -> &'a [u8] {
        &self.body[..self.body.len() - TAG_SIZE]
    }

    pub fn tag(&self) -> &'a [u8] {
        &self.body[self.body.len() - TAG_SIZE..]
    }

    /// Ciphertext followed by the tag, as the AEAD consumes it
    pub fn ciphertext_with_tag(&self) -> &'a [u8] {
        self.body
    }

    pub fn plaintext_len(&self) -> usize {
        self.body.len() - TAG_SIZE
    }
}

/// Seals and opens messages under a fixed configuration
#[derive(Clone, Debug, Default)]
pub struct Sealer {
    config: SealConfig,
}

impl Sealer {
    pub fn new() -> Self {
        Self::with_config(SealConfig::default())
    }

    pub fn with_config(config: SealConfig) -> Self {
        Sealer { config }
    }

    pub fn config(&self) -> &SealConfig {
        &self.config
    }

    /// Encrypt `plaintext` from the holder of `sender_priv` (Ed25519 seed)
    /// to the holder of `receiver_pub` (Ed25519 public key)
    pub fn encrypt(&self, sender_priv: &[u8], receiver_pub: &[u8], plaintext: &[u8]) -> SealResult<Vec<u8>> {
        let mut seed = key_from_slice(sender_priv)?;
        let receiver_pub = key_from_slice(receiver_pub)?;

        let sender_secret = ed25519_seed_to_x25519_secret(&seed);
        seed.zeroize();
        let receiver_x = ed25519_public_to_x25519(&receiver_pub)?;

        let shared = sender_secret.diffie_hellman(&receiver_x)?;
        let key = SealKey::derive(&shared, &self.config.info);
        let aad = self.associated_data(&sender_secret.public_key(), &receiver_x);

        let nonce = generate_nonce()?;
        let ciphertext = AeadCipher::from_seal_key(&key).encrypt(&nonce, &aad, plaintext)?;

        let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);

        tracing::debug!(
            plaintext_len = plaintext.len(),
            sealed_len = sealed.len(),
            bind_participants = self.config.bind_participants,
            "sealed message"
        );

        Ok(sealed)
    }

    /// Decrypt a message sealed by the holder of `sender_pub` for the holder
    /// of `receiver_priv`. No plaintext is returned unless the tag verifies.
    pub fn decrypt(&self, receiver_priv: &[u8], sender_pub: &[u8], sealed: &[u8]) -> SealResult<Vec<u8>> {
        let message = SealedMessage::parse(sealed)?;

        let mut seed = key_from_slice(receiver_priv)?;
        let sender_pub = key_from_slice(sender_pub)?;

        let receiver_secret = ed25519_seed_to_x25519_secret(&seed);
        seed.zeroize();
        let sender_x = ed25519_public_to_x25519(&sender_pub)?;

        let shared = receiver_secret.diffie_hellman(&sender_x)?;
        let key = SealKey::derive(&shared, &self.config.info);
        let aad = self.associated_data(&sender_x, &receiver_secret.public_key());

        let plaintext = AeadCipher::from_seal_key(&key)
            .decrypt(message.nonce(), &aad, message.ciphertext_with_tag())
            .map_err(|err| {
                tracing::warn!(sealed_len = sealed.len(), "sealed message failed authentication");
                err
            })?;

        tracing::debug!(plaintext_len = plaintext.len(), "opened sealed message");

        Ok(plaintext)
    }

    /// `sender_x25519 ‖ receiver_x25519`, or nothing when binding is off
    fn associated_data(&self, sender_x: &[u8; KEY_SIZE], receiver_x: &[u8; KEY_SIZE]) -> Vec<u8> {
        if !self.config.bind_participants {
            return Vec::new();
        }

        let mut aad = Vec::with_capacity(2 * KEY_SIZE);
        aad.extend_from_slice(sender_x);
        aad.extend_from_slice(receiver_x);
        aad
    }
}

/// Seal with the default configuration. See [`Sealer::encrypt`].
pub fn encrypt(sender_priv: &[u8], receiver_pub: &[u8], plaintext: &[u8]) -> SealResult<Vec<u8>> {
    Sealer::new().encrypt(sender_priv, receiver_pub, plaintext)
}

/// Open with the default configuration. See [`Sealer::decrypt`].
pub fn decrypt(receiver_priv: &[u8], sender_pub: &[u8], sealed: &[u8]) -> SealResult<Vec<u8>> {
    Sealer::new().decrypt(receiver_priv, sender_pub, sealed)
}
