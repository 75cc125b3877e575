//! Identity management using Ed25519 keypairs

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;

use edseal_core::{key_from_slice, SealResult, KEY_SIZE};

use crate::convert::{ed25519_public_to_x25519, ed25519_seed_to_x25519_secret};
use crate::montgomery::X25519Secret;
use crate::seal;

/// Ed25519 keypair of a party that seals and opens messages
#[derive(Clone)]
pub struct Identity {
    signing_key: SigningKey,
    x25519_public: [u8; KEY_SIZE],
}

impl Identity {
    /// Generate a new random identity
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    /// Create identity from an existing Ed25519 seed
    pub fn from_seed(seed: &[u8; KEY_SIZE]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let x25519_public = ed25519_seed_to_x25519_secret(signing_key.as_bytes()).public_key();
        Identity {
            signing_key,
            x25519_public,
        }
    }

    /// Get the Ed25519 seed (secret)
    pub fn seed_bytes(&self) -> [u8; KEY_SIZE] {
        self.signing_key.to_bytes()
    }

    /// Get the Ed25519 public key
    pub fn public_key_bytes(&self) -> [u8; KEY_SIZE] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// X25519 form of the secret, cleared on drop
    pub fn x25519_secret(&self) -> X25519Secret {
        ed25519_seed_to_x25519_secret(self.signing_key.as_bytes())
    }

    /// X25519 form of the public key
    pub fn x25519_public(&self) -> [u8; KEY_SIZE] {
        self.x25519_public
    }

    /// Public half, for handing to peers
    pub fn to_public(&self) -> PublicIdentity {
        PublicIdentity {
            ed25519: self.public_key_bytes(),
            x25519: self.x25519_public,
        }
    }

    /// Seal `data` for `receiver`
    pub fn seal_for(&self, receiver: &PublicIdentity, data: &[u8]) -> SealResult<Vec<u8>> {
        seal::encrypt(self.signing_key.as_bytes(), &receiver.ed25519, data)
    }

    /// Open a message `sender` sealed for this identity
    pub fn open_from(&self, sender: &PublicIdentity, sealed: &[u8]) -> SealResult<Vec<u8>> {
        seal::decrypt(self.signing_key.as_bytes(), &sender.ed25519, sealed)
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("x25519_public", &self.x25519_public)
            .finish_non_exhaustive()
    }
}

/// Public identity of a peer, validated on construction
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicIdentity {
    ed25519: [u8; KEY_SIZE],
    x25519: [u8; KEY_SIZE],
}

impl PublicIdentity {
    /// Create from Ed25519 public key bytes; fails unless the key decodes
    /// to a curve point with a Montgomery image
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        let ed25519 = key_from_slice(bytes)?;
        let x25519 = ed25519_public_to_x25519(&ed25519)?;
        Ok(PublicIdentity { ed25519, x25519 })
    }

    /// Get the Ed25519 public key bytes
    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        self.ed25519
    }

    /// X25519 form of the public key
    pub fn x25519_public(&self) -> [u8; KEY_SIZE] {
        self.x25519
    }
}

impl std::fmt::Debug for PublicIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicIdentity")
            .field("ed25519", &self.ed25519)
            .finish()
    }
}
