//! Party fixtures and tampering helpers

use edseal_core::{NONCE_SIZE, TAG_SIZE};
use edseal_crypto::{to_x25519_priv, to_x25519_pub, Identity, SealResult};

use crate::vectors::{bytes32, ED25519_CONVERSIONS};

/// A party holding a known Ed25519 keypair
#[derive(Clone, Debug)]
pub struct Party {
    pub name: &'static str,
    pub seed: [u8; 32],
    pub public: [u8; 32],
}

impl Party {
    /// RFC 8032 TEST 1 keypair
    pub fn alice() -> Self {
        let v = &ED25519_CONVERSIONS[0];
        Party {
            name: "alice",
            seed: bytes32(v.ed25519_seed),
            public: bytes32(v.ed25519_pub),
        }
    }

    /// RFC 8032 TEST 2 keypair
    pub fn bob() -> Self {
        let v = &ED25519_CONVERSIONS[1];
        Party {
            name: "bob",
            seed: bytes32(v.ed25519_seed),
            public: bytes32(v.ed25519_pub),
        }
    }

    /// Deterministic party derived from a single seed byte
    pub fn from_byte(name: &'static str, byte: u8) -> Self {
        Party {
            name,
            ..Party::from_seed([byte; 32])
        }
    }

    /// Unnamed party for an arbitrary seed
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let identity = Identity::from_seed(&seed);
        Party {
            name: "anon",
            seed,
            public: identity.public_key_bytes(),
        }
    }

    /// Fresh random party
    pub fn random(name: &'static str) -> Self {
        let identity = Identity::generate();
        Party {
            name,
            seed: identity.seed_bytes(),
            public: identity.public_key_bytes(),
        }
    }

    pub fn x25519_priv(&self) -> SealResult<[u8; 32]> {
        to_x25519_priv(&self.seed)
    }

    pub fn x25519_pub(&self) -> SealResult<[u8; 32]> {
        to_x25519_pub(&self.public)
    }
}

/// Which part of a sealed message a byte belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Nonce,
    Ciphertext,
    Tag,
}

/// Classify byte `index` of a sealed message of length `len`
pub fn region_of(index: usize, len: usize) -> Region {
    if index < NONCE_SIZE {
        Region::Nonce
    } else if index + TAG_SIZE < len {
        Region::Ciphertext
    } else {
        Region::Tag
    }
}

/// Copy of `sealed` with one bit flipped
pub fn flip_bit(sealed: &[u8], byte: usize, bit: u8) -> Vec<u8> {
    let mut forged = sealed.to_vec();
    forged[byte] ^= 1 << (bit % 8);
    forged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_parties_convert() {
        let alice = Party::alice();
        let v = &ED25519_CONVERSIONS[0];
        assert_eq!(alice.x25519_priv().unwrap(), bytes32(v.x25519_priv));
        assert_eq!(alice.x25519_pub().unwrap(), bytes32(v.x25519_pub));
    }

    #[test]
    fn test_from_byte_is_stable() {
        let a = Party::from_byte("a", 9);
        let b = Party::from_byte("b", 9);
        assert_eq!(a.seed, b.seed);
        assert_eq!(a.public, b.public);
    }

    #[test]
    fn test_regions() {
        // 24-byte nonce, 4-byte ciphertext, 16-byte tag
        let len = 44;
        assert_eq!(region_of(0, len), Region::Nonce);
        assert_eq!(region_of(23, len), Region::Nonce);
        assert_eq!(region_of(24, len), Region::Ciphertext);
        assert_eq!(region_of(27, len), Region::Ciphertext);
        assert_eq!(region_of(28, len), Region::Tag);
        assert_eq!(region_of(43, len), Region::Tag);
    }

    #[test]
    fn test_flip_bit() {
        let data = [0u8; 4];
        assert_eq!(flip_bit(&data, 2, 3), vec![0, 0, 8, 0]);
    }
}
