//! Ed25519 -> X25519 key conversion
//!
//! The private side reuses Ed25519's own scalar derivation (SHA-512 of the
//! seed, low half, clamped), so the converted scalar is exactly the secret
//! behind the Ed25519 public key. The public side maps the Edwards point to
//! the Montgomery u-coordinate. Both halves therefore describe the same
//! X25519 keypair.

use edseal_core::{key_from_slice, SealResult, KEY_SIZE};
use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use crate::edwards::CompressedEdwardsY;
use crate::montgomery::{clamp_scalar, X25519Secret};

/// Convert a 32-byte Ed25519 seed into a clamped X25519 private scalar
pub fn to_x25519_priv(ed25519_priv: &[u8]) -> SealResult<[u8; KEY_SIZE]> {
    let mut seed = key_from_slice(ed25519_priv)?;
    let scalar = ed25519_seed_to_x25519(&seed);
    seed.zeroize();
    Ok(scalar)
}

/// Convert a 32-byte Ed25519 public key into an X25519 public key
pub fn to_x25519_pub(ed25519_pub: &[u8]) -> SealResult<[u8; KEY_SIZE]> {
    let key = key_from_slice(ed25519_pub)?;
    ed25519_public_to_x25519(&key)
}

/// Fixed-size form of [`to_x25519_priv`]
pub fn ed25519_seed_to_x25519(seed: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    let mut digest = Sha512::digest(seed);

    let mut scalar = [0u8; KEY_SIZE];
    scalar.copy_from_slice(&digest[..KEY_SIZE]);
    digest.as_mut_slice().zeroize();

    clamp_scalar(scalar)
}

/// Fixed-size form of [`to_x25519_priv`], wrapped so it is cleared on drop
pub fn ed25519_seed_to_x25519_secret(seed: &[u8; KEY_SIZE]) -> X25519Secret {
    X25519Secret::from_bytes(ed25519_seed_to_x25519(seed))
}

/// Fixed-size form of [`to_x25519_pub`]
pub fn ed25519_public_to_x25519(ed25519_pub: &[u8; KEY_SIZE]) -> SealResult<[u8; KEY_SIZE]> {
    CompressedEdwardsY(*ed25519_pub).decompress()?.to_montgomery()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::montgomery::{dh, x25519_base};
    use edseal_core::SealError;

    fn bytes32(hex_str: &str) -> [u8; 32] {
        hex::decode(hex_str).unwrap().try_into().unwrap()
    }

    // RFC 8032 §7.1 TEST 1 and TEST 2
    const SEED1: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const PK1: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const SEED2: &str = "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb";
    const PK2: &str = "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c";

    #[test]
    fn test_priv_known_value() {
        let scalar = to_x25519_priv(&bytes32(SEED1)).unwrap();
        assert_eq!(
            hex::encode(scalar),
            "307c83864f2833cb427a2ef1c00a013cfdff2768d980c0a3a520f006904de94f"
        );
    }

    #[test]
    fn test_pub_known_value() {
        let u = to_x25519_pub(&bytes32(PK2)).unwrap();
        assert_eq!(
            hex::encode(u),
            "25c704c594b88afc00a76b69d1ed2b984d7e22550f3ed0802d04fbcd07d38d47"
        );
    }

    #[test]
    fn test_halves_agree() {
        for (seed, pk) in [(SEED1, PK1), (SEED2, PK2)] {
            let scalar = to_x25519_priv(&bytes32(seed)).unwrap();
            let u = to_x25519_pub(&bytes32(pk)).unwrap();
            assert_eq!(x25519_base(&scalar), u);
        }
    }

    #[test]
    fn test_dh_symmetry_through_conversion() {
        let a_priv = to_x25519_priv(&bytes32(SEED1)).unwrap();
        let b_priv = to_x25519_priv(&bytes32(SEED2)).unwrap();
        let a_pub = to_x25519_pub(&bytes32(PK1)).unwrap();
        let b_pub = to_x25519_pub(&bytes32(PK2)).unwrap();

        let ab = dh(&a_priv, &b_pub).unwrap();
        let ba = dh(&b_priv, &a_pub).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(
            hex::encode(ab.as_bytes()),
            "5166f24a6918368e2af831a4affadd97af0ac326bdf143596c045967cc00230e"
        );
    }

    #[test]
    fn test_deterministic() {
        let seed = bytes32(SEED2);
        assert_eq!(to_x25519_priv(&seed).unwrap(), to_x25519_priv(&seed).unwrap());

        let pk = bytes32(PK1);
        assert_eq!(to_x25519_pub(&pk).unwrap(), to_x25519_pub(&pk).unwrap());
    }

    #[test]
    fn test_length_validation() {
        for len in [0usize, 16, 31, 33, 64] {
            let buf = vec![1u8; len];
            assert_eq!(
                to_x25519_priv(&buf).unwrap_err(),
                SealError::InvalidKeyLength {
                    expected: 32,
                    actual: len
                }
            );
            assert_eq!(
                to_x25519_pub(&buf).unwrap_err(),
                SealError::InvalidKeyLength {
                    expected: 32,
                    actual: len
                }
            );
        }
    }

    #[test]
    fn test_invalid_points() {
        // y = 2 is not on the curve
        let mut off_curve = [0u8; 32];
        off_curve[0] = 2;
        assert_eq!(to_x25519_pub(&off_curve).unwrap_err(), SealError::InvalidPoint);

        // identity, y = 1
        let mut identity = [0u8; 32];
        identity[0] = 1;
        assert_eq!(to_x25519_pub(&identity).unwrap_err(), SealError::InvalidPoint);
    }

    #[test]
    fn test_matches_dalek_conversion() {
        for seed in [[1u8; 32], [7u8; 32], bytes32(SEED1)] {
            let signing = ed25519_dalek::SigningKey::from_bytes(&seed);
            let verifying = signing.verifying_key();

            assert_eq!(
                to_x25519_priv(&seed).unwrap(),
                clamp_scalar(signing.to_scalar_bytes())
            );
            assert_eq!(
                to_x25519_pub(verifying.as_bytes()).unwrap(),
                verifying.to_montgomery().to_bytes()
            );
        }
    }

    #[test]
    fn test_secret_wrapper() {
        let seed = bytes32(SEED1);
        let secret = ed25519_seed_to_x25519_secret(&seed);
        assert_eq!(secret.as_bytes(), &ed25519_seed_to_x25519(&seed));
    }
}
