//! X25519 Diffie-Hellman (RFC 7748)
//!
//! The ladder runs a fixed 255 iterations with constant-time swaps, so its
//! timing does not depend on the scalar. Any 32-byte string is accepted as
//! a u-coordinate; low-order inputs are caught by [`dh`] through the
//! all-zero output check.

use edseal_core::{SealError, SealResult, KEY_SIZE};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::field::FieldElement;

/// u-coordinate of the X25519 base point
pub const X25519_BASEPOINT: [u8; KEY_SIZE] = {
    let mut u = [0u8; KEY_SIZE];
    u[0] = 9;
    u
};

/// RFC 7748 clamping: clear bits 0-2 and 255, set bit 254
#[inline]
pub fn clamp_scalar(mut scalar: [u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
    scalar
}

/// The X25519 function: scalar multiplication of `u` by the clamped `k`.
///
/// Returns the raw result, including the all-zero output produced by
/// low-order points. Use [`dh`] for key agreement.
pub fn x25519(k: &[u8; KEY_SIZE], u: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    let mut scalar = clamp_scalar(*k);

    let x1 = FieldElement::from_bytes(u);
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;
    let mut swap = 0u8;

    for t in (0..255).rev() {
        let k_t = (scalar[t >> 3] >> (t & 7)) & 1;
        swap ^= k_t;
        FieldElement::conditional_swap(&mut x2, &mut x3, Choice::from(swap));
        FieldElement::conditional_swap(&mut z2, &mut z3, Choice::from(swap));
        swap = k_t;

        let a = x2 + z2;
        let aa = a.square();
        let b = x2 - z2;
        let bb = b.square();
        let e = aa - bb;
        let c = x3 + z3;
        let d = x3 - z3;
        let da = d * a;
        let cb = c * b;

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();
        x2 = aa * bb;
        z2 = e * (aa + FieldElement::A24 * e);
    }

    FieldElement::conditional_swap(&mut x2, &mut x3, Choice::from(swap));
    FieldElement::conditional_swap(&mut z2, &mut z3, Choice::from(swap));

    let out = (x2 * z2.invert()).to_bytes();

    scalar.zeroize();
    x2.zeroize();
    z2.zeroize();
    x3.zeroize();
    z3.zeroize();
    out
}

/// X25519 public key for a private scalar
pub fn x25519_base(k: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    x25519(k, &X25519_BASEPOINT)
}

/// Key agreement: [`x25519`] plus rejection of an all-zero shared secret.
pub fn dh(x25519_priv: &[u8; KEY_SIZE], x25519_pub: &[u8; KEY_SIZE]) -> SealResult<SharedSecret> {
    let shared = SharedSecret(x25519(x25519_priv, x25519_pub));

    if bool::from(shared.0[..].ct_eq(&[0u8; KEY_SIZE][..])) {
        tracing::warn!("rejecting all-zero shared secret from low-order public key");
        return Err(SealError::WeakSharedSecret);
    }

    Ok(shared)
}

/// Clamped X25519 private scalar, cleared on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct X25519Secret([u8; KEY_SIZE]);

impl X25519Secret {
    /// Wrap scalar bytes, clamping them
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        X25519Secret(clamp_scalar(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Matching X25519 public key
    pub fn public_key(&self) -> [u8; KEY_SIZE] {
        x25519_base(&self.0)
    }

    /// Key agreement with a peer's X25519 public key
    pub fn diffie_hellman(&self, peer: &[u8; KEY_SIZE]) -> SealResult<SharedSecret> {
        dh(&self.0, peer)
    }
}

impl std::fmt::Debug for X25519Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("X25519Secret").finish_non_exhaustive()
    }
}

/// Diffie-Hellman output, cleared on drop.
///
/// Only ever used as key-derivation input.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; KEY_SIZE]);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}
