//! edseal Crypto Engine - Sealed messages between Ed25519 key holders
//!
//! Provides:
//! - Constant-time arithmetic over GF(2^255 - 19)
//! - Ed25519 -> X25519 key conversion
//! - X25519 key exchange with low-order key rejection
//! - HKDF seal-key derivation and XChaCha20-Poly1305 sealing
//! - Ed25519 identities that seal and open messages

pub mod aead;
pub mod convert;
pub mod edwards;
pub mod field;
pub mod identity;
pub mod kdf;
pub mod montgomery;
pub mod seal;

pub use aead::*;
pub use convert::*;
pub use edwards::*;
pub use field::*;
pub use identity::*;
pub use kdf::*;
pub use montgomery::*;
pub use seal::*;

pub use edseal_core::{SealError, SealResult};
