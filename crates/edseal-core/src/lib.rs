//! edseal Core - Shared types for the sealing engine
//!
//! This crate defines what every other edseal crate agrees on:
//! - The error type (SealError) and result alias
//! - Key, nonce and tag sizes of the sealed-message layout

pub mod error;
pub mod sizes;

pub use error::*;
pub use sizes::*;
