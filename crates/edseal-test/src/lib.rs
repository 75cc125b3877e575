//! edseal Test Harness - Vectors and end-to-end validation
//!
//! This crate provides:
//! - RFC 7748 and RFC 8032 test vectors
//! - Named party fixtures with known keys
//! - Tampering helpers for sealed messages
//! - End-to-end integration tests across the public API

pub mod fixtures;
pub mod integration;
pub mod vectors;

pub use fixtures::*;
pub use vectors::*;
