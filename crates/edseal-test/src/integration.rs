//! End-to-end validation across the public API
//!
//! Runs published vectors, weak-key rejection and tamper detection
//! through the same entry points applications use.
