//! Key derivation and management
//!
//! This module owns the opaque key handles, the derivation-path engine and
//! the per-chain address/export encodings.

pub mod bitcoin;
pub mod ethereum;
mod derivation;

pub use derivation::*;
