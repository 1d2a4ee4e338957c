//! Cryptographic primitives and operations
//!
//! This module provides mnemonic handling and the key material layer:
//! opaque private/public key handles, BIP-32 child derivation, and the
//! per-chain address and export encodings.

pub mod keys;
pub mod mnemonic;

pub use keys::*;
pub use mnemonic::*;
