//! HD Wallet Core
//!
//! This library provides the orchestration core of a hierarchical-
//! deterministic wallet: BIP-44 derivation paths over an opaque key
//! primitive, the account and wallet data model, replay-protected
//! transaction signing, and bootstrap entry points for generating or
//! importing wallets from mnemonics and raw private keys.

pub mod error;
pub mod coin;
pub mod crypto;
pub mod account;
pub mod transaction;

// Re-export commonly used types for convenience
pub use coin::Coin;
pub use error::{Error, Result, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
