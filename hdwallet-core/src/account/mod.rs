//! Account and wallet management
//!
//! This module provides the wallet façade over the derivation engine, the
//! account value type, and the bootstrap entry points that turn a mnemonic
//! or a raw private key into a ready-to-use account.

mod bootstrap;
mod wallet;

pub use bootstrap::*;
pub use wallet::*;

use crate::crypto::keys::PrivateKey;

/// A derived key bound to its public address and exportable serialized form.
///
/// Immutable after construction; the address and raw key string are computed
/// once from the private key.
#[derive(Clone)]
pub struct Account {
    private_key: PrivateKey,
    address: String,
    raw_private_key: String,
}

// Keep the exportable key string out of debug output.
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl Account {
    /// Wrap a derived private key
    pub fn new(private_key: PrivateKey) -> Self {
        let address = private_key.public_key().address();
        let raw_private_key = private_key.export_raw();
        Self { private_key, address, raw_private_key }
    }

    /// The private key backing this account
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The account's public address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The private key in its per-coin exchange format
    pub fn raw_private_key(&self) -> &str {
        &self.raw_private_key
    }
}
