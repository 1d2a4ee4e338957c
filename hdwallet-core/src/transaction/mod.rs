//! Transaction signing
//!
//! A raw transaction plus a derived key goes in, a replay-protected signed
//! payload comes out. The signer behind [`TransactionSigner`] is selected
//! per chain from the wallet's coin parameters.

mod ethereum;

pub use ethereum::*;

use crate::crypto::keys::PrivateKey;
use crate::error::Result;

/// The per-chain signing seam.
///
/// Implementations must be pure: the same transaction and key always
/// produce the same payload. Rejections surface as [`crate::Error::Signing`]
/// and are never coerced into a best-effort signature.
pub trait TransactionSigner {
    /// Sign a raw transaction, returning the serialized signed payload
    fn sign_raw(&self, transaction: &EthereumRawTransaction, key: &PrivateKey) -> Result<Vec<u8>>;
}
