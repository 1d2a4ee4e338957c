//! Bootstrap entry points: generate a fresh account or import an existing one
//!
//! All validation runs before any key material is derived; malformed input
//! never reaches the cryptographic layer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coin::Coin;
use crate::crypto::keys::PrivateKey;
use crate::crypto::mnemonic::{generate_mnemonic, mnemonic_to_seed, MnemonicStrength};
use crate::error::{Result, ValidationError};

use super::{Account, Wallet};

/// Minimum accepted length for an imported private key string.
///
/// Rejects obviously truncated input before any cryptographic parsing is
/// attempted.
pub const MIN_PRIVATE_KEY_LEN: usize = 40;

/// Minimum number of words in an imported mnemonic phrase
pub const MIN_MNEMONIC_WORDS: usize = 12;

/// The result of a bootstrap operation.
///
/// `mnemonic` is `None` when the account was imported from a raw private
/// key, since no phrase was involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAccount {
    pub mnemonic: Option<String>,
    pub address: String,
    pub raw_private_key: String,
}

impl GeneratedAccount {
    fn new(mnemonic: Option<String>, account: &Account) -> Self {
        Self {
            mnemonic,
            address: account.address().to_string(),
            raw_private_key: account.raw_private_key().to_string(),
        }
    }
}

/// Create a fresh wallet for `coin` and return its first account.
///
/// Generates a new 12-word mnemonic, derives the seed and returns the
/// account at index 0 of the canonical path.
pub fn generate_account(coin: Coin) -> Result<GeneratedAccount> {
    let mnemonic = generate_mnemonic(MnemonicStrength::Words12)?;
    let seed = mnemonic_to_seed(&mnemonic, None)?;
    let wallet = Wallet::from_seed(&seed, coin)?;
    let account = wallet.generate_account(0)?;

    debug!(%coin, address = account.address(), "generated new wallet account");
    Ok(GeneratedAccount::new(Some(mnemonic), &account))
}

/// Import an account from a raw private key string.
///
/// The key is a leaf: it is constructed directly, without the derivation
/// engine. Strings shorter than [`MIN_PRIVATE_KEY_LEN`] are rejected before
/// parsing.
pub fn import_private_key(key: &str, coin: Coin) -> Result<GeneratedAccount> {
    if key.len() < MIN_PRIVATE_KEY_LEN {
        debug!(len = key.len(), "rejected private key import: too short");
        return Err(ValidationError::PrivateKeyTooShort { len: key.len() }.into());
    }

    let private_key = PrivateKey::from_raw(key, coin)?;
    let account = Account::new(private_key);

    debug!(%coin, address = account.address(), "imported account from private key");
    Ok(GeneratedAccount::new(None, &account))
}

/// Import a wallet from a mnemonic phrase and return its first account.
///
/// The phrase must split into at least [`MIN_MNEMONIC_WORDS`] space-separated
/// words with no empty word; both checks run before any seed derivation.
pub fn import_mnemonic(phrase: &str, coin: Coin) -> Result<GeneratedAccount> {
    let words: Vec<&str> = phrase.split(' ').collect();
    if words.len() < MIN_MNEMONIC_WORDS {
        debug!(words = words.len(), "rejected mnemonic import: too few words");
        return Err(ValidationError::MnemonicWordCount { words: words.len() }.into());
    }
    if let Some(position) = words.iter().position(|word| word.is_empty()) {
        debug!(position, "rejected mnemonic import: empty word");
        return Err(ValidationError::MnemonicEmptyWord { position }.into());
    }

    let seed = mnemonic_to_seed(phrase, None)?;
    let wallet = Wallet::from_seed(&seed, coin)?;
    let account = wallet.generate_account(0)?;

    debug!(%coin, address = account.address(), "imported account from mnemonic");
    Ok(GeneratedAccount::new(Some(phrase.to_string()), &account))
}
