//! The wallet façade

use tracing::trace;

use crate::coin::Coin;
use crate::crypto::keys::{bip44_path, derive_path, DerivationNode, PrivateKey};
use crate::error::{Error, Result};
use crate::transaction::{Eip155Signer, EthereumRawTransaction, TransactionSigner};

use super::Account;

/// A hierarchical-deterministic wallet for one coin.
///
/// Immutable after construction and the sole owner of its root key; every
/// operation is a pure derivation against that key, so a shared reference
/// can be used from multiple threads without synchronization.
pub struct Wallet {
    root_key: PrivateKey,
    coin: Coin,
}

impl Wallet {
    /// Build a wallet from a BIP-39 seed
    pub fn from_seed(seed: &[u8], coin: Coin) -> Result<Self> {
        Ok(Self {
            root_key: PrivateKey::from_seed(seed, coin)?,
            coin,
        })
    }

    /// The coin this wallet derives keys for
    pub fn coin(&self) -> Coin {
        self.coin
    }

    /// Derive the address at `index` of the canonical BIP-44 receive path,
    /// `m/44'/coin_type'/0'/0/index`.
    pub fn generate_address(&self, index: u32) -> Result<String> {
        Ok(self.bip44_key(index)?.public_key().address())
    }

    /// Derive the account at `index` of the canonical BIP-44 receive path
    pub fn generate_account(&self, index: u32) -> Result<Account> {
        Ok(Account::new(self.bip44_key(index)?))
    }

    /// Derive an account at an arbitrary path, no canonical prefix imposed
    pub fn generate_account_at(&self, path: &[DerivationNode]) -> Result<Account> {
        Ok(Account::new(derive_path(&self.root_key, path)?))
    }

    /// Derive accounts for indices `0..count`, in ascending index order.
    ///
    /// The i-th element equals `generate_account(i)`; iterations share no
    /// state beyond the immutable root key.
    pub fn generate_accounts(&self, count: u32) -> Result<Vec<Account>> {
        let mut accounts = Vec::with_capacity(count as usize);
        for index in 0..count {
            accounts.push(self.generate_account(index)?);
        }
        Ok(accounts)
    }

    /// Sign a raw transaction with the wallet's root key.
    ///
    /// The signer is selected from the coin's chain parameters; coins
    /// without a transaction signer yield [`Error::NotSupported`]. Returns
    /// the signed payload as `0x`-prefixed hex.
    pub fn sign(&self, transaction: &EthereumRawTransaction) -> Result<String> {
        let chain_id = self.coin.chain_id().ok_or_else(|| {
            Error::NotSupported(format!("transaction signing is not available for {}", self.coin))
        })?;

        trace!(chain_id, "signing transaction");
        let signer = Eip155Signer::new(chain_id);
        let raw = signer.sign_raw(transaction, &self.root_key)?;
        Ok(format!("0x{}", hex::encode(raw)))
    }

    fn bip44_key(&self, index: u32) -> Result<PrivateKey> {
        derive_path(&self.root_key, &bip44_path(self.coin, index))
    }
}
