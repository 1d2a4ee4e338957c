//! Key handles and BIP-32 derivation

use std::fmt;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use secp256k1::{Secp256k1, SecretKey};
use sha2::Sha512;

use crate::coin::Coin;
use crate::error::{Error, Result};

use super::{bitcoin, ethereum};

/// BIP-44 purpose field
pub const BIP44_PURPOSE: u32 = 44;

const HARDENED_OFFSET: u32 = 0x8000_0000;

/// One step of a derivation path.
///
/// The index of either variant must stay below 2^31; the hardened bit is
/// applied by the engine, never stored in the index. The checked
/// constructors enforce the bound for untrusted input, and the engine masks
/// the index so an out-of-range value can never flip a step's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationNode {
    /// Derivation step computed from the parent's private key
    Hardened(u32),
    /// Derivation step computed from the parent's public key
    NotHardened(u32),
}

impl DerivationNode {
    /// Checked constructor for a hardened node
    pub fn hardened(index: u32) -> Result<Self> {
        if index >= HARDENED_OFFSET {
            return Err(Error::KeyDerivation(format!(
                "derivation index out of range: {index}"
            )));
        }
        Ok(Self::Hardened(index))
    }

    /// Checked constructor for a non-hardened node
    pub fn not_hardened(index: u32) -> Result<Self> {
        if index >= HARDENED_OFFSET {
            return Err(Error::KeyDerivation(format!(
                "derivation index out of range: {index}"
            )));
        }
        Ok(Self::NotHardened(index))
    }

    /// The 31-bit index of this step
    pub fn index(&self) -> u32 {
        match self {
            Self::Hardened(index) | Self::NotHardened(index) => index & !HARDENED_OFFSET,
        }
    }

    /// Whether this step requires the parent's private key material
    pub fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// The BIP-32 wire index, hardened bit applied
    fn bip32_index(&self) -> u32 {
        match self {
            Self::Hardened(index) => HARDENED_OFFSET | (index & !HARDENED_OFFSET),
            Self::NotHardened(index) => index & !HARDENED_OFFSET,
        }
    }
}

impl fmt::Display for DerivationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hardened(index) => write!(f, "{index}'"),
            Self::NotHardened(index) => write!(f, "{index}"),
        }
    }
}

/// The canonical BIP-44 receive path for a coin:
/// `m/44'/coin_type'/0'/0/index`.
///
/// Ref: https://github.com/bitcoin/bips/blob/master/bip-0044.mediawiki
pub fn bip44_path(coin: Coin, index: u32) -> Vec<DerivationNode> {
    vec![
        DerivationNode::Hardened(BIP44_PURPOSE),
        DerivationNode::Hardened(coin.coin_type()),
        DerivationNode::Hardened(0),
        DerivationNode::NotHardened(0),
        DerivationNode::NotHardened(index),
    ]
}

/// Walk a derivation path left to right against a root key.
///
/// Each step's output feeds the next step's parent; an empty path returns
/// the root unchanged. The cryptographic work happens in
/// [`PrivateKey::derive`]; this function is responsible only for sequencing.
/// A failure of the underlying primitive propagates unchanged and is never
/// retried.
pub fn derive_path(root: &PrivateKey, path: &[DerivationNode]) -> Result<PrivateKey> {
    let mut key = root.clone();
    for node in path {
        key = key.derive(*node)?;
    }
    Ok(key)
}

/// An extended private key bound to a coin.
///
/// Owns the secret scalar and the BIP-32 chain code. Derivation is a pure
/// function: the same parent and node always produce the same child.
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretKey,
    chain_code: [u8; 32],
    coin: Coin,
}

// Keep the secret out of debug output.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("coin", &self.coin)
            .finish_non_exhaustive()
    }
}

impl PrivateKey {
    /// Derive the BIP-32 master key from a seed
    pub fn from_seed(seed: &[u8], coin: Coin) -> Result<Self> {
        let mut mac = <Hmac<Sha512> as KeyInit>::new_from_slice(b"Bitcoin seed")
            .map_err(|_| Error::KeyDerivation("HMAC key setup failed".to_string()))?;
        mac.update(seed);
        let digest = mac.finalize().into_bytes();

        let secret = SecretKey::from_slice(&digest[0..32])
            .map_err(|e| Error::KeyDerivation(format!("invalid master key: {e}")))?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&digest[32..64]);

        Ok(Self { secret, chain_code, coin })
    }

    /// Import a leaf key from its serialized form.
    ///
    /// Accepts 32 bytes of hex (with or without a `0x` prefix) for any coin,
    /// or wallet-import-format for the Base58Check coins. Imported keys carry
    /// an all-zero chain code: they are leaves, not derivation roots.
    pub fn from_raw(raw: &str, coin: Coin) -> Result<Self> {
        let hex_str = raw.strip_prefix("0x").unwrap_or(raw);
        let secret = if hex_str.len() == 64 && hex_str.chars().all(|c| c.is_ascii_hexdigit()) {
            let bytes = hex::decode(hex_str)
                .map_err(|e| Error::KeyParse(format!("invalid hex key: {e}")))?;
            SecretKey::from_slice(&bytes)
                .map_err(|e| Error::KeyParse(format!("invalid secret key: {e}")))?
        } else if coin.wif_version().is_some() {
            bitcoin::parse_wif(raw, coin)?
        } else {
            return Err(Error::KeyParse(format!(
                "expected a 64-character hex private key for {coin}"
            )));
        };

        Ok(Self { secret, chain_code: [0u8; 32], coin })
    }

    /// Derive one child key.
    ///
    /// This is the HMAC-SHA512 child-key derivation step: hardened nodes
    /// feed the parent's private key into the digest, non-hardened nodes the
    /// compressed public key, and the child scalar is IL + parent (mod n).
    pub fn derive(&self, node: DerivationNode) -> Result<Self> {
        let mut data = Vec::with_capacity(37);

        if node.is_hardened() {
            // Hardened derivation
            data.push(0);
            data.extend_from_slice(&self.secret.secret_bytes());
        } else {
            // Normal derivation
            let secp = Secp256k1::new();
            let public = secp256k1::PublicKey::from_secret_key(&secp, &self.secret);
            data.extend_from_slice(&public.serialize());
        }

        data.extend_from_slice(&node.bip32_index().to_be_bytes());

        let mut mac = <Hmac<Sha512> as KeyInit>::new_from_slice(&self.chain_code)
            .map_err(|_| Error::KeyDerivation("HMAC key setup failed".to_string()))?;
        mac.update(&data);
        let digest = mac.finalize().into_bytes();

        let child = SecretKey::from_slice(&digest[0..32])
            .map_err(|e| Error::KeyDerivation(format!("invalid child key: {e}")))?
            .add_tweak(&self.secret.into())
            .map_err(|e| Error::KeyDerivation(format!("key addition error: {e}")))?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&digest[32..64]);

        Ok(Self { secret: child, chain_code, coin: self.coin })
    }

    /// The public half of this key
    pub fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::new();
        PublicKey {
            key: secp256k1::PublicKey::from_secret_key(&secp, &self.secret),
            coin: self.coin,
        }
    }

    /// Serialize the key in its per-coin exchange format: hex for EVM
    /// coins, wallet-import-format for Base58Check coins.
    pub fn export_raw(&self) -> String {
        match self.coin.wif_version() {
            Some(version) => bitcoin::export_wif(&self.secret, version),
            None => hex::encode(self.secret.secret_bytes()),
        }
    }

    /// The coin this key belongs to
    pub fn coin(&self) -> Coin {
        self.coin
    }

    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.secret
    }
}

/// The public half of a [`PrivateKey`]
#[derive(Debug, Clone)]
pub struct PublicKey {
    key: secp256k1::PublicKey,
    coin: Coin,
}

impl PublicKey {
    /// Encode the public key as an address in the coin's format.
    ///
    /// Deterministic function of the key: Base58Check pay-to-pubkey-hash
    /// for the UTXO coins, Keccak-256 hex for EVM coins.
    pub fn address(&self) -> String {
        match self.coin.p2pkh_version() {
            Some(version) => bitcoin::address(&self.key, version),
            None => ethereum::address(&self.key),
        }
    }

    /// The coin this key belongs to
    pub fn coin(&self) -> Coin {
        self.coin
    }
}
