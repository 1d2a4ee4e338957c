//! Legacy Ethereum transactions with EIP-155 replay protection

use rlp::RlpStream;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::crypto::keys::{ethereum, PrivateKey};
use crate::error::{Error, Result};

use super::TransactionSigner;

/// An unsigned legacy Ethereum transaction.
///
/// `to` is a `0x` hex address; an empty string means contract creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EthereumRawTransaction {
    pub nonce: u128,
    pub gas_price: u128,
    pub gas_limit: u128,
    pub to: String,
    pub value: u128,
    #[serde(default)]
    pub data: Vec<u8>,
}

/// EIP-155 signer for legacy transactions.
///
/// Signs the Keccak-256 digest of the nine-field RLP preimage
/// `(nonce, gas_price, gas_limit, to, value, data, chain_id, 0, 0)` and
/// folds the recovery id into `v = 35 + chain_id * 2 + recovery_id`, binding
/// the signature to one chain.
pub struct Eip155Signer {
    chain_id: u64,
}

impl Eip155Signer {
    /// Create a signer bound to a chain id
    pub fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }

    /// The chain id this signer binds signatures to
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn encode(
        &self,
        transaction: &EthereumRawTransaction,
        signature: Option<(u64, Vec<u8>, Vec<u8>)>,
    ) -> Result<Vec<u8>> {
        let to = decode_address(&transaction.to)?;

        let mut stream = RlpStream::new();
        stream.begin_list(9);
        stream.append(&transaction.nonce);
        stream.append(&transaction.gas_price);
        stream.append(&transaction.gas_limit);
        stream.append(&to);
        stream.append(&transaction.value);
        stream.append(&transaction.data);

        match signature {
            Some((v, r, s)) => {
                stream.append(&v);
                stream.append(&r);
                stream.append(&s);
            }
            None => {
                // EIP-155 preimage placeholders
                stream.append(&self.chain_id);
                stream.append(&0u8);
                stream.append(&0u8);
            }
        }

        Ok(stream.out().to_vec())
    }
}

impl TransactionSigner for Eip155Signer {
    fn sign_raw(&self, transaction: &EthereumRawTransaction, key: &PrivateKey) -> Result<Vec<u8>> {
        let preimage = self.encode(transaction, None)?;
        let digest: [u8; 32] = Keccak256::digest(&preimage).into();

        let secp = Secp256k1::new();
        let message = Message::from_digest(digest);
        let signature = secp.sign_ecdsa_recoverable(&message, key.secret_key());

        let (recovery_id, bytes) = signature.serialize_compact();
        let v = self.chain_id * 2 + 35 + recovery_id.to_i32() as u64;
        let r = trim_leading_zeros(&bytes[0..32]).to_vec();
        let s = trim_leading_zeros(&bytes[32..64]).to_vec();

        self.encode(transaction, Some((v, r, s)))
    }
}

/// Recover the sender address from a signed EIP-155 payload.
pub fn recover_signer(raw: &[u8]) -> Result<String> {
    let rlp = rlp::Rlp::new(raw);
    let items = rlp
        .item_count()
        .map_err(|e| Error::Signing(format!("invalid transaction encoding: {e}")))?;
    if items != 9 {
        return Err(Error::Signing(format!(
            "expected 9 transaction fields, got {items}"
        )));
    }

    let transaction = EthereumRawTransaction {
        nonce: read_uint(&rlp, 0)?,
        gas_price: read_uint(&rlp, 1)?,
        gas_limit: read_uint(&rlp, 2)?,
        to: read_address(&rlp, 3)?,
        value: read_uint(&rlp, 4)?,
        data: read_bytes(&rlp, 5)?,
    };

    let v: u64 = rlp
        .val_at(6)
        .map_err(|e| Error::Signing(format!("invalid v field: {e}")))?;
    if v < 35 {
        return Err(Error::Signing(format!(
            "transaction lacks replay protection: v = {v}"
        )));
    }
    let chain_id = (v - 35) / 2;
    let recovery = ((v - 35) % 2) as i32;

    let preimage = Eip155Signer::new(chain_id).encode(&transaction, None)?;
    let digest: [u8; 32] = Keccak256::digest(&preimage).into();

    let mut compact = [0u8; 64];
    copy_right_aligned(&mut compact[0..32], &read_bytes(&rlp, 7)?)?;
    copy_right_aligned(&mut compact[32..64], &read_bytes(&rlp, 8)?)?;

    let recovery_id = RecoveryId::from_i32(recovery)
        .map_err(|e| Error::Signing(format!("invalid recovery id: {e}")))?;
    let signature = RecoverableSignature::from_compact(&compact, recovery_id)
        .map_err(|e| Error::Signing(format!("invalid signature: {e}")))?;

    let secp = Secp256k1::new();
    let public = secp
        .recover_ecdsa(&Message::from_digest(digest), &signature)
        .map_err(|e| Error::Signing(format!("signature recovery failed: {e}")))?;

    Ok(ethereum::address(&public))
}

fn decode_address(to: &str) -> Result<Vec<u8>> {
    let stripped = to.strip_prefix("0x").unwrap_or(to);
    if stripped.is_empty() {
        // Contract creation
        return Ok(Vec::new());
    }

    let bytes = hex::decode(stripped)
        .map_err(|e| Error::Signing(format!("invalid destination address: {e}")))?;
    if bytes.len() != 20 {
        return Err(Error::Signing(format!(
            "destination address must be 20 bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}

fn read_uint(rlp: &rlp::Rlp<'_>, index: usize) -> Result<u128> {
    rlp.val_at(index)
        .map_err(|e| Error::Signing(format!("invalid field {index}: {e}")))
}

fn read_bytes(rlp: &rlp::Rlp<'_>, index: usize) -> Result<Vec<u8>> {
    rlp.at(index)
        .and_then(|field| field.data().map(<[u8]>::to_vec))
        .map_err(|e| Error::Signing(format!("invalid field {index}: {e}")))
}

fn read_address(rlp: &rlp::Rlp<'_>, index: usize) -> Result<String> {
    let bytes = read_bytes(rlp, index)?;
    if bytes.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("0x{}", hex::encode(bytes)))
}

fn copy_right_aligned(target: &mut [u8], source: &[u8]) -> Result<()> {
    if source.len() > target.len() {
        return Err(Error::Signing(format!(
            "signature component too long: {} bytes",
            source.len()
        )));
    }
    let start = target.len() - source.len();
    target[start..].copy_from_slice(source);
    Ok(())
}

fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
