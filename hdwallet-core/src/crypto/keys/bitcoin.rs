//! Base58Check address and key encoding for the UTXO coins

use secp256k1::SecretKey;
use sha2::{Digest, Sha256};
use ripemd::Ripemd160;

use crate::coin::Coin;
use crate::error::{Error, Result};

/// Encode a public key as a pay-to-pubkey-hash address.
///
/// HASH160 of the compressed key, version byte prepended, double-SHA256
/// checksum appended, Base58 encoded.
pub fn address(public_key: &secp256k1::PublicKey, version: u8) -> String {
    let sha = Sha256::digest(public_key.serialize());
    let hash160 = Ripemd160::digest(sha);

    let mut payload = Vec::with_capacity(25);
    payload.push(version);
    payload.extend_from_slice(&hash160);

    let check = checksum(&payload);
    payload.extend_from_slice(&check[0..4]);

    bs58::encode(payload).into_string()
}

/// Serialize a secret key in wallet-import-format (compressed).
pub fn export_wif(secret: &SecretKey, version: u8) -> String {
    let mut payload = Vec::with_capacity(38);
    payload.push(version);
    payload.extend_from_slice(&secret.secret_bytes());
    payload.push(0x01); // compressed public key flag

    let check = checksum(&payload);
    payload.extend_from_slice(&check[0..4]);

    bs58::encode(payload).into_string()
}

/// Parse a wallet-import-format key string for the given coin.
pub fn parse_wif(wif: &str, coin: Coin) -> Result<SecretKey> {
    let version = coin
        .wif_version()
        .ok_or_else(|| Error::KeyParse(format!("{coin} keys have no WIF encoding")))?;

    let bytes = bs58::decode(wif)
        .into_vec()
        .map_err(|e| Error::KeyParse(format!("invalid base58: {e}")))?;

    // version + 32 key bytes + optional compression flag + 4 checksum bytes
    if bytes.len() != 37 && bytes.len() != 38 {
        return Err(Error::KeyParse(format!(
            "unexpected WIF payload length: {}",
            bytes.len()
        )));
    }

    let (payload, check) = bytes.split_at(bytes.len() - 4);
    if checksum(payload)[0..4] != *check {
        return Err(Error::KeyParse("WIF checksum mismatch".to_string()));
    }
    if payload[0] != version {
        return Err(Error::KeyParse(format!(
            "WIF version byte {:#04x} does not match {coin}",
            payload[0]
        )));
    }

    SecretKey::from_slice(&payload[1..33])
        .map_err(|e| Error::KeyParse(format!("invalid secret key: {e}")))
}

fn checksum(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}
