//! Ethereum address encoding

use sha3::{Digest, Keccak256};

/// Encode a public key as a 20-byte Ethereum address.
///
/// Keccak-256 over the uncompressed point (without the 0x04 tag), last
/// 20 bytes, lowercase hex with a `0x` prefix.
pub fn address(public_key: &secp256k1::PublicKey) -> String {
    let uncompressed = public_key.serialize_uncompressed();
    let digest = Keccak256::digest(&uncompressed[1..]);
    format!("0x{}", hex::encode(&digest[12..]))
}
