//! Tests for the transaction signing workflow

use hdwallet_core::account::Wallet;
use hdwallet_core::coin::Coin;
use hdwallet_core::crypto::keys::PrivateKey;
use hdwallet_core::crypto::mnemonic::mnemonic_to_seed;
use hdwallet_core::error::Error;
use hdwallet_core::transaction::{recover_signer, EthereumRawTransaction};

const REFERENCE_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn transfer() -> EthereumRawTransaction {
    EthereumRawTransaction {
        nonce: 0,
        gas_price: 20_000_000_000,
        gas_limit: 21_000,
        to: "0x3535353535353535353535353535353535353535".to_string(),
        value: 1_000_000_000_000_000_000,
        data: Vec::new(),
    }
}

#[test]
fn test_signed_payload_is_hex_with_prefix() {
    let seed = mnemonic_to_seed(REFERENCE_MNEMONIC, None).unwrap();
    let wallet = Wallet::from_seed(&seed, Coin::Ethereum).unwrap();

    let signed = wallet.sign(&transfer()).unwrap();
    assert!(signed.starts_with("0x"));
    assert!(signed[2..].chars().all(|c| c.is_ascii_hexdigit()));

    // Pure function of (key, transaction, chain parameters).
    assert_eq!(wallet.sign(&transfer()).unwrap(), signed);
}

#[test]
fn test_recovered_sender_is_the_root_key() {
    let seed = mnemonic_to_seed(REFERENCE_MNEMONIC, None).unwrap();
    let wallet = Wallet::from_seed(&seed, Coin::Ethereum).unwrap();

    // Signing uses the wallet's root key, not a derived account key.
    let root = PrivateKey::from_seed(&seed, Coin::Ethereum).unwrap();

    let signed = wallet.sign(&transfer()).unwrap();
    let raw = hex::decode(&signed[2..]).unwrap();
    assert_eq!(recover_signer(&raw).unwrap(), root.public_key().address());
}

#[test]
fn test_signing_is_rejected_for_coins_without_a_signer() {
    let seed = mnemonic_to_seed(REFERENCE_MNEMONIC, None).unwrap();
    let wallet = Wallet::from_seed(&seed, Coin::Bitcoin).unwrap();

    assert!(matches!(
        wallet.sign(&transfer()),
        Err(Error::NotSupported(_))
    ));
}

#[test]
fn test_malformed_transaction_is_rejected() {
    let seed = mnemonic_to_seed(REFERENCE_MNEMONIC, None).unwrap();
    let wallet = Wallet::from_seed(&seed, Coin::Ethereum).unwrap();

    let mut malformed = transfer();
    malformed.to = "0xnot-an-address".to_string();
    assert!(matches!(wallet.sign(&malformed), Err(Error::Signing(_))));
}
