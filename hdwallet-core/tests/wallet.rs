//! Tests for wallet derivation

use hdwallet_core::account::Wallet;
use hdwallet_core::coin::Coin;
use hdwallet_core::crypto::keys::{bip44_path, derive_path, DerivationNode, PrivateKey};
use hdwallet_core::crypto::mnemonic::mnemonic_to_seed;

const REFERENCE_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn reference_wallet(coin: Coin) -> Wallet {
    let seed = mnemonic_to_seed(REFERENCE_MNEMONIC, None).unwrap();
    Wallet::from_seed(&seed, coin).unwrap()
}

#[test]
fn test_addresses_are_deterministic() {
    let wallet = reference_wallet(Coin::Ethereum);
    let first = wallet.generate_address(0).unwrap();
    let second = wallet.generate_address(0).unwrap();
    assert_eq!(first, second);

    // A freshly constructed wallet over the same seed agrees.
    let rebuilt = reference_wallet(Coin::Ethereum);
    assert_eq!(rebuilt.generate_address(0).unwrap(), first);
}

#[test]
fn test_address_matches_manual_path_walk() {
    let seed = mnemonic_to_seed(REFERENCE_MNEMONIC, None).unwrap();
    let wallet = Wallet::from_seed(&seed, Coin::Ethereum).unwrap();

    let root = PrivateKey::from_seed(&seed, Coin::Ethereum).unwrap();
    let manual = derive_path(
        &root,
        &[
            DerivationNode::Hardened(44),
            DerivationNode::Hardened(60),
            DerivationNode::Hardened(0),
            DerivationNode::NotHardened(0),
            DerivationNode::NotHardened(5),
        ],
    )
    .unwrap();

    assert_eq!(wallet.generate_address(5).unwrap(), manual.public_key().address());
}

#[test]
fn test_canonical_path_template() {
    let seed = mnemonic_to_seed(REFERENCE_MNEMONIC, None).unwrap();
    let root = PrivateKey::from_seed(&seed, Coin::Bitcoin).unwrap();
    let wallet = Wallet::from_seed(&seed, Coin::Bitcoin).unwrap();

    let via_template = derive_path(&root, &bip44_path(Coin::Bitcoin, 2)).unwrap();
    assert_eq!(
        wallet.generate_account(2).unwrap().address(),
        via_template.public_key().address()
    );
}

#[test]
fn test_batch_matches_single_derivation() {
    let wallet = reference_wallet(Coin::Bitcoin);
    let accounts = wallet.generate_accounts(5).unwrap();
    assert_eq!(accounts.len(), 5);

    for (index, account) in accounts.iter().enumerate() {
        let single = wallet.generate_account(index as u32).unwrap();
        assert_eq!(account.address(), single.address());
        assert_eq!(account.raw_private_key(), single.raw_private_key());
    }
}

#[test]
fn test_distinct_indices_yield_distinct_addresses() {
    let wallet = reference_wallet(Coin::Ethereum);
    let accounts = wallet.generate_accounts(8).unwrap();

    for i in 0..accounts.len() {
        for j in (i + 1)..accounts.len() {
            assert_ne!(accounts[i].address(), accounts[j].address());
        }
    }
}

#[test]
fn test_custom_path_account() {
    let wallet = reference_wallet(Coin::Ethereum);

    // No canonical prefix is imposed on caller-supplied paths.
    let account = wallet
        .generate_account_at(&[
            DerivationNode::Hardened(44),
            DerivationNode::Hardened(60),
            DerivationNode::Hardened(1),
            DerivationNode::NotHardened(0),
            DerivationNode::NotHardened(0),
        ])
        .unwrap();

    assert_ne!(account.address(), wallet.generate_account(0).unwrap().address());
}

#[test]
fn test_coins_derive_distinct_namespaces() {
    let bitcoin = reference_wallet(Coin::Bitcoin).generate_account(0).unwrap();
    let litecoin = reference_wallet(Coin::Litecoin).generate_account(0).unwrap();

    // Different coin types namespace the derived keys apart.
    assert_ne!(
        bitcoin.private_key().export_raw(),
        litecoin.private_key().export_raw()
    );
}

#[test]
fn test_wallet_is_usable_across_threads() {
    let wallet = std::sync::Arc::new(reference_wallet(Coin::Ethereum));
    let expected = wallet.generate_address(3).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let wallet = wallet.clone();
            std::thread::spawn(move || wallet.generate_address(3).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
