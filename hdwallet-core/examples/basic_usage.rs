//! Basic usage: generate a wallet, re-import it, sign a transaction.
//!
//! Run with `RUST_LOG=debug cargo run --example basic_usage`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use hdwallet_core::account::{generate_account, import_mnemonic, Wallet};
use hdwallet_core::crypto::mnemonic::mnemonic_to_seed;
use hdwallet_core::transaction::EthereumRawTransaction;
use hdwallet_core::Coin;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Fresh Ethereum wallet, first account.
    let generated = generate_account(Coin::Ethereum)?;
    println!("{}", serde_json::to_string_pretty(&generated)?);

    // The mnemonic reproduces the same account.
    let mnemonic = generated.mnemonic.as_deref().expect("generated wallets carry a mnemonic");
    let reimported = import_mnemonic(mnemonic, Coin::Ethereum)?;
    assert_eq!(reimported.address, generated.address);

    // Batch derivation over the canonical path.
    let seed = mnemonic_to_seed(mnemonic, None)?;
    let wallet = Wallet::from_seed(&seed, Coin::Ethereum)?;
    for account in wallet.generate_accounts(3)? {
        println!("derived address: {}", account.address());
    }

    // Replay-protected signing with the root key.
    let signed = wallet.sign(&EthereumRawTransaction {
        nonce: 0,
        gas_price: 20_000_000_000,
        gas_limit: 21_000,
        to: "0x3535353535353535353535353535353535353535".to_string(),
        value: 1_000_000_000_000_000_000,
        data: Vec::new(),
    })?;
    println!("signed transaction: {signed}");

    Ok(())
}
