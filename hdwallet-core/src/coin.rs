//! Supported coins and their chain parameters
//!
//! This module is a pure lookup table: each coin maps to its registered
//! BIP-44 coin type and the chain-specific constants the rest of the
//! library needs (EVM chain id, Base58Check version bytes).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported blockchains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    /// Bitcoin
    Bitcoin,
    /// Ethereum and EVM compatible signing
    Ethereum,
    /// Litecoin
    Litecoin,
    /// Bitcoin Cash (legacy address format)
    BitcoinCash,
    /// Dash
    Dash,
}

impl Coin {
    /// The registered BIP-44 / SLIP-44 coin type constant.
    ///
    /// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
    pub fn coin_type(&self) -> u32 {
        match self {
            Coin::Bitcoin => 0,
            Coin::Litecoin => 2,
            Coin::Dash => 5,
            Coin::Ethereum => 60,
            Coin::BitcoinCash => 145,
        }
    }

    /// EVM chain id used for replay-protected signing, `None` for UTXO chains.
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Coin::Ethereum => Some(1),
            _ => None,
        }
    }

    /// Base58Check version byte for pay-to-pubkey-hash addresses.
    ///
    /// `None` for coins that do not use Base58Check addressing.
    pub fn p2pkh_version(&self) -> Option<u8> {
        match self {
            Coin::Bitcoin | Coin::BitcoinCash => Some(0x00),
            Coin::Litecoin => Some(0x30),
            Coin::Dash => Some(0x4c),
            Coin::Ethereum => None,
        }
    }

    /// Version byte for wallet-import-format private key export.
    pub fn wif_version(&self) -> Option<u8> {
        match self {
            Coin::Bitcoin | Coin::BitcoinCash => Some(0x80),
            Coin::Litecoin => Some(0xb0),
            Coin::Dash => Some(0xcc),
            Coin::Ethereum => None,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Coin::Bitcoin => "bitcoin",
            Coin::Ethereum => "ethereum",
            Coin::Litecoin => "litecoin",
            Coin::BitcoinCash => "bitcoincash",
            Coin::Dash => "dash",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_coin_types() {
        assert_eq!(Coin::Bitcoin.coin_type(), 0);
        assert_eq!(Coin::Litecoin.coin_type(), 2);
        assert_eq!(Coin::Dash.coin_type(), 5);
        assert_eq!(Coin::Ethereum.coin_type(), 60);
        assert_eq!(Coin::BitcoinCash.coin_type(), 145);
    }

    #[test]
    fn test_chain_parameters() {
        assert_eq!(Coin::Ethereum.chain_id(), Some(1));
        assert_eq!(Coin::Bitcoin.chain_id(), None);

        assert_eq!(Coin::Ethereum.p2pkh_version(), None);
        assert_eq!(Coin::Bitcoin.p2pkh_version(), Some(0x00));
        assert_eq!(Coin::Bitcoin.wif_version(), Some(0x80));
    }
}
