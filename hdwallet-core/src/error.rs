//! Error types for the wallet-core library

use thiserror::Error;

/// Custom error type for wallet-core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("mnemonic error: {0}")]
    Mnemonic(String),

    #[error("key parse error: {0}")]
    KeyParse(String),

    #[error("key derivation error: {0}")]
    KeyDerivation(String),

    #[error("signing error: {0}")]
    Signing(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Input validation failures, raised before any key material is touched.
///
/// Each variant carries the offending measurement so callers can report a
/// precise reason without parsing the display string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("private key string too short: {len} characters")]
    PrivateKeyTooShort { len: usize },

    #[error("mnemonic has too few words: {words}")]
    MnemonicWordCount { words: usize },

    #[error("mnemonic contains an empty word at position {position}")]
    MnemonicEmptyWord { position: usize },
}

/// Result type for wallet-core operations
pub type Result<T> = std::result::Result<T, Error>;
