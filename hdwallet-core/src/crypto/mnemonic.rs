//! Mnemonic phrase generation and seed derivation

use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};

use crate::error::{Error, Result};

/// Supported mnemonic strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicStrength {
    /// 12 words (128 bits of entropy)
    Words12,
    /// 24 words (256 bits of entropy)
    Words24,
}

impl MnemonicStrength {
    /// Number of words a phrase of this strength contains
    pub fn word_count(&self) -> usize {
        match self {
            Self::Words12 => 12,
            Self::Words24 => 24,
        }
    }

    fn entropy_bytes(&self) -> usize {
        match self {
            Self::Words12 => 16,
            Self::Words24 => 32,
        }
    }
}

/// Generate a new random mnemonic phrase with the specified strength
pub fn generate_mnemonic(strength: MnemonicStrength) -> Result<String> {
    let mut entropy = vec![0u8; strength.entropy_bytes()];
    OsRng.fill_bytes(&mut entropy);

    let mnemonic =
        Mnemonic::from_entropy(&entropy).map_err(|e| Error::Mnemonic(e.to_string()))?;

    Ok(mnemonic.to_string())
}

/// Derive the 64-byte seed from a mnemonic phrase and optional passphrase.
///
/// The phrase must be a valid BIP-39 sentence; rejection by the wordlist or
/// checksum is surfaced unchanged as [`Error::Mnemonic`].
pub fn mnemonic_to_seed(phrase: &str, passphrase: Option<&str>) -> Result<Vec<u8>> {
    let mnemonic =
        Mnemonic::parse_normalized(phrase).map_err(|e| Error::Mnemonic(e.to_string()))?;

    Ok(mnemonic.to_seed(passphrase.unwrap_or("")).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generate_mnemonic_word_counts() {
        for strength in [MnemonicStrength::Words12, MnemonicStrength::Words24] {
            let mnemonic = generate_mnemonic(strength).unwrap();
            let words: Vec<&str> = mnemonic.split_whitespace().collect();
            assert_eq!(words.len(), strength.word_count());
        }
    }

    #[test]
    fn test_mnemonic_to_seed() {
        let seed = mnemonic_to_seed(REFERENCE_MNEMONIC, None).unwrap();
        assert_eq!(seed.len(), 64);

        // Passphrase changes the seed.
        let salted = mnemonic_to_seed(REFERENCE_MNEMONIC, Some("TREZOR")).unwrap();
        assert_ne!(seed, salted);
    }

    #[test]
    fn test_invalid_phrase_is_rejected() {
        let result = mnemonic_to_seed("definitely not a bip39 sentence", None);
        assert!(matches!(result, Err(Error::Mnemonic(_))));
    }
}
