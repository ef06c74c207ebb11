// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 validation and seed derivation
// PBKDF2-HMAC-SHA512, 2048 rounds, salt = "mnemonic" || passphrase (NFKD)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Word counts allowed by BIP-39
const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Validated BIP-39 mnemonic phrase
///
/// # Security
/// - The phrase is overwritten with zeros on drop
/// - `Debug` never prints the phrase
/// - Seeds are handed out wrapped in `Zeroizing`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    /// Parse and validate an English mnemonic.
    ///
    /// Whitespace is normalized before validation. Word count, wordlist
    /// membership and checksum are all checked.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let count = words.len();

        if !VALID_WORD_COUNTS.contains(&count) {
            return Err(MnemonicError::InvalidWordCount(count).into());
        }

        let normalized = words.join(" ");
        Mnemonic::parse(normalized.as_str()).map_err(|e| {
            WalletError::Mnemonic(match e {
                bip39::Error::UnknownWord(i) => {
                    MnemonicError::UnknownWord(words.get(i).copied().unwrap_or_default().into())
                }
                bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
                bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
                other => MnemonicError::Bip39Error(other.to_string()),
            })
        })?;

        Ok(Self {
            phrase: normalized,
            word_count: count,
        })
    }

    /// Full validation: word count, wordlist and checksum
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    /// Mnemonic phrase, whitespace-normalized
    ///
    /// # Warning
    /// Never log or display this value.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Derive the 64-byte BIP-39 seed
    ///
    /// An empty passphrase is the BIP-39 default. Different passphrases give
    /// unrelated wallets, and a lost passphrase cannot be recovered from the phrase.
    pub fn to_seed(&self, passphrase: &str) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Mnemonic::parse(self.phrase.as_str())
            .map_err(|e| MnemonicError::Bip39Error(e.to_string()))?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase)))
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
