use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Path Error: {0}")]
    Path(#[from] PathError),

    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),
}

/// Derivation path parse failures, reported for the first violated rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid derivation path format")]
    InvalidFormat,

    #[error("derivation path too deep: {depth} levels (max {max})")]
    TooDeep { depth: usize, max: usize },

    #[error("invalid index at position {position}: {text}")]
    InvalidIndexAt { position: usize, text: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("invalid mnemonic")]
    InvalidMnemonic,

    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word not found in the BIP39 wordlist: {0}")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    #[error("Failed to create master key: {0}")]
    MasterKey(String),

    #[error("Child derivation failed at position {position} (index {index:#010x})")]
    ChildDerivation { position: usize, index: u32 },

    #[error("Ed25519 derivation requires hardened indices, position {position} is not")]
    NonHardenedPath { position: usize },
}
