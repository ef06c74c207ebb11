// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Derivation Paths**: parsing, canonical formatting and BIP-44 views via [`DerivationPath`].
//! - **Path Presets**: SLIP-44 coin types and per-chain paths via [`DerivationPaths`].
//! - **Key Derivation**: secp256k1 (BIP-32) and ed25519 (SLIP-0010) via [`KeyDeriver`].
//! - **Mnemonic**: BIP-39 validation and seed derivation via [`WalletMnemonic`].

pub mod key_deriver;
pub mod mnemonic;
pub mod path;
pub mod paths;

// Re-exports for cleaner API access
pub use key_deriver::{CurveType, DerivedKey, Ed25519Deriver, KeyDeriver, Secp256k1Deriver};
pub use mnemonic::WalletMnemonic;
pub use path::{BipComponents, DerivationPath, PathComponent, HARDENED_OFFSET, MAX_PATH_DEPTH};
pub use paths::{coin_type, DerivationPaths};
