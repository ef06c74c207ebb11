// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Multi-Curve Support
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  ├─ EVM (ETH, BSC...)     ├─ Solana             │
// │  ├─ Bitcoin               ├─ Aptos              │
// │  ├─ Tron                  ├─ Sui                │
// │  └─ Cosmos                └─ Near, TON          │
// └─────────────────────────────────────────────────┘

pub mod ed25519;
pub mod keychain;
pub mod secp256k1;

// Re-exports
pub use ed25519::Ed25519Deriver;
pub use keychain::{CurveKeychain, KeychainError};
pub use secp256k1::Secp256k1Deriver;

use crate::crypto::path::DerivationPath;
use crate::error::{CryptoError, WalletResult};
use zeroize::Zeroizing;

// =============================================================================
// COMMON TYPES
// =============================================================================
/// Curve family used for derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// secp256k1: Bitcoin, Ethereum, Tron, Cosmos, ...
    Secp256k1,
    /// Ed25519: Solana, Aptos, Sui, Near, TON, ...
    Ed25519,
}

/// Derivation result: private key bytes plus metadata
#[derive(Debug)]
pub struct DerivedKey {
    /// 32-byte private key (secp256k1 scalar or ed25519 seed), zeroized on drop
    pub private_key: Zeroizing<[u8; 32]>,
    pub curve: CurveType,
    pub path: DerivationPath,
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Entry point that dispatches to [`Secp256k1Deriver`] or [`Ed25519Deriver`]
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the private key bytes at `path` for `curve`
    ///
    /// For ed25519 the path is checked up front: a non-hardened level is an
    /// error here rather than a silently different key.
    pub fn derive(seed: &[u8], path: &DerivationPath, curve: CurveType) -> WalletResult<DerivedKey> {
        let private_key = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive_bytes(seed, path)?,
            CurveType::Ed25519 => {
                Self::require_hardened(path)?;
                let signing_key = Ed25519Deriver::derive(seed, path)?;
                Zeroizing::new(signing_key.to_bytes())
            }
        };

        Ok(DerivedKey {
            private_key,
            curve,
            path: path.clone(),
        })
    }

    fn require_hardened(path: &DerivationPath) -> WalletResult<()> {
        match path.iter().position(|c| !c.is_hardened()) {
            Some(position) => Err(CryptoError::NonHardenedPath { position }.into()),
            None => Ok(()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
