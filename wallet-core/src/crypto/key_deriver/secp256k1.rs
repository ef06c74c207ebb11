// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32 / BIP-44
//
// Used by: Bitcoin, Ethereum/EVM, Tron, Cosmos, Litecoin, Dogecoin, ...
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation (CKDpriv)
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use super::keychain::{CurveKeychain, KeychainError};
use crate::crypto::path::{DerivationPath, HARDENED_OFFSET};
use crate::error::{CryptoError, WalletResult};
use bip32::XPrv;
use k256::ecdsa::SigningKey;
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// The walk itself (index order, invalid-child recovery, error positions) lives
/// here; curve arithmetic is delegated to a [`CurveKeychain`], `bip32::XPrv` by default.
///
/// # Security
/// - No intermediate extended key outlives the call
/// - Exported key bytes are wrapped in `Zeroizing`
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Next indices tried at one level after an invalid child, before giving up
    pub const MAX_CHILD_RETRIES: u32 = 16;

    /// Derive the secp256k1 signing key at `path`
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed, any length accepted by the BIP-32 master key constructor
    /// * `path` - Parsed derivation path, hardened and normal levels may be mixed
    pub fn derive(seed: &[u8], path: &DerivationPath) -> WalletResult<SigningKey> {
        Self::derive_with::<XPrv>(seed, path)
    }

    /// Same as [`Secp256k1Deriver::derive`], exporting the raw 32-byte scalar
    pub fn derive_bytes(seed: &[u8], path: &DerivationPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        let key = Self::derive(seed, path)?;
        let key_bytes: [u8; 32] = key.to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }

    /// Walk `path` from the master key of `seed` using keychain `K`
    pub fn derive_with<K: CurveKeychain>(
        seed: &[u8],
        path: &DerivationPath,
    ) -> WalletResult<K::PrivateKey> {
        let mut key = K::master_from_seed(seed).map_err(|e| {
            CryptoError::MasterKey(match e {
                KeychainError::InvalidChild => "seed produced an invalid master key".to_string(),
                KeychainError::Other(reason) => reason,
            })
        })?;

        for (position, component) in path.iter().enumerate() {
            key = Self::derive_step(&key, position, component.wire_index())?;
        }

        debug!(path = %path, depth = path.len(), "derived secp256k1 key");
        Ok(key.private_key())
    }

    /// One CKDpriv step. An invalid child moves on to `index + 1` as BIP-32
    /// requires, without crossing the hardened boundary.
    fn derive_step<K: CurveKeychain>(parent: &K, position: usize, wire_index: u32) -> WalletResult<K> {
        let mut index = wire_index;

        for _ in 0..=Self::MAX_CHILD_RETRIES {
            match parent.derive_child(index) {
                Ok(child) => return Ok(child),
                Err(KeychainError::InvalidChild) => {
                    warn!(position, index, "invalid child key, trying next index");
                    let next = index
                        .checked_add(1)
                        .filter(|next| next & HARDENED_OFFSET == index & HARDENED_OFFSET);
                    match next {
                        Some(next) => index = next,
                        None => break,
                    }
                }
                Err(KeychainError::Other(reason)) => {
                    debug!(position, index, %reason, "child derivation failed");
                    break;
                }
            }
        }

        Err(CryptoError::ChildDerivation {
            position,
            index: wire_index,
        }
        .into())
    }
}

// =============================================================================
// TESTS
// =============================================================================
