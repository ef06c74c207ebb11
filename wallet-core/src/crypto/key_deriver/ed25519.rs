// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010 Standard
//
// Used by: Solana, Aptos, Sui, Near, TON, ...
// Algorithm: HMAC-SHA512, hardened child derivation only
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// SLIP-0010 for ed25519 defines hardened children only. Every level of the path
// is expected to carry the hardened bit, e.g. m/44'/501'/0'/0'.

use crate::crypto::path::DerivationPath;
use crate::error::{CryptoError, WalletResult};
use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Ed25519 Key Deriver - SLIP-0010 Standard
///
/// # Differences from secp256k1 (BIP-32)
/// - Master key secret is "ed25519 seed" instead of "Bitcoin seed"
/// - Hardened derivation only, there is no public-parent branch
/// - No key range check, any 32 bytes is a valid ed25519 seed
///
/// # Security
/// - Key and chain code buffers are zeroized between levels
/// - No intermediate state is kept
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key secret
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Seed length required by [`Ed25519Deriver::derive`]
    pub const SEED_LEN: usize = 64;

    /// Derive the ed25519 signing key at `path`
    ///
    /// # Arguments
    /// * `seed` - exactly 64 bytes (a full BIP-39 seed)
    /// * `path` - every level should be hardened; this is not re-checked here,
    ///   see [`DerivationPath::all_components_hardened`]
    pub fn derive(seed: &[u8], path: &DerivationPath) -> WalletResult<SigningKey> {
        if seed.len() != Self::SEED_LEN {
            return Err(CryptoError::InvalidSeedLength {
                expected: Self::SEED_LEN,
                actual: seed.len(),
            }
            .into());
        }

        let (key, _chain_code) = Self::derive_chain(seed, path);
        debug!(path = %path, depth = path.len(), "derived ed25519 key");
        Ok(SigningKey::from_bytes(&key))
    }

    /// Raw SLIP-0010 walk returning `(key, chain_code)` after the last level.
    ///
    /// No seed length policy is applied, which makes the published SLIP-0010
    /// vectors (16-byte seeds) reproducible.
    pub fn derive_chain(
        seed: &[u8],
        path: &DerivationPath,
    ) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::split(Self::MASTER_SECRET, &[seed]);

        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index))
        for index in path.wire_indices() {
            let (child_key, child_chain) =
                Self::split(&*chain_code, &[&[0x00u8], &*key, &index.to_be_bytes()]);
            key = child_key;
            chain_code = child_chain;
        }

        (key, chain_code)
    }

    /// HMAC-SHA512 over `parts`, split into `(I_L, I_R)`
    fn split(hmac_key: &[u8], parts: &[&[u8]]) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
        let mut mac =
            HmacSha512::new_from_slice(hmac_key).expect("HMAC can take key of any size");
        for part in parts {
            mac.update(part);
        }
        let result = mac.finalize().into_bytes();

        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        buf.zeroize();
        (key, chain_code)
    }
}

// =============================================================================
// TESTS
// =============================================================================
