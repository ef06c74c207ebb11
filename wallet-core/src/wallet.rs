// wallet-core/src/wallet.rs
//
// Wallet - owns the seed and hands out keys derived from it

use crate::crypto::key_deriver::{Ed25519Deriver, Secp256k1Deriver};
use crate::crypto::mnemonic::WalletMnemonic;
use crate::crypto::path::DerivationPath;
use crate::error::{MnemonicError, WalletResult};
use tracing::debug;
use zeroize::Zeroize;

/// Seed holder for deriving secp256k1 and ed25519 keys.
///
/// The seed is NOT erased automatically when the wallet goes out of scope.
/// Call [`Wallet::erase`] when done, or run the work inside [`Wallet::scoped`]
/// which erases on every exit path.
///
/// Derivation only reads the seed, so `&Wallet` can be shared across threads.
/// `erase` needs `&mut self`, which rules out erasing during a derivation.
pub struct Wallet {
    seed: Vec<u8>,
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("seed_len", &self.seed.len())
            .field("seed", &"[REDACTED]")
            .finish()
    }
}

impl Wallet {
    /// Wrap an existing seed. The length is not checked here; each curve
    /// applies its own rule at derivation time.
    pub fn from_seed(seed: impl Into<Vec<u8>>) -> Self {
        Self { seed: seed.into() }
    }

    /// Validate a BIP-39 mnemonic and derive its 64-byte seed.
    ///
    /// Any validation failure is reported as [`MnemonicError::InvalidMnemonic`]
    /// and no seed is computed.
    pub fn from_mnemonic(mnemonic: &str, passphrase: &str) -> WalletResult<Self> {
        let mnemonic =
            WalletMnemonic::from_phrase(mnemonic).map_err(|_| MnemonicError::InvalidMnemonic)?;
        let seed = mnemonic.to_seed(passphrase)?;
        debug!(word_count = mnemonic.word_count(), "wallet created from mnemonic");
        Ok(Self::from_seed(seed.to_vec()))
    }

    /// Raw seed bytes
    ///
    /// # Warning
    /// Never log or persist this value.
    #[inline]
    pub fn seed(&self) -> &[u8] {
        &self.seed
    }

    /// BIP-32 secp256k1 key at `path`
    pub fn derive_ecdsa(&self, path: &DerivationPath) -> WalletResult<k256::ecdsa::SigningKey> {
        Secp256k1Deriver::derive(&self.seed, path)
    }

    /// SLIP-0010 ed25519 key at `path`; the seed must be 64 bytes
    pub fn derive_ed25519(&self, path: &DerivationPath) -> WalletResult<ed25519_dalek::SigningKey> {
        Ed25519Deriver::derive(&self.seed, path)
    }

    /// Overwrite every seed byte with zero, in place.
    ///
    /// The buffer keeps its length and allocation. Calling this more than once is harmless.
    pub fn erase(&mut self) {
        self.seed.as_mut_slice().zeroize();
    }

    /// True once every seed byte is zero
    pub fn is_erased(&self) -> bool {
        self.seed.iter().all(|&b| b == 0)
    }

    /// Run `f` with this wallet, then erase the seed, including when `f`
    /// returns early or panics.
    pub fn scoped<T>(&mut self, f: impl FnOnce(&Wallet) -> T) -> T {
        let guard = EraseGuard(self);
        f(&*guard.0)
    }
}

struct EraseGuard<'a>(&'a mut Wallet);

impl Drop for EraseGuard<'_> {
    fn drop(&mut self) {
        self.0.erase();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;
    use crate::error::{CryptoError, WalletError};

    const VALID_MNEMONIC: &str =
        "night faint enjoy portion appear movie busy waste report circle giant hungry";

    #[test]
    fn test_from_mnemonic_invalid() {
        assert_eq!(
            Wallet::from_mnemonic("invalid mnemonic", "").unwrap_err(),
            WalletError::Mnemonic(MnemonicError::InvalidMnemonic)
        );
        let bad_checksum = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert_eq!(
            Wallet::from_mnemonic(bad_checksum, "").unwrap_err(),
            WalletError::Mnemonic(MnemonicError::InvalidMnemonic)
        );
    }

    #[test]
    fn test_from_mnemonic_valid() {
        let wallet = Wallet::from_mnemonic(VALID_MNEMONIC, "").unwrap();
        assert_eq!(wallet.seed().len(), 64);
    }

    #[test]
    fn test_from_seed_keeps_bytes() {
        let wallet = Wallet::from_seed(vec![1u8, 2, 3]);
        assert_eq!(wallet.seed(), &[1, 2, 3]);
    }

    #[test]
    fn test_erase_zeroes_in_place() {
        let mut wallet = Wallet::from_mnemonic(VALID_MNEMONIC, "").unwrap();
        let ptr = wallet.seed().as_ptr();
        assert!(!wallet.is_erased());

        wallet.erase();
        assert!(wallet.seed().iter().all(|&b| b == 0));
        assert_eq!(wallet.seed().len(), 64);
        assert_eq!(wallet.seed().as_ptr(), ptr);

        wallet.erase();
        assert!(wallet.is_erased());
        assert_eq!(wallet.seed().len(), 64);
    }

    #[test]
    fn test_scoped_erases_after_use() {
        let mut wallet = Wallet::from_mnemonic(VALID_MNEMONIC, "").unwrap();
        let key = wallet
            .scoped(|w| w.derive_ecdsa(&DerivationPaths::evm_default()))
            .unwrap();
        assert_ne!(key.to_bytes().as_slice(), &[0u8; 32]);
        assert!(wallet.is_erased());
    }

    #[test]
    fn test_scoped_erases_on_error_and_panic() {
        let mut wallet = Wallet::from_seed(vec![9u8; 32]);
        let result = wallet.scoped(|w| w.derive_ed25519(&DerivationPaths::solana_default()));
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::InvalidSeedLength { .. }))
        ));
        assert!(wallet.is_erased());

        let mut wallet = Wallet::from_seed(vec![9u8; 64]);
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            wallet.scoped(|_| panic!("boom"));
        }));
        assert!(outcome.is_err());
        assert!(wallet.is_erased());
    }

    #[test]
    fn test_concurrent_derivations_share_seed() {
        let wallet = Wallet::from_mnemonic(VALID_MNEMONIC, "").unwrap();
        let expected = wallet.derive_ecdsa(&DerivationPaths::evm_default()).unwrap().to_bytes();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| wallet.derive_ecdsa(&DerivationPaths::evm_default()).unwrap().to_bytes()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_debug_does_not_leak_seed() {
        let wallet = Wallet::from_seed(vec![0xabu8; 64]);
        let debug_output = format!("{:?}", wallet);
        assert!(!debug_output.contains("171"));
        assert!(!debug_output.to_lowercase().contains("abab"));
        assert!(debug_output.contains("REDACTED"));
    }
}
