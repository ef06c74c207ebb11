//! Hierarchical deterministic key derivation from a BIP-39 seed.
//!
//! ```
//! use hdwallet_core::{DerivationPath, Wallet};
//!
//! let mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
//! let mut wallet = Wallet::from_mnemonic(mnemonic, "").unwrap();
//!
//! let evm = DerivationPath::parse("m/44'/60'/0'/0/0").unwrap();
//! let sol = DerivationPath::parse("m/44'/501'/0'/0'").unwrap();
//! let (_secp_key, _ed_key) = wallet.scoped(|w| {
//!     (w.derive_ecdsa(&evm).unwrap(), w.derive_ed25519(&sol).unwrap())
//! });
//! assert!(wallet.is_erased());
//! ```

pub mod crypto;
pub mod error;
pub mod wallet;

pub use crypto::{CurveType, DerivationPath, DerivationPaths, PathComponent};
pub use error::{CryptoError, MnemonicError, PathError, WalletError, WalletResult};
pub use wallet::Wallet;
