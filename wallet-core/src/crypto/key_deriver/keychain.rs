// wallet-core/src/crypto/key_deriver/keychain.rs
//
// Curve Keychain - the narrow capability the BIP-32 walk needs from curve math:
// master key from seed, child from (key, wire index), export of the private key.

use bip32::{ChildNumber, XPrv};
use k256::ecdsa::SigningKey;

/// Why a keychain step failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeychainError {
    /// `I_L >= n` or the child scalar is zero. BIP-32 says to move on to the next index.
    InvalidChild,
    /// Any other failure; not retried
    Other(String),
}

/// Extended private key capable of BIP-32 CKDpriv
pub trait CurveKeychain: Sized {
    type PrivateKey;

    /// Master extended key from a seed (`HMAC-SHA512("Bitcoin seed", seed)`)
    fn master_from_seed(seed: &[u8]) -> Result<Self, KeychainError>;

    /// Child extended key for a wire index (hardened bit included)
    fn derive_child(&self, wire_index: u32) -> Result<Self, KeychainError>;

    fn private_key(&self) -> Self::PrivateKey;
}

impl CurveKeychain for XPrv {
    type PrivateKey = SigningKey;

    fn master_from_seed(seed: &[u8]) -> Result<Self, KeychainError> {
        XPrv::new(seed).map_err(|e| match e {
            bip32::Error::Crypto => KeychainError::InvalidChild,
            other => KeychainError::Other(other.to_string()),
        })
    }

    fn derive_child(&self, wire_index: u32) -> Result<Self, KeychainError> {
        XPrv::derive_child(self, ChildNumber(wire_index)).map_err(|e| match e {
            bip32::Error::Crypto => KeychainError::InvalidChild,
            other => KeychainError::Other(other.to_string()),
        })
    }

    fn private_key(&self) -> SigningKey {
        XPrv::private_key(self).clone()
    }
}
