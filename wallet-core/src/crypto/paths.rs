// wallet-core/src/crypto/paths.rs
//
// Derivation Path Presets - Multi-Chain HD Wallet Path Builders
// BIP-44 (Purpose), SLIP-44 (Coin Types), BIP-49/84/86 (Bitcoin SegWit/Taproot), SLIP-0010

use super::path::{DerivationPath, PathComponent};
use crate::error::PathError;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    // ---- secp256k1 chains ----
    pub const BITCOIN: u32 = 0;
    pub const LITECOIN: u32 = 2;
    pub const DOGECOIN: u32 = 3;
    pub const ETHEREUM: u32 = 60; // shared by every EVM chain
    pub const COSMOS: u32 = 118;
    pub const BITCOIN_CASH: u32 = 145;
    pub const TRON: u32 = 195;

    // ---- ed25519 chains ----
    pub const NEAR: u32 = 397;
    pub const SOLANA: u32 = 501;
    pub const TON: u32 = 607;
    pub const APTOS: u32 = 637;
    pub const SUI: u32 = 784;
}

/// BIP-43 purpose values
pub mod purpose {
    pub const BIP44: u32 = 44;
    pub const BIP49: u32 = 49;
    pub const BIP84: u32 = 84;
    pub const BIP86: u32 = 86;
}

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Pre-built derivation paths for a multi-chain wallet
///
/// # Conventions
/// - BIP-44: `m/44'/coin'/account'/change/index` (secp256k1)
/// - BIP-84: `m/84'/0'/account'/change/index` (Bitcoin Native SegWit)
/// - BIP-49: `m/49'/0'/account'/change/index` (Bitcoin Nested SegWit)
/// - BIP-86: `m/86'/0'/account'/change/index` (Bitcoin Taproot)
/// - SLIP-0010: `m/44'/coin'/account'/...'` (ed25519, all hardened)
///
/// Builders taking caller-supplied indices return `Err(PathError::InvalidIndexAt)`
/// for indices that collide with the hardened bit.
pub struct DerivationPaths;

impl DerivationPaths {
    // =========================================================================
    // EVM CHAINS (secp256k1) - BIP-44, coin_type = 60
    // =========================================================================
    /// `m/44'/60'/0'/0/0`
    pub fn evm_default() -> DerivationPath {
        DerivationPath::from_static(&[
            PathComponent::hardened_unchecked(purpose::BIP44),
            PathComponent::hardened_unchecked(coin_type::ETHEREUM),
            PathComponent::hardened_unchecked(0),
            PathComponent::normal_unchecked(0),
            PathComponent::normal_unchecked(0),
        ])
    }

    #[inline]
    pub fn evm(index: u32) -> Result<DerivationPath, PathError> {
        Self::evm_account(0, index)
    }

    #[inline]
    pub fn evm_account(account: u32, index: u32) -> Result<DerivationPath, PathError> {
        DerivationPath::bip44(coin_type::ETHEREUM, account, 0, index)
    }

    // =========================================================================
    // BITCOIN (secp256k1)
    // =========================================================================
    #[inline]
    pub fn btc_legacy(account: u32, index: u32) -> Result<DerivationPath, PathError> {
        Self::bip44(purpose::BIP44, coin_type::BITCOIN, account, 0, index)
    }

    #[inline]
    pub fn btc_nested_segwit(account: u32, index: u32) -> Result<DerivationPath, PathError> {
        Self::bip44(purpose::BIP49, coin_type::BITCOIN, account, 0, index)
    }

    /// BIP-84 Native SegWit (bc1q...)
    #[inline]
    pub fn btc_native_segwit(account: u32, index: u32) -> Result<DerivationPath, PathError> {
        Self::bip44(purpose::BIP84, coin_type::BITCOIN, account, 0, index)
    }

    #[inline]
    pub fn btc_taproot(account: u32, index: u32) -> Result<DerivationPath, PathError> {
        Self::bip44(purpose::BIP86, coin_type::BITCOIN, account, 0, index)
    }

    // =========================================================================
    // COSMOS SDK / TRON (secp256k1) - BIP-44
    // =========================================================================
    #[inline]
    pub fn cosmos(index: u32) -> Result<DerivationPath, PathError> {
        DerivationPath::bip44(coin_type::COSMOS, 0, 0, index)
    }

    #[inline]
    pub fn tron(index: u32) -> Result<DerivationPath, PathError> {
        DerivationPath::bip44(coin_type::TRON, 0, 0, index)
    }

    // =========================================================================
    // ED25519 CHAINS - SLIP-0010 (all levels hardened)
    // =========================================================================
    /// `m/44'/501'/0'/0'`, the path used by Phantom and `solana-keygen`
    pub fn solana_default() -> DerivationPath {
        DerivationPath::from_static(&[
            PathComponent::hardened_unchecked(purpose::BIP44),
            PathComponent::hardened_unchecked(coin_type::SOLANA),
            PathComponent::hardened_unchecked(0),
            PathComponent::hardened_unchecked(0),
        ])
    }

    #[inline]
    pub fn solana(account: u32) -> Result<DerivationPath, PathError> {
        Self::ed25519_path(coin_type::SOLANA, account, &[0])
    }

    /// `m/44'/637'/account'/0'/0'`
    #[inline]
    pub fn aptos(account: u32) -> Result<DerivationPath, PathError> {
        Self::ed25519_path(coin_type::APTOS, account, &[0, 0])
    }

    #[inline]
    pub fn sui(account: u32) -> Result<DerivationPath, PathError> {
        Self::ed25519_path(coin_type::SUI, account, &[0, 0])
    }

    /// `m/44'/397'/account'`
    #[inline]
    pub fn near(account: u32) -> Result<DerivationPath, PathError> {
        Self::ed25519_path(coin_type::NEAR, account, &[])
    }

    #[inline]
    pub fn ton(account: u32) -> Result<DerivationPath, PathError> {
        Self::ed25519_path(coin_type::TON, account, &[])
    }

    // =========================================================================
    // CUSTOM PATH BUILDERS
    // =========================================================================
    /// BIP-44 shaped path with a custom purpose
    ///
    /// # Arguments
    /// * `purpose` - 44 (BIP-44), 49 (BIP-49), 84 (BIP-84), 86 (BIP-86)
    /// * `coin_type` - SLIP-44 coin type, see [`coin_type`]
    /// * `account` - Account index
    /// * `change` - 0 = external (receive), 1 = internal (change)
    /// * `index` - Address index
    pub fn bip44(
        purpose: u32,
        coin_type: u32,
        account: u32,
        change: u32,
        index: u32,
    ) -> Result<DerivationPath, PathError> {
        DerivationPath::build(&[
            (purpose, true),
            (coin_type, true),
            (account, true),
            (change, false),
            (index, false),
        ])
    }

    /// SLIP-0010 path for ed25519: `m/44'/coin'/account'` followed by `sub_paths`,
    /// every level forced to hardened.
    ///
    /// - Solana: `ed25519_path(501, 0, &[0])` -> `m/44'/501'/0'/0'`
    /// - Aptos:  `ed25519_path(637, 0, &[0, 0])` -> `m/44'/637'/0'/0'/0'`
    /// - Near:   `ed25519_path(397, 0, &[])` -> `m/44'/397'/0'`
    pub fn ed25519_path(
        coin_type: u32,
        account: u32,
        sub_paths: &[u32],
    ) -> Result<DerivationPath, PathError> {
        let levels: Vec<(u32, bool)> = [purpose::BIP44, coin_type, account]
            .into_iter()
            .chain(sub_paths.iter().copied())
            .map(|index| (index, true))
            .collect();
        DerivationPath::build(&levels)
    }
}

// =============================================================================
// TESTS
// =============================================================================
