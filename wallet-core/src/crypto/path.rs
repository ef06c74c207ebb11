// wallet-core/src/crypto/path.rs
//
// Derivation Path Model - BIP-32 path parsing, canonical formatting, BIP-44 views
//
// Grammar:  [m/] index[' | h | H] ( / index[' | h | H] )*     (1..=10 segments)
//           m | m/                                            (master key, 0 segments)

use crate::error::PathError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Maximum number of components accepted in a derivation path
pub const MAX_PATH_DEPTH: usize = 10;

/// Bit set on the wire index of a hardened component
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

// `[0-9]` rather than `\d`: the regex crate treats `\d` as Unicode digits.
static PATH_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:m/?|(?:m/)?[0-9]+['hH]?(?:/[0-9]+['hH]?)*)$")
        .expect("derivation path grammar is a valid regex")
});

// =============================================================================
// PATH COMPONENT
// =============================================================================
/// One level of a derivation path.
///
/// `index` is always below [`HARDENED_OFFSET`]; hardening lives in its own flag
/// and is only folded into the 32-bit index by [`PathComponent::wire_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathComponent {
    index: u32,
    hardened: bool,
}

impl PathComponent {
    /// Create a component, rejecting indices that already carry the hardened bit
    pub fn new(index: u32, hardened: bool) -> Option<Self> {
        (index < HARDENED_OFFSET).then_some(Self { index, hardened })
    }

    /// Shorthand for a hardened component, used by presets with known-small indices
    pub(crate) const fn hardened_unchecked(index: u32) -> Self {
        Self {
            index,
            hardened: true,
        }
    }

    pub(crate) const fn normal_unchecked(index: u32) -> Self {
        Self {
            index,
            hardened: false,
        }
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// The 32-bit index fed to CKD: `index | 0x80000000` when hardened
    #[inline]
    pub fn wire_index(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

// =============================================================================
// BIP-44 VIEW
// =============================================================================
/// Positional BIP-44 reading of the first five components.
///
/// `purpose`, `coin_type` and `account` are only filled in when the component
/// exists and is hardened; `change` and `address_index` are taken as-is.
/// Missing components read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BipComponents {
    pub purpose: u32,
    pub coin_type: u32,
    pub account: u32,
    pub change: u32,
    pub address_index: u32,
}

// =============================================================================
// DERIVATION PATH
// =============================================================================
/// Validated, immutable sequence of path components, ordered root to leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    components: Vec<PathComponent>,
}

impl DerivationPath {
    /// Parse a path string.
    ///
    /// Rules are checked in order and the first failure is returned:
    /// grammar ([`PathError::InvalidFormat`]), depth ([`PathError::TooDeep`]),
    /// then each index in turn ([`PathError::InvalidIndexAt`]).
    ///
    /// ```
    /// use hdwallet_core::crypto::DerivationPath;
    ///
    /// let path = DerivationPath::parse("44h/60h/0h/0/0").unwrap();
    /// assert_eq!(path.to_string(), "m/44'/60'/0'/0/0");
    /// ```
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if !PATH_GRAMMAR.is_match(path) {
            return Err(PathError::InvalidFormat);
        }

        let body = path.strip_prefix('m').unwrap_or(path);
        let body = body.strip_prefix('/').unwrap_or(body);
        if body.is_empty() {
            return Ok(Self::default());
        }

        let segments: Vec<&str> = body.split('/').collect();
        if segments.len() > MAX_PATH_DEPTH {
            return Err(PathError::TooDeep {
                depth: segments.len(),
                max: MAX_PATH_DEPTH,
            });
        }

        let mut components = Vec::with_capacity(segments.len());
        for (position, segment) in segments.into_iter().enumerate() {
            let (digits, hardened) = match segment.strip_suffix(['\'', 'h', 'H']) {
                Some(stripped) => (stripped, true),
                None => (segment, false),
            };

            let component = digits
                .parse::<u32>()
                .ok()
                .and_then(|index| PathComponent::new(index, hardened))
                .ok_or_else(|| PathError::InvalidIndexAt {
                    position,
                    text: digits.to_string(),
                })?;
            components.push(component);
        }

        Ok(Self { components })
    }

    /// Build a path from already-typed components
    pub fn from_components(components: Vec<PathComponent>) -> Result<Self, PathError> {
        if components.len() > MAX_PATH_DEPTH {
            return Err(PathError::TooDeep {
                depth: components.len(),
                max: MAX_PATH_DEPTH,
            });
        }
        Ok(Self { components })
    }

    /// Standard BIP-44 path `m/44'/coin'/account'/change/address_index`
    pub fn bip44(
        coin_type: u32,
        account: u32,
        change: u32,
        address_index: u32,
    ) -> Result<Self, PathError> {
        Self::build(&[
            (44, true),
            (coin_type, true),
            (account, true),
            (change, false),
            (address_index, false),
        ])
    }

    /// Solana-style path `m/44'/501'/account'/change'/address_index'`, all hardened
    pub fn solana(account: u32, change: u32, address_index: u32) -> Result<Self, PathError> {
        Self::build(&[
            (44, true),
            (501, true),
            (account, true),
            (change, true),
            (address_index, true),
        ])
    }

    pub(crate) fn build(levels: &[(u32, bool)]) -> Result<Self, PathError> {
        let components = levels
            .iter()
            .enumerate()
            .map(|(position, &(index, hardened))| {
                PathComponent::new(index, hardened).ok_or_else(|| PathError::InvalidIndexAt {
                    position,
                    text: index.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_components(components)
    }

    pub(crate) fn from_static(components: &[PathComponent]) -> Self {
        debug_assert!(components.len() <= MAX_PATH_DEPTH);
        Self {
            components: components.to_vec(),
        }
    }

    #[inline]
    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PathComponent> {
        self.components.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True for the master key path `m/`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 32-bit indices as consumed by child key derivation
    pub fn wire_indices(&self) -> Vec<u32> {
        self.components.iter().map(PathComponent::wire_index).collect()
    }

    /// Read the first five levels as BIP-44 fields
    pub fn bip_components(&self) -> BipComponents {
        let hardened_at = |position: usize| {
            self.components
                .get(position)
                .filter(|c| c.hardened)
                .map_or(0, |c| c.index)
        };
        let any_at = |position: usize| self.components.get(position).map_or(0, |c| c.index);

        BipComponents {
            purpose: hardened_at(0),
            coin_type: hardened_at(1),
            account: hardened_at(2),
            change: any_at(3),
            address_index: any_at(4),
        }
    }

    /// Purpose, coin type and account must be hardened when present.
    /// Nothing is required of deeper levels.
    pub fn is_valid(&self) -> bool {
        self.components.iter().take(3).all(|c| c.hardened)
    }

    /// Exactly `m/44'/coin'/account'/change/address_index`
    pub fn is_bip44(&self) -> bool {
        match self.components.as_slice() {
            [purpose, coin, account, change, address] => {
                purpose.index == 44
                    && purpose.hardened
                    && coin.hardened
                    && account.hardened
                    && !change.hardened
                    && !address.hardened
            }
            _ => false,
        }
    }

    /// True when at least one level is hardened
    pub fn requires_hardened_derivation(&self) -> bool {
        self.components.iter().any(|c| c.hardened)
    }

    /// True when every level is hardened (vacuously true for `m/`)
    pub fn all_components_hardened(&self) -> bool {
        self.components.iter().all(|c| c.hardened)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m/")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DerivationPath {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a PathComponent;
    type IntoIter = std::slice::Iter<'a, PathComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DerivationPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DerivationPath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================
