//! # Core Domain Entities
//!
//! Value types that cross component boundaries.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `NameKey`
//! - **Catalog**: `CompanyName`, `LogoUrl`
//! - **Value**: `U256`, `BlockNumber`, `ether`

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;

use crate::errors::TypesError;

// Re-export U256 from primitive-types for use across all components
pub use primitive_types::U256;

/// Block height supplied by the host environment.
pub type BlockNumber = u64;

/// Maximum byte length of a company name (a `bytes32` on the wire).
pub const MAX_NAME_LEN: usize = 32;

/// Maximum byte length of a logo URL.
pub const MAX_LOGO_URL_LEN: usize = 64;

/// Wei per ether.
pub const WEI_PER_ETHER: u64 = 1_000_000_000_000_000_000;

/// Keccak-256 digest.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Converts a whole number of milli-ether into wei.
///
/// `milli_ether(7)` is 0.007 ether.
pub fn milli_ether(milli: u64) -> U256 {
    U256::from(milli) * U256::from(WEI_PER_ETHER / 1000)
}

/// Converts a whole number of ether into wei.
pub fn ether(whole: u64) -> U256 {
    U256::from(whole) * U256::from(WEI_PER_ETHER)
}

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte account or component address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derives a deterministic address from a label.
    ///
    /// Used by deployment wiring to give components stable identities and by
    /// tests to name accounts.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let digest = keccak256(label.as_bytes());
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[12..]);
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// NAME KEY (32 bytes)
// =============================================================================

/// Case-insensitive lookup key of a company name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NameKey(pub [u8; 32]);

impl NameKey {
    /// Hashes raw name bytes after ASCII lower-casing.
    #[must_use]
    pub fn from_raw(name: &[u8]) -> Self {
        Self(keccak256(&name.to_ascii_lowercase()))
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameKey(")?;
        for byte in &self.0[..6] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..)")
    }
}

// =============================================================================
// COMPANY NAME / LOGO URL
// =============================================================================

/// A company name: 1..=32 bytes, spelling preserved.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyName(String);

impl CompanyName {
    /// Validates and wraps a name.
    pub fn new(name: impl Into<String>) -> Result<Self, TypesError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypesError::EmptyName);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(TypesError::NameTooLong {
                len: name.len(),
                max: MAX_NAME_LEN,
            });
        }
        Ok(Self(name))
    }

    /// The lookup key shared by every case variant of this name.
    #[must_use]
    pub fn key(&self) -> NameKey {
        NameKey::from_raw(self.0.as_bytes())
    }

    /// The name as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CompanyName {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CompanyName {
    type Error = TypesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompanyName> for String {
    fn from(name: CompanyName) -> Self {
        name.0
    }
}

/// A company logo URL: at most 64 bytes, opaque.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogoUrl(String);

impl LogoUrl {
    /// Validates and wraps a logo URL.
    pub fn new(url: impl Into<String>) -> Result<Self, TypesError> {
        let url = url.into();
        if url.len() > MAX_LOGO_URL_LEN {
            return Err(TypesError::LogoUrlTooLong {
                len: url.len(),
                max: MAX_LOGO_URL_LEN,
            });
        }
        Ok(Self(url))
    }

    /// The URL as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LogoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl TryFrom<String> for LogoUrl {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LogoUrl {
    type Error = TypesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogoUrl> for String {
    fn from(url: LogoUrl) -> Self {
        url.0
    }
}
