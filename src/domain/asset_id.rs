//! Chain-agnostic fungible asset identifier.

use core::fmt;

/// Identifies a fungible asset on the [`AssetLedger`](crate::traits::AssetLedger).
///
/// Wraps a fixed-size `[u8; 32]` byte array.  The all-zero value is the
/// *null* identifier: it is representable (so lookups never fail) but the
/// factory refuses to create a pool for it.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// assert!(!usdc.is_null());
/// assert!(AssetId::NULL.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// The null identifier.
    pub const NULL: Self = Self([0u8; 32]);

    /// Sentinel for the chain's native asset, the default base asset.
    pub const NATIVE: Self = Self([0xEEu8; 32]);

    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for the all-zero identifier.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
